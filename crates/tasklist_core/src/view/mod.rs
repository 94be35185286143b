//! Display projection of the task store.
//!
//! # Responsibility
//! - Derive the filtered, sorted display sequence and the outstanding count.
//! - Attach per-row badges for the rendering layer.
//!
//! # Invariants
//! - Projection is pure and never mutates the store.
//! - Open tasks always precede completed tasks in the display sequence.

pub mod projector;
