//! Task list domain model.
//!
//! # Responsibility
//! - Define canonical data structures used by store, persistence and view code.
//! - Own wire shapes for the current and legacy persisted formats.
//!
//! # Invariants
//! - Every stored task has a non-empty trimmed title.
//! - Due dates are plain calendar dates, never timestamps.
//!
//! # See also
//! - DESIGN.md

pub mod due_date;
pub mod filter;
pub mod task;
