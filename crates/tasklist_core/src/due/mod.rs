//! Due-date urgency classification.
//!
//! # Responsibility
//! - Map a due date to a human-facing label and severity tier relative to today.
//!
//! # Invariants
//! - Classification is pure; "today" is always passed in by the caller.
//! - Day-count boundaries are fixed and locale-agnostic.

pub mod classifier;
