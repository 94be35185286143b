//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate store, persistence and projection into session-level APIs.
//! - Keep front ends decoupled from storage details.

pub mod task_list;
