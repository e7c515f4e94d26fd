//! CLI command handlers.
//!
//! This module provides testable command handlers that are invoked by main.rs.
//! Each handler implements the business logic for a specific CLI subcommand.

mod interview;
mod questions;
mod run;
mod score;

pub use interview::Interviewer;
pub use questions::run_questions;
pub use run::{conduct, run_audit};
pub use score::run_score;

// Re-export config types used by handlers
pub use crate::config::{AppConfig, OutputConfig};
