//! CLI interface
//!
//! This module handles the program-level flags, dispatch to the sub-command
//! parser, and rendering of results, errors and usage text.

pub mod app;
pub mod output;

// Re-export main types
pub use app::*;
pub use output::*;
