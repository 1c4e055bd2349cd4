//! Declarative parser definitions
//!
//! This module handles parsing of YAML schemas that describe sub-commands,
//! their options and validation rules, and turning them into parsers.

pub mod parse;
pub mod schema;
pub mod types;

// Re-export main types
pub use parse::*;
pub use schema::*;
pub use types::*;
