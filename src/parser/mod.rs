//! Sub-command flag parsing
//!
//! This module holds the option and sub-command definitions, the flag scanner,
//! post-parse validation rules and usage rendering.

pub mod command;
pub mod option;
pub mod parse;
pub mod rule;
pub mod usage;

// Re-export main types
pub use command::*;
pub use option::*;
pub use parse::*;
pub use rule::*;
pub use usage::*;
