//! Subflag - sub-command flag parsing with declarative validation
//!
//! Subflag parses `<program> <subcommand> [-flag value ...]` argument lists into
//! typed values, applies defaults, and checks required, choice-set and
//! cross-option rules. Parsers are built in code or from a YAML schema.

// Public modules
pub mod cli;
pub mod config;
pub mod error;
pub mod parser;

// Re-export commonly used types
pub use error::{DefinitionError, Error, ParseError, Result};
pub use parser::{ArgumentParser, CommandOption, OptionValue, Parsed, SubCommand, ValidationRule};

/// Current version of Subflag
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
