//! Error types for subflag

use thiserror::Error;

/// Result type alias for subflag operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for subflag
#[derive(Error, Debug)]
pub enum Error {
    /// Parser definition errors (registration and schema)
    #[error("Definition error: {0}")]
    Definition(#[from] DefinitionError),

    /// Argument parsing and validation errors
    #[error("{0}")]
    Parse(#[from] ParseError),

    /// YAML parsing errors
    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Errors raised while building a parser
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DefinitionError {
    #[error("sub-command '{0}' is already registered")]
    DuplicateSubCommand(String),

    #[error("option '-{option}' is declared twice on sub-command '{command}'")]
    DuplicateOption { command: String, option: String },

    #[error("rule on sub-command '{command}' references undeclared option '-{option}'")]
    UndeclaredOption { command: String, option: String },

    #[error("invalid name '{0}': names must be non-empty and may not start with '-' or contain '=' or whitespace")]
    InvalidName(String),

    #[error("invalid option type '{0}': must be one of string, bool")]
    InvalidOptionType(String),

    #[error("invalid default '{value}' for option '-{option}'")]
    InvalidDefault { option: String, value: String },

    #[error("invalid rule on sub-command '{command}': {reason}")]
    InvalidRule { command: String, reason: String },
}

/// Errors raised while parsing an argument list
///
/// Every variant except the first two carries the sub-command being parsed, so
/// callers can render the matching usage text.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("a sub-command is required")]
    MissingSubCommand,

    #[error("unknown sub-command '{0}'")]
    UnknownSubCommand(String),

    #[error("flag provided but not defined: -{option}")]
    UnknownOption { command: String, option: String },

    #[error("bad flag syntax: {token}")]
    BadFlagSyntax { command: String, token: String },

    #[error("flag needs an argument: -{option}")]
    MissingValue { command: String, option: String },

    #[error("invalid value \"{value}\" for flag -{option}: expected {kind}")]
    InvalidValue {
        command: String,
        option: String,
        value: String,
        kind: String,
    },

    #[error("help requested for '{command}'")]
    HelpRequested { command: String },

    #[error("{message}")]
    ValidationFailed {
        command: String,
        rule: crate::parser::ValidationRule,
        message: String,
    },
}

impl ParseError {
    /// Name of the sub-command the error occurred in, if one was matched
    pub fn command(&self) -> Option<&str> {
        match self {
            ParseError::MissingSubCommand | ParseError::UnknownSubCommand(_) => None,
            ParseError::UnknownOption { command, .. }
            | ParseError::BadFlagSyntax { command, .. }
            | ParseError::MissingValue { command, .. }
            | ParseError::InvalidValue { command, .. }
            | ParseError::HelpRequested { command }
            | ParseError::ValidationFailed { command, .. } => Some(command),
        }
    }
}

/// Specialized result type for parser definition
pub type DefinitionResult<T> = std::result::Result<T, DefinitionError>;

/// Specialized result type for argument parsing
pub type ParseResult<T> = std::result::Result<T, ParseError>;

/// Helper to determine if an error is a help request
/// (which should be answered with usage text, not treated as a failure)
pub fn is_help_request(err: &ParseError) -> bool {
    matches!(err, ParseError::HelpRequested { .. })
}
