//! Typed option definitions
//!
//! An option is a named flag with a kind, a default value, usage text and a
//! required marker. Options are immutable once their sub-command is registered.

use std::fmt;

/// Option value kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OptionKind {
    String,
    Bool,
}

impl OptionKind {
    /// Parse a kind name as written in a schema
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "string" => Some(OptionKind::String),
            "bool" | "boolean" => Some(OptionKind::Bool),
            _ => None,
        }
    }

    /// Zero value of this kind
    pub fn zero(self) -> OptionValue {
        match self {
            OptionKind::String => OptionValue::Str(String::new()),
            OptionKind::Bool => OptionValue::Bool(false),
        }
    }

    /// Convert a raw token into a value of this kind
    pub fn parse_value(self, raw: &str) -> Option<OptionValue> {
        match self {
            OptionKind::String => Some(OptionValue::Str(raw.to_string())),
            OptionKind::Bool => parse_bool(raw).map(OptionValue::Bool),
        }
    }
}

impl fmt::Display for OptionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionKind::String => f.write_str("string"),
            OptionKind::Bool => f.write_str("bool"),
        }
    }
}

/// A resolved option value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OptionValue {
    Str(String),
    Bool(bool),
}

impl OptionValue {
    pub fn kind(&self) -> OptionKind {
        match self {
            OptionValue::Str(_) => OptionKind::String,
            OptionValue::Bool(_) => OptionKind::Bool,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            OptionValue::Str(s) => Some(s),
            OptionValue::Bool(_) => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            OptionValue::Bool(b) => Some(*b),
            OptionValue::Str(_) => None,
        }
    }

    /// Whether the value counts as "set": a non-empty string or `true`
    pub fn is_set(&self) -> bool {
        match self {
            OptionValue::Str(s) => !s.is_empty(),
            OptionValue::Bool(b) => *b,
        }
    }

    /// Whether the value equals the zero value of its kind
    pub fn is_zero(&self) -> bool {
        !self.is_set()
    }

    /// Compare against a rendered value (`"true"`/`"false"` for booleans)
    pub fn matches(&self, rendered: &str) -> bool {
        match self {
            OptionValue::Str(s) => s == rendered,
            OptionValue::Bool(b) => parse_bool(rendered) == Some(*b),
        }
    }
}

impl fmt::Display for OptionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionValue::Str(s) => f.write_str(s),
            OptionValue::Bool(b) => write!(f, "{}", b),
        }
    }
}

impl From<&str> for OptionValue {
    fn from(s: &str) -> Self {
        OptionValue::Str(s.to_string())
    }
}

impl From<String> for OptionValue {
    fn from(s: String) -> Self {
        OptionValue::Str(s)
    }
}

impl From<bool> for OptionValue {
    fn from(b: bool) -> Self {
        OptionValue::Bool(b)
    }
}

/// Parse a boolean token using the spellings accepted on the command line
pub fn parse_bool(raw: &str) -> Option<bool> {
    match raw {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Some(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Some(false),
        _ => None,
    }
}

/// A named, typed option on a sub-command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOption {
    name: String,
    default: OptionValue,
    usage: String,
    required: bool,
}

impl CommandOption {
    /// A string option with the given default
    pub fn string(name: impl Into<String>, default: impl Into<String>) -> Self {
        CommandOption {
            name: name.into(),
            default: OptionValue::Str(default.into()),
            usage: String::new(),
            required: false,
        }
    }

    /// A boolean option with the given default
    pub fn boolean(name: impl Into<String>, default: bool) -> Self {
        CommandOption {
            name: name.into(),
            default: OptionValue::Bool(default),
            usage: String::new(),
            required: false,
        }
    }

    /// Build from a kind and a default value of that kind
    pub fn with_kind(name: impl Into<String>, default: OptionValue) -> Self {
        CommandOption {
            name: name.into(),
            default,
            usage: String::new(),
            required: false,
        }
    }

    /// Set the usage text
    pub fn usage(mut self, usage: impl Into<String>) -> Self {
        self.usage = usage.into();
        self
    }

    /// Mark the option as required
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> OptionKind {
        self.default.kind()
    }

    pub fn default_value(&self) -> &OptionValue {
        &self.default
    }

    pub fn usage_text(&self) -> &str {
        &self.usage
    }

    pub fn is_required(&self) -> bool {
        self.required
    }
}
