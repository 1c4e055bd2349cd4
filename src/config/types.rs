//! Core schema types
//!
//! This module defines the data structures that represent a parser schema
//! document.

use serde::{Deserialize, Serialize};

/// Top-level schema structure
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Schema {
    /// Program name used in usage text
    #[serde(default = "default_program_name")]
    pub name: String,

    /// Program description (optional)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub about: Option<String>,

    /// Sub-commands, in the order they are listed in usage text
    #[serde(default)]
    pub commands: Vec<CommandConfig>,
}

fn default_program_name() -> String {
    env!("CARGO_PKG_NAME").to_string()
}

/// A sub-command definition
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CommandConfig {
    /// Name matched against the first argument
    pub name: String,

    /// One-line description for the command listing
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub about: Option<String>,

    /// Options, in declaration order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<OptionConfig>,

    /// Validation rules, evaluated in order after parsing
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub rules: Vec<RuleConfig>,
}

/// An option (flag) definition
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OptionConfig {
    pub name: String,

    /// Option type (string, bool)
    #[serde(rename = "type", default = "default_option_type")]
    pub option_type: String,

    /// Default value, parsed according to the option type
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<String>,

    /// Usage description for help text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub usage: Option<String>,

    /// Required option
    #[serde(default)]
    pub required: bool,
}

fn default_option_type() -> String {
    "string".to_string()
}

/// A validation rule entry
///
/// Exactly one of the fields must be present.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct RuleConfig {
    /// Option that must be set
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required: Option<String>,

    /// Option restricted to a set of choices
    #[serde(rename = "one-of", default, skip_serializing_if = "Option::is_none")]
    pub one_of: Option<ChoiceConfig>,

    /// Option required when another option has a given value
    #[serde(rename = "required-if", default, skip_serializing_if = "Option::is_none")]
    pub required_if: Option<DependencyConfig>,

    /// Option only allowed when another option has a given value
    #[serde(
        rename = "forbidden-unless",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub forbidden_unless: Option<DependencyConfig>,
}

/// Choice-set constraint
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ChoiceConfig {
    pub option: String,
    pub choices: Vec<String>,
}

/// Constraint between two options
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DependencyConfig {
    /// Constrained option
    pub option: String,

    /// Option whose value decides the constraint
    pub when: String,

    /// Value of `when` that triggers (or permits) `option`
    pub equals: String,
}
