//! Sub-command definitions

use crate::error::{DefinitionError, DefinitionResult};
use crate::parser::{CommandOption, OptionValue, ValidationRule};
use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;

/// Names of commands and options: no leading dash, no `=`, no whitespace
static NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^-=\s][^=\s]*$").expect("name pattern is valid"));

/// Check that a command or option name can appear on a command line
pub fn validate_name(name: &str) -> DefinitionResult<()> {
    if NAME_RE.is_match(name) {
        Ok(())
    } else {
        Err(DefinitionError::InvalidName(name.to_string()))
    }
}

/// A named group of options plus the rules that validate them
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubCommand {
    name: String,
    about: Option<String>,
    options: Vec<CommandOption>,
    rules: Vec<ValidationRule>,
}

impl SubCommand {
    pub fn new(name: impl Into<String>) -> Self {
        SubCommand {
            name: name.into(),
            about: None,
            options: Vec::new(),
            rules: Vec::new(),
        }
    }

    /// Set the one-line description shown in the command listing
    pub fn about(mut self, about: impl Into<String>) -> Self {
        self.about = Some(about.into());
        self
    }

    /// Declare an option
    ///
    /// A required option also appends a `Required` rule at this point of the
    /// rule sequence.
    pub fn option(mut self, option: CommandOption) -> Self {
        if option.is_required() {
            self.rules
                .push(ValidationRule::Required(option.name().to_string()));
        }
        self.options.push(option);
        self
    }

    /// Shorthand for a string option
    pub fn string(
        self,
        name: impl Into<String>,
        default: impl Into<String>,
        usage: impl Into<String>,
    ) -> Self {
        self.option(CommandOption::string(name, default).usage(usage))
    }

    /// Shorthand for a boolean option
    pub fn flag(self, name: impl Into<String>, default: bool, usage: impl Into<String>) -> Self {
        self.option(CommandOption::boolean(name, default).usage(usage))
    }

    /// Append a validation rule
    pub fn rule(mut self, rule: ValidationRule) -> Self {
        self.rules.push(rule);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn about_text(&self) -> Option<&str> {
        self.about.as_deref()
    }

    /// Options in declaration order
    pub fn options(&self) -> &[CommandOption] {
        &self.options
    }

    /// Rules in declaration order
    pub fn rules(&self) -> &[ValidationRule] {
        &self.rules
    }

    /// Look up an option by name
    pub fn find_option(&self, name: &str) -> Option<&CommandOption> {
        self.options.iter().find(|o| o.name() == name)
    }

    /// Default values of every option, keyed by name
    pub fn defaults(&self) -> impl Iterator<Item = (&str, &OptionValue)> {
        self.options.iter().map(|o| (o.name(), o.default_value()))
    }

    /// Validate the definition: names, uniqueness and rule references
    pub fn validate(&self) -> DefinitionResult<()> {
        validate_name(&self.name)?;

        let mut seen = HashSet::new();
        for option in &self.options {
            validate_name(option.name())?;
            if !seen.insert(option.name()) {
                return Err(DefinitionError::DuplicateOption {
                    command: self.name.clone(),
                    option: option.name().to_string(),
                });
            }
        }

        for rule in &self.rules {
            for dep in rule.dependencies() {
                if !seen.contains(dep) {
                    return Err(DefinitionError::UndeclaredOption {
                        command: self.name.clone(),
                        option: dep.to_string(),
                    });
                }
            }
            if let ValidationRule::OneOfChoices { allowed, .. } = rule {
                if allowed.is_empty() {
                    return Err(DefinitionError::InvalidRule {
                        command: self.name.clone(),
                        reason: format!("{} has no choices", rule),
                    });
                }
            }
        }

        Ok(())
    }
}
