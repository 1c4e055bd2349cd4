//! The argument parser and its parse results

use crate::error::{DefinitionError, DefinitionResult, ParseError, ParseResult};
use crate::parser::{first_violation, OptionKind, OptionValue, SubCommand};
use std::collections::{HashMap, HashSet};
use std::fmt;

/// Registry of sub-commands and the entry point for parsing
///
/// Registration takes `&mut self` and parsing takes `&self`, so a parser is
/// fully built before it is used and can be shared across threads afterwards.
#[derive(Debug, Clone, Default)]
pub struct ArgumentParser {
    program: String,
    about: Option<String>,
    commands: Vec<SubCommand>,
}

impl ArgumentParser {
    /// Create an empty parser for the given program name
    pub fn new(program: impl Into<String>) -> Self {
        ArgumentParser {
            program: program.into(),
            about: None,
            commands: Vec::new(),
        }
    }

    /// Set the program description
    pub fn about(mut self, about: impl Into<String>) -> Self {
        self.about = Some(about.into());
        self
    }

    /// Build a sub-command with `builder` and register it
    pub fn register<F>(&mut self, name: &str, builder: F) -> DefinitionResult<&SubCommand>
    where
        F: FnOnce(SubCommand) -> SubCommand,
    {
        self.add(builder(SubCommand::new(name)))
    }

    /// Register an already built sub-command
    pub fn add(&mut self, command: SubCommand) -> DefinitionResult<&SubCommand> {
        if self.command(command.name()).is_some() {
            return Err(DefinitionError::DuplicateSubCommand(
                command.name().to_string(),
            ));
        }
        command.validate()?;

        let index = self.commands.len();
        self.commands.push(command);
        Ok(&self.commands[index])
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn about_text(&self) -> Option<&str> {
        self.about.as_deref()
    }

    /// Look up a sub-command by exact name
    pub fn command(&self, name: &str) -> Option<&SubCommand> {
        self.commands.iter().find(|c| c.name() == name)
    }

    /// Sub-commands in registration order
    pub fn commands(&self) -> &[SubCommand] {
        &self.commands
    }

    /// Parse a raw argument list whose first element names the sub-command
    pub fn parse<I, S>(&self, args: I) -> ParseResult<Parsed>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut args = args.into_iter().map(Into::into);

        let name = args.next().ok_or(ParseError::MissingSubCommand)?;
        let command = self
            .command(&name)
            .ok_or_else(|| ParseError::UnknownSubCommand(name.clone()))?;

        let tokens: Vec<String> = args.collect();
        let raw = scan_flags(command, &tokens)?;

        let mut values = HashMap::new();
        for (option, default) in command.defaults() {
            let value = raw
                .explicit
                .get(option)
                .cloned()
                .unwrap_or_else(|| default.clone());
            values.insert(option.to_string(), value);
        }

        if let Some((rule, message)) = first_violation(command.rules(), &values) {
            return Err(ParseError::ValidationFailed {
                command: command.name().to_string(),
                rule: rule.clone(),
                message,
            });
        }

        Ok(Parsed {
            command: command.name().to_string(),
            order: command.options().iter().map(|o| o.name().to_string()).collect(),
            values,
            supplied: raw.explicit.into_keys().collect(),
            args: raw.rest,
        })
    }
}

/// Values supplied on the command line before defaults are applied
struct RawFlags {
    explicit: HashMap<String, OptionValue>,
    rest: Vec<String>,
}

/// Scan flag tokens for a sub-command
///
/// Scanning stops at `--` (consumed), at a lone `-`, or at the first token that
/// does not start with a dash; everything from there on is positional.
fn scan_flags(command: &SubCommand, tokens: &[String]) -> ParseResult<RawFlags> {
    let mut explicit = HashMap::new();
    let mut index = 0;

    while index < tokens.len() {
        let token = &tokens[index];

        if token == "--" {
            index += 1;
            break;
        }
        if token.len() < 2 || !token.starts_with('-') {
            break;
        }
        index += 1;

        let body = token
            .strip_prefix("--")
            .unwrap_or_else(|| &token[1..]);
        if body.is_empty() || body.starts_with('-') || body.starts_with('=') {
            return Err(ParseError::BadFlagSyntax {
                command: command.name().to_string(),
                token: token.clone(),
            });
        }

        let (name, inline) = match body.split_once('=') {
            Some((name, value)) => (name, Some(value)),
            None => (body, None),
        };

        let option = match command.find_option(name) {
            Some(option) => option,
            None if name == "h" || name == "help" => {
                return Err(ParseError::HelpRequested {
                    command: command.name().to_string(),
                });
            }
            None => {
                return Err(ParseError::UnknownOption {
                    command: command.name().to_string(),
                    option: name.to_string(),
                });
            }
        };

        let raw_value = match (option.kind(), inline) {
            (_, Some(value)) => value.to_string(),
            (OptionKind::Bool, None) => "true".to_string(),
            (OptionKind::String, None) => match tokens.get(index) {
                Some(next) => {
                    index += 1;
                    next.clone()
                }
                None => {
                    return Err(ParseError::MissingValue {
                        command: command.name().to_string(),
                        option: name.to_string(),
                    });
                }
            },
        };

        let value = option
            .kind()
            .parse_value(&raw_value)
            .ok_or_else(|| ParseError::InvalidValue {
                command: command.name().to_string(),
                option: name.to_string(),
                value: raw_value.clone(),
                kind: option.kind().to_string(),
            })?;

        explicit.insert(name.to_string(), value);
    }

    Ok(RawFlags {
        explicit,
        rest: tokens[index..].to_vec(),
    })
}

/// A successful parse: the matched sub-command and its resolved values
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parsed {
    command: String,
    order: Vec<String>,
    values: HashMap<String, OptionValue>,
    supplied: HashSet<String>,
    args: Vec<String>,
}

impl Parsed {
    /// Name of the matched sub-command
    pub fn command(&self) -> &str {
        &self.command
    }

    pub fn get(&self, name: &str) -> Option<&OptionValue> {
        self.values.get(name)
    }

    pub fn get_str(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(OptionValue::as_str)
    }

    pub fn get_bool(&self, name: &str) -> Option<bool> {
        self.get(name).and_then(OptionValue::as_bool)
    }

    /// Whether the option appeared on the command line
    pub fn was_supplied(&self, name: &str) -> bool {
        self.supplied.contains(name)
    }

    /// Positional arguments left after flag parsing stopped
    pub fn args(&self) -> &[String] {
        &self.args
    }

    /// Resolved values in declaration order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &OptionValue)> {
        self.order
            .iter()
            .filter_map(|name| self.values.get(name).map(|v| (name.as_str(), v)))
    }

    /// Resolved values as a map
    pub fn values(&self) -> &HashMap<String, OptionValue> {
        &self.values
    }
}

impl fmt::Display for Parsed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (name, value) in self.iter() {
            if !std::mem::take(&mut first) {
                f.write_str(", ")?;
            }
            write!(f, "{}: {}", name, value)?;
        }

        if !self.args.is_empty() {
            if !first {
                f.write_str(", ")?;
            }
            write!(f, "args: [{}]", self.args.join(", "))?;
        }

        Ok(())
    }
}
