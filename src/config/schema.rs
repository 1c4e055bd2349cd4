//! Schema validation and conversion
//!
//! This module checks a schema document and turns it into an `ArgumentParser`.

use crate::config::types::{CommandConfig, OptionConfig, RuleConfig, Schema};
use crate::error::{DefinitionError, DefinitionResult};
use crate::parser::{ArgumentParser, CommandOption, OptionKind, SubCommand, ValidationRule};
use std::collections::HashSet;

/// Validate a complete schema
pub fn validate_schema(schema: &Schema) -> DefinitionResult<()> {
    let mut names = HashSet::new();

    for command in &schema.commands {
        if !names.insert(command.name.as_str()) {
            return Err(DefinitionError::DuplicateSubCommand(command.name.clone()));
        }
        command_from_config(command)?.validate()?;
    }

    Ok(())
}

/// Build a sub-command from its configuration
pub fn command_from_config(config: &CommandConfig) -> DefinitionResult<SubCommand> {
    let mut command = SubCommand::new(config.name.clone());

    if let Some(about) = &config.about {
        command = command.about(about.clone());
    }

    for option in &config.options {
        command = command.option(option_from_config(option)?);
    }

    for rule in &config.rules {
        command = command.rule(rule_from_config(&config.name, rule)?);
    }

    Ok(command)
}

/// Build an option, parsing its default according to its type
fn option_from_config(config: &OptionConfig) -> DefinitionResult<CommandOption> {
    let kind = OptionKind::from_name(&config.option_type)
        .ok_or_else(|| DefinitionError::InvalidOptionType(config.option_type.clone()))?;

    let default = match &config.default {
        Some(raw) => kind
            .parse_value(raw)
            .ok_or_else(|| DefinitionError::InvalidDefault {
                option: config.name.clone(),
                value: raw.clone(),
            })?,
        None => kind.zero(),
    };

    let mut option = CommandOption::with_kind(config.name.clone(), default);
    if let Some(usage) = &config.usage {
        option = option.usage(usage.clone());
    }
    if config.required {
        option = option.required();
    }

    Ok(option)
}

/// Convert a rule entry, which must name exactly one rule kind
fn rule_from_config(command: &str, config: &RuleConfig) -> DefinitionResult<ValidationRule> {
    let mut rules = Vec::new();

    if let Some(option) = &config.required {
        rules.push(ValidationRule::required(option.clone()));
    }
    if let Some(choice) = &config.one_of {
        rules.push(ValidationRule::one_of(
            choice.option.clone(),
            choice.choices.iter().cloned(),
        ));
    }
    if let Some(dep) = &config.required_if {
        rules.push(ValidationRule::required_if(
            dep.option.clone(),
            dep.when.clone(),
            dep.equals.clone(),
        ));
    }
    if let Some(dep) = &config.forbidden_unless {
        rules.push(ValidationRule::forbidden_unless(
            dep.option.clone(),
            dep.when.clone(),
            dep.equals.clone(),
        ));
    }

    match rules.len() {
        1 => Ok(rules.remove(0)),
        0 => Err(DefinitionError::InvalidRule {
            command: command.to_string(),
            reason: "rule entry names no rule kind".to_string(),
        }),
        _ => Err(DefinitionError::InvalidRule {
            command: command.to_string(),
            reason: format!(
                "rule entry names several kinds: {}",
                rules.iter().map(|r| r.kind()).collect::<Vec<_>>().join(", ")
            ),
        }),
    }
}

impl Schema {
    /// Validate the schema and build a parser from it
    pub fn build(&self) -> DefinitionResult<ArgumentParser> {
        validate_schema(self)?;

        let mut parser = ArgumentParser::new(self.name.clone());
        if let Some(about) = &self.about {
            parser = parser.about(about.clone());
        }

        for command in &self.commands {
            parser.add(command_from_config(command)?)?;
        }

        Ok(parser)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::types::{ChoiceConfig, DependencyConfig};
    use crate::parser::OptionValue;

    fn option(name: &str, option_type: &str, default: Option<&str>) -> OptionConfig {
        OptionConfig {
            name: name.to_string(),
            option_type: option_type.to_string(),
            default: default.map(str::to_string),
            usage: None,
            required: false,
        }
    }

    fn command(name: &str, options: Vec<OptionConfig>, rules: Vec<RuleConfig>) -> CommandConfig {
        CommandConfig {
            name: name.to_string(),
            about: None,
            options,
            rules,
        }
    }

    fn schema(commands: Vec<CommandConfig>) -> Schema {
        Schema {
            name: "test-app".to_string(),
            about: None,
            commands,
        }
    }

    #[test]
    fn test_validate_duplicate_commands() {
        let schema = schema(vec![
            command("list", vec![], vec![]),
            command("list", vec![], vec![]),
        ]);

        let result = validate_schema(&schema);
        assert!(matches!(
            result,
            Err(DefinitionError::DuplicateSubCommand(_))
        ));
    }

    #[test]
    fn test_validate_invalid_option_type() {
        let schema = schema(vec![command(
            "list",
            vec![option("count", "integer", None)],
            vec![],
        )]);

        let result = validate_schema(&schema);
        assert_eq!(
            result.unwrap_err(),
            DefinitionError::InvalidOptionType("integer".to_string())
        );
    }

    #[test]
    fn test_validate_invalid_bool_default() {
        let schema = schema(vec![command(
            "list",
            vec![option("unique", "bool", Some("sometimes"))],
            vec![],
        )]);

        assert!(matches!(
            validate_schema(&schema),
            Err(DefinitionError::InvalidDefault { .. })
        ));
    }

    #[test]
    fn test_option_defaults_by_type() {
        let built = option_from_config(&option("unique", "boolean", Some("true"))).unwrap();
        assert_eq!(built.default_value(), &OptionValue::Bool(true));

        let built = option_from_config(&option("text", "string", None)).unwrap();
        assert_eq!(built.default_value(), &OptionValue::Str(String::new()));
    }

    #[test]
    fn test_rule_entry_without_kind() {
        let result = rule_from_config("list", &RuleConfig::default());
        assert!(matches!(result, Err(DefinitionError::InvalidRule { .. })));
    }

    #[test]
    fn test_rule_entry_with_several_kinds() {
        let rule = RuleConfig {
            required: Some("text".to_string()),
            one_of: Some(ChoiceConfig {
                option: "metric".to_string(),
                choices: vec!["chars".to_string()],
            }),
            ..RuleConfig::default()
        };

        let err = rule_from_config("list", &rule).unwrap_err();
        assert_eq!(
            err,
            DefinitionError::InvalidRule {
                command: "list".to_string(),
                reason: "rule entry names several kinds: required, one-of".to_string(),
            }
        );
    }

    #[test]
    fn test_validate_rule_on_undeclared_option() {
        let rule = RuleConfig {
            forbidden_unless: Some(DependencyConfig {
                option: "substring".to_string(),
                when: "metric".to_string(),
                equals: "substring".to_string(),
            }),
            ..RuleConfig::default()
        };
        let schema = schema(vec![command(
            "count",
            vec![option("metric", "string", Some("chars"))],
            vec![rule],
        )]);

        assert!(matches!(
            validate_schema(&schema),
            Err(DefinitionError::UndeclaredOption { .. })
        ));
    }

    #[test]
    fn test_build_valid_schema() {
        let mut text = option("text", "string", None);
        text.required = true;

        let schema = Schema {
            name: "test-app".to_string(),
            about: Some("Test application".to_string()),
            commands: vec![command("list", vec![text], vec![])],
        };

        let parser = schema.build().unwrap();
        assert_eq!(parser.program(), "test-app");
        assert_eq!(parser.about_text(), Some("Test application"));

        let list = parser.command("list").unwrap();
        assert_eq!(list.rules(), &[ValidationRule::required("text")]);
    }
}
