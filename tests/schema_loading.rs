//! Integration tests for YAML schema loading

mod common;

use common::args;
use subflag::config::{builtin_schema, parse_schema, parser_from_yaml, validate_schema};
use subflag::{DefinitionError, Error, ParseError};

#[test]
fn test_parse_complete_schema() {
    let yaml = r#"
name: deploy-tool
about: Ship things

commands:
  - name: push
    about: Push a release
    options:
      - name: env
        usage: Environment to deploy to
        default: staging
      - name: force
        type: bool
        usage: Skip confirmation
      - name: reason
        usage: Why the push is forced
    rules:
      - one-of: { option: env, choices: [staging, production] }
      - required-if: { option: reason, when: force, equals: "true" }

  - name: status
"#;

    let schema = parse_schema(yaml).unwrap();
    validate_schema(&schema).unwrap();
    assert_eq!(schema.name, "deploy-tool");
    assert_eq!(schema.commands.len(), 2);

    let parser = schema.build().unwrap();
    assert_eq!(parser.program(), "deploy-tool");

    let parsed = parser.parse(args(&["push"])).unwrap();
    assert_eq!(parsed.get_str("env"), Some("staging"));
    assert_eq!(parsed.get_bool("force"), Some(false));

    let err = parser.parse(args(&["push", "-force"])).unwrap_err();
    assert_eq!(err.to_string(), "flag -reason is required when -force=true");

    let parsed = parser
        .parse(args(&["push", "-force", "-reason", "hotfix", "-env=production"]))
        .unwrap();
    assert_eq!(parsed.get_str("reason"), Some("hotfix"));

    let parsed = parser.parse(args(&["status"])).unwrap();
    assert!(parsed.values().is_empty());
}

#[test]
fn test_schema_with_bad_rule_reference() {
    let yaml = r#"
commands:
  - name: push
    options:
      - name: env
    rules:
      - required: target
"#;

    let result = parser_from_yaml(yaml);
    assert!(matches!(
        result,
        Err(Error::Definition(DefinitionError::UndeclaredOption { .. }))
    ));
}

#[test]
fn test_schema_with_invalid_option_name() {
    let yaml = r#"
commands:
  - name: push
    options:
      - name: "-env"
"#;

    let result = parser_from_yaml(yaml);
    assert!(matches!(
        result,
        Err(Error::Definition(DefinitionError::InvalidName(_)))
    ));
}

#[test]
fn test_schema_with_unknown_field_type() {
    let yaml = r#"
commands:
  - name: push
    options:
      - name: retries
        type: int
"#;

    let result = parser_from_yaml(yaml);
    assert!(matches!(
        result,
        Err(Error::Definition(DefinitionError::InvalidOptionType(_)))
    ));
}

#[test]
fn test_builtin_schema_round_trips_through_yaml() {
    let schema = builtin_schema().unwrap();
    let yaml = serde_yaml::to_string(&schema).unwrap();

    let parser = parser_from_yaml(&yaml).unwrap();
    let err = parser
        .parse(args(&["count", "-text", "hello", "-metric", "substring"]))
        .unwrap_err();
    assert!(matches!(err, ParseError::ValidationFailed { .. }));
}
