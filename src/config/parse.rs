//! Schema parsing

use crate::config::types::Schema;
use crate::error::Result;
use crate::parser::ArgumentParser;

/// Schema of the bundled `count` / `list` program
const BUILTIN_SCHEMA: &str = include_str!("builtin.yml");

/// Parse a schema from a YAML string
pub fn parse_schema(yaml: &str) -> Result<Schema> {
    let schema: Schema = serde_yaml::from_str(yaml)?;
    Ok(schema)
}

/// Parse, validate and build a parser from a YAML string
pub fn parser_from_yaml(yaml: &str) -> Result<ArgumentParser> {
    let parser = parse_schema(yaml)?.build()?;
    Ok(parser)
}

/// The bundled schema
pub fn builtin_schema() -> Result<Schema> {
    parse_schema(BUILTIN_SCHEMA)
}

/// Parser for the bundled `count` / `list` program
pub fn builtin_parser() -> Result<ArgumentParser> {
    parser_from_yaml(BUILTIN_SCHEMA)
}
