//! Common test utilities

use subflag::config::builtin_parser;
use subflag::ArgumentParser;

/// The bundled `count` / `list` parser
pub fn parser() -> ArgumentParser {
    builtin_parser().unwrap()
}

/// Turn string literals into an owned argument list
pub fn args(args: &[&str]) -> Vec<String> {
    args.iter().map(|s| s.to_string()).collect()
}
