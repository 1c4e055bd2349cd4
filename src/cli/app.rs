//! Main CLI application

use crate::cli::{Output, Verbosity};
use crate::config::builtin_parser;
use crate::error::{is_help_request, ParseError};
use crate::parser::{ArgumentParser, Parsed};
use anyhow::Context as _;
use clap::{Arg, ArgAction, ArgMatches, Command};
use std::ffi::OsString;
use std::io::{self, Write};
use std::process::ExitCode;

/// CLI application
pub struct App {
    /// The clap command for program-level flags
    command: Command,
    /// Sub-command parser
    parser: ArgumentParser,
}

impl App {
    /// Create the app for the bundled `count` / `list` program
    pub fn new() -> crate::Result<Self> {
        Ok(Self::with_parser(builtin_parser()?))
    }

    /// Create the app around any sub-command parser
    pub fn with_parser(parser: ArgumentParser) -> Self {
        let command = build_command(&parser);
        App { command, parser }
    }

    /// Run the application with the process arguments
    pub fn run(self) -> anyhow::Result<ExitCode> {
        self.run_from(std::env::args_os())
    }

    /// Run the application with the given arguments (program name first)
    pub fn run_from<I, T>(self, args: I) -> anyhow::Result<ExitCode>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let matches = match self.command.clone().try_get_matches_from(args) {
            Ok(matches) => matches,
            Err(e) => {
                e.print().context("failed to print usage")?;
                return Ok(match e.kind() {
                    clap::error::ErrorKind::DisplayHelp
                    | clap::error::ErrorKind::DisplayVersion => ExitCode::SUCCESS,
                    _ => ExitCode::FAILURE,
                });
            }
        };

        Output::set_color(!matches.get_flag("no-color"));
        let output = Output::new(get_verbosity(&matches));

        let tokens = subcommand_tokens(&matches);
        output.debug(&format!("dispatching {:?}", tokens));

        match self.parser.parse(tokens) {
            Ok(parsed) => {
                report_parsed(&parsed, &output);
                let mut stdout = io::stdout().lock();
                writeln!(stdout, "{}", parsed).context("failed to write to stdout")?;
                Ok(ExitCode::SUCCESS)
            }
            Err(err) if is_help_request(&err) => {
                let mut stdout = io::stdout().lock();
                write!(stdout, "{}", self.usage_for(&err)).context("failed to write to stdout")?;
                Ok(ExitCode::SUCCESS)
            }
            Err(err) => {
                if let ParseError::ValidationFailed { rule, .. } = &err {
                    output.debug(&format!("failed rule: {}", rule));
                }
                output.error(&err.to_string());
                output.usage(&self.usage_for(&err));
                Ok(ExitCode::from(exit_code_for(&err)))
            }
        }
    }

    /// Usage text matching an error: the sub-command's when one was matched
    fn usage_for(&self, err: &ParseError) -> String {
        err.command()
            .and_then(|name| self.parser.command_usage(name))
            .map(|usage| usage.to_string())
            .unwrap_or_else(|| self.parser.usage().to_string())
    }
}

/// Build the clap command for the program-level flags
///
/// Everything from the first positional argument on is captured verbatim by a
/// trailing var-arg and handed to the sub-command parser.
fn build_command(parser: &ArgumentParser) -> Command {
    Command::new(parser.program().to_string())
        .version(env!("CARGO_PKG_VERSION"))
        .about(
            parser
                .about_text()
                .unwrap_or("Sub-command flag parsing demo")
                .to_string(),
        )
        .override_usage(format!(
            "{} [OPTIONS] <SUBCOMMAND> [FLAGS...]",
            parser.program()
        ))
        .arg(
            Arg::new("quiet")
                .short('q')
                .long("quiet")
                .help("Only print results and errors")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Print debug output")
                .action(ArgAction::SetTrue)
                .conflicts_with("quiet"),
        )
        .arg(
            Arg::new("no-color")
                .long("no-color")
                .help("Disable colored output")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("args")
                .value_name("SUBCOMMAND")
                .help("Sub-command name followed by its flags")
                .num_args(1..)
                .trailing_var_arg(true),
        )
        .after_help(parser.usage().to_string())
}

/// Get verbosity level from matches
fn get_verbosity(matches: &ArgMatches) -> Verbosity {
    if matches.get_flag("quiet") {
        Verbosity::Quiet
    } else if matches.get_flag("verbose") {
        Verbosity::Verbose
    } else {
        Verbosity::Normal
    }
}

/// Sub-command name followed by its raw arguments, or nothing
fn subcommand_tokens(matches: &ArgMatches) -> Vec<String> {
    matches
        .get_many::<String>("args")
        .into_iter()
        .flatten()
        .cloned()
        .collect()
}

/// Debug report of what was supplied and what was defaulted
fn report_parsed(parsed: &Parsed, output: &Output) {
    output.debug(&format!("matched sub-command '{}'", parsed.command()));
    for (name, value) in parsed.iter() {
        let source = if parsed.was_supplied(name) {
            "supplied"
        } else {
            "default"
        };
        output.debug(&format!("  -{} = {:?} ({})", name, value.to_string(), source));
    }
}

/// Process exit status for a parse failure
pub fn exit_code_for(err: &ParseError) -> u8 {
    if is_help_request(err) {
        0
    } else {
        1
    }
}

/// Run the CLI application with the process arguments
pub fn run() -> anyhow::Result<ExitCode> {
    let app = App::new().context("failed to load the bundled schema")?;
    app.run()
}
