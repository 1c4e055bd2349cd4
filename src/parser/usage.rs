//! Usage text rendering
//!
//! Rendering only produces `Display` values; writing them anywhere is up to
//! the caller.

use crate::parser::{ArgumentParser, OptionKind, OptionValue, SubCommand};
use std::fmt;

/// Flag listing of a single sub-command
pub struct CommandUsage<'a> {
    program: &'a str,
    command: &'a SubCommand,
}

impl fmt::Display for CommandUsage<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Usage of {}:", self.command.name())?;
        writeln!(
            f,
            "  {} {} [options...]",
            self.program,
            self.command.name()
        )?;

        if let Some(about) = self.command.about_text() {
            writeln!(f)?;
            writeln!(f, "{}", about)?;
        }

        if self.command.options().is_empty() {
            return Ok(());
        }

        writeln!(f)?;
        writeln!(f, "Options:")?;

        for option in self.command.options() {
            write!(f, "  -{}", option.name())?;
            if option.kind() != OptionKind::Bool {
                write!(f, " {}", option.kind())?;
            }
            write!(f, "\n    \t{}", option.usage_text())?;

            match option.default_value() {
                value if value.is_zero() => {}
                OptionValue::Str(s) => write!(f, " (default {:?})", s)?,
                OptionValue::Bool(b) => write!(f, " (default {})", b)?,
            }
            if option.is_required() {
                write!(f, " (required)")?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}

/// Program-level usage: invocation form and the sub-command listing
pub struct ProgramUsage<'a> {
    parser: &'a ArgumentParser,
}

impl fmt::Display for ProgramUsage<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(about) = self.parser.about_text() {
            writeln!(f, "{}", about)?;
            writeln!(f)?;
        }

        writeln!(f, "Usage:")?;
        writeln!(f, "  {} <subcommand> [options...]", self.parser.program())?;

        if self.parser.commands().is_empty() {
            return Ok(());
        }

        writeln!(f)?;
        writeln!(f, "Subcommands:")?;

        let width = self
            .parser
            .commands()
            .iter()
            .map(|c| c.name().len())
            .max()
            .unwrap_or_default();

        for command in self.parser.commands() {
            match command.about_text() {
                Some(about) => writeln!(f, "  {:width$}  {}", command.name(), about, width = width)?,
                None => writeln!(f, "  {}", command.name())?,
            }
        }

        Ok(())
    }
}

impl SubCommand {
    /// Usage text for this sub-command
    pub fn usage<'a>(&'a self, program: &'a str) -> CommandUsage<'a> {
        CommandUsage {
            program,
            command: self,
        }
    }
}

impl ArgumentParser {
    /// Usage text listing every sub-command
    pub fn usage(&self) -> ProgramUsage<'_> {
        ProgramUsage { parser: self }
    }

    /// Usage text for a named sub-command, if registered
    pub fn command_usage(&self, name: &str) -> Option<CommandUsage<'_>> {
        self.command(name).map(|c| c.usage(self.program()))
    }
}
