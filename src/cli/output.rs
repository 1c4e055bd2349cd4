//! Diagnostic output for the command-line program
//!
//! Everything here goes to stderr and is gated by the verbosity level.

use colored::Colorize;

/// Verbosity levels for output
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Verbosity {
    Quiet = 0,
    Normal = 1,
    Verbose = 2,
}

/// Verbosity-gated printer for diagnostics
#[derive(Debug, Clone, Copy)]
pub struct Output {
    pub verbosity: Verbosity,
}

impl Output {
    pub fn new(verbosity: Verbosity) -> Self {
        Output { verbosity }
    }

    /// Enable or disable colored output for the whole process
    pub fn set_color(enabled: bool) {
        if !enabled {
            colored::control::set_override(false);
        }
    }

    /// Print error message (shown at every level)
    pub fn error(&self, message: &str) {
        eprintln!("{} {}", "error:".red().bold(), message);
    }

    /// Print usage text after an error (suppressed when quiet)
    pub fn usage(&self, text: &str) {
        if self.verbosity >= Verbosity::Normal {
            eprintln!();
            eprint!("{}", text);
        }
    }

    /// Print debug message (only in verbose mode)
    pub fn debug(&self, message: &str) {
        if self.verbosity >= Verbosity::Verbose {
            eprintln!("{} {}", "[DEBUG]".dimmed(), message);
        }
    }
}

impl Default for Output {
    fn default() -> Self {
        Self::new(Verbosity::Normal)
    }
}
