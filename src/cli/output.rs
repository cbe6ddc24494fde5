//! Terminal output formatting with colors
//!
//! Respects NO_COLOR, CLICOLOR, CLICOLOR_FORCE automatically.

use std::fmt::Display;
use std::io::{self, Write};

use colored::Colorize;

/// Write error (red bold "error:" prefix)
pub fn error(stream: &mut dyn Write, msg: &(impl Display + ?Sized)) -> io::Result<()> {
    writeln!(stream, "{}: {}", "error".red().bold(), msg)
}
