//! Command dispatch: settings, fallbacks and a single invocation

use std::ffi::OsString;
use std::io::{BufRead, Write};

use tracing::{debug, instrument};

use crate::cli::args::Cli;
use crate::cli::error::{CliError, CliResult};
use crate::cli::output;
use crate::command::ConsoleResult;
use crate::config::Settings;

/// Run one parsed invocation: load settings, complete fallbacks, invoke.
#[instrument(skip_all)]
pub fn execute_command(
    cli: Cli,
    input: &mut dyn BufRead,
    output: &mut dyn Write,
    error: &mut dyn Write,
) -> CliResult<ConsoleResult> {
    let settings = Settings::load(cli.config.as_deref())?;
    debug!("settings: {:?}", settings);

    let mut command = cli.command.into_command();
    debug!(command = command.name(), category = command.category(), "bound");

    command.load_fallbacks(input, &settings)?;
    let result = command
        .invoke(output, error)
        .map_err(|e| CliError::io("write result", e))?;
    debug!(command = command.name(), ?result, "invoked");
    Ok(result)
}

/// Execute a parsed invocation and report any error on `error`.
pub fn dispatch(
    cli: Cli,
    input: &mut dyn BufRead,
    output: &mut dyn Write,
    error: &mut dyn Write,
) -> ConsoleResult {
    match execute_command(cli, input, output, error) {
        Ok(result) => result,
        Err(e) => {
            debug!("{:?}", e);
            output::error(error, &e).ok();
            e.result()
        }
    }
}

/// Report a command line clap could not bind.
///
/// Help and version requests are not failures: they go to `output` with `Okay`.
pub fn reject(e: clap::Error, output: &mut dyn Write, error: &mut dyn Write) -> ConsoleResult {
    if e.use_stderr() {
        write!(error, "{}", e.render()).ok();
        ConsoleResult::Invalid
    } else {
        write!(output, "{}", e.render()).ok();
        ConsoleResult::Okay
    }
}

/// Parse `args` (including the program name) and run the command they select.
pub fn run<I, T>(
    args: I,
    input: &mut dyn BufRead,
    output: &mut dyn Write,
    error: &mut dyn Write,
) -> ConsoleResult
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    match <Cli as clap::Parser>::try_parse_from(args) {
        Ok(cli) => dispatch(cli, input, output, error),
        Err(e) => reject(e, output, error),
    }
}
