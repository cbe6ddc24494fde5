//! Command contract: descriptors, argument/option metadata and the invocation lifecycle
//!
//! A command is bound from the command line by clap, completed by
//! [`Command::load_fallbacks`] (stdin, referenced files, settings) and then run
//! once with [`Command::invoke`]. Metadata is read back from the clap definition
//! so it always matches what the parser accepts.

use std::fmt;
use std::io::{self, BufRead, Write};
use std::str::FromStr;

use clap::{ArgAction, CommandFactory};

use crate::application::{ApplicationError, ApplicationResult, IoResultExt};
use crate::cli::Cli;
use crate::config::Settings;
use crate::domain::DomainError;
use crate::exitcode;

/// Arity of a positional argument that consumes all remaining tokens.
pub const UNLIMITED: i32 = -1;

/// Tri-state outcome of an invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleResult {
    Okay,
    Failure,
    Invalid,
}

impl ConsoleResult {
    /// Process exit code for this result.
    pub fn code(self) -> i32 {
        match self {
            ConsoleResult::Okay => exitcode::OKAY,
            ConsoleResult::Failure => exitcode::FAILURE,
            ConsoleResult::Invalid => exitcode::INVALID,
        }
    }
}

/// Static identity of a command type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Descriptor {
    /// Symbolic (not localizable) command name, lower case
    pub symbol: &'static str,
    /// Category name used to group help output, upper case
    pub category: &'static str,
}

impl Descriptor {
    pub const fn new(symbol: &'static str, category: &'static str) -> Self {
        Self { symbol, category }
    }

    /// The clap definition of this command as the host parser sees it,
    /// including propagated global options.
    pub fn definition(&self) -> clap::Command {
        let mut cli = Cli::command();
        cli.build();
        cli.find_subcommand(self.symbol)
            .cloned()
            .unwrap_or_else(|| clap::Command::new(self.symbol))
    }

    /// One-line description.
    pub fn about(&self) -> String {
        self.definition()
            .get_about()
            .map(|about| about.to_string())
            .unwrap_or_default()
    }

    pub fn load_arguments(&self) -> ArgumentMetadata {
        ArgumentMetadata::from_definition(&self.definition())
    }

    pub fn load_options(&self) -> Vec<OptionMetadata> {
        self.definition()
            .get_arguments()
            .filter(|arg| !arg.is_positional())
            .map(OptionMetadata::from_arg)
            .collect()
    }
}

/// A positional argument: name and number of tokens it binds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Argument {
    pub name: String,
    /// Fixed count, or [`UNLIMITED`]
    pub arity: i32,
    pub required: bool,
}

/// Ordered positional arguments; declaration order is binding order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArgumentMetadata(Vec<Argument>);

impl ArgumentMetadata {
    pub fn add(mut self, name: impl Into<String>, arity: i32, required: bool) -> Self {
        self.0.push(Argument {
            name: name.into(),
            arity,
            required,
        });
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = &Argument> {
        self.0.iter()
    }

    pub fn names(&self) -> Vec<&str> {
        self.0.iter().map(|arg| arg.name.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    fn from_definition(definition: &clap::Command) -> Self {
        definition
            .get_positionals()
            .fold(Self::default(), |metadata, arg| {
                let name = arg
                    .get_value_names()
                    .and_then(|names| names.first())
                    .map(|name| name.to_string())
                    .unwrap_or_else(|| arg.get_id().as_str().to_uppercase());
                let unlimited = matches!(arg.get_action(), ArgAction::Append)
                    || arg
                        .get_num_args()
                        .is_some_and(|range| range.max_values() == usize::MAX);
                let arity = if unlimited {
                    UNLIMITED
                } else {
                    arg.get_num_args()
                        .map_or(1, |range| range.max_values() as i32)
                };
                metadata.add(name, arity, arg.is_required_set())
            })
    }
}

/// A named option as declared to the parser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionMetadata {
    pub name: String,
    pub short: Option<char>,
    pub long: Option<String>,
    pub required: bool,
    pub default: Option<String>,
    /// Flag semantics: present without a value means true
    pub implicit: bool,
    pub description: String,
}

impl OptionMetadata {
    fn from_arg(arg: &clap::Arg) -> Self {
        let implicit = matches!(
            arg.get_action(),
            ArgAction::SetTrue
                | ArgAction::SetFalse
                | ArgAction::Count
                | ArgAction::Help
                | ArgAction::HelpShort
                | ArgAction::HelpLong
                | ArgAction::Version
        ) || arg
            .get_num_args()
            .is_some_and(|range| range.takes_values() && range.min_values() == 0);

        Self {
            name: arg.get_id().as_str().to_string(),
            short: arg.get_short(),
            long: arg.get_long().map(str::to_string),
            required: arg.is_required_set(),
            default: arg
                .get_default_values()
                .first()
                .map(|value| value.to_string_lossy().into_owned()),
            implicit,
            description: arg.get_help().map(|help| help.to_string()).unwrap_or_default(),
        }
    }
}

/// The contract every command implements.
pub trait Command: fmt::Debug {
    fn descriptor(&self) -> &'static Descriptor;

    fn name(&self) -> &'static str {
        self.descriptor().symbol
    }

    fn category(&self) -> &'static str {
        self.descriptor().category
    }

    fn load_arguments(&self) -> ArgumentMetadata {
        self.descriptor().load_arguments()
    }

    fn load_options(&self) -> Vec<OptionMetadata> {
        self.descriptor().load_options()
    }

    /// Complete bound values from side channels after command-line parsing.
    fn load_fallbacks(
        &mut self,
        _input: &mut dyn BufRead,
        _settings: &Settings,
    ) -> ApplicationResult<()> {
        Ok(())
    }

    /// Run the delegated operation once against the bound values.
    ///
    /// Domain failures are reported on `error` and returned as
    /// [`ConsoleResult::Failure`]; only stream errors surface as `Err`.
    fn invoke(&self, output: &mut dyn Write, error: &mut dyn Write) -> io::Result<ConsoleResult>;
}

/// Read the whole input channel, trimmed.
pub fn read_input(input: &mut dyn BufRead) -> ApplicationResult<String> {
    let mut text = String::new();
    input
        .read_to_string(&mut text)
        .with_context("read standard input")?;
    Ok(text.trim().to_string())
}

/// Bind an omitted argument from the input channel.
///
/// Empty input is a missing argument; unparseable input is a domain error.
pub fn read_argument<T>(input: &mut dyn BufRead, name: &'static str) -> ApplicationResult<T>
where
    T: FromStr<Err = DomainError>,
{
    let text = read_input(input)?;
    if text.is_empty() {
        return Err(ApplicationError::MissingArgument(name));
    }
    Ok(text.parse()?)
}

/// Report an argument that was neither given nor loaded by a fallback.
pub fn unbound(error: &mut dyn Write, name: &str) -> io::Result<ConsoleResult> {
    writeln!(error, "missing required argument: {}", name)?;
    Ok(ConsoleResult::Invalid)
}
