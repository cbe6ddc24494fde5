//! `help`: list commands by category or show the usage of one

use std::io::{self, Write};

use clap::Args;
use itertools::Itertools;

use crate::command::{Command, ConsoleResult, Descriptor};
use crate::commands;

pub static DESCRIPTOR: Descriptor = Descriptor::new("help", "SYSTEM");

#[derive(Args, Debug, Clone, Default)]
pub struct Arguments {
    /// The command for which to show usage
    #[arg(value_name = "COMMAND")]
    pub command: Option<String>,
}

#[derive(Args, Debug, Clone, Default)]
pub struct Help {
    #[command(flatten)]
    pub argument: Arguments,
}

impl Help {
    fn list(&self, output: &mut dyn Write) -> io::Result<ConsoleResult> {
        writeln!(output, "Usage: bx COMMAND [--help]")?;
        let grouped = commands::all()
            .iter()
            .sorted_by_key(|descriptor| (descriptor.category, descriptor.symbol))
            .chunk_by(|descriptor| descriptor.category);
        for (category, group) in &grouped {
            writeln!(output)?;
            writeln!(output, "{}", category)?;
            for descriptor in group {
                writeln!(output, "  {:<16} {}", descriptor.symbol, descriptor.about())?;
            }
        }
        Ok(ConsoleResult::Okay)
    }
}

impl Command for Help {
    fn descriptor(&self) -> &'static Descriptor {
        &DESCRIPTOR
    }

    fn invoke(&self, output: &mut dyn Write, error: &mut dyn Write) -> io::Result<ConsoleResult> {
        let Some(word) = &self.argument.command else {
            return self.list(output);
        };
        match commands::find(word) {
            Some(descriptor) => {
                let mut definition = descriptor.definition().bin_name(format!("bx {}", descriptor.symbol));
                write!(output, "{}", definition.render_help())?;
                Ok(ConsoleResult::Okay)
            }
            None => {
                writeln!(error, "The word '{}' is not a bx command.", word)?;
                Ok(ConsoleResult::Failure)
            }
        }
    }
}
