//! `ec-to-public`: derive the EC public key of a secret

use std::io::{self, BufRead, Write};

use clap::Args;
use tracing::instrument;

use crate::application::ApplicationResult;
use crate::command::{read_argument, unbound, Command, ConsoleResult, Descriptor};
use crate::config::Settings;
use crate::domain::{ec, EcPrivate};

pub static DESCRIPTOR: Descriptor = Descriptor::new("ec-to-public", "MATH");

#[derive(Args, Debug, Clone)]
pub struct Arguments {
    /// The Base16 EC secret. If not specified the secret is read from STDIN
    #[arg(value_name = "SECRET")]
    pub secret: Option<EcPrivate>,
}

#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct Options {
    /// Emit the uncompressed (65 byte) public key
    #[arg(short, long, conflicts_with = "compressed")]
    pub uncompressed: bool,

    /// Use the compressed form even when [wallet] settings say otherwise
    #[arg(long)]
    pub compressed: bool,
}

#[derive(Args, Debug, Clone)]
pub struct EcToPublic {
    #[command(flatten)]
    pub argument: Arguments,

    #[command(flatten)]
    pub option: Options,
}

impl Command for EcToPublic {
    fn descriptor(&self) -> &'static Descriptor {
        &DESCRIPTOR
    }

    fn load_fallbacks(&mut self, input: &mut dyn BufRead, settings: &Settings) -> ApplicationResult<()> {
        if self.argument.secret.is_none() {
            self.argument.secret = Some(read_argument(input, "SECRET")?);
        }
        if !self.option.compressed {
            self.option.uncompressed |= !settings.wallet.compressed;
        }
        Ok(())
    }

    #[instrument(skip_all, fields(command = DESCRIPTOR.symbol))]
    fn invoke(&self, output: &mut dyn Write, error: &mut dyn Write) -> io::Result<ConsoleResult> {
        let Some(secret) = &self.argument.secret else {
            return unbound(error, "SECRET");
        };
        writeln!(output, "{}", ec::to_public(secret, !self.option.uncompressed))?;
        Ok(ConsoleResult::Okay)
    }
}
