//! `wif-to-ec`: decode a WIF private key to its EC secret

use std::io::{self, BufRead, Write};

use clap::Args;
use tracing::instrument;

use crate::application::ApplicationResult;
use crate::command::{read_argument, unbound, Command, ConsoleResult, Descriptor};
use crate::config::Settings;
use crate::domain::Wif;

pub static DESCRIPTOR: Descriptor = Descriptor::new("wif-to-ec", "WALLET");

#[derive(Args, Debug, Clone)]
pub struct Arguments {
    /// The WIF private key to convert. If not specified the WIF is read from STDIN
    #[arg(value_name = "WIF")]
    pub wif: Option<Wif>,
}

#[derive(Args, Debug, Clone)]
pub struct WifToEc {
    #[command(flatten)]
    pub argument: Arguments,
}

impl Command for WifToEc {
    fn descriptor(&self) -> &'static Descriptor {
        &DESCRIPTOR
    }

    fn load_fallbacks(&mut self, input: &mut dyn BufRead, _settings: &Settings) -> ApplicationResult<()> {
        if self.argument.wif.is_none() {
            self.argument.wif = Some(read_argument(input, "WIF")?);
        }
        Ok(())
    }

    #[instrument(skip_all, fields(command = DESCRIPTOR.symbol))]
    fn invoke(&self, output: &mut dyn Write, error: &mut dyn Write) -> io::Result<ConsoleResult> {
        let Some(wif) = &self.argument.wif else {
            return unbound(error, "WIF");
        };
        writeln!(output, "{}", wif.secret())?;
        Ok(ConsoleResult::Okay)
    }
}
