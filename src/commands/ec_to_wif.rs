//! `ec-to-wif`: encode an EC secret as a WIF private key

use std::io::{self, BufRead, Write};

use clap::Args;
use tracing::instrument;

use crate::application::ApplicationResult;
use crate::command::{read_argument, unbound, Command, ConsoleResult, Descriptor};
use crate::config::Settings;
use crate::domain::{EcPrivate, Network, Wif};

pub static DESCRIPTOR: Descriptor = Descriptor::new("ec-to-wif", "WALLET");

#[derive(Args, Debug, Clone)]
pub struct Arguments {
    /// The Base16 EC secret to convert. If not specified the secret is read from STDIN
    #[arg(value_name = "SECRET")]
    pub secret: Option<EcPrivate>,
}

#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct Options {
    /// Encode for use with an uncompressed public key
    #[arg(short, long, conflicts_with = "compressed")]
    pub uncompressed: bool,

    /// Use the compressed form even when [wallet] settings say otherwise
    #[arg(long)]
    pub compressed: bool,

    /// Version network: 'mainnet' or 'testnet' (default from [wallet] settings)
    #[arg(short, long)]
    pub network: Option<Network>,
}

#[derive(Args, Debug, Clone)]
pub struct EcToWif {
    #[command(flatten)]
    pub argument: Arguments,

    #[command(flatten)]
    pub option: Options,
}

impl Command for EcToWif {
    fn descriptor(&self) -> &'static Descriptor {
        &DESCRIPTOR
    }

    fn load_fallbacks(&mut self, input: &mut dyn BufRead, settings: &Settings) -> ApplicationResult<()> {
        if self.argument.secret.is_none() {
            self.argument.secret = Some(read_argument(input, "SECRET")?);
        }
        self.option.network.get_or_insert(settings.wallet.network);
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
        let network = self.option.network.unwrap_or_default();
        let wif = Wif::new(secret, network, !self.option.uncompressed);
        writeln!(output, "{}", wif)?;
        Ok(ConsoleResult::Okay)
    }
}
