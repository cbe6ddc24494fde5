//! `input-sign`: create an endorsement for a transaction input

use std::io::{self, BufRead, Write};

use clap::Args;
use tracing::{debug, instrument};

use crate::application::ApplicationResult;
use crate::command::{unbound, Command, ConsoleResult, Descriptor};
use crate::commands::input_validate::INDEX_OUT_OF_RANGE;
use crate::commands::source::TransactionSource;
use crate::config::Settings;
use crate::domain::{signature, Base16, DomainError, EcPrivate, HashType, Script};

pub static DESCRIPTOR: Descriptor = Descriptor::new("input-sign", "TRANSACTION");

#[derive(Args, Debug, Clone)]
pub struct Arguments {
    /// The Base16 EC secret to sign with
    #[arg(value_name = "EC_PRIVATE_KEY")]
    pub ec_private_key: EcPrivate,

    /// The Base16 transaction, or the path of a file containing it
    #[arg(value_name = "TRANSACTION")]
    pub transaction: TransactionSource,

    /// The Base16 script of the output being spent
    #[arg(value_name = "PREVOUT_SCRIPT")]
    pub prevout_script: Script,
}

#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct Options {
    /// The ordinal position of the input within the transaction
    #[arg(short, long, default_value_t = 0)]
    pub index: usize,

    /// How to sign: 'all', 'none', 'single' or 'anyone_can_pay',
    /// optionally combined as e.g. 'all_anyone_can_pay'
    #[arg(short, long, default_value = "all")]
    pub sighash: HashType,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            index: 0,
            sighash: HashType::All,
        }
    }
}

#[derive(Args, Debug, Clone)]
pub struct InputSign {
    #[command(flatten)]
    pub argument: Arguments,

    #[command(flatten)]
    pub option: Options,
}

impl Command for InputSign {
    fn descriptor(&self) -> &'static Descriptor {
        &DESCRIPTOR
    }

    fn load_fallbacks(&mut self, _input: &mut dyn BufRead, _settings: &Settings) -> ApplicationResult<()> {
        self.argument.transaction.load()
    }

    #[instrument(skip_all, fields(command = DESCRIPTOR.symbol, index = self.option.index))]
    fn invoke(&self, output: &mut dyn Write, error: &mut dyn Write) -> io::Result<ConsoleResult> {
        let Some(tx) = self.argument.transaction.transaction() else {
            return unbound(error, "TRANSACTION");
        };

        let result = signature::sign_input(
            tx,
            self.option.index,
            &self.argument.prevout_script,
            &self.argument.ec_private_key,
            self.option.sighash,
        );

        match result {
            Ok(endorsement) => {
                writeln!(output, "{}", Base16::new(endorsement))?;
                Ok(ConsoleResult::Okay)
            }
            Err(DomainError::IndexOutOfRange { index, count }) => {
                debug!(index, count, "input index out of range");
                writeln!(error, "{}", INDEX_OUT_OF_RANGE)?;
                Ok(ConsoleResult::Failure)
            }
            Err(e) => {
                writeln!(error, "{}", e)?;
                Ok(ConsoleResult::Failure)
            }
        }
    }
}
