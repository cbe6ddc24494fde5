//! `input-validate`: check a transaction input signature

use std::io::{self, BufRead, Write};

use clap::Args;
use tracing::{debug, instrument};

use crate::application::ApplicationResult;
use crate::command::{read_argument, unbound, Command, ConsoleResult, Descriptor};
use crate::commands::source::TransactionSource;
use crate::config::Settings;
use crate::domain::{signature, Base16, DomainError, EcPublic, HashType, Script};

pub static DESCRIPTOR: Descriptor = Descriptor::new("input-validate", "TRANSACTION");

pub const INDEX_OUT_OF_RANGE: &str = "The index does not refer to an existing input.";
pub const VALID_SIGNATURE: &str = "The signature is valid.";
pub const INVALID_SIGNATURE: &str = "The signature is not valid.";

#[derive(Args, Debug, Clone)]
pub struct Arguments {
    /// The Base16 transaction, or the path of a file containing it
    #[arg(value_name = "TRANSACTION")]
    pub transaction: TransactionSource,

    /// The Base16 EC public key to verify against
    #[arg(value_name = "EC_PUBLIC_KEY")]
    pub ec_public_key: EcPublic,

    /// The Base16 script code used to compute the signature hash
    #[arg(value_name = "SCRIPT_CODE")]
    pub script_code: Script,

    /// The Base16 signature to validate. If not specified the signature is read from STDIN
    #[arg(value_name = "SIGNATURE")]
    pub signature: Option<Base16>,
}

#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct Options {
    /// The ordinal position of the input within the transaction
    #[arg(short, long, default_value_t = 0)]
    pub index: usize,

    /// How the transaction was signed: 'all', 'none', 'single' or 'anyone_can_pay',
    /// optionally combined as e.g. 'all_anyone_can_pay'
    #[arg(short, long, default_value = "single")]
    pub sighash: HashType,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            index: 0,
            sighash: HashType::Single,
        }
    }
}

#[derive(Args, Debug, Clone)]
pub struct InputValidate {
    #[command(flatten)]
    pub argument: Arguments,

    #[command(flatten)]
    pub option: Options,
}

impl Command for InputValidate {
    fn descriptor(&self) -> &'static Descriptor {
        &DESCRIPTOR
    }

    fn load_fallbacks(&mut self, input: &mut dyn BufRead, _settings: &Settings) -> ApplicationResult<()> {
        self.argument.transaction.load()?;
        if self.argument.signature.is_none() {
            debug!("reading SIGNATURE from input");
            self.argument.signature = Some(read_argument(input, "SIGNATURE")?);
        }
        Ok(())
    }

    #[instrument(skip_all, fields(command = DESCRIPTOR.symbol, index = self.option.index))]
    fn invoke(&self, output: &mut dyn Write, error: &mut dyn Write) -> io::Result<ConsoleResult> {
        let Some(tx) = self.argument.transaction.transaction() else {
            return unbound(error, "TRANSACTION");
        };
        let Some(signature) = &self.argument.signature else {
            return unbound(error, "SIGNATURE");
        };

        let result = signature::validate_input(
            tx,
            self.option.index,
            &self.argument.script_code,
            &self.argument.ec_public_key,
            signature.as_bytes(),
            self.option.sighash,
        );

        match result {
            Ok(true) => {
                writeln!(output, "{}", VALID_SIGNATURE)?;
                Ok(ConsoleResult::Okay)
            }
            Ok(false) => {
                writeln!(output, "{}", INVALID_SIGNATURE)?;
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
