//! `ec-multiply`: the EC product POINT * SECRET

use std::io::{self, Write};

use clap::Args;
use tracing::{debug, instrument};

use crate::command::{Command, ConsoleResult, Descriptor};
use crate::domain::{ec, EcPrivate, EcPublic};

pub static DESCRIPTOR: Descriptor = Descriptor::new("ec-multiply", "MATH");

pub const OUT_OF_RANGE: &str = "Product exceeds valid range.";

#[derive(Args, Debug, Clone)]
pub struct Arguments {
    /// The Base16 EC point to multiply
    #[arg(value_name = "POINT")]
    pub point: EcPublic,

    /// The Base16 EC secret to multiply
    #[arg(value_name = "SECRET")]
    pub secret: EcPrivate,
}

#[derive(Args, Debug, Clone)]
pub struct EcMultiply {
    #[command(flatten)]
    pub argument: Arguments,
}

impl Command for EcMultiply {
    fn descriptor(&self) -> &'static Descriptor {
        &DESCRIPTOR
    }

    #[instrument(skip_all, fields(command = DESCRIPTOR.symbol))]
    fn invoke(&self, output: &mut dyn Write, error: &mut dyn Write) -> io::Result<ConsoleResult> {
        match ec::multiply(&self.argument.point, &self.argument.secret.scalar()) {
            Ok(product) => {
                writeln!(output, "{}", product)?;
                Ok(ConsoleResult::Okay)
            }
            Err(e) => {
                debug!("{}", e);
                writeln!(error, "{}", OUT_OF_RANGE)?;
                Ok(ConsoleResult::Failure)
            }
        }
    }
}
