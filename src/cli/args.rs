//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand, ValueHint};

use crate::command::Command;
use crate::commands::{
    EcMultiply, EcToPublic, EcToWif, Help, InputSign, InputValidate, ShowSettings, WifToEc,
};

/// Bitcoin explorer: EC math, key encoding and signature validation
#[derive(Parser, Debug)]
#[command(name = "bx")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
#[command(disable_help_subcommand = true, arg_required_else_help = true)]
pub struct Cli {
    /// Settings file (default: $XDG_CONFIG_HOME/bx/bx.toml if present)
    #[arg(short, long, global = true, env = "BX_CONFIG", value_hint = ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Calculate the EC product (POINT * SECRET)
    EcMultiply(EcMultiply),

    /// Derive the EC public key of an EC private key
    EcToPublic(EcToPublic),

    /// Convert an EC private key to a WIF private key
    EcToWif(EcToWif),

    /// List commands by category, or show the usage of one command
    Help(Help),

    /// Create an endorsement for a transaction input
    InputSign(InputSign),

    /// Validate a transaction input endorsement
    InputValidate(InputValidate),

    /// Show the effective settings
    Settings(ShowSettings),

    /// Convert a WIF private key to an EC private key
    WifToEc(WifToEc),
}

impl Commands {
    /// The bound command behind this subcommand.
    pub fn into_command(self) -> Box<dyn Command> {
        match self {
            Commands::EcMultiply(command) => Box::new(command),
            Commands::EcToPublic(command) => Box::new(command),
            Commands::EcToWif(command) => Box::new(command),
            Commands::Help(command) => Box::new(command),
            Commands::InputSign(command) => Box::new(command),
            Commands::InputValidate(command) => Box::new(command),
            Commands::Settings(command) => Box::new(command),
            Commands::WifToEc(command) => Box::new(command),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn given_verbose_flags_when_parsing_then_counts_occurrences() {
        let cli = Cli::try_parse_from(["bx", "-vv", "help"]).unwrap();
        assert_eq!(cli.verbose, 2);
        assert!(matches!(cli.command, Commands::Help(_)));
    }

    #[test]
    fn given_global_config_after_subcommand_when_parsing_then_binds() {
        let cli = Cli::try_parse_from(["bx", "settings", "--config", "/tmp/bx.toml"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/bx.toml")));
    }
}
