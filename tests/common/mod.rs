//! Shared helpers for driving bx end to end with in-memory streams.
#![allow(dead_code)]

use bitcoin::{absolute, transaction, Amount, OutPoint, ScriptBuf, Sequence, TxIn, TxOut, Witness};

use bx::command::ConsoleResult;
use bx::domain::{ec, EcPrivate, EcPublic, Script, Transaction};
use bx::util::testing;

pub const SECRET: &str = "0c28fca386c7a227600b2fe50b7cae11ec86d3bf1fbe471be89827e19d72aa1d";
pub const UNCOMPRESSED_WIF: &str = "5HueCGU8rMjxEXxiPuD5BDku4MkFqeZyd4dZ1jvhTVqvbTLvyTJ";
pub const G_COMPRESSED: &str = "0279be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798";
pub const G_UNCOMPRESSED: &str = "0479be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798483ada7726a3c4655da4fbfc0e1108a8fd17b448a68554199c47d08ffb10d4b8";

/// Outcome of one invocation: result plus captured stdout and stderr.
#[derive(Debug)]
pub struct Run {
    pub result: ConsoleResult,
    pub stdout: String,
    pub stderr: String,
}

/// Run `bx <args>` with `stdin` as the input channel.
pub fn execute(args: &[&str], stdin: &str) -> Run {
    testing::init_test_setup();
    let mut input = stdin.as_bytes();
    let mut output = Vec::new();
    let mut error = Vec::new();
    let argv = std::iter::once("bx").chain(args.iter().copied());
    let result = bx::cli::run(argv, &mut input, &mut output, &mut error);
    Run {
        result,
        stdout: String::from_utf8(output).expect("utf8 stdout"),
        stderr: String::from_utf8(error).expect("utf8 stderr"),
    }
}

pub fn secret(hex: &str) -> EcPrivate {
    hex.parse().expect("valid secret")
}

pub fn public_key(hex: &str) -> EcPublic {
    ec::to_public(&secret(hex), true)
}

/// Pay-to-pubkey-hash script for the compressed key of `hex`, as base16.
pub fn p2pkh_script(hex: &str) -> String {
    Script::new(ScriptBuf::new_p2pkh(&public_key(hex).key().pubkey_hash())).to_string()
}

/// An unsigned transaction with `inputs` identical inputs and one output, as base16.
pub fn spending_tx(inputs: usize) -> String {
    let input = TxIn {
        previous_output: OutPoint::null(),
        script_sig: ScriptBuf::new(),
        sequence: Sequence::MAX,
        witness: Witness::new(),
    };
    Transaction::new(bitcoin::Transaction {
        version: transaction::Version::ONE,
        lock_time: absolute::LockTime::ZERO,
        input: vec![input; inputs],
        output: vec![TxOut {
            value: Amount::from_sat(50_000),
            script_pubkey: ScriptBuf::new(),
        }],
    })
    .to_string()
}
