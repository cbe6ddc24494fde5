//! End-to-end tests for the host shell: help, version, parse failures and settings.

mod common;

use std::fs;

use tempfile::TempDir;

use bx::command::ConsoleResult;

use common::{execute, SECRET};

#[test]
fn given_help_when_listing_then_groups_commands_by_sorted_category() {
    let run = execute(&["help"], "");
    assert_eq!(run.result, ConsoleResult::Okay);

    let categories: Vec<&str> = run
        .stdout
        .lines()
        .filter(|line| !line.is_empty() && line.chars().all(|c| c.is_ascii_uppercase()))
        .collect();
    assert_eq!(categories, vec!["MATH", "SYSTEM", "TRANSACTION", "WALLET"]);

    let math = run.stdout.find("MATH").unwrap();
    let multiply = run.stdout.find("  ec-multiply").unwrap();
    let system = run.stdout.find("SYSTEM").unwrap();
    assert!(math < multiply && multiply < system);
    assert!(run.stdout.contains("Calculate the EC product"));
}

#[test]
fn given_command_word_when_asking_help_then_prints_its_usage() {
    let run = execute(&["help", "ec-multiply"], "");
    assert_eq!(run.result, ConsoleResult::Okay);
    assert!(run.stdout.contains("<POINT>"));
    assert!(run.stdout.contains("<SECRET>"));
}

#[test]
fn given_unknown_word_when_asking_help_then_failure() {
    let run = execute(&["help", "seed"], "");
    assert_eq!(run.result, ConsoleResult::Failure);
    assert_eq!(run.stderr.trim(), "The word 'seed' is not a bx command.");
}

#[test]
fn given_help_flag_when_parsing_then_okay_on_stdout() {
    let run = execute(&["input-validate", "--help"], "");
    assert_eq!(run.result, ConsoleResult::Okay);
    assert!(run.stdout.contains("--sighash"));
    assert!(run.stderr.is_empty());
}

#[test]
fn given_version_flag_when_parsing_then_prints_version() {
    let run = execute(&["--version"], "");
    assert_eq!(run.result, ConsoleResult::Okay);
    assert!(run.stdout.contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn given_no_command_when_parsing_then_not_okay() {
    let run = execute(&[], "");
    assert_ne!(run.result, ConsoleResult::Okay);
}

#[test]
fn given_unknown_command_when_parsing_then_invalid() {
    let run = execute(&["seed"], "");
    assert_eq!(run.result, ConsoleResult::Invalid);
    assert!(run.stdout.is_empty());
}

#[test]
fn given_extra_argument_when_parsing_then_invalid() {
    let run = execute(&["wif-to-ec", "a", "b"], "");
    assert_eq!(run.result, ConsoleResult::Invalid);
}

#[test]
fn given_config_file_when_showing_settings_then_reflects_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("bx.toml");
    fs::write(&path, "[wallet]\nnetwork = \"testnet\"\ncompressed = false\n").unwrap();
    let path = path.to_string_lossy().into_owned();

    let run = execute(&["settings", "--config", &path], "");
    assert_eq!(run.result, ConsoleResult::Okay, "stderr: {}", run.stderr);
    assert!(run.stdout.contains("network = \"testnet\""));
    assert!(run.stdout.contains("compressed = false"));
}

#[test]
fn given_config_file_when_encoding_wif_then_uses_wallet_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("bx.toml");
    fs::write(&path, "[wallet]\nnetwork = \"testnet\"\ncompressed = false\n").unwrap();
    let path = path.to_string_lossy().into_owned();

    let run = execute(&["-c", &path, "ec-to-wif", SECRET], "");
    assert_eq!(run.result, ConsoleResult::Okay, "stderr: {}", run.stderr);
    // uncompressed testnet keys start with '9'
    assert!(run.stdout.starts_with('9'), "got {}", run.stdout);

    let explicit = execute(&["-c", &path, "ec-to-wif", "-n", "mainnet", SECRET], "");
    assert!(explicit.stdout.starts_with('5'), "got {}", explicit.stdout);
}

#[test]
fn given_missing_config_file_when_running_then_invalid() {
    let run = execute(&["--config", "/nonexistent/bx.toml", "settings"], "");
    assert_eq!(run.result, ConsoleResult::Invalid);
    assert!(run.stderr.contains("config file not found"));
}

#[test]
fn given_malformed_config_file_when_running_then_invalid() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("bx.toml");
    fs::write(&path, "[wallet]\nnetwork = \"signet\"\n").unwrap();
    let path = path.to_string_lossy().into_owned();

    let run = execute(&["--config", &path, "settings"], "");
    assert_eq!(run.result, ConsoleResult::Invalid);
    assert!(run.stdout.is_empty());
}

#[test]
fn given_uncompressed_wallet_setting_when_forcing_compressed_then_command_line_wins() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("bx.toml");
    fs::write(&path, "[wallet]\ncompressed = false\n").unwrap();
    let path = path.to_string_lossy().into_owned();
    let one = "0000000000000000000000000000000000000000000000000000000000000001";

    let from_settings = execute(&["-c", &path, "ec-to-public", one], "");
    assert!(from_settings.stdout.starts_with("04"), "got {}", from_settings.stdout);

    let forced = execute(&["-c", &path, "ec-to-public", "--compressed", one], "");
    assert_eq!(forced.result, ConsoleResult::Okay, "stderr: {}", forced.stderr);
    assert!(forced.stdout.starts_with("02"), "got {}", forced.stdout);

    let wif = execute(&["-c", &path, "ec-to-wif", "--compressed", SECRET], "");
    assert!(wif.stdout.starts_with('K') || wif.stdout.starts_with('L'), "got {}", wif.stdout);
}

#[test]
fn given_both_compression_flags_when_parsing_then_invalid() {
    let run = execute(&["ec-to-public", "-u", "--compressed", SECRET], "");
    assert_eq!(run.result, ConsoleResult::Invalid);
    assert!(run.stdout.is_empty());
}
