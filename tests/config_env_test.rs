//! Environment variable overrides for `Settings`.
//!
//! Kept to a single test: the process environment is shared by every test in a binary.

use std::env;
use std::fs;

use tempfile::TempDir;

use bx::config::Settings;
use bx::domain::Network;

#[test]
fn given_env_overrides_when_loading_then_env_wins_over_file_and_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("bx.toml");
    fs::write(&path, "[wallet]\nnetwork = \"mainnet\"\n").unwrap();

    env::set_var("BX_WALLET__NETWORK", "testnet");
    env::set_var("BX_WALLET__COMPRESSED", "false");

    let from_file = Settings::load(Some(path.as_path())).expect("load with file");
    let without_file = Settings::load(None).expect("load without file");

    env::remove_var("BX_WALLET__NETWORK");
    env::remove_var("BX_WALLET__COMPRESSED");

    assert_eq!(from_file.wallet.network, Network::Testnet);
    assert!(!from_file.wallet.compressed);
    assert_eq!(without_file.wallet.network, Network::Testnet);
    assert!(!without_file.wallet.compressed);

    let restored = Settings::load(Some(path.as_path())).expect("load after reset");
    assert_eq!(restored.wallet.network, Network::Mainnet);
    assert!(restored.wallet.compressed);
}
