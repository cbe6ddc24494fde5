use std::fmt;
use std::str::FromStr;

use bitcoin::NetworkKind;
use serde::{Deserialize, Serialize};

use crate::domain::DomainError;

/// Key encoding network: selects WIF version bytes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Network {
    #[default]
    Mainnet,
    Testnet,
}

impl Network {
    pub fn kind(self) -> NetworkKind {
        match self {
            Network::Mainnet => NetworkKind::Main,
            Network::Testnet => NetworkKind::Test,
        }
    }
}

impl From<NetworkKind> for Network {
    fn from(kind: NetworkKind) -> Self {
        if kind.is_mainnet() {
            Network::Mainnet
        } else {
            Network::Testnet
        }
    }
}

impl FromStr for Network {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mainnet" => Ok(Network::Mainnet),
            "testnet" => Ok(Network::Testnet),
            other => Err(DomainError::InvalidNetwork(other.to_string())),
        }
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Network::Mainnet => f.write_str("mainnet"),
            Network::Testnet => f.write_str("testnet"),
        }
    }
}
