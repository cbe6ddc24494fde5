use std::fmt;
use std::str::FromStr;

use bitcoin::PrivateKey;

use crate::domain::primitives::{EcPrivate, Network};
use crate::domain::DomainError;

/// Wallet import format: base58check secret with network and compression flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Wif(PrivateKey);

impl Wif {
    pub fn new(secret: &EcPrivate, network: Network, compressed: bool) -> Self {
        let key = if compressed {
            PrivateKey::new(*secret.secret(), network.kind())
        } else {
            PrivateKey::new_uncompressed(*secret.secret(), network.kind())
        };
        Self(key)
    }

    pub fn secret(&self) -> EcPrivate {
        EcPrivate::new(self.0.inner)
    }

    pub fn is_compressed(&self) -> bool {
        self.0.compressed
    }

    pub fn network(&self) -> Network {
        Network::from(self.0.network)
    }
}

impl FromStr for Wif {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PrivateKey::from_wif(s.trim())
            .map(Self)
            .map_err(|e| DomainError::InvalidWif(e.to_string()))
    }
}

impl fmt::Display for Wif {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.to_wif())
    }
}
