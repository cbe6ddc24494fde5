use std::fmt;
use std::str::FromStr;

use bitcoin::secp256k1::{Scalar, SecretKey};

use crate::domain::primitives::Base16;
use crate::domain::DomainError;

/// EC secret (private key) as 32 bytes of base16.
///
/// Zero and values at or above the curve order are rejected while parsing,
/// so every bound secret is a usable scalar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EcPrivate(SecretKey);

impl EcPrivate {
    pub fn new(secret: SecretKey) -> Self {
        Self(secret)
    }

    pub fn secret(&self) -> &SecretKey {
        &self.0
    }

    pub fn scalar(&self) -> Scalar {
        Scalar::from(self.0)
    }
}

impl FromStr for EcPrivate {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = Base16::decode(s)?;
        if bytes.len() != 32 {
            return Err(DomainError::InvalidPrivateKey(format!(
                "expected 32 bytes, got {}",
                bytes.len()
            )));
        }
        SecretKey::from_slice(&bytes)
            .map(Self)
            .map_err(|e| DomainError::InvalidPrivateKey(e.to_string()))
    }
}

impl fmt::Display for EcPrivate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&hex::encode(self.0.secret_bytes()))
    }
}

impl From<SecretKey> for EcPrivate {
    fn from(secret: SecretKey) -> Self {
        Self(secret)
    }
}
