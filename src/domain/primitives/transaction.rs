use std::fmt;
use std::str::FromStr;

use bitcoin::consensus::encode;

use crate::domain::primitives::Base16;
use crate::domain::DomainError;

/// Consensus-serialized transaction as base16.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transaction(bitcoin::Transaction);

impl Transaction {
    pub fn new(tx: bitcoin::Transaction) -> Self {
        Self(tx)
    }

    pub fn tx(&self) -> &bitcoin::Transaction {
        &self.0
    }

    pub fn input_count(&self) -> usize {
        self.0.input.len()
    }
}

impl FromStr for Transaction {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = Base16::decode(s)?;
        encode::deserialize::<bitcoin::Transaction>(&bytes)
            .map(Self)
            .map_err(|e| DomainError::InvalidTransaction(e.to_string()))
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&encode::serialize_hex(&self.0))
    }
}

impl From<bitcoin::Transaction> for Transaction {
    fn from(tx: bitcoin::Transaction) -> Self {
        Self(tx)
    }
}
