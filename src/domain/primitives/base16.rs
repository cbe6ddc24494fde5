use std::fmt;
use std::str::FromStr;

use crate::domain::{DomainError, DomainResult};

/// Raw bytes written as hexadecimal text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Base16(Vec<u8>);

impl Base16 {
    pub fn new(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Decode surrounding-whitespace-tolerant hex, reporting the offending text.
    pub(crate) fn decode(text: &str) -> DomainResult<Vec<u8>> {
        hex::decode(text.trim()).map_err(|e| DomainError::InvalidBase16 {
            value: text.trim().to_string(),
            reason: e.to_string(),
        })
    }
}

impl FromStr for Base16 {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::decode(s).map(Self)
    }
}

impl fmt::Display for Base16 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&hex::encode(&self.0))
    }
}

impl From<Vec<u8>> for Base16 {
    fn from(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }
}
