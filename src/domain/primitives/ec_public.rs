use std::fmt;
use std::str::FromStr;

use bitcoin::secp256k1;

use crate::domain::primitives::Base16;
use crate::domain::{DomainError, DomainResult};

/// EC point (public key), compressed or uncompressed, as base16.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EcPublic(bitcoin::PublicKey);

impl EcPublic {
    pub fn new(key: bitcoin::PublicKey) -> Self {
        Self(key)
    }

    /// The library key, including its compression flag.
    pub fn key(&self) -> &bitcoin::PublicKey {
        &self.0
    }

    /// The bare curve point.
    pub fn point(&self) -> &secp256k1::PublicKey {
        &self.0.inner
    }

    pub fn is_compressed(&self) -> bool {
        self.0.compressed
    }

    fn from_bytes(bytes: &[u8]) -> DomainResult<Self> {
        bitcoin::PublicKey::from_slice(bytes)
            .map(Self)
            .map_err(|e| DomainError::InvalidPublicKey(e.to_string()))
    }
}

impl FromStr for EcPublic {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_bytes(&Base16::decode(s)?)
    }
}

impl fmt::Display for EcPublic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl From<bitcoin::PublicKey> for EcPublic {
    fn from(key: bitcoin::PublicKey) -> Self {
        Self(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const GENERATOR_COMPRESSED: &str =
        "0279be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798";
    const GENERATOR_UNCOMPRESSED: &str = "0479be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798483ada7726a3c4655da4fbfc0e1108a8fd17b448a68554199c47d08ffb10d4b8";

    #[test]
    fn given_compressed_point_when_parsing_then_round_trips_text() {
        let point: EcPublic = GENERATOR_COMPRESSED.parse().expect("valid point");
        assert!(point.is_compressed());
        assert_eq!(point.to_string(), GENERATOR_COMPRESSED);
    }

    #[test]
    fn given_uncompressed_point_when_parsing_then_keeps_uncompressed_form() {
        let point: EcPublic = GENERATOR_UNCOMPRESSED.parse().expect("valid point");
        assert!(!point.is_compressed());
        assert_eq!(point.to_string(), GENERATOR_UNCOMPRESSED);
    }

    #[test]
    fn given_point_not_on_curve_when_parsing_then_fails() {
        let bogus = format!("02{}", "00".repeat(32));
        let err = bogus.parse::<EcPublic>().unwrap_err();
        assert!(matches!(err, DomainError::InvalidPublicKey(_)));
    }

    #[test]
    fn given_non_hex_when_parsing_then_reports_base16_error() {
        let err = "zz".parse::<EcPublic>().unwrap_err();
        assert!(matches!(err, DomainError::InvalidBase16 { .. }));
    }
}
