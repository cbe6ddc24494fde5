use std::fmt;
use std::str::FromStr;

use crate::domain::DomainError;

/// Signature hash type token.
///
/// `anyone_can_pay` alone is the bare 0x80 flag, which the legacy algorithm
/// treats like `all` with the anyone-can-pay modifier.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum HashType {
    All,
    None,
    #[default]
    Single,
    AnyoneCanPay,
    AllAnyoneCanPay,
    NoneAnyoneCanPay,
    SingleAnyoneCanPay,
}

impl HashType {
    const ANYONE_CAN_PAY: u32 = 0x80;

    /// Consensus value committed to by the signature.
    pub fn to_u32(self) -> u32 {
        match self {
            HashType::All => 0x01,
            HashType::None => 0x02,
            HashType::Single => 0x03,
            HashType::AnyoneCanPay => Self::ANYONE_CAN_PAY,
            HashType::AllAnyoneCanPay => 0x01 | Self::ANYONE_CAN_PAY,
            HashType::NoneAnyoneCanPay => 0x02 | Self::ANYONE_CAN_PAY,
            HashType::SingleAnyoneCanPay => 0x03 | Self::ANYONE_CAN_PAY,
        }
    }

    pub fn token(self) -> &'static str {
        match self {
            HashType::All => "all",
            HashType::None => "none",
            HashType::Single => "single",
            HashType::AnyoneCanPay => "anyone_can_pay",
            HashType::AllAnyoneCanPay => "all_anyone_can_pay",
            HashType::NoneAnyoneCanPay => "none_anyone_can_pay",
            HashType::SingleAnyoneCanPay => "single_anyone_can_pay",
        }
    }
}

impl FromStr for HashType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(HashType::All),
            "none" => Ok(HashType::None),
            "single" => Ok(HashType::Single),
            "anyone_can_pay" => Ok(HashType::AnyoneCanPay),
            "all_anyone_can_pay" => Ok(HashType::AllAnyoneCanPay),
            "none_anyone_can_pay" => Ok(HashType::NoneAnyoneCanPay),
            "single_anyone_can_pay" => Ok(HashType::SingleAnyoneCanPay),
            _ => Err(DomainError::InvalidHashType(s.to_string())),
        }
    }
}

impl fmt::Display for HashType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}
