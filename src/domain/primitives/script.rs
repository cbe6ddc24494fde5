use std::fmt;
use std::str::FromStr;

use bitcoin::ScriptBuf;

use crate::domain::primitives::Base16;
use crate::domain::DomainError;

/// Serialized script as base16.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Script(ScriptBuf);

impl Script {
    pub fn new(script: ScriptBuf) -> Self {
        Self(script)
    }

    pub fn as_script(&self) -> &bitcoin::Script {
        self.0.as_script()
    }
}

impl FromStr for Script {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(ScriptBuf::from_bytes(Base16::decode(s)?)))
    }
}

impl fmt::Display for Script {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&hex::encode(self.0.as_bytes()))
    }
}

impl From<ScriptBuf> for Script {
    fn from(script: ScriptBuf) -> Self {
        Self(script)
    }
}
