//! Domain layer: typed primitives and the library calls behind each command
//!
//! This layer is independent of external concerns (no CLI, no config loading,
//! no stream handling). All curve and transaction work is delegated to `bitcoin`.

pub mod ec;
pub mod error;
pub mod primitives;
pub mod signature;

pub use error::{DomainError, DomainResult};
pub use primitives::{Base16, EcPrivate, EcPublic, HashType, Network, Script, Transaction, Wif};
