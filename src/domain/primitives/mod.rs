//! Command-line primitives: text encodings of protocol library values
//!
//! Every primitive parses with `FromStr` (so clap can bind it directly) and
//! prints its canonical encoding with `Display`.

mod base16;
mod ec_private;
mod ec_public;
mod hashtype;
mod network;
mod script;
mod transaction;
mod wif;

pub use base16::Base16;
pub use ec_private::EcPrivate;
pub use ec_public::EcPublic;
pub use hashtype::HashType;
pub use network::Network;
pub use script::Script;
pub use transaction::Transaction;
pub use wif::Wif;
