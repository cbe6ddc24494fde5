//! Command implementations and the static registry

pub mod ec_multiply;
pub mod ec_to_public;
pub mod ec_to_wif;
pub mod help;
pub mod input_sign;
pub mod input_validate;
pub mod settings;
pub mod source;
pub mod wif_to_ec;

pub use ec_multiply::EcMultiply;
pub use ec_to_public::EcToPublic;
pub use ec_to_wif::EcToWif;
pub use help::Help;
pub use input_sign::InputSign;
pub use input_validate::InputValidate;
pub use settings::ShowSettings;
pub use wif_to_ec::WifToEc;

use crate::command::Descriptor;

/// Every command known to bx, by symbol.
pub static ALL: [&Descriptor; 8] = [
    &ec_multiply::DESCRIPTOR,
    &ec_to_public::DESCRIPTOR,
    &ec_to_wif::DESCRIPTOR,
    &help::DESCRIPTOR,
    &input_sign::DESCRIPTOR,
    &input_validate::DESCRIPTOR,
    &settings::DESCRIPTOR,
    &wif_to_ec::DESCRIPTOR,
];

pub fn all() -> &'static [&'static Descriptor] {
    &ALL
}

/// Look up a command by its symbolic name.
pub fn find(symbol: &str) -> Option<&'static Descriptor> {
    ALL.iter().copied().find(|descriptor| descriptor.symbol == symbol)
}
