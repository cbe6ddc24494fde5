//! Application layer: error context shared by commands, config and dispatch

pub mod error;
pub mod error_ext;

pub use error::{ApplicationError, ApplicationResult};
pub use error_ext::IoResultExt;
