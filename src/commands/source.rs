//! Transaction arguments given inline or by file path

use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use tracing::debug;

use crate::application::{ApplicationResult, IoResultExt};
use crate::domain::{DomainError, Transaction};

/// A TRANSACTION argument: base16 text, or the path of a file holding it.
///
/// Paths are only recognized when the text is not a valid transaction and
/// names an existing file; they are read by [`TransactionSource::load`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransactionSource {
    Inline(Transaction),
    File(PathBuf),
}

impl TransactionSource {
    /// Replace a file reference with the parsed file content.
    pub fn load(&mut self) -> ApplicationResult<()> {
        if let TransactionSource::File(path) = self {
            debug!("reading transaction from {}", path.display());
            let bytes = fs::read(&path).with_path_context("read transaction", path)?;
            let text = String::from_utf8(bytes).map_err(|e| {
                DomainError::InvalidTransaction(format!("{}: {}", path.display(), e))
            })?;
            *self = TransactionSource::Inline(text.parse()?);
        }
        Ok(())
    }

    /// The transaction, once inline or loaded.
    pub fn transaction(&self) -> Option<&Transaction> {
        match self {
            TransactionSource::Inline(tx) => Some(tx),
            TransactionSource::File(_) => None,
        }
    }
}

impl FromStr for TransactionSource {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.parse::<Transaction>() {
            Ok(tx) => Ok(TransactionSource::Inline(tx)),
            Err(e) => {
                let path = Path::new(s);
                if path.is_file() {
                    Ok(TransactionSource::File(path.to_path_buf()))
                } else {
                    Err(e)
                }
            }
        }
    }
}
