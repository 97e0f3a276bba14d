//! The module contains the errors the engine can return.
//!
//! The errors are:
//!
//! - [`InvalidAmount`] returned when an amount cannot be parsed or summed.
//! - [`Io`] returned when the data file cannot be read or written.
//! - [`Codec`] returned when the data file is not a valid expense list.
//!
//! A missing data file is **not** an error, see [`Expenses::load`].
//!
//!  [`InvalidAmount`]: EngineError::InvalidAmount
//!  [`Io`]: EngineError::Io
//!  [`Codec`]: EngineError::Codec
//!  [`Expenses::load`]: crate::Expenses::load
use thiserror::Error;

/// Engine custom errors.
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error("Corrupted data file: {0}")]
    Codec(#[from] bincode::Error),
}

impl PartialEq for EngineError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::InvalidAmount(a), Self::InvalidAmount(b)) => a == b,
            (Self::Io(a), Self::Io(b)) => a.kind() == b.kind(),
            (Self::Codec(a), Self::Codec(b)) => a.to_string() == b.to_string(),
            _ => false,
        }
    }
}
