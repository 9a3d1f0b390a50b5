//! Driver error model.

use mochila_core::InventoryError;
use thiserror::Error;

pub type CliResult<T> = Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    /// Input could not be parsed as the expected number.
    #[error("invalid number: '{input}'")]
    InvalidNumber { input: String },

    /// The input stream closed while a value was expected.
    #[error("end of input")]
    EndOfInput,

    #[error(transparent)]
    Inventory(#[from] InventoryError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl CliError {
    /// Errors the player can recover from by picking another option.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::InvalidNumber { .. } | Self::Inventory(_))
    }
}
