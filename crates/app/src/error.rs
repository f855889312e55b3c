use core::fmt;

use engine::{Field, INVALID_INPUT_MESSAGE};
use store_client::ClientError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("config error: {0}")]
    Config(#[from] config::ConfigError),
    #[error("store error: {0}")]
    Store(#[from] ClientError),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("{0}")]
    InvalidInput(FlaggedFields),
    #[error("no expense with id {0:?}")]
    UnknownExpense(String),
}

/// Fields rejected by a submit, with the raw value the user entered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlaggedFields(pub Vec<(Field, String)>);

impl fmt::Display for FlaggedFields {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(INVALID_INPUT_MESSAGE)?;
        for (field, value) in &self.0 {
            write!(f, "\n  {field}: {value:?}")?;
        }
        Ok(())
    }
}
