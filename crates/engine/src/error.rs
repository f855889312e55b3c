//! The module contains the errors returned by the explicit field parsers.
//!
//! Validation itself never fails: [`validate`] reports invalid fields as
//! `false` verdicts. The errors below only describe why a single parse did not
//! produce a value.
//!
//!  [`validate`]: crate::validate
use thiserror::Error;

/// Field parsing errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FieldError {
    #[error("empty input")]
    Empty,
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),
    #[error("Invalid date: {0}")]
    InvalidDate(String),
}
