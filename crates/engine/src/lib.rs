//! Expense model, input validation and form state.
//!
//! The crate is pure: no I/O, no logging. Persistence is handled by
//! `store_client`, presentation by the `outlay` binary.

pub use error::FieldError;
pub use expense::Expense;
pub use form::{ExpenseForm, FieldState, INVALID_INPUT_MESSAGE, Submission};
pub use summary::{RECENT_DAYS, date_minus_days, format_date, recent, sort_newest_first, total};
pub use validation::{
    Candidate, Field, FieldValidity, RawExpense, Validation, parse_amount, parse_date, validate,
};

mod error;
mod expense;
mod form;
mod summary;
mod validation;
