//! The module contains the `Expense` type, the single record the application
//! tracks.
use core::fmt;

use chrono::NaiveDate;

/// A single financial record.
///
/// `id` is assigned by the remote store on creation and is `None` for a
/// record that has not been stored yet.
#[derive(Clone, Debug, PartialEq)]
pub struct Expense {
    pub id: Option<String>,
    pub amount: f64,
    pub description: String,
    pub date: NaiveDate,
}

impl Expense {
    /// Creates a record that has not been stored yet.
    pub fn new(amount: f64, description: impl Into<String>, date: NaiveDate) -> Self {
        Self {
            id: None,
            amount,
            description: description.into(),
            date,
        }
    }

    /// Returns the same record keyed by `id`.
    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }
}

impl fmt::Display for Expense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {:>10.2} {}",
            crate::format_date(self.date),
            self.amount,
            self.description
        )
    }
}
