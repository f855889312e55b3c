//! Expense validation and normalization.
//!
//! Turns the three raw strings a form collects into a typed [`Candidate`]
//! plus one verdict per field. Every field is evaluated on each call, so a
//! caller can flag all invalid inputs at once.
use core::fmt;

use chrono::NaiveDate;

use crate::{Expense, FieldError};

/// Format of a date typed by the user.
const INPUT_DATE_FORMAT: &str = "%Y-%m-%d";
const INPUT_DATE_LEN: usize = "YYYY-MM-DD".len();

/// Identifies one of the form fields.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Field {
    Amount,
    Description,
    Date,
}

impl Field {
    pub const ALL: [Field; 3] = [Field::Amount, Field::Description, Field::Date];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Amount => "amount",
            Self::Description => "description",
            Self::Date => "date",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raw per-field input, exactly as entered.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RawExpense<'a> {
    pub amount: &'a str,
    pub description: &'a str,
    pub date: &'a str,
}

/// Typed values parsed from a [`RawExpense`].
///
/// `amount` is set whenever the text is numeric, including zero and negative
/// values; `date` whenever the text is a calendar date. The description is
/// kept unchanged.
#[derive(Clone, Debug, PartialEq)]
pub struct Candidate {
    pub amount: Option<f64>,
    pub description: String,
    pub date: Option<NaiveDate>,
}

/// Per-field verdicts for one submission attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldValidity {
    pub amount: bool,
    pub description: bool,
    pub date: bool,
}

impl FieldValidity {
    /// Aggregate validity: `true` only when every field is valid.
    #[must_use]
    pub const fn all(self) -> bool {
        self.amount && self.description && self.date
    }

    #[must_use]
    pub const fn get(self, field: Field) -> bool {
        match field {
            Field::Amount => self.amount,
            Field::Description => self.description,
            Field::Date => self.date,
        }
    }

    /// Fields whose verdict is `false`, in form order.
    pub fn invalid_fields(self) -> Vec<Field> {
        Field::ALL
            .into_iter()
            .filter(|field| !self.get(*field))
            .collect()
    }
}

/// Outcome of [`validate`].
#[derive(Clone, Debug, PartialEq)]
pub struct Validation {
    pub candidate: Candidate,
    pub fields: FieldValidity,
}

impl Validation {
    #[must_use]
    pub const fn all_valid(&self) -> bool {
        self.fields.all()
    }

    /// The candidate as an unsaved [`Expense`], if every field is valid.
    pub fn into_expense(self) -> Option<Expense> {
        if !self.all_valid() {
            return None;
        }
        let Candidate {
            amount,
            description,
            date,
        } = self.candidate;
        Some(Expense::new(amount?, description, date?))
    }
}

/// Converts amount text to a number.
///
/// Surrounding whitespace is ignored. Non-finite values (`inf`, `NaN`) are
/// rejected. The sign is not checked here.
pub fn parse_amount(text: &str) -> Result<f64, FieldError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(FieldError::Empty);
    }
    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(FieldError::InvalidAmount(trimmed.to_string())),
    }
}

/// Converts date text (`YYYY-MM-DD`) to a calendar date.
///
/// Partial dates (`2023-05`), impossible days (`2023-02-30`) and years
/// outside `0000..=9999` (`-0001-01-01`, `+10000-01-01`) are rejected: the
/// store format only carries four-digit years.
pub fn parse_date(text: &str) -> Result<NaiveDate, FieldError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(FieldError::Empty);
    }
    let invalid = || FieldError::InvalidDate(trimmed.to_string());
    if trimmed.len() != INPUT_DATE_LEN
        || !trimmed.as_bytes()[..4].iter().all(u8::is_ascii_digit)
    {
        return Err(invalid());
    }
    NaiveDate::parse_from_str(trimmed, INPUT_DATE_FORMAT).map_err(|_| invalid())
}

/// Validates raw expense input.
///
/// - amount: numeric and strictly greater than zero;
/// - description: non-empty once trimmed;
/// - date: a complete calendar date.
pub fn validate(raw: &RawExpense<'_>) -> Validation {
    let amount = parse_amount(raw.amount).ok();
    let date = parse_date(raw.date).ok();

    let fields = FieldValidity {
        amount: amount.is_some_and(|value| value > 0.0),
        description: !raw.description.trim().is_empty(),
        date: date.is_some(),
    };

    Validation {
        candidate: Candidate {
            amount,
            description: raw.description.to_string(),
            date,
        },
        fields,
    }
}
