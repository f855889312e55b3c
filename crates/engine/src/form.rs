//! Caller-owned form state.
//!
//! An [`ExpenseForm`] holds one [`FieldState`] per input. It is created empty
//! (create flow) or seeded from a stored [`Expense`] (edit flow), updated on
//! every keystroke, and re-flagged on each submit attempt.
use crate::{Expense, Field, FieldValidity, RawExpense, format_date, validate};

/// Shown whenever any field is flagged. Fields carry no message of their own.
pub const INVALID_INPUT_MESSAGE: &str = "Invalid input values - Please check your entered data";

/// Raw value of one field and whether the last submit accepted it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldState {
    pub value: String,
    pub is_valid: bool,
}

impl FieldState {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            is_valid: true,
        }
    }
}

impl Default for FieldState {
    fn default() -> Self {
        Self::new(String::new())
    }
}

/// Result of [`ExpenseForm::submit`].
#[derive(Clone, Debug, PartialEq)]
pub enum Submission {
    /// Every field passed; the form has been reset.
    Ready(Expense),
    /// At least one field failed; values are kept and flags updated.
    Rejected(FieldValidity),
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ExpenseForm {
    pub amount: FieldState,
    pub description: FieldState,
    pub date: FieldState,
}

impl ExpenseForm {
    /// Empty form for a new expense.
    pub fn new() -> Self {
        Self::default()
    }

    /// Form seeded from a stored expense.
    pub fn with_defaults(expense: &Expense) -> Self {
        Self {
            amount: FieldState::new(expense.amount.to_string()),
            description: FieldState::new(expense.description.clone()),
            date: FieldState::new(format_date(expense.date)),
        }
    }

    pub fn field(&self, field: Field) -> &FieldState {
        match field {
            Field::Amount => &self.amount,
            Field::Description => &self.description,
            Field::Date => &self.date,
        }
    }

    fn field_mut(&mut self, field: Field) -> &mut FieldState {
        match field {
            Field::Amount => &mut self.amount,
            Field::Description => &mut self.description,
            Field::Date => &mut self.date,
        }
    }

    /// Replaces a field's value; the field is considered valid again until
    /// the next submit.
    pub fn input(&mut self, field: Field, value: impl Into<String>) {
        *self.field_mut(field) = FieldState::new(value);
    }

    pub fn raw(&self) -> RawExpense<'_> {
        RawExpense {
            amount: &self.amount.value,
            description: &self.description.value,
            date: &self.date.value,
        }
    }

    /// `true` when any field is currently flagged.
    pub fn is_invalid(&self) -> bool {
        Field::ALL
            .into_iter()
            .any(|field| !self.field(field).is_valid)
    }

    /// Validates the current values.
    ///
    /// On success the form is reset and the expense returned. On failure only
    /// the validity flags change.
    pub fn submit(&mut self) -> Submission {
        let validation = validate(&self.raw());
        let fields = validation.fields;

        match validation.into_expense() {
            Some(expense) => {
                self.reset();
                Submission::Ready(expense)
            }
            None => {
                for field in Field::ALL {
                    self.field_mut(field).is_valid = fields.get(field);
                }
                Submission::Rejected(fields)
            }
        }
    }

    /// Resets every field to an empty, valid value.
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}
