//! Views derived from a list of stored expenses.
use chrono::{Days, NaiveDate};

use crate::Expense;

/// Default window, in days, of the recent expenses view.
pub const RECENT_DAYS: u32 = 7;

/// Formats a date the way the form expects it back (`YYYY-MM-DD`).
pub fn format_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

pub fn date_minus_days(date: NaiveDate, days: u32) -> NaiveDate {
    date.checked_sub_days(Days::new(days.into()))
        .unwrap_or(NaiveDate::MIN)
}

/// Expenses dated after `today - days` and not after `today`.
pub fn recent(expenses: &[Expense], today: NaiveDate, days: u32) -> Vec<&Expense> {
    let since = date_minus_days(today, days);
    expenses
        .iter()
        .filter(|expense| expense.date > since && expense.date <= today)
        .collect()
}

pub fn total<'a>(expenses: impl IntoIterator<Item = &'a Expense>) -> f64 {
    expenses.into_iter().map(|expense| expense.amount).sum()
}

/// Orders by date descending; same-day records by id descending.
pub fn sort_newest_first(expenses: &mut [Expense]) {
    expenses.sort_by(|a, b| b.date.cmp(&a.date).then_with(|| b.id.cmp(&a.id)));
}
