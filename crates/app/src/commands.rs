use std::io::Write;

use chrono::NaiveDate;
use clap::Args;
use engine::{Expense, ExpenseForm, Field, Submission, recent, sort_newest_first, total};
use store_client::StoreClient;

use crate::error::{AppError, FlaggedFields, Result};

/// Raw field input. Omitted flags leave the field as it is in the form.
#[derive(Args, Debug, Default, Clone)]
pub struct ExpenseArgs {
    /// Amount, e.g. 12.50.
    #[arg(long, allow_hyphen_values = true)]
    pub amount: Option<String>,
    #[arg(long)]
    pub description: Option<String>,
    /// Date as YYYY-MM-DD.
    #[arg(long)]
    pub date: Option<String>,
}

impl ExpenseArgs {
    /// Types every provided value into `form`.
    pub fn apply(&self, form: &mut ExpenseForm) {
        let values = [
            (Field::Amount, &self.amount),
            (Field::Description, &self.description),
            (Field::Date, &self.date),
        ];
        for (field, value) in values {
            if let Some(value) = value {
                form.input(field, value.clone());
            }
        }
    }
}

fn submit(form: &mut ExpenseForm) -> Result<Expense> {
    match form.submit() {
        Submission::Ready(expense) => Ok(expense),
        Submission::Rejected(fields) => {
            let flagged = fields
                .invalid_fields()
                .into_iter()
                .map(|field| (field, form.field(field).value.clone()))
                .collect();
            tracing::debug!(?fields, "form rejected");
            Err(AppError::InvalidInput(FlaggedFields(flagged)))
        }
    }
}

pub async fn add(client: &StoreClient, input: &ExpenseArgs, out: &mut impl Write) -> Result<()> {
    let mut form = ExpenseForm::new();
    input.apply(&mut form);
    let expense = submit(&mut form)?;

    let id = client.store_expense(&expense).await?;
    writeln!(out, "{id}")?;
    Ok(())
}

pub async fn list(
    client: &StoreClient,
    recent_days: Option<u32>,
    today: NaiveDate,
    out: &mut impl Write,
) -> Result<()> {
    let mut expenses = client.fetch_expenses().await?;
    sort_newest_first(&mut expenses);

    let shown = match recent_days {
        Some(days) => recent(&expenses, today, days),
        None => expenses.iter().collect(),
    };
    render(&shown, out)
}

pub async fn edit(
    client: &StoreClient,
    id: &str,
    input: &ExpenseArgs,
    out: &mut impl Write,
) -> Result<()> {
    let expenses = client.fetch_expenses().await?;
    let existing = expenses
        .iter()
        .find(|expense| expense.id.as_deref() == Some(id))
        .ok_or_else(|| AppError::UnknownExpense(id.to_string()))?;

    let mut form = ExpenseForm::with_defaults(existing);
    input.apply(&mut form);
    let expense = submit(&mut form)?;

    client.update_expense(id, &expense).await?;
    writeln!(out, "updated {id}")?;
    Ok(())
}

pub async fn delete(client: &StoreClient, id: &str, out: &mut impl Write) -> Result<()> {
    client.delete_expense(id).await?;
    writeln!(out, "deleted {id}")?;
    Ok(())
}

fn render(expenses: &[&Expense], out: &mut impl Write) -> Result<()> {
    if expenses.is_empty() {
        writeln!(out, "No expenses.")?;
        return Ok(());
    }
    for expense in expenses {
        writeln!(out, "{expense}  [{}]", expense.id.as_deref().unwrap_or("-"))?;
    }
    writeln!(out, "Total: {:.2}", total(expenses.iter().copied()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn args(amount: Option<&str>, description: Option<&str>, date: Option<&str>) -> ExpenseArgs {
        ExpenseArgs {
            amount: amount.map(str::to_string),
            description: description.map(str::to_string),
            date: date.map(str::to_string),
        }
    }

    #[test]
    fn omitted_flags_keep_seeded_values() {
        let stored = Expense::new(5.0, "Taxi", day(2023, 2, 2)).with_id("-N1");
        let mut form = ExpenseForm::with_defaults(&stored);
        args(Some("7.5"), None, None).apply(&mut form);

        let expense = submit(&mut form).unwrap();
        assert_eq!(expense, Expense::new(7.5, "Taxi", day(2023, 2, 2)));
    }

    #[test]
    fn rejected_submit_reports_raw_values() {
        let mut form = ExpenseForm::new();
        args(Some("-5"), Some("Taxi"), None).apply(&mut form);

        match submit(&mut form).unwrap_err() {
            AppError::InvalidInput(flagged) => {
                assert_eq!(
                    flagged.0,
                    vec![
                        (Field::Amount, "-5".to_string()),
                        (Field::Date, String::new()),
                    ]
                );
                let message = flagged.to_string();
                assert!(message.starts_with(engine::INVALID_INPUT_MESSAGE));
                assert!(message.contains("amount: \"-5\""));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn add_with_invalid_input_never_reaches_store() {
        // Nothing listens on the discard port; any request would fail with a
        // transport error instead of the validation error.
        let client = StoreClient::new("http://127.0.0.1:9").unwrap();
        let mut out = Vec::new();

        let err = add(&client, &args(Some("0"), Some("  "), Some("bad")), &mut out)
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::InvalidInput(ref flagged) if flagged.0.len() == 3));
        assert!(out.is_empty());
    }

    #[test]
    fn render_lists_expenses_and_total() {
        let coffee = Expense::new(19.99, "Coffee", day(2023, 1, 15)).with_id("-Na");
        let taxi = Expense::new(5.0, "Taxi", day(2023, 1, 14)).with_id("-Nb");
        let mut out = Vec::new();

        render(&[&coffee, &taxi], &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("2023-01-15"));
        assert!(lines[0].ends_with("Coffee  [-Na]"));
        assert_eq!(lines[2], "Total: 24.99");
    }

    #[test]
    fn render_empty_list() {
        let mut out = Vec::new();
        render(&[], &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "No expenses.\n");
    }
}
