use chrono::NaiveDate;

use engine::{
    ExpenseForm, Field, FieldState, FieldValidity, RawExpense, Submission, validate,
};

fn raw<'a>(amount: &'a str, description: &'a str, date: &'a str) -> RawExpense<'a> {
    RawExpense {
        amount,
        description,
        date,
    }
}

#[test]
fn non_positive_or_non_numeric_amounts_are_invalid() {
    for amount in ["", "   ", "0", "0.00", "-5", "-0.01", "abc", "12abc", "1,5"] {
        let validation = validate(&raw(amount, "Lunch", "2023-05-01"));
        assert!(!validation.fields.amount, "amount {amount:?} should be invalid");
        assert!(validation.fields.description);
        assert!(validation.fields.date);
        assert!(!validation.all_valid());
    }
}

#[test]
fn positive_amounts_are_valid_and_parsed() {
    for (text, value) in [("12.50", 12.5), ("1", 1.0), ("0.01", 0.01), (" 7 ", 7.0)] {
        let validation = validate(&raw(text, "Lunch", "2023-05-01"));
        assert!(validation.fields.amount, "amount {text:?} should be valid");
        assert_eq!(validation.candidate.amount, Some(value));
    }
}

#[test]
fn blank_descriptions_are_invalid() {
    for description in ["", "   ", "\t\n"] {
        let validation = validate(&raw("1", description, "2023-05-01"));
        assert!(!validation.fields.description);
    }
    assert!(validate(&raw("1", " x ", "2023-05-01")).fields.description);
}

#[test]
fn dates_must_be_real_calendar_dates() {
    let valid = validate(&raw("1", "x", "2023-05-01"));
    assert!(valid.fields.date);
    assert_eq!(valid.candidate.date, NaiveDate::from_ymd_opt(2023, 5, 1));

    for date in ["", "not-a-date", "2023-05", "2023-13-01", "2023-02-29", "bad"] {
        let validation = validate(&raw("1", "x", date));
        assert!(!validation.fields.date, "date {date:?} should be invalid");
        assert_eq!(validation.candidate.date, None);
    }
    assert!(validate(&raw("1", "x", "2024-02-29")).fields.date);
}

#[test]
fn dates_outside_four_digit_years_are_invalid() {
    for date in ["-0001-01-01", "+10000-01-01", "10000-01-01"] {
        let validation = validate(&raw("1", "x", date));
        assert!(!validation.fields.date, "date {date:?} should be invalid");
        assert!(validation.into_expense().is_none());
    }
    assert!(validate(&raw("1", "x", "9999-12-31")).fields.date);
    assert!(validate(&raw("1", "x", "0001-01-01")).fields.date);
}

#[test]
fn all_valid_is_the_conjunction_of_field_verdicts() {
    let amounts = ["5", "0"];
    let descriptions = ["Taxi", " "];
    let dates = ["2023-02-02", "bad"];
    for amount in amounts {
        for description in descriptions {
            for date in dates {
                let validation = validate(&raw(amount, description, date));
                let FieldValidity {
                    amount: a,
                    description: d,
                    date: t,
                } = validation.fields;
                assert_eq!(validation.all_valid(), a && d && t);
            }
        }
    }
}

#[test]
fn coffee_scenario_is_accepted() {
    let validation = validate(&raw("19.99", "Coffee", "2023-01-15"));
    assert!(validation.all_valid());

    let expense = validation.into_expense().unwrap();
    assert_eq!(expense.id, None);
    assert_eq!(expense.amount, 19.99);
    assert_eq!(expense.description, "Coffee");
    assert_eq!(expense.date, NaiveDate::from_ymd_opt(2023, 1, 15).unwrap());
}

#[test]
fn everything_wrong_scenario_flags_all_fields_and_keeps_values() {
    let mut form = ExpenseForm::new();
    form.input(Field::Amount, "0");
    form.input(Field::Description, "   ");
    form.input(Field::Date, "bad");

    let submission = form.submit();
    assert_eq!(
        submission,
        Submission::Rejected(FieldValidity {
            amount: false,
            description: false,
            date: false,
        })
    );
    assert_eq!(
        form.amount,
        FieldState {
            value: "0".to_string(),
            is_valid: false
        }
    );
    assert_eq!(
        form.description,
        FieldState {
            value: "   ".to_string(),
            is_valid: false
        }
    );
    assert_eq!(
        form.date,
        FieldState {
            value: "bad".to_string(),
            is_valid: false
        }
    );
}

#[test]
fn negative_amount_scenario_flags_only_amount() {
    let validation = validate(&raw("-5", "Taxi", "2023-02-02"));
    assert!(!validation.all_valid());
    assert_eq!(validation.fields.invalid_fields(), vec![Field::Amount]);
}
