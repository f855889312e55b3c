//! Wire types shared with the remote expense store.
//!
//! The store is a JSON document tree addressed by path: the collection lives at
//! `/expenses.json` and each record at `/expenses/<id>.json`.

pub mod expense {
    use std::collections::BTreeMap;

    use chrono::NaiveDate;
    use serde::{Deserialize, Serialize};

    /// Body of a single expense as held by the store.
    ///
    /// The record carries no id: the store keys it by the generated name
    /// returned on creation.
    #[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
    pub struct ExpenseRecord {
        pub amount: f64,
        pub description: String,
        #[serde(with = "crate::store_date")]
        pub date: NaiveDate,
    }

    /// Response body for a create (`POST /expenses.json`).
    #[derive(Debug, Serialize, Deserialize)]
    pub struct ExpenseCreated {
        /// Generated key of the new record.
        pub name: String,
    }

    /// Response body for a list (`GET /expenses.json`).
    ///
    /// The store answers `null` when the collection is empty. Readers that
    /// must survive malformed entries decode with `R = serde_json::Value` and
    /// convert each record on its own.
    pub type ExpenseCollection<R = ExpenseRecord> = Option<BTreeMap<String, R>>;

    /// Error body returned by the store on non-success statuses.
    #[derive(Debug, Serialize, Deserialize)]
    pub struct ErrorResponse {
        pub error: String,
    }
}

/// Serde adapter for record dates.
///
/// Dates are written as a UTC timestamp at midnight
/// (`2023-01-15T00:00:00.000Z`). Reads accept that form or a bare
/// `YYYY-MM-DD`.
pub mod store_date {
    use chrono::{DateTime, NaiveDate, Utc};
    use serde::{Deserialize, Deserializer, Serializer, de};

    const DAY_FORMAT: &str = "%Y-%m-%d";

    pub fn serialize<S>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&format!("{}T00:00:00.000Z", date.format(DAY_FORMAT)))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        parse(&raw).ok_or_else(|| de::Error::custom(format!("invalid date: {raw}")))
    }

    /// Parses a stored date, returning `None` for anything else.
    pub fn parse(raw: &str) -> Option<NaiveDate> {
        if let Ok(timestamp) = DateTime::parse_from_rfc3339(raw) {
            return Some(timestamp.with_timezone(&Utc).date_naive());
        }
        NaiveDate::parse_from_str(raw, DAY_FORMAT).ok()
    }
}
