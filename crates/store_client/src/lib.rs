//! HTTP client for the remote expense store.
//!
//! The store exposes the collection at `<base>/expenses.json` and each record
//! at `<base>/expenses/<id>.json`. Records travel as
//! [`ExpenseRecord`](api_types::expense::ExpenseRecord); this crate maps them
//! to and from [`engine::Expense`].

pub use client::StoreClient;
pub use error::ClientError;

mod client;
mod error;
