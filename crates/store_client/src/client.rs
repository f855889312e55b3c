use api_types::expense::{ErrorResponse, ExpenseCollection, ExpenseCreated, ExpenseRecord};
use engine::Expense;
use reqwest::{Method, Response, Url};
use serde::Serialize;
use serde_json::Value;

use crate::ClientError;

const COLLECTION: &str = "expenses";

#[derive(Debug, Clone)]
pub struct StoreClient {
    base_url: Url,
    auth: Option<String>,
    http: reqwest::Client,
}

impl StoreClient {
    pub fn new(base_url: &str) -> Result<Self, ClientError> {
        let base_url =
            Url::parse(base_url).map_err(|err| ClientError::InvalidUrl(err.to_string()))?;
        if base_url.cannot_be_a_base() {
            return Err(ClientError::InvalidUrl(format!(
                "{base_url} cannot hold a path"
            )));
        }
        Ok(Self {
            base_url,
            auth: None,
            http: reqwest::Client::new(),
        })
    }

    /// Sends `token` as the `auth` query parameter on every request.
    #[must_use]
    pub fn with_auth(mut self, token: impl Into<String>) -> Self {
        self.auth = Some(token.into());
        self
    }

    fn endpoint(&self, segments: &[&str]) -> Result<Url, ClientError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ClientError::InvalidUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(segments);
        if let Some(token) = &self.auth {
            url.query_pairs_mut().append_pair("auth", token);
        }
        Ok(url)
    }

    fn collection_url(&self) -> Result<Url, ClientError> {
        self.endpoint(&[format!("{COLLECTION}.json").as_str()])
    }

    fn record_url(&self, id: &str) -> Result<Url, ClientError> {
        if id.trim().is_empty() {
            return Err(ClientError::InvalidId(id.to_string()));
        }
        self.endpoint(&[COLLECTION, format!("{id}.json").as_str()])
    }

    async fn send<B: Serialize + ?Sized>(
        &self,
        method: Method,
        url: Url,
        body: Option<&B>,
    ) -> Result<Response, ClientError> {
        tracing::debug!(%method, path = url.path(), "store request");

        let mut req = self.http.request(method, url);
        if let Some(body) = body {
            req = req.json(body);
        }
        let res = req.send().await?;

        let status = res.status();
        if status.is_success() {
            return Ok(res);
        }

        let message = res
            .json::<ErrorResponse>()
            .await
            .map(|err| err.error)
            .unwrap_or_else(|_| "unknown error".to_string());
        tracing::warn!(%status, %message, "store rejected request");
        Err(ClientError::from_status(status, message))
    }

    /// Appends `expense` to the collection and returns the generated id.
    pub async fn store_expense(&self, expense: &Expense) -> Result<String, ClientError> {
        let res = self
            .send(Method::POST, self.collection_url()?, Some(&record(expense)))
            .await?;
        let created = res.json::<ExpenseCreated>().await?;
        tracing::info!(id = %created.name, "expense stored");
        Ok(created.name)
    }

    /// Returns every stored expense in the store's key order.
    ///
    /// Records that do not decode (missing fields, unreadable dates) are
    /// logged and skipped so one bad entry does not hide the rest.
    pub async fn fetch_expenses(&self) -> Result<Vec<Expense>, ClientError> {
        let res = self
            .send::<()>(Method::GET, self.collection_url()?, None)
            .await?;
        let collection = res.json::<ExpenseCollection<Value>>().await?;

        let expenses: Vec<Expense> = collection
            .unwrap_or_default()
            .into_iter()
            .filter_map(|(id, raw)| match serde_json::from_value::<ExpenseRecord>(raw) {
                Ok(record) => Some(expense(id, record)),
                Err(err) => {
                    tracing::warn!(%id, error = %err, "skipping malformed expense");
                    None
                }
            })
            .collect();
        tracing::debug!(count = expenses.len(), "expenses fetched");
        Ok(expenses)
    }

    /// Replaces the record stored under `id`.
    pub async fn update_expense(&self, id: &str, expense: &Expense) -> Result<(), ClientError> {
        self.send(Method::PUT, self.record_url(id)?, Some(&record(expense)))
            .await?;
        tracing::info!(%id, "expense updated");
        Ok(())
    }

    pub async fn delete_expense(&self, id: &str) -> Result<(), ClientError> {
        self.send::<()>(Method::DELETE, self.record_url(id)?, None)
            .await?;
        tracing::info!(%id, "expense deleted");
        Ok(())
    }
}

fn record(expense: &Expense) -> ExpenseRecord {
    ExpenseRecord {
        amount: expense.amount,
        description: expense.description.clone(),
        date: expense.date,
    }
}

fn expense(id: String, record: ExpenseRecord) -> Expense {
    Expense {
        id: Some(id),
        amount: record.amount,
        description: record.description,
        date: record.date,
    }
}
