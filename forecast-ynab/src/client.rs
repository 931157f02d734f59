//! Typed client for the YNAB v1 REST API.

use forecast_core::{ForecastRecord, HistoryRecord, ScheduledEntry};
use reqwest::StatusCode;
use thiserror::Error;

use crate::wire::{
    PostScheduledTransactionWrapper, SaveScheduledTransaction, ScheduledTransactionsResponse,
    TransactionsResponse,
};

const DEFAULT_BASE_URL: &str = "https://api.ynab.com/v1";

#[derive(Debug, Error)]
pub enum ApiError {
    /// HTTP 429; the caller decides whether to back off or abandon.
    #[error("rate limited by the ledger API")]
    RateLimited,
    #[error("ledger API returned {status}: {body}")]
    Status { status: u16, body: String },
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
}

impl ApiError {
    pub fn is_rate_limit(&self) -> bool {
        matches!(self, ApiError::RateLimited)
    }
}

/// Target of a uniform delete. History and scheduled records live behind
/// different endpoints but delete the same way.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordRef {
    Transaction(String),
    Scheduled(String),
}

pub struct YnabClient {
    http: reqwest::Client,
    base_url: String,
    token: String,
}

impl YnabClient {
    pub fn new(token: impl Into<String>) -> Self {
        Self::with_base_url(token, DEFAULT_BASE_URL)
    }

    pub fn with_base_url(token: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
            token: token.into(),
        }
    }

    /// All scheduled transactions for a budget, mapped to core entries.
    /// Includes the deleted flag so callers can filter.
    pub async fn scheduled_transactions(
        &self,
        budget_id: &str,
    ) -> Result<Vec<ScheduledEntry>, ApiError> {
        let url = format!(
            "{}/budgets/{}/scheduled_transactions",
            self.base_url, budget_id
        );
        let resp = self.http.get(&url).bearer_auth(&self.token).send().await?;
        let resp = ok_response(resp).await?;
        let body: ScheduledTransactionsResponse = resp.json().await?;
        Ok(body
            .data
            .scheduled_transactions
            .into_iter()
            .map(Into::into)
            .collect())
    }

    /// Historical register transactions for a budget.
    pub async fn transactions(&self, budget_id: &str) -> Result<Vec<HistoryRecord>, ApiError> {
        let url = format!("{}/budgets/{}/transactions", self.base_url, budget_id);
        let resp = self.http.get(&url).bearer_auth(&self.token).send().await?;
        let resp = ok_response(resp).await?;
        let body: TransactionsResponse = resp.json().await?;
        Ok(body.data.transactions.into_iter().map(Into::into).collect())
    }

    /// Materialize one forecast as a one-time scheduled transaction.
    pub async fn create_scheduled(
        &self,
        budget_id: &str,
        record: &ForecastRecord,
    ) -> Result<(), ApiError> {
        let url = format!(
            "{}/budgets/{}/scheduled_transactions",
            self.base_url, budget_id
        );
        let wrapper = PostScheduledTransactionWrapper {
            scheduled_transaction: SaveScheduledTransaction::from(record),
        };
        let resp = self
            .http
            .post(&url)
            .bearer_auth(&self.token)
            .json(&wrapper)
            .send()
            .await?;
        ok_response(resp).await?;
        Ok(())
    }

    /// Uniform delete across register and scheduled records.
    pub async fn delete_record(
        &self,
        budget_id: &str,
        record: &RecordRef,
    ) -> Result<(), ApiError> {
        let url = match record {
            RecordRef::Transaction(id) => {
                format!("{}/budgets/{}/transactions/{}", self.base_url, budget_id, id)
            }
            RecordRef::Scheduled(id) => format!(
                "{}/budgets/{}/scheduled_transactions/{}",
                self.base_url, budget_id, id
            ),
        };
        let resp = self
            .http
            .delete(&url)
            .bearer_auth(&self.token)
            .send()
            .await?;
        ok_response(resp).await?;
        Ok(())
    }
}

async fn ok_response(resp: reqwest::Response) -> Result<reqwest::Response, ApiError> {
    let status = resp.status();
    if status == StatusCode::TOO_MANY_REQUESTS {
        return Err(ApiError::RateLimited);
    }
    if !status.is_success() {
        let body = resp.text().await.unwrap_or_default();
        return Err(ApiError::Status {
            status: status.as_u16(),
            body,
        });
    }
    Ok(resp)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rate_limit_is_distinguishable() {
        assert!(ApiError::RateLimited.is_rate_limit());
        let other = ApiError::Status {
            status: 500,
            body: "internal".to_string(),
        };
        assert!(!other.is_rate_limit());
    }

    #[test]
    fn test_record_ref_carries_the_service_id() {
        let r = RecordRef::Scheduled("sched-9".to_string());
        assert_eq!(r, RecordRef::Scheduled("sched-9".to_string()));
        assert_ne!(r, RecordRef::Transaction("sched-9".to_string()));
    }
}
