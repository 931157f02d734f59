//! Wire-format payloads for the YNAB v1 API and their adapters onto the
//! core value types. Nothing transport-specific escapes this crate.

use chrono::NaiveDate;
use forecast_core::{ForecastRecord, Frequency, HistoryRecord, ScheduledEntry, SplitLine};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct ScheduledTransactionsResponse {
    pub data: ScheduledTransactionsData,
}

#[derive(Debug, Deserialize)]
pub struct ScheduledTransactionsData {
    pub scheduled_transactions: Vec<ScheduledTransactionDetail>,
}

#[derive(Debug, Deserialize)]
pub struct ScheduledTransactionDetail {
    pub id: String,
    pub account_id: String,
    #[serde(default)]
    pub category_id: Option<String>,
    #[serde(default)]
    pub payee_name: Option<String>,
    #[serde(default)]
    pub memo: Option<String>,
    pub amount: i64,
    pub frequency: Frequency,
    pub date_next: NaiveDate,
    #[serde(default)]
    pub flag_color: Option<String>,
    #[serde(default)]
    pub deleted: bool,
    #[serde(default)]
    pub subtransactions: Vec<ScheduledSubTransaction>,
}

#[derive(Debug, Deserialize)]
pub struct ScheduledSubTransaction {
    pub amount: i64,
    #[serde(default)]
    pub category_id: Option<String>,
    #[serde(default)]
    pub memo: Option<String>,
}

impl From<ScheduledTransactionDetail> for ScheduledEntry {
    fn from(wire: ScheduledTransactionDetail) -> Self {
        ScheduledEntry {
            id: wire.id,
            account_id: wire.account_id,
            category_id: wire.category_id,
            payee_name: wire.payee_name.unwrap_or_default(),
            memo: wire.memo,
            amount: wire.amount,
            frequency: wire.frequency,
            next_date: wire.date_next,
            flag_color: wire.flag_color,
            deleted: wire.deleted,
            splits: wire
                .subtransactions
                .into_iter()
                .map(|s| SplitLine {
                    amount: s.amount,
                    category_id: s.category_id,
                    memo: s.memo,
                })
                .collect(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct TransactionsResponse {
    pub data: TransactionsData,
}

#[derive(Debug, Deserialize)]
pub struct TransactionsData {
    pub transactions: Vec<TransactionDetail>,
}

#[derive(Debug, Deserialize)]
pub struct TransactionDetail {
    pub id: String,
    pub date: NaiveDate,
    pub amount: i64,
    #[serde(default)]
    pub payee_name: Option<String>,
}

impl From<TransactionDetail> for HistoryRecord {
    fn from(wire: TransactionDetail) -> Self {
        HistoryRecord {
            id: wire.id,
            date: wire.date,
            payee_name: wire.payee_name.unwrap_or_default(),
            amount: wire.amount,
        }
    }
}

/// Create payload for a single scheduled transaction. Forecasts always go
/// out one-time.
#[derive(Debug, Serialize)]
pub struct SaveScheduledTransaction {
    pub account_id: String,
    pub date: NaiveDate,
    pub amount: i64,
    pub payee_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<String>,
    pub memo: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flag_color: Option<String>,
    pub frequency: Frequency,
}

impl From<&ForecastRecord> for SaveScheduledTransaction {
    fn from(record: &ForecastRecord) -> Self {
        SaveScheduledTransaction {
            account_id: record.account_id.clone(),
            date: record.date,
            amount: record.amount,
            payee_name: record.payee_name.clone(),
            category_id: record.category_id.clone(),
            memo: record.memo.clone(),
            flag_color: record.flag_color.clone(),
            frequency: Frequency::Never,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct PostScheduledTransactionWrapper {
    pub scheduled_transaction: SaveScheduledTransaction,
}
