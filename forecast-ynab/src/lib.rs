//! forecast-ynab: typed YNAB v1 API client, wire adapters, and write pacing

pub mod client;
pub mod pacing;
pub mod wire;

pub use client::{ApiError, RecordRef, YnabClient};
pub use pacing::{RetryPolicy, WritePacer, with_retry};
