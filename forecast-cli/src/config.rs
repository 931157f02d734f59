use std::time::Duration;

use anyhow::{Context, Result};
use forecast_ynab::RetryPolicy;

const DEFAULT_HORIZON_MONTHS: u32 = 3;

/// Minimum gap between consecutive write calls.
pub const WRITE_GAP: Duration = Duration::from_millis(500);

pub fn retry_policy() -> RetryPolicy {
    RetryPolicy {
        max_attempts: 3,
        backoff: Duration::from_secs(2),
    }
}

/// Run configuration, read once from the environment at startup and passed
/// down explicitly.
#[derive(Debug, Clone)]
pub struct Config {
    pub token: String,
    pub budget_id: String,
    pub horizon_months: u32,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let token = std::env::var("YNAB_TOKEN").context("YNAB_TOKEN is not set")?;
        let budget_id = std::env::var("BUDGET_ID").context("BUDGET_ID is not set")?;
        let horizon_months = match std::env::var("FORECAST_HORIZON_MONTHS") {
            Ok(raw) => raw
                .parse()
                .with_context(|| format!("invalid FORECAST_HORIZON_MONTHS: {raw}"))?,
            Err(_) => DEFAULT_HORIZON_MONTHS,
        };
        Ok(Self {
            token,
            budget_id,
            horizon_months,
        })
    }
}
