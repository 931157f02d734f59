//! Value types for scheduled entries, forecast candidates, and history records

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Payee tag identifying machine-generated forecast entries.
/// Matched case-insensitively as a substring.
pub const FORECAST_MARKER: &str = "TEMPFORCST";

/// Memo prefix stamped onto every generated forecast.
pub const AUTOGEN_MEMO_PREFIX: &str = "Forecast (Auto-Gen)";

/// Recurrence frequency as the ledger service encodes it.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum Frequency {
    Never,
    Daily,
    Weekly,
    EveryOtherWeek,
    TwiceAMonth,
    Every4Weeks,
    Monthly,
    EveryOtherMonth,
    Every3Months,
    Every4Months,
    TwiceAYear,
    Yearly,
    EveryOtherYear,
    /// Anything the service adds later; never projected.
    #[serde(other)]
    Other,
}

impl Frequency {
    /// Wire identifier, used verbatim in generated memos.
    pub fn name(&self) -> &'static str {
        match self {
            Frequency::Never => "never",
            Frequency::Daily => "daily",
            Frequency::Weekly => "weekly",
            Frequency::EveryOtherWeek => "everyOtherWeek",
            Frequency::TwiceAMonth => "twiceAMonth",
            Frequency::Every4Weeks => "every4Weeks",
            Frequency::Monthly => "monthly",
            Frequency::EveryOtherMonth => "everyOtherMonth",
            Frequency::Every3Months => "every3Months",
            Frequency::Every4Months => "every4Months",
            Frequency::TwiceAYear => "twiceAYear",
            Frequency::Yearly => "yearly",
            Frequency::EveryOtherYear => "everyOtherYear",
            Frequency::Other => "unknown",
        }
    }
}

/// One split line of a composite scheduled entry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SplitLine {
    pub amount: i64,
    pub category_id: Option<String>,
    pub memo: Option<String>,
}

/// A scheduled transaction as ingested from the ledger service.
///
/// Covers both recurring masters (projection input) and previously
/// materialized one-time forecasts (reconciliation input).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScheduledEntry {
    pub id: String,
    pub account_id: String,
    pub category_id: Option<String>,
    pub payee_name: String,
    pub memo: Option<String>,
    /// Signed milliunits; positive = inflow, negative = outflow.
    pub amount: i64,
    pub frequency: Frequency,
    /// Next upcoming occurrence, maintained by the service.
    pub next_date: NaiveDate,
    pub flag_color: Option<String>,
    pub deleted: bool,
    pub splits: Vec<SplitLine>,
}

impl ScheduledEntry {
    /// True for entries this tool materialized on an earlier run:
    /// one-time, still present, and tagged by payee marker or memo prefix.
    pub fn is_forecast_entry(&self) -> bool {
        !self.deleted
            && self.frequency == Frequency::Never
            && (payee_carries_marker(&self.payee_name)
                || self
                    .memo
                    .as_deref()
                    .is_some_and(|m| m.starts_with(AUTOGEN_MEMO_PREFIX)))
    }
}

/// A candidate one-time forecast to be written to the ledger service.
///
/// Always created with the one-time frequency; an amount or date change on
/// the source master shows up as one deletion plus one creation, never an
/// in-place update.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ForecastRecord {
    pub account_id: String,
    pub date: NaiveDate,
    pub amount: i64,
    pub payee_name: String,
    /// None for inflows so the amount routes to unassigned funds.
    pub category_id: Option<String>,
    pub memo: String,
    pub flag_color: Option<String>,
}

/// A historical register transaction (cleanup sweep input).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HistoryRecord {
    pub id: String,
    pub date: NaiveDate,
    pub payee_name: String,
    pub amount: i64,
}

/// Case-insensitive marker test on a payee label.
pub fn payee_carries_marker(payee: &str) -> bool {
    payee.to_uppercase().contains(FORECAST_MARKER)
}
