//! Forecast projector: walks eligible recurring masters out to the horizon
//! and emits one-time forecast candidates.

use chrono::NaiveDate;

use crate::model::{
    AUTOGEN_MEMO_PREFIX, FORECAST_MARKER, ForecastRecord, Frequency, ScheduledEntry,
    payee_carries_marker,
};
use crate::step::step_for;
use crate::twice_monthly::twice_monthly_dates;

/// Why a master was passed over. Only the warn-worthy cases are recorded;
/// deleted, one-time, and already-forecast entries are skipped silently.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// Composite entries cannot be written back as a single forecast.
    SplitTemplate,
    /// The payee label is built from the memo, so a blank memo is unusable.
    BlankMemo,
}

#[derive(Debug, Clone)]
pub struct SkippedTemplate {
    pub payee_name: String,
    pub next_date: NaiveDate,
    pub reason: SkipReason,
}

/// Projection output: candidates for reconciliation plus the audit trail of
/// skipped masters.
#[derive(Debug, Clone, Default)]
pub struct Projection {
    pub candidates: Vec<ForecastRecord>,
    pub skipped: Vec<SkippedTemplate>,
}

/// Project every eligible entry strictly past its own next occurrence and
/// up to `horizon`.
///
/// The entry's own next occurrence is never emitted; the service already
/// materializes that one itself.
pub fn project(entries: &[ScheduledEntry], horizon: NaiveDate) -> Projection {
    let mut projection = Projection::default();

    for entry in entries {
        if entry.deleted {
            continue;
        }
        if entry.frequency == Frequency::Never {
            continue;
        }
        if payee_carries_marker(&entry.payee_name) {
            // A forecast must never seed further forecasts.
            continue;
        }
        if !entry.splits.is_empty() {
            projection.skipped.push(SkippedTemplate {
                payee_name: entry.payee_name.clone(),
                next_date: entry.next_date,
                reason: SkipReason::SplitTemplate,
            });
            continue;
        }
        let memo = entry.memo.as_deref().unwrap_or("").trim();
        if memo.is_empty() {
            projection.skipped.push(SkippedTemplate {
                payee_name: entry.payee_name.clone(),
                next_date: entry.next_date,
                reason: SkipReason::BlankMemo,
            });
            continue;
        }

        if entry.frequency == Frequency::TwiceAMonth {
            if let Some(start) = entry.next_date.succ_opt() {
                for date in twice_monthly_dates(start, horizon) {
                    projection.candidates.push(candidate(entry, memo, date));
                }
            }
        } else if let Some(step) = step_for(entry.frequency) {
            let mut next = step.advance(entry.next_date);
            while let Some(date) = next {
                if date > horizon {
                    break;
                }
                projection.candidates.push(candidate(entry, memo, date));
                next = step.advance(date);
            }
        }
    }

    projection
}

fn candidate(entry: &ScheduledEntry, memo: &str, date: NaiveDate) -> ForecastRecord {
    ForecastRecord {
        account_id: entry.account_id.clone(),
        date,
        amount: entry.amount,
        payee_name: format!("{FORECAST_MARKER} {memo}"),
        // Inflows route to unassigned funds.
        category_id: if entry.amount > 0 {
            None
        } else {
            entry.category_id.clone()
        },
        memo: format!("{AUTOGEN_MEMO_PREFIX} from {}", entry.frequency.name()),
        flag_color: entry.flag_color.clone(),
    }
}
