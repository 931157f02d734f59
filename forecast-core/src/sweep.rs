//! Cleanup sweep over the historical register: stale marker-tagged
//! transactions dated before today.

use chrono::NaiveDate;

use crate::model::{HistoryRecord, payee_carries_marker};

/// History records to delete: marker-tagged and past-dated. Date and marker
/// only; amounts play no part here.
pub fn sweep(history: &[HistoryRecord], today: NaiveDate) -> Vec<HistoryRecord> {
    history
        .iter()
        .filter(|r| payee_carries_marker(&r.payee_name) && r.date < today)
        .cloned()
        .collect()
}
