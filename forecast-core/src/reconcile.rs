//! Content-identity reconciliation between projected candidates and the
//! forecasts already materialized in the ledger service.

use std::collections::HashMap;

use chrono::NaiveDate;

use crate::model::{ForecastRecord, ScheduledEntry};

/// Reconciliation identity of a forecast: the (date, payee, amount) triple.
/// Records agreeing on all three are the same entity, whatever their memo,
/// flag, or category say.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Signature {
    pub date: NaiveDate,
    pub payee: String,
    pub amount: i64,
}

impl Signature {
    pub fn of_candidate(record: &ForecastRecord) -> Self {
        Self {
            date: record.date,
            payee: record.payee_name.clone(),
            amount: record.amount,
        }
    }

    pub fn of_existing(entry: &ScheduledEntry) -> Self {
        Self {
            date: entry.next_date,
            payee: entry.payee_name.clone(),
            amount: entry.amount,
        }
    }
}

/// The minimal write set making the materialized forecasts match the
/// candidates exactly. Matching signatures are left untouched.
#[derive(Debug, Clone, Default)]
pub struct ReconcilePlan {
    pub to_create: Vec<ForecastRecord>,
    pub to_delete: Vec<ScheduledEntry>,
}

/// Select the previously materialized forecast entries out of a scheduled
/// transaction fetch.
pub fn existing_forecasts(entries: &[ScheduledEntry]) -> Vec<ScheduledEntry> {
    entries
        .iter()
        .filter(|e| e.is_forecast_entry())
        .cloned()
        .collect()
}

/// Partition by signature membership: candidates absent from the existing
/// set are created, existing records absent from the candidate set are
/// deleted. Running the result back through `reconcile` yields empty lists.
///
/// Existing records sharing one signature collapse under one map key, so a
/// service-side duplicate is masked rather than deleted.
pub fn reconcile(candidates: Vec<ForecastRecord>, existing: Vec<ScheduledEntry>) -> ReconcilePlan {
    let candidate_map: HashMap<Signature, ForecastRecord> = candidates
        .into_iter()
        .map(|c| (Signature::of_candidate(&c), c))
        .collect();
    let existing_map: HashMap<Signature, ScheduledEntry> = existing
        .into_iter()
        .map(|e| (Signature::of_existing(&e), e))
        .collect();

    let mut to_create: Vec<ForecastRecord> = candidate_map
        .iter()
        .filter(|(sig, _)| !existing_map.contains_key(sig))
        .map(|(_, c)| c.clone())
        .collect();
    let mut to_delete: Vec<ScheduledEntry> = existing_map
        .iter()
        .filter(|(sig, _)| !candidate_map.contains_key(sig))
        .map(|(_, e)| e.clone())
        .collect();

    // Map order is arbitrary; sort so reporting and writes are stable.
    to_create.sort_by(|a, b| (a.date, &a.payee_name).cmp(&(b.date, &b.payee_name)));
    to_delete.sort_by(|a, b| (a.next_date, &a.payee_name).cmp(&(b.next_date, &b.payee_name)));

    ReconcilePlan { to_create, to_delete }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Frequency;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn candidate(date: NaiveDate, payee: &str, amount: i64) -> ForecastRecord {
        ForecastRecord {
            account_id: "acct-1".to_string(),
            date,
            amount,
            payee_name: payee.to_string(),
            category_id: None,
            memo: "Forecast (Auto-Gen) from weekly".to_string(),
            flag_color: None,
        }
    }

    fn materialized(id: &str, date: NaiveDate, payee: &str, amount: i64) -> ScheduledEntry {
        ScheduledEntry {
            id: id.to_string(),
            account_id: "acct-1".to_string(),
            category_id: None,
            payee_name: payee.to_string(),
            memo: Some("Forecast (Auto-Gen) from weekly".to_string()),
            amount,
            frequency: Frequency::Never,
            next_date: date,
            flag_color: None,
            deleted: false,
            splits: vec![],
        }
    }

    #[test]
    fn test_delta_reconciliation() {
        // Existing day 7 + day 14, candidates day 7 + day 21: keep day 7,
        // delete day 14, create day 21.
        let existing = vec![
            materialized("s1", d(2026, 8, 7), "TEMPFORCST Rent", -120_000),
            materialized("s2", d(2026, 8, 14), "TEMPFORCST Rent", -120_000),
        ];
        let candidates = vec![
            candidate(d(2026, 8, 7), "TEMPFORCST Rent", -120_000),
            candidate(d(2026, 8, 21), "TEMPFORCST Rent", -120_000),
        ];

        let plan = reconcile(candidates, existing);
        assert_eq!(plan.to_create.len(), 1);
        assert_eq!(plan.to_create[0].date, d(2026, 8, 21));
        assert_eq!(plan.to_delete.len(), 1);
        assert_eq!(plan.to_delete[0].id, "s2");
    }

    #[test]
    fn test_reconcile_is_idempotent() {
        let candidates = vec![
            candidate(d(2026, 8, 7), "TEMPFORCST Rent", -120_000),
            candidate(d(2026, 8, 14), "TEMPFORCST Rent", -120_000),
        ];
        let existing: Vec<ScheduledEntry> = candidates
            .iter()
            .enumerate()
            .map(|(i, c)| materialized(&format!("s{i}"), c.date, &c.payee_name, c.amount))
            .collect();

        let plan = reconcile(candidates, existing);
        assert!(plan.to_create.is_empty());
        assert!(plan.to_delete.is_empty());
    }

    #[test]
    fn test_signature_ignores_memo_flag_and_category() {
        let mut existing = materialized("s1", d(2026, 8, 7), "TEMPFORCST Rent", -120_000);
        existing.memo = Some("TEMPFORCST legacy memo".to_string());
        existing.flag_color = Some("red".to_string());
        existing.category_id = Some("cat-other".to_string());

        let plan = reconcile(
            vec![candidate(d(2026, 8, 7), "TEMPFORCST Rent", -120_000)],
            vec![existing],
        );
        assert!(plan.to_create.is_empty());
        assert!(plan.to_delete.is_empty());
    }

    #[test]
    fn test_amount_change_is_delete_plus_create() {
        let plan = reconcile(
            vec![candidate(d(2026, 8, 7), "TEMPFORCST Rent", -125_000)],
            vec![materialized("s1", d(2026, 8, 7), "TEMPFORCST Rent", -120_000)],
        );
        assert_eq!(plan.to_create.len(), 1);
        assert_eq!(plan.to_delete.len(), 1);
    }

    #[test]
    fn test_duplicate_existing_signatures_are_masked() {
        // Two materialized rows with one signature collapse to a single map
        // entry; a matching candidate leaves both untouched.
        let existing = vec![
            materialized("s1", d(2026, 8, 7), "TEMPFORCST Rent", -120_000),
            materialized("s2", d(2026, 8, 7), "TEMPFORCST Rent", -120_000),
        ];
        let plan = reconcile(
            vec![candidate(d(2026, 8, 7), "TEMPFORCST Rent", -120_000)],
            existing,
        );
        assert!(plan.to_create.is_empty());
        assert!(plan.to_delete.is_empty());
    }

    #[test]
    fn test_existing_forecasts_filters_masters_and_deleted() {
        let forecast = materialized("s1", d(2026, 8, 7), "TEMPFORCST Rent", -120_000);
        let mut master = materialized("s2", d(2026, 8, 7), "Landlord", -120_000);
        master.frequency = Frequency::Weekly;
        master.memo = Some("Rent".to_string());
        let mut gone = materialized("s3", d(2026, 8, 7), "TEMPFORCST Rent", -120_000);
        gone.deleted = true;

        let existing = existing_forecasts(&[forecast, master, gone]);
        assert_eq!(existing.len(), 1);
        assert_eq!(existing[0].id, "s1");
    }

    #[test]
    fn test_plan_output_is_sorted() {
        let candidates = vec![
            candidate(d(2026, 8, 21), "TEMPFORCST Rent", -120_000),
            candidate(d(2026, 8, 7), "TEMPFORCST Internet", -60_000),
            candidate(d(2026, 8, 7), "TEMPFORCST Rent", -120_000),
        ];
        let plan = reconcile(candidates, vec![]);
        let order: Vec<(NaiveDate, String)> = plan
            .to_create
            .iter()
            .map(|c| (c.date, c.payee_name.clone()))
            .collect();
        assert_eq!(
            order,
            vec![
                (d(2026, 8, 7), "TEMPFORCST Internet".to_string()),
                (d(2026, 8, 7), "TEMPFORCST Rent".to_string()),
                (d(2026, 8, 21), "TEMPFORCST Rent".to_string()),
            ]
        );
    }
}
