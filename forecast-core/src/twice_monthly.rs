//! Date generator for the irregular twice-a-month frequency.

use chrono::{Datelike, NaiveDate};

/// Generate the twice-a-month occurrence dates in `[start, horizon]`,
/// sorted ascending.
///
/// The anchor day is `start`'s day-of-month capped at 28, so every emitted
/// day exists in every month. Its partner sits 14 days away, wrapping
/// within 1..=28: anchor <= 14 pairs with anchor + 14, otherwise with
/// anchor - 14. This approximates "twice a month" as roughly two-week
/// spacing rather than true half-month boundaries (1st/15th); the spacing
/// is a kept heuristic, not a calendar rule.
pub fn twice_monthly_dates(start: NaiveDate, horizon: NaiveDate) -> Vec<NaiveDate> {
    if start > horizon {
        return vec![];
    }

    let anchor = start.day().min(28);
    let partner = if anchor <= 14 { anchor + 14 } else { anchor - 14 };

    let mut out = Vec::new();
    let mut year = start.year();
    let mut month = start.month();
    loop {
        for day in [anchor, partner] {
            // Days are capped at 28, so construction cannot fail.
            if let Some(date) = NaiveDate::from_ymd_opt(year, month, day) {
                if date >= start && date <= horizon && !out.contains(&date) {
                    out.push(date);
                }
            }
        }
        if (year, month) >= (horizon.year(), horizon.month()) {
            break;
        }
        month += 1;
        if month > 12 {
            month = 1;
            year += 1;
        }
    }

    out.sort();
    out
}
