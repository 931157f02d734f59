//! Projection window: today plus a fixed horizon in calendar months.

use chrono::{Months, NaiveDate};

/// The span forecasts are generated for. Not persisted; built once per run
/// from an explicit `today` so projection stays a pure function of its
/// inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProjectionWindow {
    pub today: NaiveDate,
    pub horizon: NaiveDate,
}

impl ProjectionWindow {
    pub fn from_today(today: NaiveDate, horizon_months: u32) -> Self {
        Self {
            today,
            horizon: today + Months::new(horizon_months),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_horizon_is_months_ahead() {
        let today = NaiveDate::from_ymd_opt(2026, 8, 6).unwrap();
        let window = ProjectionWindow::from_today(today, 3);
        assert_eq!(window.today, today);
        assert_eq!(window.horizon, NaiveDate::from_ymd_opt(2026, 11, 6).unwrap());
    }

    #[test]
    fn test_horizon_clamps_short_months() {
        // Aug 31 + 3 months clamps to Nov 30.
        let today = NaiveDate::from_ymd_opt(2026, 8, 31).unwrap();
        let window = ProjectionWindow::from_today(today, 3);
        assert_eq!(window.horizon, NaiveDate::from_ymd_opt(2026, 11, 30).unwrap());
    }
}
