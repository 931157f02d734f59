//! Calendar stepper: fixed offsets for the regular recurrence frequencies.

use chrono::{Days, Months, NaiveDate};

use crate::model::Frequency;

/// A fixed calendar offset used to walk occurrence-by-occurrence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalendarStep {
    Days(u64),
    Weeks(u64),
    Months(u32),
    Years(u32),
}

impl CalendarStep {
    /// Advance a date by one step. Month and year steps clamp to the end of
    /// shorter months (Jan 31 + 1 month = Feb 28/29). `None` only on
    /// calendar overflow, which terminates the walk.
    pub fn advance(&self, date: NaiveDate) -> Option<NaiveDate> {
        match *self {
            CalendarStep::Days(n) => date.checked_add_days(Days::new(n)),
            CalendarStep::Weeks(n) => date.checked_add_days(Days::new(7 * n)),
            CalendarStep::Months(n) => date.checked_add_months(Months::new(n)),
            CalendarStep::Years(n) => date.checked_add_months(Months::new(12 * n)),
        }
    }
}

/// Fixed step for a regular frequency.
///
/// `None` for the one-time sentinel, for unrecognized values, and for the
/// irregular twice-a-month frequency, which has its own generator. Callers
/// must skip projection when no step exists.
pub fn step_for(frequency: Frequency) -> Option<CalendarStep> {
    match frequency {
        Frequency::Daily => Some(CalendarStep::Days(1)),
        Frequency::Weekly => Some(CalendarStep::Weeks(1)),
        Frequency::EveryOtherWeek => Some(CalendarStep::Weeks(2)),
        Frequency::Every4Weeks => Some(CalendarStep::Weeks(4)),
        Frequency::Monthly => Some(CalendarStep::Months(1)),
        Frequency::EveryOtherMonth => Some(CalendarStep::Months(2)),
        Frequency::Every3Months => Some(CalendarStep::Months(3)),
        Frequency::Every4Months => Some(CalendarStep::Months(4)),
        Frequency::TwiceAYear => Some(CalendarStep::Months(6)),
        Frequency::Yearly => Some(CalendarStep::Years(1)),
        Frequency::EveryOtherYear => Some(CalendarStep::Years(2)),
        Frequency::Never | Frequency::TwiceAMonth | Frequency::Other => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn test_step_table() {
        assert_eq!(step_for(Frequency::Daily), Some(CalendarStep::Days(1)));
        assert_eq!(step_for(Frequency::Weekly), Some(CalendarStep::Weeks(1)));
        assert_eq!(step_for(Frequency::EveryOtherWeek), Some(CalendarStep::Weeks(2)));
        assert_eq!(step_for(Frequency::Every4Weeks), Some(CalendarStep::Weeks(4)));
        assert_eq!(step_for(Frequency::Monthly), Some(CalendarStep::Months(1)));
        assert_eq!(step_for(Frequency::EveryOtherMonth), Some(CalendarStep::Months(2)));
        assert_eq!(step_for(Frequency::Every3Months), Some(CalendarStep::Months(3)));
        assert_eq!(step_for(Frequency::Every4Months), Some(CalendarStep::Months(4)));
        assert_eq!(step_for(Frequency::TwiceAYear), Some(CalendarStep::Months(6)));
        assert_eq!(step_for(Frequency::Yearly), Some(CalendarStep::Years(1)));
        assert_eq!(step_for(Frequency::EveryOtherYear), Some(CalendarStep::Years(2)));
    }

    #[test]
    fn test_no_step_for_one_time_or_irregular() {
        assert_eq!(step_for(Frequency::Never), None);
        assert_eq!(step_for(Frequency::TwiceAMonth), None);
        assert_eq!(step_for(Frequency::Other), None);
    }

    #[test]
    fn test_weekly_advance() {
        let step = step_for(Frequency::Weekly).unwrap();
        assert_eq!(step.advance(d(2026, 8, 6)), Some(d(2026, 8, 13)));
    }

    #[test]
    fn test_monthly_advance_clamps_month_end() {
        let step = step_for(Frequency::Monthly).unwrap();
        assert_eq!(step.advance(d(2026, 1, 31)), Some(d(2026, 2, 28)));
        assert_eq!(step.advance(d(2024, 1, 31)), Some(d(2024, 2, 29)));
    }

    #[test]
    fn test_yearly_advance() {
        let step = step_for(Frequency::Yearly).unwrap();
        assert_eq!(step.advance(d(2026, 8, 6)), Some(d(2027, 8, 6)));
    }
}
