//! Calendar arithmetic for range cutoffs.
//!
//! Month and year subtraction is calendar-aware, not a fixed day count:
//! six months before March 31 is September 30 (day-of-month clamps to the
//! last valid day of the target month).

use chrono::{Days, Months, NaiveDate};

pub fn days_before(date: NaiveDate, days: u64) -> NaiveDate {
    date.checked_sub_days(Days::new(days))
        .unwrap_or(NaiveDate::MIN)
}

pub fn months_before(date: NaiveDate, months: u32) -> NaiveDate {
    date.checked_sub_months(Months::new(months))
        .unwrap_or(NaiveDate::MIN)
}

pub fn years_before(date: NaiveDate, years: u32) -> NaiveDate {
    months_before(date, years * 12)
}
