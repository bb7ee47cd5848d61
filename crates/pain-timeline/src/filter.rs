//! Period and region filters over daily aggregates.

use std::str::FromStr;

use chrono::NaiveDate;
use clinic_types::DailyAggregate;
use thiserror::Error;

use crate::calendar::{days_before, months_before, years_before};

/// Period selector offered by the timeline screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeRange {
    Last7Days,
    Last30Days,
    Last90Days,
    Last6Months,
    LastYear,
    All,
}

#[derive(Error, Debug, PartialEq, Eq)]
#[error("unknown time range token: {0:?}")]
pub struct ParseTimeRangeError(String);

impl FromStr for TimeRange {
    type Err = ParseTimeRangeError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        match token {
            "7d" => Ok(Self::Last7Days),
            "30d" => Ok(Self::Last30Days),
            "90d" => Ok(Self::Last90Days),
            "6m" => Ok(Self::Last6Months),
            "1y" => Ok(Self::LastYear),
            "all" => Ok(Self::All),
            other => Err(ParseTimeRangeError(other.to_string())),
        }
    }
}

impl TimeRange {
    /// Earliest date the range keeps, relative to `now`; `None` keeps
    /// everything. Month/year ranges use clamped calendar arithmetic.
    pub fn cutoff(self, now: NaiveDate) -> Option<NaiveDate> {
        match self {
            Self::Last7Days => Some(days_before(now, 7)),
            Self::Last30Days => Some(days_before(now, 30)),
            Self::Last90Days => Some(days_before(now, 90)),
            Self::Last6Months => Some(months_before(now, 6)),
            Self::LastYear => Some(years_before(now, 1)),
            Self::All => None,
        }
    }
}

/// Keep the buckets dated on or after the range cutoff.
///
/// `now` is an explicit parameter (never the system clock) so the filter
/// is deterministic under test.
pub fn filter_by_time_range(
    daily: &[DailyAggregate],
    range: TimeRange,
    now: NaiveDate,
) -> Vec<DailyAggregate> {
    match range.cutoff(now) {
        None => daily.to_vec(),
        Some(cutoff) => daily.iter().filter(|d| d.date >= cutoff).cloned().collect(),
    }
}

/// Keep the buckets in which `region` was observed; `"all"` passes
/// everything through.
pub fn filter_by_region(daily: &[DailyAggregate], region: &str) -> Vec<DailyAggregate> {
    if region == "all" {
        return daily.to_vec();
    }
    daily
        .iter()
        .filter(|d| d.regions_observed.contains(region))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::BTreeSet;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn bucket(date: NaiveDate, regions: &[&str]) -> DailyAggregate {
        DailyAggregate {
            date,
            mean_intensity: 5.0,
            max_intensity: 7,
            min_intensity: 3,
            observation_count: 2,
            regions_observed: regions.iter().map(|r| r.to_string()).collect::<BTreeSet<_>>(),
        }
    }

    #[test]
    fn test_parses_range_tokens() {
        assert_eq!("7d".parse::<TimeRange>(), Ok(TimeRange::Last7Days));
        assert_eq!("30d".parse::<TimeRange>(), Ok(TimeRange::Last30Days));
        assert_eq!("90d".parse::<TimeRange>(), Ok(TimeRange::Last90Days));
        assert_eq!("6m".parse::<TimeRange>(), Ok(TimeRange::Last6Months));
        assert_eq!("1y".parse::<TimeRange>(), Ok(TimeRange::LastYear));
        assert_eq!("all".parse::<TimeRange>(), Ok(TimeRange::All));
        assert!("2w".parse::<TimeRange>().is_err());
    }

    #[test]
    fn test_thirty_day_boundary_is_inclusive() {
        let now = ymd(2024, 6, 15);
        let exactly_30 = bucket(ymd(2024, 5, 16), &["lombar"]);
        let days_31 = bucket(ymd(2024, 5, 15), &["lombar"]);
        let kept = filter_by_time_range(
            &[days_31.clone(), exactly_30.clone()],
            TimeRange::Last30Days,
            now,
        );
        assert_eq!(kept, vec![exactly_30]);
    }

    #[test]
    fn test_six_month_cutoff_uses_calendar_months() {
        // six months before March 31 is September 30 (clamped)
        let now = ymd(2024, 3, 31);
        let on_cutoff = bucket(ymd(2023, 9, 30), &["lombar"]);
        let before_cutoff = bucket(ymd(2023, 9, 29), &["lombar"]);
        let kept = filter_by_time_range(
            &[before_cutoff, on_cutoff.clone()],
            TimeRange::Last6Months,
            now,
        );
        assert_eq!(kept, vec![on_cutoff]);
    }

    #[test]
    fn test_all_range_is_pass_through() {
        let buckets = vec![bucket(ymd(2010, 1, 1), &["lombar"])];
        let kept = filter_by_time_range(&buckets, TimeRange::All, ymd(2024, 6, 15));
        assert_eq!(kept, buckets);
    }

    #[test]
    fn test_region_filter_keeps_matching_buckets() {
        let lombar = bucket(ymd(2024, 1, 1), &["lombar"]);
        let cervical = bucket(ymd(2024, 1, 2), &["cervical"]);
        let both = bucket(ymd(2024, 1, 3), &["lombar", "cervical"]);
        let daily = vec![lombar.clone(), cervical, both.clone()];

        let kept = filter_by_region(&daily, "lombar");
        assert_eq!(kept, vec![lombar, both]);
    }

    #[test]
    fn test_region_filter_all_is_pass_through() {
        let daily = vec![bucket(ymd(2024, 1, 1), &["lombar"])];
        assert_eq!(filter_by_region(&daily, "all"), daily);
    }

    #[test]
    fn test_unknown_region_yields_empty() {
        let daily = vec![bucket(ymd(2024, 1, 1), &["lombar"])];
        assert!(filter_by_region(&daily, "punho").is_empty());
    }
}
