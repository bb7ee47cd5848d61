//! Per-day rollups of raw pain observations.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use clinic_types::{DailyAggregate, PainObservation};

/// Group observations by calendar date and roll each bucket up.
///
/// The grouping key is the literal `YYYY-MM-DD` prefix of the timestamp;
/// time of day and zone offset are discarded, matching how the intake
/// layer records dates. Observations without a parseable date prefix are
/// skipped. Output is ascending by date; empty input yields an empty vec.
pub fn aggregate_by_day(observations: &[PainObservation]) -> Vec<DailyAggregate> {
    let mut buckets: BTreeMap<NaiveDate, Vec<&PainObservation>> = BTreeMap::new();
    for obs in observations {
        if let Some(date) = date_prefix(&obs.timestamp) {
            buckets.entry(date).or_default().push(obs);
        }
    }

    buckets
        .into_iter()
        .map(|(date, group)| {
            let sum: u32 = group.iter().map(|o| o.intensity as u32).sum();
            DailyAggregate {
                date,
                mean_intensity: round1(sum as f64 / group.len() as f64),
                max_intensity: group.iter().map(|o| o.intensity).max().unwrap_or(0),
                min_intensity: group.iter().map(|o| o.intensity).min().unwrap_or(0),
                observation_count: group.len(),
                regions_observed: group.iter().map(|o| o.body_region.clone()).collect(),
            }
        })
        .collect()
}

/// Parse the `YYYY-MM-DD` prefix of an ISO-8601 timestamp.
pub(crate) fn date_prefix(timestamp: &str) -> Option<NaiveDate> {
    let prefix = timestamp.get(..10)?;
    NaiveDate::parse_from_str(prefix, "%Y-%m-%d").ok()
}

/// Round to one decimal place, half-up.
pub(crate) fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
