//! Serialization of derived timeline structures for data-subject exports.
//!
//! Field names and ordering here are a contract with the export feature
//! (LGPD data portability): JSON uses the camelCase names of the wire
//! types, CSV columns follow the order of the `DailyAggregate` fields.

use clinic_types::{DailyAggregate, RegionTrend, Summary};

/// One document bundling everything the timeline screen derived.
#[derive(Debug, Clone, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineReport<'a> {
    pub daily: &'a [DailyAggregate],
    pub trends: &'a [RegionTrend],
    pub summary: Option<&'a Summary>,
}

/// Serialize the full derived timeline as pretty-printed JSON.
pub fn timeline_report_to_json(
    daily: &[DailyAggregate],
    trends: &[RegionTrend],
    summary: Option<&Summary>,
) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&TimelineReport {
        daily,
        trends,
        summary,
    })
}

/// Render daily aggregates as CSV; regions within a bucket are joined
/// with `;` so the row stays a single cell per column.
pub fn daily_to_csv(daily: &[DailyAggregate]) -> String {
    let mut out = String::from(
        "date,meanIntensity,maxIntensity,minIntensity,observationCount,regionsObserved\n",
    );
    for bucket in daily {
        let regions: Vec<&str> = bucket.regions_observed.iter().map(String::as_str).collect();
        out.push_str(&format!(
            "{},{:.1},{},{},{},{}\n",
            bucket.date,
            bucket.mean_intensity,
            bucket.max_intensity,
            bucket.min_intensity,
            bucket.observation_count,
            regions.join(";"),
        ));
    }
    out
}
