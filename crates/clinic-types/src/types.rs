use std::collections::BTreeSet;

use chrono::NaiveDate;

/// A single pain record entered during a session.
///
/// The timestamp is kept as the ISO-8601 string the intake layer received;
/// daily grouping uses its literal `YYYY-MM-DD` prefix.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PainObservation {
    pub timestamp: String,
    pub body_region: String,
    pub intensity: u8, // 0-10 scale
}

/// Per-day rollup of every observation sharing a calendar date.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyAggregate {
    pub date: NaiveDate,
    pub mean_intensity: f64, // rounded to 1 decimal
    pub max_intensity: u8,
    pub min_intensity: u8,
    pub observation_count: usize,
    pub regions_observed: BTreeSet<String>,
}

/// First-versus-last comparison for one body region across its full history.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegionTrend {
    pub region: String,
    pub classification: TrendDirection,
    pub first_intensity: u8,
    pub last_intensity: u8,
    pub percent_change: u32, // magnitude only; direction lives in `classification`
    pub last_observed_at: String,
}

/// Headline statistics over a filtered set of daily aggregates.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    pub total_assessments: usize,
    pub avg_pain_overall: f64,
    pub highest_pain: u8,
    pub lowest_pain: u8,
    pub overall_trend: TrendDirection,
    pub trend_percentage: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrendDirection {
    Improving,
    Worsening,
    Stable,
}

/// A single problem found while validating user-entered form data.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationIssue {
    pub field: String, // e.g. "cpf", "birth_date"
    pub severity: Severity,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Severity {
    Critical,
    Warning,
    Info,
}
