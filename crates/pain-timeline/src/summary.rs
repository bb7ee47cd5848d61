//! Headline statistics over a filtered set of daily aggregates.

use clinic_types::{DailyAggregate, Summary, TrendDirection};

use crate::aggregate::round1;

/// Summarize the filtered timeline; `None` when there is nothing to
/// summarize (the empty-summary sentinel, never an error).
///
/// The overall trend compares the first bucket's mean against the last
/// bucket's, with the same zero-baseline guard the per-region trends use.
pub fn compute_summary(daily: &[DailyAggregate]) -> Option<Summary> {
    let first = daily.first()?;
    let last = daily.last()?;

    let avg_pain_overall = round1(
        daily.iter().map(|d| d.mean_intensity).sum::<f64>() / daily.len() as f64,
    );
    let (overall_trend, trend_percentage) =
        trend_between(first.mean_intensity, last.mean_intensity);

    Some(Summary {
        total_assessments: daily.len(),
        avg_pain_overall,
        highest_pain: daily.iter().map(|d| d.max_intensity).max().unwrap_or(0),
        lowest_pain: daily.iter().map(|d| d.min_intensity).min().unwrap_or(0),
        overall_trend,
        trend_percentage,
    })
}

fn trend_between(first: f64, last: f64) -> (TrendDirection, u32) {
    let direction = if first > last {
        TrendDirection::Improving
    } else if first < last {
        TrendDirection::Worsening
    } else {
        TrendDirection::Stable
    };
    let percentage = if first == 0.0 {
        0
    } else {
        (((first - last) / first).abs() * 100.0).round() as u32
    };
    (direction, percentage)
}
