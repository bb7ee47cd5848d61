//! Per-region trend classification over the full observation history.

use std::collections::BTreeMap;

use clinic_types::{PainObservation, RegionTrend, TrendDirection};

/// Signed percent change a region must exceed before it counts as moving.
///
/// Policy value carried over from clinical practice, not an algorithmic
/// constant; exposed so callers with different protocols can see what the
/// default classification uses.
pub const TREND_THRESHOLD_PCT: i32 = 10;

/// Compare first and last intensity for every region present in the input.
///
/// Output is sorted by region name; each group is sorted chronologically
/// before comparison. Regions with fewer than two observations classify as
/// stable with zero percent change, as does a zero first intensity (the
/// division-by-zero guard).
pub fn compute_region_trends(observations: &[PainObservation]) -> Vec<RegionTrend> {
    let mut groups: BTreeMap<&str, Vec<&PainObservation>> = BTreeMap::new();
    for obs in observations {
        groups.entry(obs.body_region.as_str()).or_default().push(obs);
    }

    groups
        .into_iter()
        .map(|(region, mut group)| {
            group.sort_by(|a, b| a.timestamp.cmp(&b.timestamp));
            let first = group.first().map(|o| o.intensity).unwrap_or(0);
            let last = group.last().map(|o| o.intensity).unwrap_or(0);
            let last_observed_at = group
                .last()
                .map(|o| o.timestamp.clone())
                .unwrap_or_default();

            // positive means pain went down
            let signed = if group.len() < 2 || first == 0 {
                0
            } else {
                let baseline = first as f64;
                (((baseline - last as f64) / baseline) * 100.0).round() as i32
            };
            let classification = if signed > TREND_THRESHOLD_PCT {
                TrendDirection::Improving
            } else if signed < -TREND_THRESHOLD_PCT {
                TrendDirection::Worsening
            } else {
                TrendDirection::Stable
            };

            RegionTrend {
                region: region.to_string(),
                classification,
                first_intensity: first,
                last_intensity: last,
                percent_change: signed.unsigned_abs(),
                last_observed_at,
            }
        })
        .collect()
}
