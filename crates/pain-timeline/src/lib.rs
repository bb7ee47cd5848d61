//! Pain-history aggregation for the patient timeline screen.
//!
//! Every function here is a pure, stateless transform: unordered
//! [`clinic_types::PainObservation`] records go in, per-day aggregates,
//! per-region trends and headline summaries come out. Nothing reads the
//! system clock — range filters take an explicit reference date so results
//! are reproducible across machines and under test.

pub mod aggregate;
pub mod calendar;
pub mod export;
pub mod filter;
pub mod summary;
pub mod trend;
pub mod validate;

pub use aggregate::aggregate_by_day;
pub use export::{daily_to_csv, timeline_report_to_json, TimelineReport};
pub use filter::{filter_by_region, filter_by_time_range, ParseTimeRangeError, TimeRange};
pub use summary::compute_summary;
pub use trend::{compute_region_trends, TREND_THRESHOLD_PCT};
pub use validate::{check_observation, MAX_INTENSITY};
