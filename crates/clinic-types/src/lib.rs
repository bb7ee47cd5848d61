pub mod retention;
pub mod types;

pub use retention::RetentionPolicy;
pub use types::{
    DailyAggregate, PainObservation, RegionTrend, Severity, Summary, TrendDirection,
    ValidationIssue,
};
