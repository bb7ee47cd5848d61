//! LGPD retention deadlines as configuration, not hard-coded workflow logic.
//!
//! Art. 16 LGPD allows clinical records to be kept for the legally mandated
//! period (5 years for physiotherapy records per COFFITO guidance); data
//! subject requests must be answered within a fixed window. Both values are
//! policy, so callers that diverge from the Brazilian defaults can construct
//! their own policy instead of patching constants.

use chrono::{Days, Months, NaiveDate};

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct RetentionPolicy {
    /// How long clinical records are retained after the last update.
    pub record_retention_years: u32,
    /// How long the clinic has to answer a data-subject request.
    pub request_deadline_days: u32,
}

impl Default for RetentionPolicy {
    fn default() -> Self {
        Self {
            record_retention_years: 5,
            request_deadline_days: 30,
        }
    }
}

impl RetentionPolicy {
    /// Date a record created/updated on `from` becomes eligible for erasure.
    ///
    /// Calendar-year arithmetic: Feb 29 anchors clamp to Feb 28 in
    /// non-leap target years.
    pub fn record_expiry(&self, from: NaiveDate) -> NaiveDate {
        from.checked_add_months(Months::new(self.record_retention_years * 12))
            .unwrap_or(NaiveDate::MAX)
    }

    /// Deadline for answering a data-subject request received on `from`.
    pub fn request_deadline(&self, from: NaiveDate) -> NaiveDate {
        from.checked_add_days(Days::new(self.request_deadline_days as u64))
            .unwrap_or(NaiveDate::MAX)
    }
}
