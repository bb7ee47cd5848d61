//! Structural validation for incoming pain observations.
//!
//! The intake endpoint rejects out-of-range intensity and missing fields
//! before anything is persisted; these checks are the library half of that
//! contract.

use clinic_types::{PainObservation, Severity, ValidationIssue};

use crate::aggregate::date_prefix;

/// Pain scale ceiling (EVA 0-10).
pub const MAX_INTENSITY: u8 = 10;

/// Check one observation; an empty vec means it is acceptable.
pub fn check_observation(obs: &PainObservation) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();

    if obs.intensity > MAX_INTENSITY {
        issues.push(ValidationIssue {
            field: "pain_intensity".to_string(),
            severity: Severity::Critical,
            message: format!("intensidade deve estar entre 0 e {MAX_INTENSITY}"),
        });
    }

    if obs.body_region.trim().is_empty() {
        issues.push(ValidationIssue {
            field: "body_region".to_string(),
            severity: Severity::Critical,
            message: "região do corpo é obrigatória".to_string(),
        });
    }

    if date_prefix(&obs.timestamp).is_none() {
        issues.push(ValidationIssue {
            field: "timestamp".to_string(),
            severity: Severity::Critical,
            message: "data/hora inválida".to_string(),
        });
    }

    issues
}
