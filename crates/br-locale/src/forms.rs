//! Patient intake form validation.
//!
//! Runs the field checks the API applies before persisting a patient
//! record; each problem becomes a [`ValidationIssue`] so the HTTP layer can
//! map the whole batch to a 4xx response body.

use chrono::NaiveDate;
use clinic_types::{Severity, ValidationIssue};
use lazy_static::lazy_static;
use regex::Regex;

use crate::cpf::is_valid_cpf;
use crate::digits::normalize_digits;

lazy_static! {
    static ref EMAIL_SHAPE: Regex =
        Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("static pattern");
}

/// Raw patient intake submission, before any normalization.
#[derive(Debug, Clone, Default, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatientForm {
    pub name: String,
    pub cpf: String,
    pub email: String,
    pub phone: String,
    pub birth_date: String, // YYYY-MM-DD
}

/// Validate a patient intake form against `today`.
///
/// `today` is an explicit parameter so the future-birth-date check stays
/// deterministic under test. An empty vec means the form is acceptable.
pub fn validate_patient(form: &PatientForm, today: NaiveDate) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();

    if form.name.trim().len() < 2 {
        issues.push(issue("name", Severity::Critical, "nome é obrigatório"));
    }

    if !is_valid_cpf(&form.cpf) {
        issues.push(issue("cpf", Severity::Critical, "CPF inválido"));
    }

    if form.email.trim().is_empty() {
        issues.push(issue("email", Severity::Critical, "e-mail é obrigatório"));
    } else if !EMAIL_SHAPE.is_match(form.email.trim()) {
        issues.push(issue("email", Severity::Critical, "e-mail inválido"));
    }

    let phone_digits = normalize_digits(&form.phone);
    if !matches!(phone_digits.len(), 10 | 11) {
        issues.push(issue(
            "phone",
            Severity::Critical,
            "telefone deve ter 10 ou 11 dígitos",
        ));
    }

    match NaiveDate::parse_from_str(form.birth_date.trim(), "%Y-%m-%d") {
        Err(_) => issues.push(issue(
            "birth_date",
            Severity::Critical,
            "data de nascimento inválida",
        )),
        Ok(birth) if birth > today => issues.push(issue(
            "birth_date",
            Severity::Critical,
            "data de nascimento no futuro",
        )),
        Ok(birth) => {
            // 130 years is past any verified lifespan; likely a typo'd year
            if today.years_since(birth).unwrap_or(0) > 130 {
                issues.push(issue(
                    "birth_date",
                    Severity::Warning,
                    "data de nascimento improvável",
                ));
            }
        }
    }

    issues
}

fn issue(field: &str, severity: Severity, message: &str) -> ValidationIssue {
    ValidationIssue {
        field: field.to_string(),
        severity,
        message: message.to_string(),
    }
}
