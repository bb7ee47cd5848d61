//! CEP (Código de Endereçamento Postal) masking and structural validation.
//!
//! A CEP carries no check digit, so validity here is purely structural:
//! eight digits. Whether the code is actually assigned to a street is a
//! question for the postal database, which sits behind the [`PostalLookup`]
//! trait so the network call (and its timeouts) stays out of this crate.

use thiserror::Error;

use crate::digits::normalize_digits;

/// Apply the `DDDDD-DDD` display mask to whatever digits are present.
///
/// Live-mask contract: partial input yields a partial prefix, digits
/// beyond 8 are dropped, never panics.
pub fn format_cep(input: &str) -> String {
    let digits = normalize_digits(input);
    let mut out = String::with_capacity(9);
    for (i, c) in digits.chars().take(8).enumerate() {
        if i == 5 {
            out.push('-');
        }
        out.push(c);
    }
    out
}

/// Structural validation: exactly 8 digits after stripping the mask.
pub fn is_valid_cep(input: &str) -> bool {
    normalize_digits(input).len() == 8
}

/// Address record returned by a postal-code lookup.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CepAddress {
    pub street: String,
    pub district: String,
    pub city: String,
    pub uf: String, // two-letter state code
}

#[derive(Error, Debug)]
pub enum CepLookupError {
    #[error("postal service unavailable: {0}")]
    Unavailable(String),

    #[error("postal service lookup timed out")]
    Timeout,
}

/// Injected capability for resolving a CEP to its registered address.
///
/// Implementations own the I/O (HTTP client, cache, fixture table);
/// `Ok(None)` means the CEP is well-formed but not assigned.
pub trait PostalLookup {
    fn lookup(&self, cep: &str) -> Result<Option<CepAddress>, CepLookupError>;
}
