//! Brazilian locale validation and formatting.
//!
//! Pure, synchronous helpers shared by server-side request validation and
//! client-side input masking: CPF check digits, phone/CEP masks, BRL
//! currency in integer cents. Formatting functions are total — they are
//! called on every keystroke of live input and must never panic — while
//! validators return plain booleans. The only hard error in the crate is
//! [`currency::parse_currency_input`] on genuinely non-numeric input.

pub mod cep;
pub mod cpf;
pub mod currency;
pub mod digits;
pub mod forms;
pub mod phone;

pub use cep::{format_cep, is_valid_cep, CepAddress, CepLookupError, PostalLookup};
pub use cpf::{format_cpf, is_valid_cpf};
pub use currency::{
    format_currency, format_currency_compact, parse_currency_input, CurrencyParseError,
};
pub use digits::normalize_digits;
pub use forms::{validate_patient, PatientForm};
pub use phone::{format_phone, PhoneKind};
