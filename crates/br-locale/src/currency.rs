//! BRL currency display and parsing over integer cents.
//!
//! Monetary values are carried as `i64` cents everywhere; floating point
//! never touches the amounts, so non-finite or fractional inputs cannot
//! occur. Parsing is the one place in the crate allowed to hard-fail,
//! since it runs on user-confirmed entry rather than on every keystroke.

use lazy_static::lazy_static;
use regex::Regex;
use thiserror::Error;

lazy_static! {
    /// Optional sign, optional `R$`, then only digits and Brazilian
    /// separators. Anything else is genuinely non-numeric.
    static ref CURRENCY_SHAPE: Regex =
        Regex::new(r"^\s*-?\s*(?:R\$)?\s*[0-9.,]*\s*$").expect("static pattern");
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum CurrencyParseError {
    #[error("not a numeric currency value: {0:?}")]
    NotNumeric(String),

    #[error("currency value exceeds the representable range")]
    OutOfRange,
}

/// Render integer cents as `R$ D.DDD,DD` with Brazilian grouping.
///
/// `12050` → `"R$ 120,50"`; negative amounts lead with `-` before `R$`.
pub fn format_currency(cents: i64) -> String {
    let abs = cents.unsigned_abs();
    let body = format!("{},{:02}", group_thousands(abs / 100), abs % 100);
    if cents < 0 {
        format!("-R$ {body}")
    } else {
        format!("R$ {body}")
    }
}

/// Compact display for dashboards: `R$ 1,2M` from a million reais up,
/// `R$ 3,4K` from a thousand, full format below that.
pub fn format_currency_compact(cents: i64) -> String {
    let abs = cents.unsigned_abs();
    let sign = if cents < 0 { "-" } else { "" };
    let reais = abs / 100;
    if reais >= 1_000_000 {
        // tenths of a million reais, rounded half-up
        let tenths = (abs + 5_000_000) / 10_000_000;
        format!("{sign}R$ {},{}M", tenths / 10, tenths % 10)
    } else if reais >= 1_000 {
        let tenths = (abs + 5_000) / 10_000;
        format!("{sign}R$ {},{}K", tenths / 10, tenths % 10)
    } else {
        format_currency(cents)
    }
}

/// Parse Brazilian-formatted (or partially typed) currency input back into
/// integer cents.
///
/// `.` is a thousands separator and is discarded; the last `,` starts the
/// centavos. Sub-cent residue (e.g. a pasted `"1,005"`) is rounded half-up,
/// never truncated.
pub fn parse_currency_input(display: &str) -> Result<i64, CurrencyParseError> {
    if !CURRENCY_SHAPE.is_match(display) {
        return Err(CurrencyParseError::NotNumeric(display.to_string()));
    }
    let negative = display.contains('-');
    let cleaned: String = display
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == ',')
        .collect();

    let (int_digits, frac_digits) = match cleaned.rfind(',') {
        Some(pos) => (&cleaned[..pos], &cleaned[pos + 1..]),
        None => (cleaned.as_str(), ""),
    };
    // a stray comma from an earlier group should not poison the integer part
    let int_digits: String = int_digits.chars().filter(|c| c.is_ascii_digit()).collect();

    if int_digits.is_empty() && frac_digits.is_empty() {
        return Err(CurrencyParseError::NotNumeric(display.to_string()));
    }

    let reais: i64 = if int_digits.is_empty() {
        0
    } else {
        int_digits
            .parse()
            .map_err(|_| CurrencyParseError::OutOfRange)?
    };
    let (carry, frac_cents) = round_fraction(frac_digits);

    let cents = reais
        .checked_add(carry)
        .and_then(|r| r.checked_mul(100))
        .and_then(|c| c.checked_add(frac_cents))
        .ok_or(CurrencyParseError::OutOfRange)?;
    Ok(if negative { -cents } else { cents })
}

/// Round a decimal-fraction digit string to whole cents, half-up.
///
/// Returns `(carry_into_reais, cents)`; `",996"` rounds to a full real.
fn round_fraction(frac_digits: &str) -> (i64, i64) {
    if frac_digits.is_empty() {
        return (0, 0);
    }
    // six digits is already a thousandth of a cent; more adds nothing
    let kept: String = frac_digits.chars().take(6).collect();
    let scale = 10u64.pow(kept.len() as u32);
    let value: u64 = kept.parse().unwrap_or(0);
    let cents = (value * 100 + scale / 2) / scale;
    ((cents / 100) as i64, (cents % 100) as i64)
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push('.');
        }
        out.push(c);
    }
    out
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Display and parse are exact inverses across the billing range.
        #[test]
        fn currency_round_trip(cents in 0i64..=1_000_000_000) {
            prop_assert_eq!(parse_currency_input(&format_currency(cents)), Ok(cents));
        }

        /// Negative amounts round-trip too.
        #[test]
        fn currency_round_trip_negative(cents in -1_000_000_000i64..=0) {
            prop_assert_eq!(parse_currency_input(&format_currency(cents)), Ok(cents));
        }

        /// The parser never panics, whatever the input.
        #[test]
        fn parse_total_on_arbitrary_input(input in "\\PC*") {
            let _ = parse_currency_input(&input);
        }
    }
}
