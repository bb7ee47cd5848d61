//! CPF (Cadastro de Pessoas Físicas) formatting and check-digit validation.
//!
//! A CPF is 11 digits; the last two are check digits computed from the
//! preceding digits with a weighted modulo-11 rule (Receita Federal
//! algorithm).

use crate::digits::normalize_digits;

/// Apply the `XXX.XXX.XXX-XX` display mask to whatever digits are present.
///
/// Safe to call after every keystroke: partial input yields a partially
/// masked prefix, anything beyond 11 digits is dropped, and already-masked
/// input passes through unchanged.
pub fn format_cpf(input: &str) -> String {
    let digits = normalize_digits(input);
    let mut out = String::with_capacity(14);
    for (i, c) in digits.chars().take(11).enumerate() {
        match i {
            3 | 6 => out.push('.'),
            9 => out.push('-'),
            _ => {}
        }
        out.push(c);
    }
    out
}

/// Validate a CPF's check digits. Accepts masked or bare input.
///
/// Returns `false` for wrong length, for the repeated-digit sequences the
/// registry never issues ("000.000.000-00" etc.), and for any checksum
/// mismatch. Never panics.
pub fn is_valid_cpf(input: &str) -> bool {
    let digits = normalize_digits(input);
    if digits.len() != 11 {
        return false;
    }
    let d: Vec<u32> = digits.chars().filter_map(|c| c.to_digit(10)).collect();
    if d.iter().all(|&x| x == d[0]) {
        return false;
    }
    check_digit(&d[..9]) == d[9] && check_digit(&d[..10]) == d[10]
}

/// Weighted modulo-11 check digit over a 9- or 10-digit prefix.
///
/// Weights run from `len + 1` down to 2; remainder below 2 maps to 0,
/// otherwise the digit is `11 - remainder`.
fn check_digit(prefix: &[u32]) -> u32 {
    let len = prefix.len() as u32;
    let sum: u32 = prefix
        .iter()
        .enumerate()
        .map(|(i, &digit)| digit * (len + 1 - i as u32))
        .sum();
    match sum % 11 {
        r if r < 2 => 0,
        r => 11 - r,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_accepts_known_valid_cpf() {
        assert!(is_valid_cpf("52998224725"));
        assert!(is_valid_cpf("529.982.247-25"));
    }

    #[test]
    fn test_rejects_bad_check_digits() {
        assert!(!is_valid_cpf("52998224726"));
        assert!(!is_valid_cpf("52998224735"));
    }

    #[test]
    fn test_rejects_repeated_digit_sequences() {
        assert!(!is_valid_cpf("11111111111"));
        assert!(!is_valid_cpf("000.000.000-00"));
    }

    #[test]
    fn test_rejects_wrong_length() {
        assert!(!is_valid_cpf("123456789"));
        assert!(!is_valid_cpf(""));
        assert!(!is_valid_cpf("529982247251"));
    }

    #[test]
    fn test_masks_complete_cpf() {
        assert_eq!(format_cpf("52998224725"), "529.982.247-25");
    }

    #[test]
    fn test_masks_partial_input() {
        assert_eq!(format_cpf(""), "");
        assert_eq!(format_cpf("5"), "5");
        assert_eq!(format_cpf("529"), "529");
        assert_eq!(format_cpf("5299"), "529.9");
        assert_eq!(format_cpf("5299822"), "529.982.2");
        assert_eq!(format_cpf("5299822472"), "529.982.247-2");
    }

    #[test]
    fn test_truncates_overlong_input() {
        assert_eq!(format_cpf("529982247259999"), "529.982.247-25");
    }

    #[test]
    fn test_ignores_junk_characters() {
        assert_eq!(format_cpf("cpf: 529.982.247-25!"), "529.982.247-25");
    }
}
