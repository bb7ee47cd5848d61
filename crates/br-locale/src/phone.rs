//! Brazilian phone masking: `(DD) DDDD-DDDD` landlines, `(DD) DDDDD-DDDD`
//! mobiles (mobile subscriber numbers start with 9 since the 2012 ANATEL
//! nine-digit migration).

use crate::digits::normalize_digits;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhoneKind {
    /// 2-digit area code + 9-digit subscriber number.
    Mobile,
    /// 2-digit area code + 8-digit subscriber number.
    Landline,
    /// Landline mask until an 11th digit shows up, then mobile.
    Auto,
}

/// Apply the phone display mask to whatever digits are present.
///
/// Live-mask contract: tolerates every partial length, drops digits beyond
/// the mask capacity, never panics.
pub fn format_phone(input: &str, kind: PhoneKind) -> String {
    let normalized = normalize_digits(input);
    let limit = match kind {
        PhoneKind::Mobile => 11,
        PhoneKind::Landline => 10,
        PhoneKind::Auto => {
            if normalized.len() >= 11 {
                11
            } else {
                10
            }
        }
    };
    let digits: Vec<char> = normalized.chars().take(limit).collect();
    if digits.is_empty() {
        return String::new();
    }

    let mut out = String::with_capacity(16);
    out.push('(');
    for &c in digits.iter().take(2) {
        out.push(c);
    }
    if digits.len() <= 2 {
        return out;
    }
    out.push_str(") ");

    // Subscriber prefix is 5 digits on mobiles, 4 on landlines.
    let hyphen_after = limit - 6;
    for (i, &c) in digits[2..].iter().enumerate() {
        if i == hyphen_after {
            out.push('-');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_masks_complete_mobile() {
        assert_eq!(
            format_phone("11987654321", PhoneKind::Mobile),
            "(11) 98765-4321"
        );
    }

    #[test]
    fn test_masks_complete_landline() {
        assert_eq!(
            format_phone("1134567890", PhoneKind::Landline),
            "(11) 3456-7890"
        );
    }

    #[test]
    fn test_auto_switches_to_mobile_at_eleven_digits() {
        assert_eq!(format_phone("1134567890", PhoneKind::Auto), "(11) 3456-7890");
        assert_eq!(
            format_phone("11987654321", PhoneKind::Auto),
            "(11) 98765-4321"
        );
    }

    #[test]
    fn test_masks_partial_input() {
        assert_eq!(format_phone("", PhoneKind::Auto), "");
        assert_eq!(format_phone("1", PhoneKind::Auto), "(1");
        assert_eq!(format_phone("11", PhoneKind::Auto), "(11");
        assert_eq!(format_phone("119", PhoneKind::Auto), "(11) 9");
        assert_eq!(format_phone("119876", PhoneKind::Auto), "(11) 9876");
        assert_eq!(format_phone("1198765", PhoneKind::Auto), "(11) 9876-5");
    }

    #[test]
    fn test_truncates_overlong_input() {
        assert_eq!(
            format_phone("119876543219999", PhoneKind::Mobile),
            "(11) 98765-4321"
        );
        assert_eq!(
            format_phone("11345678909999", PhoneKind::Landline),
            "(11) 3456-7890"
        );
    }

    #[test]
    fn test_reformats_already_masked_input() {
        assert_eq!(
            format_phone("(11) 98765-4321", PhoneKind::Auto),
            "(11) 98765-4321"
        );
    }
}
