/// Strip every non-digit character from user input.
///
/// Empty input yields an empty string; there is no error condition.
pub fn normalize_digits(input: &str) -> String {
    input.chars().filter(|c| c.is_ascii_digit()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_strips_punctuation_and_letters() {
        assert_eq!(normalize_digits("529.982.247-25"), "52998224725");
        assert_eq!(normalize_digits("(11) 98765-4321"), "11987654321");
        assert_eq!(normalize_digits("abc"), "");
    }

    #[test]
    fn test_empty_input_yields_empty_output() {
        assert_eq!(normalize_digits(""), "");
    }

    #[test]
    fn test_keeps_only_ascii_digits() {
        // Arabic-Indic digits are not valid in Brazilian documents
        assert_eq!(normalize_digits("١٢٣45"), "45");
    }
}
