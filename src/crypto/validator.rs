//! Key syntax checks
//!
//! Pure predicates, total over any input. Range and length limits are not
//! checked here; those belong to the session's key policy.

/// Returns true if `key`, once trimmed, is a base-10 signed 32-bit integer
pub fn is_valid_caesar_key(key: &str) -> bool {
    parse_shift(key).is_some()
}

/// Returns true if `key` is non-empty after trimming and made of ASCII letters only
pub fn is_valid_vigenere_key(key: &str) -> bool {
    !key.trim().is_empty() && key.chars().all(|ch| ch.is_ascii_alphabetic())
}

pub(crate) fn parse_shift(key: &str) -> Option<i32> {
    key.trim().parse::<i32>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_caesar_keys() {
        assert!(is_valid_caesar_key("3"));
        assert!(is_valid_caesar_key("-2"));
        assert!(is_valid_caesar_key("+7"));
        assert!(is_valid_caesar_key(" 12 "));
        // range is not this function's concern
        assert!(is_valid_caesar_key("1000"));

        assert!(!is_valid_caesar_key(""));
        assert!(!is_valid_caesar_key("   "));
        assert!(!is_valid_caesar_key("abc"));
        assert!(!is_valid_caesar_key("3.5"));
        assert!(!is_valid_caesar_key("1 2"));
        assert!(!is_valid_caesar_key("99999999999"));
    }

    #[test]
    fn test_vigenere_keys() {
        assert!(is_valid_vigenere_key("KEY"));
        assert!(is_valid_vigenere_key("lemon"));
        assert!(is_valid_vigenere_key("MiXeD"));
        assert!(is_valid_vigenere_key("averyveryverylongkeywordthatexceedstwenty"));

        assert!(!is_valid_vigenere_key(""));
        assert!(!is_valid_vigenere_key("  "));
        assert!(!is_valid_vigenere_key("abc123"));
        assert!(!is_valid_vigenere_key("two words"));
        assert!(!is_valid_vigenere_key("clé"));
    }

    #[test]
    fn test_validators_are_pure() {
        for key in ["3", "abc", "", "KEY", "abc123"] {
            assert_eq!(is_valid_caesar_key(key), is_valid_caesar_key(key));
            assert_eq!(is_valid_vigenere_key(key), is_valid_vigenere_key(key));
        }
    }
}
