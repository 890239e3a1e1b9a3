//! Caesar cipher implementation
//!
//! Every ASCII letter is shifted by the same integer offset, wrapping inside
//! its own case. Digits, punctuation, whitespace and non-Latin characters are
//! copied unchanged.
//!
//! The shift is not range limited here: modular arithmetic makes any `i32`
//! valid, so `29` behaves like `3` and `-1` like `25`.

use super::validator::parse_shift;
use super::{shift_letter, CipherAlgorithm, CipherKind, CipherResult};

const NAME: &str = "Caesar Cipher";

/// Caesar cipher
///
/// The key is the decimal text of the shift, e.g. `"3"` or `"-2"`.
pub struct CaesarCipher {}

impl CaesarCipher {
    pub fn new() -> Self {
        Self {}
    }

    fn transform(&self, text: &str, key: &str, direction: i64) -> CipherResult {
        let shift = match parse_shift(key) {
            Some(shift) => shift as i64 * direction,
            None => {
                tracing::debug!("caesar key {:?} is not an integer", key);
                return CipherResult::failure(NAME, key);
            }
        };

        let output = text.chars().map(|ch| shift_letter(ch, shift)).collect();
        CipherResult::success(output, NAME, key)
    }
}

impl Default for CaesarCipher {
    fn default() -> Self {
        Self::new()
    }
}

impl CipherAlgorithm for CaesarCipher {
    fn name(&self) -> &str {
        NAME
    }

    fn kind(&self) -> CipherKind {
        CipherKind::Caesar
    }

    fn encrypt(&self, plaintext: &str, key: &str) -> CipherResult {
        self.transform(plaintext, key, 1)
    }

    /// Shifting by the negated key undoes the encryption.
    fn decrypt(&self, ciphertext: &str, key: &str) -> CipherResult {
        self.transform(ciphertext, key, -1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encrypt_hello() {
        let result = CaesarCipher::new().encrypt("HELLO", "3");
        assert!(result.is_success());
        assert_eq!(result.ciphertext(), "KHOOR");
        assert_eq!(result.algorithm(), "Caesar Cipher");
        assert_eq!(result.key(), "3");
    }

    #[test]
    fn test_negative_shift() {
        let result = CaesarCipher::new().encrypt("xyz", "-2");
        assert!(result.is_success());
        assert_eq!(result.ciphertext(), "vwx");
    }

    #[test]
    fn test_invalid_key() {
        let result = CaesarCipher::new().encrypt("HELLO", "abc");
        assert!(!result.is_success());
        assert_eq!(result.ciphertext(), "");
        assert_eq!(result.key(), "abc");
    }

    #[test]
    fn test_out_of_policy_shift_still_works() {
        let cipher = CaesarCipher::new();
        assert_eq!(cipher.encrypt("abc", "29").ciphertext(), "def");
        assert_eq!(cipher.encrypt("abc", "-27").ciphertext(), "zab");
        assert!(cipher.encrypt("abc", &i32::MIN.to_string()).is_success());
    }

    #[test]
    fn test_preserves_case_and_symbols() {
        let result = CaesarCipher::new().encrypt("Hello, World! 123 ñ", "1");
        assert_eq!(result.ciphertext(), "Ifmmp, Xpsme! 123 ñ");
    }

    #[test]
    fn test_round_trip() {
        let cipher = CaesarCipher::new();
        let text = "The quick brown fox jumps over the lazy dog. 42!";
        for shift in [-100, -25, -1, 0, 1, 13, 25, 26, 100, i32::MAX, i32::MIN] {
            let key = shift.to_string();
            let encrypted = cipher.encrypt(text, &key);
            let decrypted = cipher.decrypt(encrypted.ciphertext(), &key);
            assert_eq!(decrypted.ciphertext(), text, "shift {}", shift);

            // decrypting is encrypting with the negated shift
            let negated = (-(shift as i64)).to_string();
            if let Ok(neg) = negated.parse::<i32>() {
                let by_negation = cipher.encrypt(encrypted.ciphertext(), &neg.to_string());
                assert_eq!(by_negation.ciphertext(), text);
            }
        }
    }
}
