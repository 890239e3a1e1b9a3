//! Value returned by every cipher invocation

/// Outcome of a single cipher invocation
///
/// The key is kept exactly as supplied so the display layer can decide how
/// to mask it. A failed result never carries any text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CipherResult {
    ciphertext: String,
    algorithm: String,
    key: String,
    success: bool,
}

impl CipherResult {
    pub fn success(ciphertext: String, algorithm: &str, key: &str) -> Self {
        Self {
            ciphertext,
            algorithm: algorithm.to_string(),
            key: key.to_string(),
            success: true,
        }
    }

    pub fn failure(algorithm: &str, key: &str) -> Self {
        Self {
            ciphertext: String::new(),
            algorithm: algorithm.to_string(),
            key: key.to_string(),
            success: false,
        }
    }

    pub fn ciphertext(&self) -> &str {
        &self.ciphertext
    }

    pub fn algorithm(&self) -> &str {
        &self.algorithm
    }

    /// Raw key as supplied by the caller
    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn is_success(&self) -> bool {
        self.success
    }

    pub fn char_count(&self) -> usize {
        self.ciphertext.chars().count()
    }

    /// Key as it should be echoed back to a user
    ///
    /// Keys of up to 3 characters are shown verbatim. Longer keys keep their
    /// first and last character and hide everything in between with `*`.
    pub fn masked_key(&self) -> String {
        mask_key(&self.key)
    }
}

pub fn mask_key(key: &str) -> String {
    let len = key.chars().count();
    if len <= 3 {
        return key.to_string();
    }
    key.chars()
        .enumerate()
        .map(|(i, ch)| if i == 0 || i == len - 1 { ch } else { '*' })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failure_has_no_text() {
        let result = CipherResult::failure("Caesar Cipher", "abc");
        assert!(!result.is_success());
        assert_eq!(result.ciphertext(), "");
        assert_eq!(result.key(), "abc");
        assert_eq!(result.char_count(), 0);
    }

    #[test]
    fn test_mask_short_keys_verbatim() {
        assert_eq!(mask_key(""), "");
        assert_eq!(mask_key("3"), "3");
        assert_eq!(mask_key("-25"), "-25");
        assert_eq!(mask_key("KEY"), "KEY");
    }

    #[test]
    fn test_mask_long_keys() {
        assert_eq!(mask_key("LEMON"), "L***N");
        assert_eq!(mask_key("abcd"), "a**d");
        assert_eq!(mask_key("ÉcoleÀ"), "É****À");
    }

    #[test]
    fn test_masking_keeps_raw_key() {
        let result = CipherResult::success("RIJVS".to_string(), "Vigenere Cipher", "SECRET");
        assert_eq!(result.masked_key(), "S****T");
        assert_eq!(result.key(), "SECRET");
    }
}
