//! Input rules applied before a cipher ever runs
//!
//! The ciphers themselves accept any integer shift and any keyword length.
//! The interactive session is stricter: shifts must lie in a configured
//! range, keywords are length limited and plaintext has a size cap.

use crate::crypto::validator::{is_valid_caesar_key, is_valid_vigenere_key, parse_shift};
use crate::crypto::CipherKind;
use crate::session::config::Config;
use crate::session::errors::SessionError;

#[derive(Debug, Clone)]
pub struct InputPolicy {
    pub caesar_min_shift: i32,
    pub caesar_max_shift: i32,
    pub vigenere_max_len: usize,
    pub max_plaintext_len: usize,
}

impl InputPolicy {
    pub fn from_config(config: &Config) -> Self {
        Self {
            caesar_min_shift: config.key_config.caesar_min_shift,
            caesar_max_shift: config.key_config.caesar_max_shift,
            vigenere_max_len: config.key_config.vigenere_max_len,
            max_plaintext_len: config.session_config.max_plaintext_len,
        }
    }

    /// Trims `text` and checks it is non-empty and short enough
    pub fn check_plaintext(&self, text: &str) -> Result<String, SessionError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(SessionError::validation(
                "Text cannot be empty. Please enter some text to encrypt.",
            ));
        }
        if text.chars().count() > self.max_plaintext_len {
            return Err(SessionError::validation(format!(
                "Text is too long. Maximum length is {} characters.",
                self.max_plaintext_len
            )));
        }
        Ok(text.to_string())
    }

    /// Trims `key` and checks it against the rules of the cipher family
    pub fn check_key(&self, kind: CipherKind, key: &str) -> Result<String, SessionError> {
        let key = key.trim();
        if key.is_empty() {
            return Err(SessionError::validation("Key cannot be empty."));
        }

        match kind {
            CipherKind::Caesar => {
                if !is_valid_caesar_key(key) {
                    return Err(SessionError::validation(format!(
                        "Invalid Caesar key. Please enter an integer between {} and {}.",
                        self.caesar_min_shift, self.caesar_max_shift
                    )));
                }
                let shift = parse_shift(key).unwrap_or_default();
                if shift < self.caesar_min_shift || shift > self.caesar_max_shift {
                    return Err(SessionError::validation(format!(
                        "Shift value must be between {} and {}.",
                        self.caesar_min_shift, self.caesar_max_shift
                    )));
                }
            }
            CipherKind::Vigenere => {
                if !is_valid_vigenere_key(key) {
                    return Err(SessionError::validation(
                        "Invalid Vigenere key. Please use only letters (a-z, A-Z).",
                    ));
                }
                if key.chars().count() > self.vigenere_max_len {
                    return Err(SessionError::validation(format!(
                        "Vigenere key is too long. Maximum length is {} characters.",
                        self.vigenere_max_len
                    )));
                }
            }
        }
        Ok(key.to_string())
    }

    pub fn key_prompt(&self, kind: CipherKind) -> String {
        match kind {
            CipherKind::Caesar => format!(
                "Enter shift value (integer between {} and {}): ",
                self.caesar_min_shift, self.caesar_max_shift
            ),
            CipherKind::Vigenere => format!(
                "Enter keyword (letters only, 1-{} characters): ",
                self.vigenere_max_len
            ),
        }
    }
}

impl Default for InputPolicy {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}
