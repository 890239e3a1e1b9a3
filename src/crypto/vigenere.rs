//! Vigenere cipher implementation
//!
//! Each plaintext letter is shifted by the alphabet position of the current
//! keyword letter (`A`/`a` = 0 ... `Z`/`z` = 25). The keyword position only
//! advances when a letter is consumed, so spaces and punctuation in the
//! plaintext never use up part of the key.

use super::validator::is_valid_vigenere_key;
use super::{shift_letter, CipherAlgorithm, CipherKind, CipherResult};

const NAME: &str = "Vigenere Cipher";

/// Vigenere cipher
///
/// The key is an alphabetic keyword of any case; it is normalized to
/// uppercase for the shift computation but echoed back untouched.
pub struct VigenereCipher {}

impl VigenereCipher {
    pub fn new() -> Self {
        Self {}
    }

    fn transform(&self, text: &str, key: &str, direction: i64) -> CipherResult {
        if !is_valid_vigenere_key(key) {
            tracing::debug!("vigenere key {:?} is not alphabetic", key);
            return CipherResult::failure(NAME, key);
        }

        let shifts: Vec<i64> = key
            .to_ascii_uppercase()
            .bytes()
            .map(|b| (b - b'A') as i64 * direction)
            .collect();

        let mut key_index = 0;
        let output = text
            .chars()
            .map(|ch| {
                if !ch.is_ascii_alphabetic() {
                    return ch;
                }
                let shifted = shift_letter(ch, shifts[key_index % shifts.len()]);
                key_index += 1;
                shifted
            })
            .collect();

        CipherResult::success(output, NAME, key)
    }
}

impl Default for VigenereCipher {
    fn default() -> Self {
        Self::new()
    }
}

impl CipherAlgorithm for VigenereCipher {
    fn name(&self) -> &str {
        NAME
    }

    fn kind(&self) -> CipherKind {
        CipherKind::Vigenere
    }

    fn encrypt(&self, plaintext: &str, key: &str) -> CipherResult {
        self.transform(plaintext, key, 1)
    }

    fn decrypt(&self, ciphertext: &str, key: &str) -> CipherResult {
        self.transform(ciphertext, key, -1)
    }
}
