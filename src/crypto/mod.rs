//! Classical substitution ciphers
//!
//! This module provides the cipher abstraction and its implementations:
//! - Caesar: shifts every letter by a fixed integer offset
//! - Vigenere: shifts letters by the cycling letters of a keyword
//!
//! These ciphers are trivially breakable and exist for education only.

pub mod caesar;
pub mod result;
pub mod validator;
pub mod vigenere;

use crate::crypto::caesar::CaesarCipher;
use crate::crypto::vigenere::VigenereCipher;

pub use result::CipherResult;

/// Core cipher trait
///
/// All cipher implementations must implement this trait. Implementations hold
/// no mutable state, so a single instance may serve any number of calls.
/// Failures to interpret the key are reported through [`CipherResult`], never
/// through a panic or an error value.
pub trait CipherAlgorithm: Send + Sync {
    /// Stable display name, e.g. "Caesar Cipher"
    fn name(&self) -> &str;

    /// Family of the algorithm, used to pick key rules and prompts
    fn kind(&self) -> CipherKind;

    /// Encrypts `plaintext` with the raw `key`
    ///
    /// # Returns
    /// * A successful result carrying the ciphertext
    /// * A failed result with empty text if the key cannot be interpreted
    fn encrypt(&self, plaintext: &str, key: &str) -> CipherResult;

    /// Reverses [`CipherAlgorithm::encrypt`] with the same key
    fn decrypt(&self, ciphertext: &str, key: &str) -> CipherResult;
}

/// Factory function to create a cipher from its kind
///
/// # Examples
/// ```
/// use cipherforge::crypto::{new_cipher, CipherKind};
/// let cipher = new_cipher(CipherKind::Caesar);
/// assert_eq!(cipher.encrypt("HELLO", "3").ciphertext(), "KHOOR");
/// ```
pub fn new_cipher(kind: CipherKind) -> Box<dyn CipherAlgorithm> {
    match kind {
        CipherKind::Caesar => Box::new(CaesarCipher::new()),
        CipherKind::Vigenere => Box::new(VigenereCipher::new()),
    }
}

/// Cipher families known to the crate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CipherKind {
    /// Fixed integer shift
    Caesar,

    /// Keyword driven polyalphabetic shift
    Vigenere,
}

/// Shifts an ASCII letter by `shift` positions, wrapping inside its own case.
///
/// Any other character is returned unchanged. The shift may be any integer.
pub(crate) fn shift_letter(ch: char, shift: i64) -> char {
    let base = if ch.is_ascii_uppercase() {
        b'A'
    } else if ch.is_ascii_lowercase() {
        b'a'
    } else {
        return ch;
    };
    let offset = (ch as u8 - base) as i64;
    let shifted = (offset + shift).rem_euclid(26) as u8;
    (base + shifted) as char
}
