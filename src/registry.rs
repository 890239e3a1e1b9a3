//! Selection tokens to cipher mapping
//!
//! The registry owns one instance of every offered algorithm. It keeps
//! insertion order so menus list ciphers the same way on every call.

use crate::crypto::{new_cipher, CipherAlgorithm, CipherKind};

pub struct CipherRegistry {
    ciphers: Vec<(String, Box<dyn CipherAlgorithm>)>,
}

impl CipherRegistry {
    /// Creates the registry with the built-in ciphers: `1` Caesar, `2` Vigenere
    pub fn new() -> Self {
        let mut registry = Self::empty();
        registry.register("1", new_cipher(CipherKind::Caesar));
        registry.register("2", new_cipher(CipherKind::Vigenere));
        registry
    }

    pub fn empty() -> Self {
        Self {
            ciphers: Vec::new(),
        }
    }

    /// Adds a cipher under `token`
    ///
    /// Re-registering a token replaces the cipher but keeps its position.
    pub fn register(&mut self, token: &str, cipher: Box<dyn CipherAlgorithm>) {
        match self.ciphers.iter_mut().find(|(t, _)| t == token) {
            Some(slot) => slot.1 = cipher,
            None => self.ciphers.push((token.to_string(), cipher)),
        }
    }

    /// Exact-match lookup; unknown tokens yield `None`
    pub fn get_cipher(&self, token: &str) -> Option<&dyn CipherAlgorithm> {
        self.ciphers
            .iter()
            .find(|(t, _)| t == token)
            .map(|(_, cipher)| cipher.as_ref())
    }

    pub fn is_valid_choice(&self, token: &str) -> bool {
        self.get_cipher(token).is_some()
    }

    /// `(token, name)` pairs in registration order
    pub fn enumerate(&self) -> Vec<(&str, &str)> {
        self.ciphers
            .iter()
            .map(|(token, cipher)| (token.as_str(), cipher.name()))
            .collect()
    }

    /// `(token, cipher)` pairs in registration order
    pub fn entries(&self) -> impl Iterator<Item = (&str, &dyn CipherAlgorithm)> {
        self.ciphers.iter().map(entry)
    }

    pub fn len(&self) -> usize {
        self.ciphers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ciphers.is_empty()
    }
}

fn entry((token, cipher): &(String, Box<dyn CipherAlgorithm>)) -> (&str, &dyn CipherAlgorithm) {
    (token.as_str(), cipher.as_ref())
}

impl Default for CipherRegistry {
    fn default() -> Self {
        Self::new()
    }
}
