//! Session configuration
//!
//! Loaded from an optional TOML file with two tables, both optional:
//!
//! ```toml
//! [session]
//! max_attempts = 3
//! max_plaintext_len = 1000
//!
//! [keys]
//! caesar_min_shift = -25
//! caesar_max_shift = 25
//! vigenere_max_len = 20
//! ```
//!
//! Unknown tables or keys are rejected so a typo never goes unnoticed.

use std::fs;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default, rename = "session")]
    pub session_config: SessionConfig,

    #[serde(default, rename = "keys")]
    pub key_config: KeyConfig,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SessionConfig {
    // attempts allowed per interactive step before giving up
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,

    // longest plaintext accepted, in characters, after trimming
    #[serde(default = "default_max_plaintext_len")]
    pub max_plaintext_len: usize,
}

fn default_max_attempts() -> u32 {
    3
}

fn default_max_plaintext_len() -> usize {
    1000
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            max_attempts: default_max_attempts(),
            max_plaintext_len: default_max_plaintext_len(),
        }
    }
}

/// key limits enforced by the session on top of the key syntax checks
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct KeyConfig {
    #[serde(default = "default_caesar_min_shift")]
    pub caesar_min_shift: i32,

    #[serde(default = "default_caesar_max_shift")]
    pub caesar_max_shift: i32,

    // in characters
    #[serde(default = "default_vigenere_max_len")]
    pub vigenere_max_len: usize,
}

fn default_caesar_min_shift() -> i32 {
    -25
}

fn default_caesar_max_shift() -> i32 {
    25
}

fn default_vigenere_max_len() -> usize {
    20
}

impl Default for KeyConfig {
    fn default() -> Self {
        Self {
            caesar_min_shift: default_caesar_min_shift(),
            caesar_max_shift: default_caesar_max_shift(),
            vigenere_max_len: default_vigenere_max_len(),
        }
    }
}

impl Config {
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.session_config.max_attempts == 0 {
            anyhow::bail!("session.max_attempts must be at least 1");
        }
        if self.session_config.max_plaintext_len == 0 {
            anyhow::bail!("session.max_plaintext_len must be at least 1");
        }
        if self.key_config.caesar_min_shift > self.key_config.caesar_max_shift {
            anyhow::bail!(
                "keys.caesar_min_shift ({}) is greater than caesar_max_shift ({})",
                self.key_config.caesar_min_shift,
                self.key_config.caesar_max_shift
            );
        }
        if self.key_config.vigenere_max_len == 0 {
            anyhow::bail!("keys.vigenere_max_len must be at least 1");
        }
        Ok(())
    }
}

pub fn load(path: &str) -> anyhow::Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    config.validate()?;
    Ok(config)
}
