//! Display sinks
//!
//! The session never prints directly. It emits [`DisplayEvent`]s and a sink
//! decides where the rendered lines go: the terminal for [`ConsoleDisplay`],
//! an in-memory transcript for [`TranscriptDisplay`].

use std::io::Write;

use crate::crypto::{CipherAlgorithm, CipherKind, CipherResult};
use crate::session::menu::MenuOption;
use crate::session::policy::InputPolicy;

const HEADER_SEPARATOR: &str = "============================================================";
const SECTION_SEPARATOR: &str = "---------------------------------------------------";

pub enum DisplayEvent<'a> {
    Menu(&'a [MenuOption]),
    /// `(token, name)` pairs to pick from
    CipherList(&'a [(&'a str, &'a str)]),
    /// Question awaiting an answer on the same line
    Prompt(&'a str),
    Result(&'a CipherResult),
    Error(&'a str),
    Notice(&'a str),
    Help(&'a InputPolicy),
    Algorithms(&'a [(&'a str, &'a dyn CipherAlgorithm)], &'a InputPolicy),
}

impl DisplayEvent<'_> {
    /// Plain text lines for this event
    pub fn render(&self) -> Vec<String> {
        match self {
            DisplayEvent::Menu(options) => {
                let mut lines = vec![String::new(), "Main Menu".to_string()];
                lines.extend(
                    options
                        .iter()
                        .map(|o| format!("{}. {}", o.value(), o.description())),
                );
                lines
            }
            DisplayEvent::CipherList(ciphers) => {
                let mut lines = section("CIPHER SELECTION");
                lines.push("Available Cipher Algorithms:".to_string());
                lines.extend(ciphers.iter().map(|(token, name)| format!("{}. {}", token, name)));
                lines
            }
            DisplayEvent::Prompt(text) => vec![text.to_string()],
            DisplayEvent::Result(result) => render_result(result),
            DisplayEvent::Error(message) => vec![message.to_string()],
            DisplayEvent::Notice(message) => vec![message.to_string()],
            DisplayEvent::Help(policy) => render_help(policy),
            DisplayEvent::Algorithms(ciphers, policy) => render_algorithms(ciphers, policy),
        }
    }
}

fn section(title: &str) -> Vec<String> {
    vec![
        String::new(),
        SECTION_SEPARATOR.to_string(),
        title.to_string(),
        SECTION_SEPARATOR.to_string(),
    ]
}

fn render_result(result: &CipherResult) -> Vec<String> {
    let mut lines = vec![
        String::new(),
        HEADER_SEPARATOR.to_string(),
        "ENCRYPTION RESULT".to_string(),
        HEADER_SEPARATOR.to_string(),
        format!("Algorithm: {}", result.algorithm()),
        format!("Key: {}", result.masked_key()),
        format!("Status: {}", if result.is_success() { "SUCCESS" } else { "FAILED" }),
        String::new(),
    ];
    if result.is_success() {
        lines.push(format!("Encrypted Text: {}", result.ciphertext()));
        lines.push(String::new());
        lines.push(format!("Character Count: {}", result.char_count()));
    } else {
        lines.push("Encryption failed!".to_string());
        lines.push("Reason: Invalid key format for selected cipher".to_string());
        lines.push("Please check your key and try again.".to_string());
    }
    lines.push(HEADER_SEPARATOR.to_string());
    lines
}

fn key_rule(kind: CipherKind, policy: &InputPolicy) -> String {
    match kind {
        CipherKind::Caesar => format!(
            "Integer ({} to {})",
            policy.caesar_min_shift, policy.caesar_max_shift
        ),
        CipherKind::Vigenere => format!(
            "Alphabetic string (1-{} characters)",
            policy.vigenere_max_len
        ),
    }
}

fn render_algorithms(
    ciphers: &[(&str, &dyn CipherAlgorithm)],
    policy: &InputPolicy,
) -> Vec<String> {
    let mut lines = vec![
        String::new(),
        HEADER_SEPARATOR.to_string(),
        "AVAILABLE CIPHER ALGORITHMS".to_string(),
        HEADER_SEPARATOR.to_string(),
    ];
    lines.extend(ciphers.iter().map(|(token, cipher)| format!("{}: {}", token, cipher.name())));
    lines.push(String::new());
    lines.push("Detailed Information:".to_string());

    for (token, cipher) in ciphers {
        let (kind_text, method, security, use_case) = match cipher.kind() {
            CipherKind::Caesar => (
                "Substitution cipher",
                "Shifts each letter by a fixed number",
                "Low (easily breakable)",
                "Educational purposes",
            ),
            CipherKind::Vigenere => (
                "Polyalphabetic substitution cipher",
                "Uses keyword for variable shifts",
                "Medium (stronger than Caesar)",
                "Historical cryptography",
            ),
        };
        lines.push(String::new());
        lines.push(format!("{}. {}:", token, cipher.name()));
        lines.push(format!("   Type: {}", kind_text));
        lines.push(format!("   Method: {}", method));
        lines.push(format!("   Key: {}", key_rule(cipher.kind(), policy)));
        lines.push(format!("   Security: {}", security));
        lines.push(format!("   Use case: {}", use_case));
    }
    lines
}

fn render_help(policy: &InputPolicy) -> Vec<String> {
    let mut lines = section("HELP INFORMATION");
    lines.extend(
        [
            "The Cipher Forge - Terminal Cryptography Simulator".to_string(),
            String::new(),
            "Available Ciphers:".to_string(),
            "Caesar Cipher: Shifts each letter by a fixed number of positions".to_string(),
            format!("  Key: {}", key_rule(CipherKind::Caesar, policy)),
            "  Example: HELLO with key 3 becomes KHOOR".to_string(),
            String::new(),
            "Vigenere Cipher: Uses a keyword to shift letters variably".to_string(),
            format!("  Key: {}", key_rule(CipherKind::Vigenere, policy)),
            "  Example: HELLO with key KEY becomes RIJVS".to_string(),
            String::new(),
            "Features:".to_string(),
            "Preserves non-alphabetic characters".to_string(),
            "Maintains original case".to_string(),
            "Input validation and error handling".to_string(),
            format!("Maximum text length: {} characters", policy.max_plaintext_len),
        ],
    );
    lines
}

pub trait DisplaySink {
    fn show(&mut self, event: DisplayEvent<'_>);
}

/// Terminal sink: errors go to stderr, everything else to stdout
pub struct ConsoleDisplay {}

impl ConsoleDisplay {
    pub fn new() -> Self {
        Self {}
    }
}

impl Default for ConsoleDisplay {
    fn default() -> Self {
        Self::new()
    }
}

impl DisplaySink for ConsoleDisplay {
    fn show(&mut self, event: DisplayEvent<'_>) {
        match event {
            DisplayEvent::Prompt(text) => {
                print!("\n{}", text);
                // prompts have no newline, push them out before blocking on input
                let _ = std::io::stdout().flush();
            }
            DisplayEvent::Error(_) => {
                for line in event.render() {
                    eprintln!("{}", line);
                }
            }
            _ => {
                for line in event.render() {
                    println!("{}", line);
                }
            }
        }
    }
}

/// In-memory sink recording every rendered line
///
/// Useful for scripted runs and for asserting on what a user would have seen.
#[derive(Debug, Clone, Default)]
pub struct TranscriptDisplay {
    lines: Vec<String>,
    errors: Vec<String>,
}

impl TranscriptDisplay {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every line shown, errors included, in order
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    pub fn contains(&self, needle: &str) -> bool {
        self.lines.iter().any(|line| line.contains(needle))
    }

    pub fn count(&self, needle: &str) -> usize {
        self.lines.iter().filter(|line| line.contains(needle)).count()
    }
}

impl DisplaySink for TranscriptDisplay {
    fn show(&mut self, event: DisplayEvent<'_>) {
        let lines = event.render();
        if let DisplayEvent::Error(_) = event {
            self.errors.extend(lines.iter().cloned());
        }
        self.lines.extend(lines);
    }
}
