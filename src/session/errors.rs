//! Session errors
//!
//! Three kinds of failure can leave an interactive step: a bad answer that
//! may be retried, a step that ran out of retries, and anything else. A
//! closed input stream is tracked separately so the session can end quietly.

use std::fmt;
use std::fmt::Display;

/// Interactive steps that accept free-form input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    MenuSelection,
    CipherSelection,
    Plaintext,
    Key,
}

impl Display for Step {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Step::MenuSelection => "menu selection".fmt(fmt),
            Step::CipherSelection => "cipher selection".fmt(fmt),
            Step::Plaintext => "text input".fmt(fmt),
            Step::Key => "key input".fmt(fmt),
        }
    }
}

#[derive(Debug)]
pub enum SessionError {
    /// The answer was rejected; the reason is shown to the user as is
    ///
    /// Covers malformed numbers, empty or oversized text, bad key syntax,
    /// keys outside the allowed range or length, and unknown selections.
    Validation(String),

    /// A step rejected every allowed attempt
    RetryExhausted(Step),

    /// The line source has no more input
    InputClosed,

    /// Anything not anticipated above: I/O failures, caught panics
    Unexpected(String),
}

impl SessionError {
    pub fn validation(reason: impl Into<String>) -> Self {
        SessionError::Validation(reason.into())
    }
}

impl std::error::Error for SessionError {}

impl Display for SessionError {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SessionError::Validation(reason) => reason.fmt(fmt),
            SessionError::RetryExhausted(step) => {
                write!(fmt, "Maximum retry attempts exceeded for {}.", step)
            }
            SessionError::InputClosed => "input stream closed".fmt(fmt),
            SessionError::Unexpected(e) => write!(fmt, "unexpected error: {}", e),
        }
    }
}

impl From<std::io::Error> for SessionError {
    fn from(e: std::io::Error) -> Self {
        SessionError::Unexpected(e.to_string())
    }
}
