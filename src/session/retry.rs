//! Bounded retry for interactive steps

use crate::session::display::{DisplayEvent, DisplaySink};
use crate::session::errors::{SessionError, Step};
use crate::session::input::LineSource;

/// Bounded retry loop shared by every interactive step
///
/// Counters live only for the duration of one [`RetryPolicy::run`] call, so
/// each step starts with a fresh budget.
#[derive(Debug, Clone, Copy)]
pub struct RetryPolicy {
    max_attempts: u32,
}

impl RetryPolicy {
    pub fn new(max_attempts: u32) -> Self {
        Self { max_attempts }
    }

    /// Runs `attempt` until it succeeds or the budget is spent
    ///
    /// Validation failures are shown to the user together with the number of
    /// attempts left. Any other error leaves the loop immediately.
    ///
    /// # Returns
    /// * The first successful value
    /// * `RetryExhausted(step)` once every attempt was rejected
    pub fn run<S, D, T, F>(
        &self,
        step: Step,
        source: &mut S,
        display: &mut D,
        mut attempt: F,
    ) -> Result<T, SessionError>
    where
        S: LineSource + ?Sized,
        D: DisplaySink + ?Sized,
        F: FnMut(&mut S, &mut D) -> Result<T, SessionError>,
    {
        let mut attempts = 0;
        loop {
            let reason = match attempt(source, display) {
                Ok(value) => return Ok(value),
                Err(SessionError::Validation(reason)) => reason,
                Err(e) => return Err(e),
            };

            attempts += 1;
            tracing::debug!(
                "{} rejected ({}/{}): {}",
                step,
                attempts,
                self.max_attempts,
                reason
            );
            display.show(DisplayEvent::Error(&format!("Error: {}", reason)));

            if attempts >= self.max_attempts {
                tracing::warn!("{} failed after {} attempts", step, attempts);
                return Err(SessionError::RetryExhausted(step));
            }
            display.show(DisplayEvent::Notice(&format!(
                "Attempts remaining: {}",
                self.max_attempts - attempts
            )));
        }
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::new(3)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::display::TranscriptDisplay;
    use crate::session::input::ReaderSource;
    use std::io::Cursor;

    fn read_even(source: &mut ReaderSource<Cursor<&str>>) -> Result<i64, SessionError> {
        let line = source.next_line()?.ok_or(SessionError::InputClosed)?;
        match line.trim().parse::<i64>() {
            Ok(n) if n % 2 == 0 => Ok(n),
            _ => Err(SessionError::validation(format!("{} is not even", line))),
        }
    }

    #[test]
    fn test_succeeds_after_failures() {
        let mut source = ReaderSource::new(Cursor::new("1\n3\n4\n"));
        let mut display = TranscriptDisplay::new();
        let value = RetryPolicy::new(3)
            .run(Step::Key, &mut source, &mut display, |s, _| read_even(s))
            .unwrap();
        assert_eq!(value, 4);
        assert_eq!(display.errors(), ["Error: 1 is not even", "Error: 3 is not even"]);
        assert!(display.contains("Attempts remaining: 2"));
        assert!(display.contains("Attempts remaining: 1"));
    }

    #[test]
    fn test_exhausted() {
        let mut source = ReaderSource::new(Cursor::new("1\n3\n5\n6\n"));
        let mut display = TranscriptDisplay::new();
        let err = RetryPolicy::new(3)
            .run(Step::Plaintext, &mut source, &mut display, |s, _| read_even(s))
            .unwrap_err();
        assert!(matches!(err, SessionError::RetryExhausted(Step::Plaintext)));
        assert_eq!(display.errors().len(), 3);
        assert!(!display.contains("Attempts remaining: 0"));
        // the fourth line is left unread
        assert_eq!(source.next_line().unwrap().as_deref(), Some("6"));
    }

    #[test]
    fn test_other_errors_pass_through() {
        let mut source = ReaderSource::new(Cursor::new("1\n"));
        let mut display = TranscriptDisplay::new();
        let err = RetryPolicy::new(3)
            .run(Step::Key, &mut source, &mut display, |s, _| read_even(s))
            .unwrap_err();
        assert!(matches!(err, SessionError::InputClosed));
        assert_eq!(display.errors().len(), 1);
    }
}
