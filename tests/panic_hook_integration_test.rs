//! Integration tests for the quiet panic hook
//!
//! Runs in its own test binary because the hook is process-wide. Covers:
//! 1. A panicking cipher is logged once through tracing
//! 2. The user still sees exactly one "Unexpected Error" line

use cipherforge::crypto::{CipherAlgorithm, CipherKind, CipherResult};
use cipherforge::registry::CipherRegistry;
use cipherforge::session::config::Config;
use cipherforge::session::display::TranscriptDisplay;
use cipherforge::session::input::ReaderSource;
use cipherforge::session::Session;
use cipherforge::utils::install_panic_hook;
use std::io::{Cursor, Write};
use std::sync::{Arc, Mutex};

struct Exploding {}

impl CipherAlgorithm for Exploding {
    fn name(&self) -> &str {
        "Exploding"
    }

    fn kind(&self) -> CipherKind {
        CipherKind::Caesar
    }

    fn encrypt(&self, _plaintext: &str, _key: &str) -> CipherResult {
        panic!("cipher exploded")
    }

    fn decrypt(&self, _ciphertext: &str, _key: &str) -> CipherResult {
        panic!("cipher exploded")
    }
}

/// Log sink shared between the subscriber and the test
#[derive(Clone, Default)]
struct SharedLog(Arc<Mutex<Vec<u8>>>);

impl Write for SharedLog {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

#[test]
fn test_panic_is_logged_once_and_reported_once() {
    let log = SharedLog::default();
    let writer = log.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(move || writer.clone())
        .with_ansi(false)
        .finish();

    install_panic_hook();

    let mut registry = CipherRegistry::new();
    registry.register("3", Box::new(Exploding {}));
    let mut session = Session::new(
        registry,
        ReaderSource::new(Cursor::new("1\n3\nhello\n1\nn\n".as_bytes())),
        TranscriptDisplay::new(),
        &Config::default(),
    );
    let summary = tracing::subscriber::with_default(subscriber, || session.run());

    assert_eq!(summary.errors, 1);
    assert_eq!(session.display().count("Unexpected Error"), 1);
    assert!(session.display().contains("Unexpected Error: cipher exploded"));
    assert!(session.display().contains("Thank you for using The Cipher Forge!"));

    let _ = std::panic::take_hook();
    let logged = String::from_utf8(log.0.lock().unwrap().clone()).unwrap();
    assert_eq!(logged.matches("panic: ").count(), 1);
    assert!(logged.contains("cipher exploded"));
    assert!(!logged.contains("thread 'main' panicked"));
}
