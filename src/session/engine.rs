//! Interactive encryption session
//!
//! [`Session`] owns the registry, the line source and the display sink, and
//! walks the user from the main menu through one or more encryptions.

use std::any::Any;
use std::panic::{catch_unwind, AssertUnwindSafe};

use crate::crypto::CipherKind;
use crate::registry::CipherRegistry;
use crate::session::config::Config;
use crate::session::display::{DisplayEvent, DisplaySink};
use crate::session::errors::{SessionError, Step};
use crate::session::input::{LineSource, NumericToken};
use crate::session::menu::MenuOption;
use crate::session::policy::InputPolicy;
use crate::session::retry::RetryPolicy;

/// What the top-level loop should do after a menu round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
}

/// Counters reported when a session ends
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionSummary {
    /// Menu rounds that completed without error
    pub rounds: usize,
    pub encryptions: usize,
    pub errors: usize,
}

/// Interactive encryption session
///
/// Drives the menu loop against a line source and a display sink:
///
/// ```text
/// menu ─► cipher ─► plaintext ─► key ─► encrypt ─► result ─► again? ─┐
///   ▲                                                                 │
///   └─────────────────────────────────────────────────────────────────┘
/// ```
///
/// Every free-form step retries under [`RetryPolicy`]. A step that runs out
/// of attempts, or any unexpected fault including a panic, returns control to
/// the menu loop, which asks whether to keep going. Only an explicit exit, a
/// declined confirmation or a closed input stream ends the session.
pub struct Session<S: LineSource, D: DisplaySink> {
    registry: CipherRegistry,
    source: S,
    display: D,
    retry: RetryPolicy,
    policy: InputPolicy,
    summary: SessionSummary,
}

impl<S: LineSource, D: DisplaySink> Session<S, D> {
    pub fn new(registry: CipherRegistry, source: S, display: D, config: &Config) -> Self {
        Self {
            registry,
            source,
            display,
            retry: RetryPolicy::new(config.session_config.max_attempts),
            policy: InputPolicy::from_config(config),
            summary: SessionSummary::default(),
        }
    }

    pub fn display(&self) -> &D {
        &self.display
    }

    /// Runs the menu loop until the user leaves
    pub fn run(&mut self) -> SessionSummary {
        self.notice("Welcome to The Cipher Forge");
        self.notice("Terminal Cryptography Simulator");

        loop {
            let outcome = catch_unwind(AssertUnwindSafe(|| self.menu_round())).unwrap_or_else(
                |panic| Err(SessionError::Unexpected(panic_message(panic.as_ref()))),
            );

            let keep_running = match outcome {
                Ok(Flow::Continue) => {
                    self.summary.rounds += 1;
                    true
                }
                Ok(Flow::Exit) => false,
                Err(SessionError::InputClosed) => {
                    tracing::info!("input closed, ending session");
                    false
                }
                Err(e) => self.recover(e),
            };
            if !keep_running {
                break;
            }
        }

        tracing::info!(
            "session finished: {} rounds, {} encryptions, {} errors",
            self.summary.rounds,
            self.summary.encryptions,
            self.summary.errors
        );
        self.notice("Thank you for using The Cipher Forge!");
        self.summary
    }

    /// Reports a failed round and asks whether to keep the application running
    fn recover(&mut self, e: SessionError) -> bool {
        self.summary.errors += 1;
        let question = match &e {
            SessionError::Unexpected(reason) => {
                tracing::error!("unexpected application error: {}", reason);
                self.error(&format!("Unexpected Error: {}", reason));
                self.error("Please report this issue if it persists.");
                "An unexpected error occurred. Would you like to continue?"
            }
            SessionError::RetryExhausted(Step::MenuSelection) => {
                self.error(&format!("Input Error: {}", e));
                "Would you like to try again?"
            }
            _ => {
                tracing::warn!("input validation error: {}", e);
                self.error(&format!("Input Error: {}", e));
                "Would you like to return to the main menu?"
            }
        };
        self.confirm(question)
    }

    fn menu_round(&mut self) -> Result<Flow, SessionError> {
        match self.select_menu_option()? {
            MenuOption::Encrypt => self.encryption_loop(),
            MenuOption::ViewAlgorithms => {
                let entries: Vec<_> = self.registry.entries().collect();
                self.display.show(DisplayEvent::Algorithms(&entries, &self.policy));
                self.wait_for_enter()?;
                Ok(Flow::Continue)
            }
            MenuOption::Help => {
                self.display.show(DisplayEvent::Help(&self.policy));
                self.wait_for_enter()?;
                Ok(Flow::Continue)
            }
            MenuOption::Exit => Ok(Flow::Exit),
        }
    }

    fn encryption_loop(&mut self) -> Result<Flow, SessionError> {
        loop {
            let (token, kind) = self.select_cipher()?;
            let plaintext = self.read_plaintext()?;
            let key = self.read_key(kind)?;

            self.notice("Processing encryption...");
            let cipher = self
                .registry
                .get_cipher(&token)
                .ok_or_else(|| SessionError::Unexpected(format!("cipher {} disappeared", token)))?;
            let result = cipher.encrypt(&plaintext, &key);
            tracing::info!(
                "{} on {} chars: {}",
                cipher.name(),
                plaintext.chars().count(),
                if result.is_success() { "success" } else { "failed" }
            );
            self.display.show(DisplayEvent::Result(&result));
            self.summary.encryptions += 1;

            if !self.confirm("Would you like to encrypt another message?") {
                return Ok(Flow::Continue);
            }
        }
    }

    fn select_menu_option(&mut self) -> Result<MenuOption, SessionError> {
        self.retry.run(
            Step::MenuSelection,
            &mut self.source,
            &mut self.display,
            |source, display| {
                display.show(DisplayEvent::Menu(&MenuOption::ALL));
                display.show(DisplayEvent::Prompt(&format!(
                    "Select an option (1-{}): ",
                    MenuOption::ALL.len()
                )));
                match source.next_int()? {
                    None => Err(SessionError::InputClosed),
                    Some(NumericToken::NotInt) => {
                        Err(SessionError::validation("Please enter a valid number."))
                    }
                    Some(NumericToken::Int(value)) => MenuOption::from_value(value).ok_or_else(|| {
                        SessionError::validation(format!(
                            "Invalid option. Please select 1-{}",
                            MenuOption::ALL.len()
                        ))
                    }),
                }
            },
        )
    }

    /// Returns the registry token of the chosen cipher and its kind
    fn select_cipher(&mut self) -> Result<(String, CipherKind), SessionError> {
        let registry = &self.registry;
        let listing = registry.enumerate();
        let choices = listing.iter().map(|(token, _)| *token).collect::<Vec<_>>().join(", ");

        self.retry.run(
            Step::CipherSelection,
            &mut self.source,
            &mut self.display,
            |source, display| {
                display.show(DisplayEvent::CipherList(&listing));
                display.show(DisplayEvent::Prompt(&format!("Select cipher ({}): ", choices)));
                match source.next_int()? {
                    None => Err(SessionError::InputClosed),
                    Some(NumericToken::NotInt) => Err(SessionError::validation(format!(
                        "Please enter a valid number ({}).",
                        choices
                    ))),
                    Some(NumericToken::Int(value)) => {
                        let token = value.to_string();
                        match registry.get_cipher(&token) {
                            Some(cipher) => Ok((token, cipher.kind())),
                            None => Err(SessionError::validation(format!(
                                "Invalid cipher selection. Please choose {}.",
                                choices
                            ))),
                        }
                    }
                }
            },
        )
    }

    fn read_plaintext(&mut self) -> Result<String, SessionError> {
        let policy = &self.policy;
        self.retry.run(
            Step::Plaintext,
            &mut self.source,
            &mut self.display,
            |source, display| {
                display.show(DisplayEvent::Prompt("Enter text to encrypt: "));
                let line = source.next_line()?.ok_or(SessionError::InputClosed)?;
                policy.check_plaintext(&line)
            },
        )
    }

    fn read_key(&mut self, kind: CipherKind) -> Result<String, SessionError> {
        let policy = &self.policy;
        let prompt = policy.key_prompt(kind);
        self.retry.run(
            Step::Key,
            &mut self.source,
            &mut self.display,
            |source, display| {
                display.show(DisplayEvent::Prompt(&prompt));
                let line = source.next_line()?.ok_or(SessionError::InputClosed)?;
                policy.check_key(kind, &line)
            },
        )
    }

    /// `y`/`yes` in any case confirms; anything else, or no input, declines
    fn confirm(&mut self, question: &str) -> bool {
        self.display.show(DisplayEvent::Prompt(&format!("{} (y/n): ", question)));
        match self.source.next_line() {
            Ok(Some(answer)) => {
                let answer = answer.trim().to_lowercase();
                answer == "y" || answer == "yes"
            }
            Ok(None) => false,
            Err(e) => {
                tracing::error!("failed to read confirmation: {}", e);
                false
            }
        }
    }

    fn wait_for_enter(&mut self) -> Result<(), SessionError> {
        self.display.show(DisplayEvent::Prompt("Press Enter to continue..."));
        self.source.next_line()?.ok_or(SessionError::InputClosed)?;
        Ok(())
    }

    fn notice(&mut self, message: &str) {
        self.display.show(DisplayEvent::Notice(message));
    }

    fn error(&mut self, message: &str) {
        self.display.show(DisplayEvent::Error(message));
    }
}

fn panic_message(panic: &(dyn Any + Send)) -> String {
    if let Some(message) = panic.downcast_ref::<&str>() {
        message.to_string()
    } else if let Some(message) = panic.downcast_ref::<String>() {
        message.clone()
    } else {
        "panic with unknown payload".to_string()
    }
}
