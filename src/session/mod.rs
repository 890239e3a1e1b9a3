use clap::Parser;

pub mod config;
pub mod display;
mod engine;
pub mod errors;
pub mod input;
pub mod main;
pub mod menu;
pub mod policy;
pub mod retry;

pub use engine::{Session, SessionSummary};

/// The Cipher Forge - terminal cryptography simulator
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Optional TOML file overriding retry and key limits
    #[arg(short, long)]
    pub config: Option<String>,
}
