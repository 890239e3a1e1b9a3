use clap::Parser;
use std::io;
use crate::registry::CipherRegistry;
use crate::session::config::{self, Config};
use crate::session::display::ConsoleDisplay;
use crate::session::input::ReaderSource;
use crate::session::{Args, Session};
use crate::utils;

pub fn run_session() {
    let args = Args::parse();

    if let Err(e) = utils::init_tracing() {
        eprintln!("Failed to initialize logging: {}", e);
        return;
    }
    utils::install_panic_hook();

    let cfg = match &args.config {
        Some(path) => match config::load(path) {
            Ok(cfg) => cfg,
            Err(e) => {
                tracing::error!("Invalid configuration {}: {}", path, e);
                eprintln!("Failed to load configuration from {}: {}", path, e);
                return;
            }
        },
        None => Config::default(),
    };
    tracing::debug!("config: {:?}", cfg);

    let source = ReaderSource::new(io::stdin().lock());
    let mut session = Session::new(CipherRegistry::new(), source, ConsoleDisplay::new(), &cfg);
    session.run();
}
