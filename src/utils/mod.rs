use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

/// Installs the global tracing subscriber
///
/// Logs go to stderr and default to WARN so they stay out of the way of the
/// interactive prompts. Set `RUST_LOG=cipherforge=debug` to see every
/// rejected answer.
pub fn init_tracing() -> crate::Result<()> {
    // On Windows, disable ANSI colors to avoid garbage characters in console
    #[cfg(target_os = "windows")]
    let use_ansi = false;

    #[cfg(not(target_os = "windows"))]
    let use_ansi = true;

    tracing::subscriber::set_global_default(
        tracing_subscriber::FmtSubscriber::builder()
            .with_env_filter(
                EnvFilter::builder()
                    .with_default_directive(LevelFilter::WARN.into())
                    .from_env_lossy(),
            )
            .with_writer(std::io::stderr)
            .with_ansi(use_ansi)
            .with_line_number(true)
            .with_file(true)
            .finish(),
    )?;
    Ok(())
}

/// Replaces the default panic hook with one that logs through `tracing`
///
/// The session catches panics raised inside a menu round and reports them to
/// the user itself, so the runtime's own "thread 'main' panicked" banner is
/// suppressed. The panic location and payload still reach the log at ERROR.
pub fn install_panic_hook() {
    std::panic::set_hook(Box::new(|info| {
        tracing::error!("panic: {}", info);
    }));
}
