//! Diagnostic logging setup for the binary.
//!
//! Events go to stderr so they never mix with the player-facing prompts
//! on stdout. The filter honours `RUST_LOG`; the default keeps this crate
//! at debug and everything else at info.

/// Initialize logging for the application. Call once, from `main`.
pub fn init_logging() {
    use tracing_subscriber::EnvFilter;
    use tracing_subscriber::fmt;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,noughts_cli=debug"));

    let subscriber = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .expect("Failed to set global default subscriber");
}
