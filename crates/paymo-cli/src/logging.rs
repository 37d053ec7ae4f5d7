//! Log subscriber setup.

use tracing_subscriber::EnvFilter;

/// Install the global subscriber, writing to stderr.
///
/// `RUST_LOG` wins when set; otherwise `verbose` picks the level.
pub fn init(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();
}
