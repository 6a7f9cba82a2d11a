//! Tracing subscriber setup for the binary

use tracing_subscriber::filter::{EnvFilter, LevelFilter};

/// Install a compact stderr subscriber
///
/// `RUST_LOG` takes precedence; otherwise the level is `warn`, or `debug`
/// with `verbose`. Calling this twice is harmless.
pub fn init_tracing(verbose: bool) {
    let default_level = if verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::WARN
    };
    let filter = EnvFilter::builder()
        .with_default_directive(default_level.into())
        .from_env_lossy();

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .try_init();
}
