//! Logging init: stderr only, so stdout stays free for the hero list.

use tracing_subscriber::EnvFilter;

/// Retry progress is shown by the renderer, so the quiet default keeps
/// library events off the screen.
pub fn default_filter(verbose: bool) -> &'static str {
    if verbose {
        "info,mlbb_stats=debug"
    } else {
        "warn"
    }
}

pub fn init_logging(verbose: bool) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(verbose)));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
