//! Diagnostic logging setup.
//!
//! User-facing messages go through [`crate::status!`] and [`crate::warn!`];
//! this module wires `tracing` for everything else.

use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Environment variable holding the log filter directives.
pub const LOG_ENV: &str = "MIXTL_LOG";

/// Filter used when `MIXTL_LOG` is unset, by `-v` count.
pub const fn default_directive(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "mixtl_cli=debug,warn",
        _ => "debug",
    }
}

/// Builds the filter from `MIXTL_LOG`, falling back to the verbosity default.
pub fn env_filter(verbose: u8) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)))
}

/// Installs the global subscriber, writing to stderr.
///
/// Safe to call more than once; later calls are no-ops.
pub fn init(verbose: u8, no_color: bool) {
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(verbose > 1)
        .with_ansi(!no_color);

    let _ = tracing_subscriber::registry()
        .with(env_filter(verbose))
        .with(fmt_layer)
        .try_init();
}
