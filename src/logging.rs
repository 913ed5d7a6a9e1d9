//! Tracing initialization.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Environment variable holding the log filter directives
pub const LOG_ENV: &str = "SNIPPETS_LOG";

const DEFAULT_FILTER: &str = "snippets_core=warn";

static INIT: Once = Once::new();

/// Initialize logging to stderr.
///
/// Reads `SNIPPETS_LOG` for filter directives, e.g.
/// `SNIPPETS_LOG=snippets_core::runner=debug`. Falls back to
/// `snippets_core=warn` if unset or invalid. Stdout is left untouched so
/// exercise output stays byte-exact.
///
/// Calling this more than once is harmless.
pub fn init_tracing() {
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    install(filter);
}

/// Initialize logging with an explicit filter string (tests, embedding).
pub fn init_tracing_with_filter(filter: &str) {
    install(EnvFilter::new(filter));
}

fn install(filter: EnvFilter) {
    INIT.call_once(|| {
        let _ = tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true),
            )
            .with(filter)
            .try_init();
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_is_idempotent() {
        init_tracing_with_filter("snippets_core=debug");
        init_tracing();
        tracing::debug!("still alive after double init");
    }
}
