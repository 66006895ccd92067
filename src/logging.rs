//! Logging setup for the command-line front end.

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Environment variable holding the log filter.
pub const LOG_ENV: &str = "AGROVOLT_LOG";

const DEFAULT_FILTER: &str = "agrovolt=info,warn";

/// Installs a stderr subscriber filtered by `AGROVOLT_LOG`.
///
/// `verbose` raises the default level to `debug` when the variable is unset.
/// Calling it twice is harmless; the second call keeps the first subscriber.
///
/// ```bash
/// AGROVOLT_LOG=debug agrovolt estimate farm.json
/// ```
pub fn init(verbose: bool) {
    let default = if verbose {
        "agrovolt=debug,warn"
    } else {
        DEFAULT_FILTER
    };
    let env_filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default));

    let _ = tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .compact(),
        )
        .try_init();
}
