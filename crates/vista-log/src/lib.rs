//! Structured logging for the vista tools.
//!
//! Library crates log through the `log` facade; this crate installs a `tracing`
//! subscriber that also captures those records. Console output carries uptime
//! timestamps and module paths. Debug builds can additionally write JSON lines to
//! a file for later inspection.

use std::path::Path;

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};
use vista_config::Config;

/// Filter used when neither `RUST_LOG` nor the config sets a level.
pub const DEFAULT_FILTER: &str = "info";

/// Name of the JSON log file written in debug builds.
pub const LOG_FILE_NAME: &str = "vista.log";

/// Initialize the global tracing subscriber.
///
/// `RUST_LOG` takes precedence, then `config.debug.log_level`, then
/// [`DEFAULT_FILTER`]. When `debug_build` is set and `log_dir` can be created, a
/// JSON file layer writes to `log_dir/vista.log`.
///
/// # Examples
///
/// ```no_run
/// use vista_config::Config;
/// use vista_log::init_logging;
///
/// let config = Config::default();
/// init_logging(Some(std::path::Path::new("./logs")), true, Some(&config));
/// ```
pub fn init_logging(log_dir: Option<&Path>, debug_build: bool, config: Option<&Config>) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter_directives(config)));

    let console_layer = fmt::layer()
        .with_target(true)
        .with_thread_names(false)
        .with_level(true)
        .with_writer(std::io::stderr)
        .with_timer(fmt::time::uptime());

    let subscriber = tracing_subscriber::registry()
        .with(env_filter)
        .with(console_layer);

    if debug_build
        && let Some(log_dir) = log_dir
        && std::fs::create_dir_all(log_dir).is_ok()
        && let Ok(log_file) = std::fs::File::create(log_dir.join(LOG_FILE_NAME))
    {
        let file_layer = fmt::layer()
            .with_writer(log_file)
            .with_ansi(false)
            .with_target(true)
            .with_timer(fmt::time::uptime())
            .json();

        subscriber.with(file_layer).init();
        return;
    }

    subscriber.init();
}

/// Filter directives from the config's log level, or [`DEFAULT_FILTER`].
pub fn filter_directives(config: Option<&Config>) -> String {
    config
        .map(|c| c.debug.log_level.trim())
        .filter(|level| !level.is_empty())
        .unwrap_or(DEFAULT_FILTER)
        .to_string()
}

/// An `EnvFilter` with the default directives.
pub fn default_env_filter() -> EnvFilter {
    EnvFilter::new(DEFAULT_FILTER)
}
