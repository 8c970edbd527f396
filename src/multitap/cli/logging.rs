use tracing_subscriber::EnvFilter;

pub const LOG_ENV: &str = "MULTITAP_LOG";

/// Install the stderr log subscriber.
///
/// `MULTITAP_LOG` takes an `EnvFilter` directive (e.g. `multitap=trace`). Without it
/// only warnings are shown, or debug events with `--verbose`.
pub fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .try_init();
}
