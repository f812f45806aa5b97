use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter directive
pub const LOG_ENV: &str = "CHROT13_LOG";

/// Enable diagnostic logging on stderr when `CHROT13_LOG` is set
/// Returns whether a subscriber was installed
pub fn init_logging(ansi: bool) -> bool {
    let filter = match EnvFilter::try_from_env(LOG_ENV) {
        Ok(filter) => filter,
        Err(_) => return false,
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(ansi)
        .with_target(false)
        .try_init()
        .is_ok()
}
