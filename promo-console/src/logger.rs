// promo-console/src/logger.rs

//! Logging Infrastructure

use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "promo_console=info,promo_client=info";

/// Initialize the logger; `RUST_LOG` overrides `log_level`
pub fn init_logger(log_level: Option<&str>) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_level.unwrap_or(DEFAULT_FILTER)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
