//! Tracing setup.
//!
//! - `RUST_LOG` sets the filter (default `info,cf_coach=debug,tower_http=info`).
//! - `LOG_FORMAT=json` switches to structured JSON lines; anything else is
//!   the human-readable format.

use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "info,cf_coach=debug,tower_http=info";

pub fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true);

    match std::env::var("LOG_FORMAT").as_deref() {
        Ok("json") => builder.json().init(),
        _ => builder.init(),
    }
}
