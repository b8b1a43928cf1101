//! Logger initialization for the CLI.

use std::sync::Once;

static INIT: Once = Once::new();

/// Initializes `env_logger` once.
///
/// `RUST_LOG` wins when set; otherwise `verbose` selects debug over warn.
/// Subsequent calls are ignored.
pub fn init_logging(verbose: bool) {
    INIT.call_once(|| {
        let mut builder = env_logger::Builder::new();

        if let Ok(filter) = std::env::var("RUST_LOG") {
            builder.parse_filters(&filter);
        } else if verbose {
            builder.filter_level(log::LevelFilter::Debug);
        } else {
            builder.filter_level(log::LevelFilter::Warn);
        }

        builder.format_timestamp(None).init();
        log::debug!("logging initialized");
    });
}
