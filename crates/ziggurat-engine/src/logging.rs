//! Logging utilities.
//!
//! Library code logs through the `log` facade only; this module wires the
//! `env_logger` backend up for binaries and tests.

use std::sync::Once;

static INIT: Once = Once::new();

/// Initializes the global `env_logger` backend once.
///
/// Filter resolution order: the explicit `filter` argument (in `env_logger`
/// syntax, e.g. `"ziggurat_engine=debug"`), then the `RUST_LOG` environment
/// variable, then `info`. Subsequent calls are ignored, so binaries and
/// tests may call this freely.
pub fn init_logging(filter: Option<&str>) {
    INIT.call_once(|| {
        let mut builder = env_logger::Builder::new();
        match filter {
            Some(filters) => {
                builder.parse_filters(filters);
            }
            None => match std::env::var("RUST_LOG") {
                Ok(filters) => {
                    builder.parse_filters(&filters);
                }
                Err(_) => {
                    builder.filter_level(log::LevelFilter::Info);
                }
            },
        }
        builder.init();
        log::debug!("logging initialized");
    });
}
