use std::sync::Once;

use log::LevelFilter;

/// Logger configuration for hosts without a logger of their own.
///
/// `env_filter` uses the `env_logger` filter syntax ("warn",
/// "imbridge=debug"). When it is unset, `RUST_LOG` is consulted, then the
/// `info` level applies. `bridge_level` overrides the level of this crate's
/// records only, which is handy for tracing input translation without
/// turning on the host's debug output.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub env_filter: Option<String>,
    pub bridge_level: Option<LevelFilter>,
    pub write_style: env_logger::WriteStyle,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            env_filter: None,
            bridge_level: None,
            write_style: env_logger::WriteStyle::Auto,
        }
    }
}

static INIT: Once = Once::new();

/// Installs `env_logger` as the global logger once.
///
/// Later calls are ignored, as is the case where the host application already
/// installed a different logger.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let mut builder = env_logger::Builder::new();

        match config.env_filter.or_else(|| std::env::var("RUST_LOG").ok()) {
            Some(filter) => {
                builder.parse_filters(&filter);
            }
            None => {
                builder.filter_level(LevelFilter::Info);
            }
        }

        if let Some(level) = config.bridge_level {
            builder.filter_module(env!("CARGO_CRATE_NAME"), level);
        }

        builder.write_style(config.write_style);

        if builder.try_init().is_err() {
            return;
        }

        log::debug!("bridge logging initialized");
    });
}
