use std::sync::Once;

use env_logger::{Builder, WriteStyle};
use log::LevelFilter;

/// Environment variable consulted when no explicit filter is given.
pub const FILTER_ENV: &str = "RUST_LOG";

/// How the studio (or any host binary) wants engine records printed.
///
/// Filter precedence: `env_filter`, then [`FILTER_ENV`], then
/// `default_level`. Filters use `env_logger` syntax, e.g.
/// `"drawpp_engine::render=trace,warn"`.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub env_filter: Option<String>,
    pub default_level: LevelFilter,
    pub write_style: WriteStyle,
    /// Prefix records with a seconds-resolution timestamp. Off keeps render
    /// logs diffable between runs.
    pub timestamps: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            env_filter: None,
            default_level: LevelFilter::Info,
            write_style: WriteStyle::Auto,
            timestamps: false,
        }
    }
}

impl LoggingConfig {
    pub fn with_filter(filter: impl Into<String>) -> Self {
        Self { env_filter: Some(filter.into()), ..Self::default() }
    }

    /// The filter string that wins given `env` as the environment's value.
    fn filter_directives(&self, env: Option<String>) -> String {
        self.env_filter
            .clone()
            .or(env.filter(|s| !s.trim().is_empty()))
            .unwrap_or_else(|| self.default_level.to_string().to_lowercase())
    }

    fn builder(&self, env: Option<String>) -> Builder {
        let mut builder = Builder::new();
        builder.parse_filters(&self.filter_directives(env));
        builder.write_style(self.write_style);
        if self.timestamps {
            builder.format_timestamp_secs();
        } else {
            builder.format_timestamp(None);
        }
        builder
    }
}

static INIT: Once = Once::new();

/// Installs the global logger once; later calls are ignored.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let mut builder = config.builder(std::env::var(FILTER_ENV).ok());

        // A host binary may have installed its own logger first.
        if builder.try_init().is_err() {
            log::debug!("global logger already set; keeping it");
            return;
        }

        log::debug!("logging initialized (max level {})", log::max_level());
    });
}
