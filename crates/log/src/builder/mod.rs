//! Logger builder

use tracing_subscriber::{EnvFilter, Registry, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::{Config, Format};
use crate::error::{LogError, LogResult};

/// Builds and installs the global subscriber.
#[derive(Debug)]
pub struct LoggerBuilder {
    config: Config,
}

/// Composes `Registry + filter + fmt layer` and installs it, once per format
/// since each format layer has its own type.
macro_rules! try_init_subscriber {
    ($filter:expr, $fmt_layer:expr) => {
        Registry::default()
            .with($filter)
            .with($fmt_layer)
            .try_init()
            .map_err(|e| LogError::Init(e.to_string()))
    };
}

impl LoggerBuilder {
    /// Create builder from config
    #[must_use]
    pub fn from_config(config: Config) -> Self {
        Self { config }
    }

    /// The filter that will be installed.
    ///
    /// The configured level must parse even when `RUST_LOG` is set; a valid
    /// `RUST_LOG` then replaces it.
    pub fn filter(&self) -> LogResult<EnvFilter> {
        let configured = EnvFilter::try_new(&self.config.level).map_err(|e| LogError::Filter {
            directive: self.config.level.clone(),
            reason: e.to_string(),
        })?;
        Ok(EnvFilter::try_from_default_env().unwrap_or(configured))
    }

    /// Build and install the logger. Events are written to stderr.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - The level directive cannot be parsed
    /// - A global subscriber is already installed
    pub fn build(self) -> LogResult<()> {
        let filter = self.filter()?;
        let Config {
            format,
            ansi,
            target,
            ..
        } = self.config;

        let layer = tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(target);

        match format {
            Format::Pretty => try_init_subscriber!(filter, layer.pretty().with_ansi(ansi)),
            Format::Compact => try_init_subscriber!(filter, layer.compact().with_ansi(ansi)),
            Format::Json => try_init_subscriber!(filter, layer.json().with_ansi(false)),
        }
    }
}
