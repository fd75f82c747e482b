//! # formgate-log
//!
//! Subscriber setup for formgate binaries: a level filter, one of three
//! output formats, and `RUST_LOG` taking precedence over the configured
//! level.
//!
//! ```no_run
//! use formgate_log::{Config, Format};
//!
//! let config = Config {
//!     format: Format::Json,
//!     ..Config::default()
//! };
//! formgate_log::init(&config).expect("logger already installed");
//! tracing::info!("ready");
//! ```

pub mod builder;
pub mod config;
pub mod error;

pub use builder::LoggerBuilder;
pub use config::{Config, Format};
pub use error::{LogError, LogResult};

/// Installs the global subscriber described by `config`.
///
/// # Errors
///
/// Fails when the level filter does not parse or a global subscriber is
/// already set.
pub fn init(config: &Config) -> LogResult<()> {
    LoggerBuilder::from_config(config.clone()).build()
}
