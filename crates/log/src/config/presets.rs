//! Configuration presets

use super::{Config, Format};

impl Config {
    /// Interactive use: pretty output at debug level.
    #[must_use]
    pub fn development() -> Self {
        Self {
            level: "debug".to_string(),
            format: Format::Pretty,
            ansi: true,
            target: true,
        }
    }

    /// Machine consumption: JSON at info level, no colors.
    #[must_use]
    pub fn production() -> Self {
        Self {
            level: "info".to_string(),
            format: Format::Json,
            ansi: false,
            target: true,
        }
    }
}
