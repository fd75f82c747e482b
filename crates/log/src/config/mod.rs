//! Logger configuration

mod presets;

use serde::{Deserialize, Serialize};

/// How events are rendered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    /// Multi-line, human oriented.
    Pretty,
    /// One line per event.
    #[default]
    Compact,
    /// Newline-delimited JSON.
    Json,
}

impl std::str::FromStr for Format {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "pretty" => Ok(Self::Pretty),
            "compact" => Ok(Self::Compact),
            "json" => Ok(Self::Json),
            other => Err(format!("unknown log format `{other}`")),
        }
    }
}

/// Logger configuration.
///
/// Deserializes from a `[log]` table; missing keys take the defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// `EnvFilter` directive, e.g. `"info"` or `"warn,formgate_form=debug"`.
    pub level: String,
    pub format: Format,
    /// Colored output. Ignored for [`Format::Json`].
    pub ansi: bool,
    /// Include the event target (module path).
    pub target: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            format: Format::Compact,
            ansi: true,
            target: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[test]
    fn partial_table_keeps_defaults() {
        let config: Config = serde_json::from_str(r#"{"format": "json"}"#).unwrap();
        assert_eq!(
            config,
            Config {
                format: Format::Json,
                ..Config::default()
            }
        );
    }

    #[test]
    fn unknown_format_is_rejected() {
        assert!(serde_json::from_str::<Config>(r#"{"format": "logfmt"}"#).is_err());
    }

    #[rstest]
    #[case("pretty", Format::Pretty)]
    #[case("Compact", Format::Compact)]
    #[case("JSON", Format::Json)]
    fn format_from_str(#[case] input: &str, #[case] expected: Format) {
        assert_eq!(input.parse::<Format>(), Ok(expected));
    }
}
