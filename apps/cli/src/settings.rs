//! Layered settings: defaults, then `formgate.toml`, then `FORMGATE_*`
//! environment variables, then command-line flags.

use std::path::{Path, PathBuf};

use anyhow::{Context, bail};
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use serde::{Deserialize, Serialize};

use crate::cli::{CheckArgs, OutputFormat};

pub const DEFAULT_CONFIG_FILE: &str = "formgate.toml";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub should_validate: bool,
    pub output: OutputFormat,
    pub log: formgate_log::Config,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            should_validate: true,
            output: OutputFormat::Text,
            log: formgate_log::Config::default(),
        }
    }
}

/// Flag values that override every other layer when given.
#[derive(Debug, Default, Serialize)]
struct Overrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    should_validate: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    output: Option<OutputFormat>,
}

impl Settings {
    /// Figment without the flag layer. Nested keys use `__`, e.g.
    /// `FORMGATE_LOG__LEVEL=debug`.
    pub fn figment(config: Option<&Path>) -> Figment {
        let file = config.map_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE), Path::to_path_buf);
        Figment::from(Serialized::defaults(Self::default()))
            .merge(Toml::file(file))
            .merge(Env::prefixed("FORMGATE_").split("__").ignore(&["config"]))
    }

    pub fn load(args: &CheckArgs) -> anyhow::Result<Self> {
        if let Some(path) = &args.config
            && !path.is_file()
        {
            bail!("settings file {} does not exist", path.display());
        }

        let overrides = Overrides {
            should_validate: args.no_validate.then_some(false),
            output: args.output,
        };
        Self::figment(args.config.as_deref())
            .merge(Serialized::defaults(overrides))
            .extract()
            .context("failed to load settings")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::Jail;
    use formgate_log::Format as LogFormat;

    fn args(extra: &[&str]) -> CheckArgs {
        use clap::Parser;
        let argv = ["formgate", "check", "form.json"].iter().chain(extra);
        match crate::cli::Cli::parse_from(argv).command {
            crate::cli::Command::Check(args) => args,
            crate::cli::Command::Completions { .. } => unreachable!(),
        }
    }

    #[test]
    fn defaults_without_any_layer() {
        Jail::expect_with(|_| {
            assert_eq!(Settings::load(&args(&[])).unwrap(), Settings::default());
            Ok(())
        });
    }

    #[test]
    fn layers_apply_in_order() {
        Jail::expect_with(|jail| {
            jail.create_file(
                DEFAULT_CONFIG_FILE,
                r#"
                    should_validate = false
                    output = "json"

                    [log]
                    level = "info"
                    format = "pretty"
                "#,
            )?;
            jail.set_env("FORMGATE_LOG__LEVEL", "debug");

            let settings = Settings::load(&args(&[])).unwrap();
            assert!(!settings.should_validate);
            assert_eq!(settings.output, OutputFormat::Json);
            assert_eq!(settings.log.level, "debug");
            assert_eq!(settings.log.format, LogFormat::Pretty);

            let settings = Settings::load(&args(&["--output", "text"])).unwrap();
            assert_eq!(settings.output, OutputFormat::Text);
            Ok(())
        });
    }

    #[test]
    fn no_validate_flag_wins_over_env() {
        Jail::expect_with(|jail| {
            jail.set_env("FORMGATE_SHOULD_VALIDATE", "true");
            assert!(!Settings::load(&args(&["--no-validate"])).unwrap().should_validate);
            Ok(())
        });
    }

    #[test]
    fn explicit_missing_file_is_an_error() {
        Jail::expect_with(|_| {
            assert!(Settings::load(&args(&["--config", "absent.toml"])).is_err());
            Ok(())
        });
    }
}
