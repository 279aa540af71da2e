//! Layered settings: defaults → `ojkit.toml` (or `--config`) → env → flags

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use figment::Figment;
use figment::providers::{Env, Format as _, Serialized, Toml};
use ojkit_validator::validators::DEFAULT_THROUGHPUT;
use serde::{Deserialize, Serialize};

/// Config file picked up from the working directory when `--config` is absent.
pub const DEFAULT_CONFIG_FILE: &str = "ojkit.toml";

/// Resolved settings for one invocation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Operations per second assumed by `--time-limit`.
    pub throughput: f64,
    /// Normalize test-case text before packing.
    #[serde(deserialize_with = "ojkit_log::flag::deserialize")]
    pub normalize: bool,
    pub log: ojkit_log::Config,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            throughput: DEFAULT_THROUGHPUT,
            normalize: false,
            log: ojkit_log::Config::default(),
        }
    }
}

/// Values given on the command line; `None` leaves lower layers in place.
#[derive(Debug, Default)]
pub struct Overrides {
    pub config: Option<PathBuf>,
    pub log_level: Option<String>,
    pub log_format: Option<ojkit_log::Format>,
    pub throughput: Option<f64>,
    pub normalize: bool,
}

impl Settings {
    pub fn load(overrides: &Overrides) -> Result<Self> {
        if let Some(path) = &overrides.config
            && !path.is_file()
        {
            bail!("config file not found: {}", path.display());
        }
        figment(overrides)
            .extract()
            .context("invalid configuration")
    }
}

fn figment(overrides: &Overrides) -> Figment {
    let file: &Path = overrides
        .config
        .as_deref()
        .unwrap_or_else(|| Path::new(DEFAULT_CONFIG_FILE));

    let mut figment = Figment::from(Serialized::defaults(Settings::default()))
        .merge(Toml::file(file))
        .merge(Env::raw().only(&["RUST_LOG"]).map(|_| "log.level".into()))
        .merge(Env::prefixed("OJKIT_").only(&["throughput", "normalize"]))
        .merge(log_env());

    if let Some(level) = &overrides.log_level {
        figment = figment.merge(Serialized::default("log.level", level));
    }
    if let Some(format) = overrides.log_format {
        figment = figment.merge(Serialized::default("log.format", format));
    }
    if let Some(throughput) = overrides.throughput {
        figment = figment.merge(Serialized::default("throughput", throughput));
    }
    if overrides.normalize {
        figment = figment.merge(Serialized::default("normalize", true));
    }
    figment
}

/// Logging variables and the `log.*` keys they set.
const LOG_ENV: [(&str, &str); 5] = [
    ("OJKIT_LOG", "log.level"),
    ("OJKIT_LOG_FORMAT", "log.format"),
    ("OJKIT_LOG_TIME", "log.display.time"),
    ("OJKIT_LOG_SOURCE", "log.display.source"),
    ("OJKIT_LOG_COLORS", "log.display.colors"),
];

/// The `OJKIT_LOG*` variables `ojkit_log` reads. `RUST_LOG` is merged
/// separately, below them.
fn log_env() -> Env {
    Env::raw()
        .only(&LOG_ENV.map(|(var, _)| var))
        .map(|key| {
            LOG_ENV
                .iter()
                .find(|(var, _)| key.as_str().eq_ignore_ascii_case(var))
                .map_or_else(|| key.as_str().to_owned().into(), |(_, path)| (*path).into())
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::Jail;
    use ojkit_log::Format;
    use pretty_assertions::assert_eq;

    fn load(overrides: &Overrides) -> figment::error::Result<Settings> {
        Settings::load(overrides).map_err(|e| format!("{e:#}").into())
    }

    #[test]
    fn test_defaults() {
        Jail::expect_with(|_| {
            let settings = load(&Overrides::default())?;
            assert_eq!(settings, Settings::default());
            Ok(())
        });
    }

    #[test]
    fn test_file_then_env_then_flags() {
        Jail::expect_with(|jail| {
            jail.create_file(
                DEFAULT_CONFIG_FILE,
                r#"
                throughput = 1000
                normalize = true

                [log]
                level = "warn"
                format = "pretty"
                "#,
            )?;
            let settings = load(&Overrides::default())?;
            assert_eq!(settings.throughput, 1000.0);
            assert!(settings.normalize);
            assert_eq!(settings.log.level, "warn");
            assert_eq!(settings.log.format, Format::Pretty);

            jail.set_env("OJKIT_THROUGHPUT", "2000");
            jail.set_env("OJKIT_LOG", "debug");
            let settings = load(&Overrides::default())?;
            assert_eq!(settings.throughput, 2000.0);
            assert_eq!(settings.log.level, "debug");

            let settings = load(&Overrides {
                log_level: Some("trace".into()),
                log_format: Some(Format::Json),
                throughput: Some(3000.0),
                ..Overrides::default()
            })?;
            assert_eq!(settings.throughput, 3000.0);
            assert_eq!(settings.log.level, "trace");
            assert_eq!(settings.log.format, Format::Json);
            Ok(())
        });
    }

    #[test]
    fn test_explicit_config_path() {
        Jail::expect_with(|jail| {
            jail.create_file("custom.toml", "throughput = 42")?;
            let settings = load(&Overrides {
                config: Some("custom.toml".into()),
                ..Overrides::default()
            })?;
            assert_eq!(settings.throughput, 42.0);

            let missing = load(&Overrides {
                config: Some("absent.toml".into()),
                ..Overrides::default()
            });
            assert!(missing.is_err());
            Ok(())
        });
    }

    #[test]
    fn test_unrelated_env_is_ignored() {
        Jail::expect_with(|jail| {
            jail.set_env("OJKIT_CONFIG", "elsewhere.toml");
            jail.set_env("OJKIT_PROFILE", "fast");
            jail.set_env("OJKIT_LOG_FILE", "ojkit.log");
            let settings = load(&Overrides::default())?;
            assert_eq!(settings, Settings::default());
            Ok(())
        });
    }

    #[test]
    fn test_env_accepts_any_case_format_and_numeric_switches() {
        Jail::expect_with(|jail| {
            jail.set_env("OJKIT_LOG_FORMAT", "JSON");
            jail.set_env("OJKIT_NORMALIZE", "1");
            let settings = load(&Overrides::default())?;
            assert_eq!(settings.log.format, Format::Json);
            assert!(settings.normalize);

            jail.set_env("OJKIT_NORMALIZE", "0");
            assert!(!load(&Overrides::default())?.normalize);

            jail.set_env("OJKIT_NORMALIZE", "yes");
            assert!(load(&Overrides::default())?.normalize);

            jail.set_env("OJKIT_NORMALIZE", "maybe");
            assert!(load(&Overrides::default()).is_err());
            Ok(())
        });
    }

    #[test]
    fn test_log_display_env_and_rust_log() {
        Jail::expect_with(|jail| {
            jail.create_file(DEFAULT_CONFIG_FILE, "[log]\nlevel = \"error\"\n")?;
            jail.set_env("RUST_LOG", "warn");
            jail.set_env("OJKIT_LOG_TIME", "0");
            jail.set_env("OJKIT_LOG_COLORS", "false");
            jail.set_env("OJKIT_LOG_SOURCE", "1");
            let settings = load(&Overrides::default())?;
            assert_eq!(settings.log.level, "warn");
            assert!(!settings.log.display.time);
            assert!(!settings.log.display.colors);
            assert!(settings.log.display.source);

            jail.set_env("OJKIT_LOG", "debug");
            assert_eq!(load(&Overrides::default())?.log.level, "debug");
            Ok(())
        });
    }
}
