//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.countries/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::format::NumberLocale;
use crate::core::route::Route;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct CountriesConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub api: ApiConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub locale: Option<NumberLocale>,
    pub start_path: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ApiConfig {
    pub base_url: Option<String>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_API_BASE_URL: &str = "https://restcountries.com/v3.1";

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
    pub base_url: String,
    pub locale: NumberLocale,
    pub start_route: Route,
}

/// Values given on the command line. `None` = not specified.
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub base_url: Option<String>,
    pub locale: Option<NumberLocale>,
    pub start_route: Option<Route>,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.countries/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".countries").join("config.toml"))
}

/// Load config from `~/.countries/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `CountriesConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<CountriesConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(CountriesConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(CountriesConfig::default());
    }

    load_config_from(&path)
}

/// Reads and parses a config file at an explicit path.
pub fn load_config_from(path: &Path) -> Result<CountriesConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: CountriesConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

fn generate_default_config(path: &Path) {
    let default_content = r#"# Countries Configuration
# All settings are optional; defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# locale = "en"                      # "en", "fr", "de" or "plain" (population grouping)
# start_path = "/"                   # "/" or "/country/FRA"

# [api]
# base_url = "https://restcountries.com/v3.1"   # Or set COUNTRIES_API_BASE_URL
"#;

    if let Some(parent) = path.parent()
        && let Err(e) = fs::create_dir_all(parent)
    {
        warn!("Failed to create config directory: {}", e);
        return;
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(config: &CountriesConfig, cli: CliOverrides) -> ResolvedConfig {
    resolve_with_env(config, cli, |key| std::env::var(key).ok())
}

/// [`resolve`] with the environment lookup supplied by the caller.
pub fn resolve_with_env(
    config: &CountriesConfig,
    cli: CliOverrides,
    env: impl Fn(&str) -> Option<String>,
) -> ResolvedConfig {
    // Base URL: CLI → env → config → default
    let base_url = cli
        .base_url
        .or_else(|| env("COUNTRIES_API_BASE_URL"))
        .or_else(|| config.api.base_url.clone())
        .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string());

    // Locale: CLI → env → config → default
    let locale = cli
        .locale
        .or_else(|| {
            let tag = env("COUNTRIES_LOCALE")?;
            let locale = NumberLocale::from_tag(&tag);
            if locale.is_none() {
                warn!("Ignoring unknown COUNTRIES_LOCALE '{}'", tag);
            }
            locale
        })
        .or(config.general.locale)
        .unwrap_or_default();

    // Start route: CLI → config → "/"
    let start_route = cli.start_route.unwrap_or_else(|| {
        match config.general.start_path.as_deref() {
            Some(path) => Route::parse(path).unwrap_or_else(|| {
                warn!("Config start_path '{}' matches no route, starting at /", path);
                Route::List
            }),
            None => Route::List,
        }
    });

    ResolvedConfig {
        base_url,
        locale,
        start_route,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn no_env(_: &str) -> Option<String> {
        None
    }

    #[test]
    fn test_default_config_is_empty() {
        let config = CountriesConfig::default();
        assert!(config.api.base_url.is_none());
        assert!(config.general.locale.is_none());
    }

    #[test]
    fn test_resolve_uses_defaults_when_empty() {
        let resolved = resolve_with_env(&CountriesConfig::default(), CliOverrides::default(), no_env);
        assert_eq!(
            resolved,
            ResolvedConfig {
                base_url: DEFAULT_API_BASE_URL.to_string(),
                locale: NumberLocale::En,
                start_route: Route::List,
            }
        );
    }

    #[test]
    fn test_resolve_env_wins_over_config() {
        let config = CountriesConfig {
            general: GeneralConfig {
                locale: Some(NumberLocale::De),
                ..Default::default()
            },
            api: ApiConfig {
                base_url: Some("http://from-config".to_string()),
            },
        };
        let env = |key: &str| match key {
            "COUNTRIES_API_BASE_URL" => Some("http://from-env".to_string()),
            "COUNTRIES_LOCALE" => Some("fr".to_string()),
            _ => None,
        };
        let resolved = resolve_with_env(&config, CliOverrides::default(), env);
        assert_eq!(resolved.base_url, "http://from-env");
        assert_eq!(resolved.locale, NumberLocale::Fr);
    }

    #[test]
    fn test_resolve_cli_wins_over_env() {
        let env = |key: &str| match key {
            "COUNTRIES_API_BASE_URL" => Some("http://from-env".to_string()),
            "COUNTRIES_LOCALE" => Some("fr".to_string()),
            _ => None,
        };
        let cli = CliOverrides {
            base_url: Some("http://from-cli".to_string()),
            locale: Some(NumberLocale::Plain),
            start_route: None,
        };
        let resolved = resolve_with_env(&CountriesConfig::default(), cli, env);
        assert_eq!(resolved.base_url, "http://from-cli");
        assert_eq!(resolved.locale, NumberLocale::Plain);
    }

    #[test]
    fn test_resolve_unknown_env_locale_falls_through_to_config() {
        let config = CountriesConfig {
            general: GeneralConfig {
                locale: Some(NumberLocale::De),
                ..Default::default()
            },
            ..Default::default()
        };
        let env = |key: &str| (key == "COUNTRIES_LOCALE").then(|| "klingon".to_string());
        let resolved = resolve_with_env(&config, CliOverrides::default(), env);
        assert_eq!(resolved.locale, NumberLocale::De);
    }

    #[test]
    fn test_generated_default_config_parses_as_empty() {
        let dir = std::env::temp_dir().join(format!("countries-config-test-{}", std::process::id()));
        let path = dir.join("config.toml");
        let _ = fs::remove_dir_all(&dir);

        generate_default_config(&path);
        assert!(path.exists());

        let config = load_config_from(&path).unwrap();
        assert!(config.general.locale.is_none());
        assert!(config.general.start_path.is_none());
        assert!(config.api.base_url.is_none());

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_resolve_cli_wins_over_config() {
        let config = CountriesConfig {
            general: GeneralConfig {
                locale: Some(NumberLocale::De),
                start_path: Some("/country/DEU".to_string()),
            },
            api: ApiConfig {
                base_url: Some("http://from-config".to_string()),
            },
        };
        let resolved = resolve_with_env(
            &config,
            CliOverrides {
                base_url: Some("http://from-cli".to_string()),
                locale: Some(NumberLocale::Fr),
                start_route: Some(Route::List),
            },
            no_env,
        );
        assert_eq!(resolved.base_url, "http://from-cli");
        assert_eq!(resolved.locale, NumberLocale::Fr);
        assert_eq!(resolved.start_route, Route::List);
    }

    #[test]
    fn test_resolve_config_start_path() {
        let config = CountriesConfig {
            general: GeneralConfig {
                start_path: Some("/country/JPN".to_string()),
                ..Default::default()
            },
            ..Default::default()
        };
        let resolved = resolve_with_env(&config, CliOverrides::default(), no_env);
        assert_eq!(resolved.start_route, Route::Detail("JPN".to_string()));
    }

    #[test]
    fn test_resolve_bad_start_path_falls_back_to_list() {
        let config = CountriesConfig {
            general: GeneralConfig {
                start_path: Some("/settings".to_string()),
                ..Default::default()
            },
            ..Default::default()
        };
        let resolved = resolve_with_env(&config, CliOverrides::default(), no_env);
        assert_eq!(resolved.start_route, Route::List);
    }

    #[test]
    fn test_sparse_toml_parses() {
        let toml_str = r#"
[general]
locale = "de"
"#;
        let config: CountriesConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.general.locale, Some(NumberLocale::De));
        assert!(config.general.start_path.is_none());
        assert!(config.api.base_url.is_none());
    }

    #[test]
    fn test_full_toml_parses() {
        let toml_str = r#"
[general]
locale = "fr"
start_path = "/country/FRA"

[api]
base_url = "http://localhost:9000/v3.1"
"#;
        let config: CountriesConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.general.locale, Some(NumberLocale::Fr));
        assert_eq!(config.general.start_path.as_deref(), Some("/country/FRA"));
        assert_eq!(config.api.base_url.as_deref(), Some("http://localhost:9000/v3.1"));
    }

    #[test]
    fn test_unknown_locale_is_a_parse_error() {
        let toml_str = r#"
[general]
locale = "klingon"
"#;
        assert!(toml::from_str::<CountriesConfig>(toml_str).is_err());
    }

    #[test]
    fn test_load_config_from_missing_file_is_io_error() {
        let path = std::env::temp_dir().join("countries-config-does-not-exist.toml");
        assert!(matches!(load_config_from(&path), Err(ConfigError::Io(_))));
    }
}
