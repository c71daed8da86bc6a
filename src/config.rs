use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

/// Config file picked up from the working directory when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "hesab.toml";

/// Top-level hesab configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HesabConfig {
    /// Server API settings.
    #[serde(default)]
    pub api: ApiToml,

    /// Date and number display settings.
    #[serde(default)]
    pub display: DisplayToml,

    /// Autocomplete search settings.
    #[serde(default)]
    pub search: SearchToml,

    /// Sales form settings.
    #[serde(default)]
    pub sales: SalesToml,
}

impl HesabConfig {
    /// Loads the config from `path`, or from [`DEFAULT_CONFIG_FILE`] if it
    /// exists, or falls back to defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => {
                let default = Path::new(DEFAULT_CONFIG_FILE);
                if default.is_file() {
                    Self::from_file(default)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    fn from_file(path: &Path) -> Result<Self> {
        let toml_str = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;
        toml::from_str(&toml_str)
            .with_context(|| format!("failed to parse TOML config: {}", path.display()))
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ApiToml {
    /// Path the application is mounted under, e.g. `/hesabpak`.
    #[serde(default)]
    pub url_prefix: String,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DisplayToml {
    #[serde(default = "default_date_separator")]
    pub date_separator: String,
    #[serde(default)]
    pub persian_digits: bool,
}

impl Default for DisplayToml {
    fn default() -> Self {
        Self {
            date_separator: default_date_separator(),
            persian_digits: false,
        }
    }
}

fn default_date_separator() -> String {
    "/".to_string()
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SearchToml {
    #[serde(default = "default_limit")]
    pub default_limit: usize,
}

impl Default for SearchToml {
    fn default() -> Self {
        Self {
            default_limit: default_limit(),
        }
    }
}

fn default_limit() -> usize {
    hesab_search::DEFAULT_LIMIT
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SalesToml {
    #[serde(default = "default_max_rows")]
    pub max_rows: usize,
}

impl Default for SalesToml {
    fn default() -> Self {
        Self {
            max_rows: default_max_rows(),
        }
    }
}

fn default_max_rows() -> usize {
    hesab_sales::DEFAULT_MAX_ROWS
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;

    fn write_config(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn empty_file_uses_defaults() {
        let file = write_config("");
        let config = HesabConfig::load(Some(file.path())).unwrap();
        assert_eq!(config.api.url_prefix, "");
        assert_eq!(config.display.date_separator, "/");
        assert!(!config.display.persian_digits);
        assert_eq!(config.search.default_limit, 10);
        assert_eq!(config.sales.max_rows, 15);
    }

    #[test]
    fn full_file() {
        let file = write_config(
            r#"
[api]
url_prefix = "/hesabpak"

[display]
date_separator = "-"
persian_digits = true

[search]
default_limit = 20

[sales]
max_rows = 30
"#,
        );
        let config = HesabConfig::load(Some(file.path())).unwrap();
        assert_eq!(config.api.url_prefix, "/hesabpak");
        assert_eq!(config.display.date_separator, "-");
        assert!(config.display.persian_digits);
        assert_eq!(config.search.default_limit, 20);
        assert_eq!(config.sales.max_rows, 30);
    }

    #[test]
    fn unknown_keys_rejected() {
        let file = write_config("[display]\ndate_sep = \"-\"\n");
        let err = HesabConfig::load(Some(file.path())).unwrap_err();
        assert!(format!("{err:#}").contains("failed to parse TOML config"));
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = HesabConfig::load(Some(&dir.path().join("nope.toml"))).unwrap_err();
        assert!(err.to_string().contains("failed to read config file"));
    }
}
