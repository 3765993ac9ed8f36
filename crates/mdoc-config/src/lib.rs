//! Configuration management for mdoc.
//!
//! Parses `mdoc.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories.
//!
//! CLI settings can be applied during load via [`CliSettings`].
//!
//! ```toml
//! [document]
//! title = "Release notes"
//! numbered_headers = true
//!
//! [styles]
//! preset = "default"   # or "none"
//! th = "background-color: #eee;"
//! ```

use std::path::{Path, PathBuf};

use mdoc_builder::HtmlStyles;
use serde::Deserialize;

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override document title.
    pub title: Option<String>,
    /// Override header numbering.
    pub numbered_headers: Option<bool>,
    /// Override style preset.
    pub preset: Option<StylePreset>,
}

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "mdoc.toml";

/// Application configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Document configuration.
    pub document: DocumentConfig,
    /// HTML style configuration.
    pub styles: StylesConfig,

    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

/// Document configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct DocumentConfig {
    /// Title embedded in rendered HTML pages.
    pub title: String,
    /// Whether headers carry section numbers.
    pub numbered_headers: bool,
}

impl Default for DocumentConfig {
    fn default() -> Self {
        Self {
            title: "mdoc".to_owned(),
            numbered_headers: true,
        }
    }
}

/// Base set of HTML styles.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StylePreset {
    /// Baseline stylesheet and table borders.
    #[default]
    Default,
    /// No styling at all.
    None,
}

/// HTML style configuration.
///
/// Each explicit entry replaces the corresponding preset value.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct StylesConfig {
    /// Base preset.
    pub preset: StylePreset,
    /// Stylesheet for the page `<style>` block.
    pub global_css: Option<String>,
    /// Inline style of tables.
    pub table: Option<String>,
    /// Inline style prefix of header cells.
    pub th: Option<String>,
    /// Inline style prefix of data cells.
    pub td: Option<String>,
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `mdoc.toml` in current directory and parents.
    ///
    /// CLI settings are applied after loading, allowing CLI arguments to take
    /// precedence over config file values.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist or parsing fails.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = Self::discover_config() {
            Self::load_from_file(&discovered)?
        } else {
            tracing::debug!("No {CONFIG_FILENAME} found, using defaults");
            Self::default()
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
            config.validate()?;
        }

        Ok(config)
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(title) = &settings.title {
            self.document.title.clone_from(title);
        }
        if let Some(numbered) = settings.numbered_headers {
            self.document.numbered_headers = numbered;
        }
        if let Some(preset) = settings.preset {
            self.styles.preset = preset;
        }
    }

    /// Build the HTML styles described by the `[styles]` section.
    pub fn html_styles(&self) -> HtmlStyles {
        let mut styles = match self.styles.preset {
            StylePreset::Default => HtmlStyles::default_styles(),
            StylePreset::None => HtmlStyles::new(),
        };
        if let Some(css) = &self.styles.global_css {
            styles = styles.global_css(css.as_str());
        }
        if let Some(table) = &self.styles.table {
            styles = styles.table_style(table.as_str());
        }
        if let Some(th) = &self.styles.th {
            styles = styles.th_style(th.as_str());
        }
        if let Some(td) = &self.styles.td {
            styles = styles.td_style(td.as_str());
        }
        styles
    }

    /// Search for config file in current directory and parents.
    fn discover_config() -> Option<PathBuf> {
        let mut current = std::env::current_dir().ok()?;
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config = Self::from_toml_str(&content)?;
        config.config_path = Some(path.to_path_buf());
        tracing::info!(path = %path.display(), "Loaded configuration");
        Ok(config)
    }

    /// Parse and validate configuration from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.document.title.trim().is_empty() {
            return Err(ConfigError::Validation(
                "document.title cannot be empty".to_owned(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.document.title, "mdoc");
        assert!(config.document.numbered_headers);
        assert_eq!(config.styles.preset, StylePreset::Default);
        assert_eq!(config.html_styles(), HtmlStyles::default());
    }

    #[test]
    fn test_parse_minimal_config() {
        let config = Config::from_toml_str("").unwrap();
        assert_eq!(config.document.title, "mdoc");
        assert!(config.config_path.is_none());
    }

    #[test]
    fn test_parse_document_config() {
        let toml = r#"
[document]
title = "Release notes"
numbered_headers = false
"#;
        let config = Config::from_toml_str(toml).unwrap();
        assert_eq!(config.document.title, "Release notes");
        assert!(!config.document.numbered_headers);
    }

    #[test]
    fn test_preset_none_with_overrides() {
        let toml = r#"
[styles]
preset = "none"
th = "color: red;"
"#;
        let config = Config::from_toml_str(toml).unwrap();
        let styles = config.html_styles();
        assert!(styles.global_css_content().is_none());
        assert!(styles.table_style_content().is_none());
        assert_eq!(styles.th_style_content(), Some("color: red;"));
    }

    #[test]
    fn test_default_preset_with_override() {
        let toml = r#"
[styles]
table = "border: 0;"
"#;
        let styles = Config::from_toml_str(toml).unwrap().html_styles();
        assert_eq!(styles.table_style_content(), Some("border: 0;"));
        assert_eq!(styles.td_style_content(), Some("vertical-align: middle;"));
    }

    #[test]
    fn test_unknown_preset_is_parse_error() {
        let toml = r#"
[styles]
preset = "fancy"
"#;
        let err = Config::from_toml_str(toml).unwrap_err();
        assert!(
            matches!(err, ConfigError::Parse(_)),
            "Expected ConfigError::Parse, got {err:?}"
        );
    }

    #[test]
    fn test_empty_title_is_rejected() {
        let toml = r#"
[document]
title = "  "
"#;
        let err = Config::from_toml_str(toml).unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
        assert!(err.to_string().contains("document.title"));
    }

    #[test]
    fn test_apply_cli_settings() {
        let mut config = Config::default();
        let overrides = CliSettings {
            title: Some("Override".to_owned()),
            numbered_headers: Some(false),
            preset: Some(StylePreset::None),
        };

        config.apply_cli_settings(&overrides);

        assert_eq!(config.document.title, "Override");
        assert!(!config.document.numbered_headers);
        assert_eq!(config.html_styles(), HtmlStyles::new());
    }

    #[test]
    fn test_load_explicit_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("custom.toml");
        std::fs::write(&path, "[document]\ntitle = \"From file\"\n").unwrap();

        let config = Config::load(Some(&path), None).unwrap();

        assert_eq!(config.document.title, "From file");
        assert_eq!(config.config_path, Some(path));
    }

    #[test]
    fn test_load_missing_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.toml");

        let err = Config::load(Some(&path), None).unwrap_err();

        assert!(matches!(err, ConfigError::NotFound(p) if p == path));
    }

    #[test]
    fn test_load_rejects_empty_cli_title() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mdoc.toml");
        std::fs::write(&path, "").unwrap();
        let overrides = CliSettings {
            title: Some(String::new()),
            ..Default::default()
        };

        let err = Config::load(Some(&path), Some(&overrides)).unwrap_err();

        assert!(matches!(err, ConfigError::Validation(_)));
    }
}
