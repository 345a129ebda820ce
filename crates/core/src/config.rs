//! Configuration module for the breadcrumb builder
//!
//! This module provides the label, template and date format settings that
//! control how a trail is assembled and rendered, plus loading them from
//! TOML, YAML or JSON files.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Default separator between rendered entries
pub const DEFAULT_SEPARATOR: &str = " / ";

/// Default container element for list rendering
pub const DEFAULT_LIST_ELEMENT: &str = "ol";

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error reading {path}: {source}")]
    IoError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(#[from] DocumentError),
}

/// Errors from parsing a structured document
#[derive(Error, Debug)]
pub enum DocumentError {
    #[error("Unsupported file extension: {0:?}")]
    UnsupportedFormat(PathBuf),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    YamlError(#[from] serde_yaml::Error),

    #[error("TOML error: {0}")]
    TomlError(#[from] toml::de::Error),
}

/// Structured document formats accepted for config and site files
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Json,
    Yaml,
    Toml,
}

impl DocumentFormat {
    /// Determine format from file extension
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_string_lossy().to_lowercase();
        match ext.as_str() {
            "json" => Some(DocumentFormat::Json),
            "yaml" | "yml" => Some(DocumentFormat::Yaml),
            "toml" => Some(DocumentFormat::Toml),
            _ => None,
        }
    }

    /// Deserialize text in this format
    pub fn parse<T: DeserializeOwned>(&self, text: &str) -> Result<T, DocumentError> {
        Ok(match self {
            DocumentFormat::Json => serde_json::from_str(text)?,
            DocumentFormat::Yaml => serde_yaml::from_str(text)?,
            DocumentFormat::Toml => toml::from_str(text)?,
        })
    }
}

/// Resolved labels for the home and posts index entries
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Names {
    pub home: String,
    pub index: String,
}

/// Caller supplied label overrides. Empty strings count as unset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameOverrides {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub home: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub index: Option<String>,
}

impl NameOverrides {
    /// Apply the overrides on top of computed defaults
    pub fn merge_into(&self, defaults: Names) -> Names {
        Names {
            home: non_empty(&self.home).unwrap_or(defaults.home),
            index: non_empty(&self.index).unwrap_or(defaults.index),
        }
    }
}

fn non_empty(value: &Option<String>) -> Option<String> {
    value.as_ref().filter(|v| !v.is_empty()).cloned()
}

/// Entry templates in printf style: `%1$s` is the text, `%2$s` the url
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Templates {
    pub link: String,
    pub current: String,
    pub plain: String,
}

impl Default for Templates {
    fn default() -> Self {
        Self {
            link: r#"<a href="%2$s" class="breadcrumb-item link">%1$s</a>"#.to_string(),
            current: r#"<span class="breadcrumb-item current">%s</span>"#.to_string(),
            plain: r#"<span class="breadcrumb-item span">%s</span>"#.to_string(),
        }
    }
}

/// Partial template overrides from configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateOverrides {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plain: Option<String>,
}

impl TemplateOverrides {
    /// Apply the overrides on top of base templates
    pub fn merge_into(&self, base: Templates) -> Templates {
        Templates {
            link: non_empty(&self.link).unwrap_or(base.link),
            current: non_empty(&self.current).unwrap_or(base.current),
            plain: non_empty(&self.plain).unwrap_or(base.plain),
        }
    }
}

/// chrono format strings for dated archive views
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateFormats {
    #[serde(default = "default_day_format")]
    pub day: String,

    #[serde(default = "default_month_format")]
    pub month: String,

    #[serde(default = "default_year_format")]
    pub year: String,
}

impl Default for DateFormats {
    fn default() -> Self {
        Self {
            day: default_day_format(),
            month: default_month_format(),
            year: default_year_format(),
        }
    }
}

fn default_day_format() -> String {
    "%B %-d, %Y".into()
}
fn default_month_format() -> String {
    "%B %Y".into()
}
fn default_year_format() -> String {
    "%Y".into()
}

/// Configuration for building and rendering a breadcrumb trail
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreadcrumbConfig {
    /// Separator for inline rendering
    #[serde(default = "default_separator")]
    pub separator: String,

    /// Container element for list rendering
    #[serde(default = "default_list_element")]
    pub list_element: String,

    /// Label overrides
    #[serde(default)]
    pub names: NameOverrides,

    /// Template overrides
    #[serde(default)]
    pub templates: TemplateOverrides,

    /// Date formats for dated archives
    #[serde(default)]
    pub date_formats: DateFormats,

    /// Escape entry text and urls before substitution
    #[serde(default = "default_true")]
    pub escape_html: bool,
}

fn default_separator() -> String {
    DEFAULT_SEPARATOR.into()
}
fn default_list_element() -> String {
    DEFAULT_LIST_ELEMENT.into()
}
fn default_true() -> bool {
    true
}

impl Default for BreadcrumbConfig {
    fn default() -> Self {
        Self {
            separator: default_separator(),
            list_element: default_list_element(),
            names: NameOverrides::default(),
            templates: TemplateOverrides::default(),
            date_formats: DateFormats::default(),
            escape_html: true,
        }
    }
}

impl BreadcrumbConfig {
    /// Create config with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Load config from a TOML, YAML or JSON file
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let format = DocumentFormat::from_path(path)
            .ok_or_else(|| DocumentError::UnsupportedFormat(path.to_path_buf()))?;
        let text = fs::read_to_string(path).map_err(|source| ConfigError::IoError {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(format.parse(&text)?)
    }

    /// Set separator (builder pattern)
    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    /// Set list container element (builder pattern)
    pub fn with_list_element(mut self, element: impl Into<String>) -> Self {
        self.list_element = element.into();
        self
    }

    /// Set home label override (builder pattern)
    pub fn with_home_label(mut self, home: impl Into<String>) -> Self {
        self.names.home = Some(home.into());
        self
    }

    /// Set posts index label override (builder pattern)
    pub fn with_index_label(mut self, index: impl Into<String>) -> Self {
        self.names.index = Some(index.into());
        self
    }

    /// Set template overrides (builder pattern)
    pub fn with_templates(mut self, templates: TemplateOverrides) -> Self {
        self.templates = templates;
        self
    }

    /// Set date formats (builder pattern)
    pub fn with_date_formats(mut self, formats: DateFormats) -> Self {
        self.date_formats = formats;
        self
    }

    /// Set html escaping (builder pattern)
    pub fn with_escape_html(mut self, escape: bool) -> Self {
        self.escape_html = escape;
        self
    }
}
