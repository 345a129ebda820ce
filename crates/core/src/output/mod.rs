//! Output formatting module
//!
//! This module provides formatters for HTML, JSON, YAML, ANSI and plain text
//! output of a built breadcrumb trail.

pub mod ansi;
mod json;
mod yaml;

pub use ansi::format_trail_ansi;
pub use json::format_json;
pub use yaml::format_yaml;

use crate::builder::BreadcrumbBuilder;
use crate::context::SiteContext;
use thiserror::Error;

/// Output format errors
#[derive(Error, Debug)]
pub enum FormatError {
    #[error("JSON serialization error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("YAML serialization error: {0}")]
    YamlError(#[from] serde_yaml::Error),
}

/// Available output formats
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Templates joined by the separator
    #[default]
    Html,
    /// Templates wrapped in list items
    List,
    /// JSON trail
    Json,
    /// YAML trail
    Yaml,
    /// ANSI colored text
    Ansi,
    /// Entry text joined by the separator
    Text,
}

/// Format a built trail in the specified format
pub fn format_output<C: SiteContext + ?Sized>(
    builder: &BreadcrumbBuilder<'_, C>,
    format: OutputFormat,
) -> Result<String, FormatError> {
    match format {
        OutputFormat::Html => Ok(builder.render(builder.separator())),
        OutputFormat::List => Ok(builder.render_list(builder.list_element())),
        OutputFormat::Json => format_json(&builder.trail()),
        OutputFormat::Yaml => format_yaml(&builder.trail()),
        OutputFormat::Ansi => Ok(format_trail_ansi(&builder.trail())),
        OutputFormat::Text => Ok(builder.trail().path()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BreadcrumbConfig;
    use crate::models::ViewKind;
    use crate::testing::{blog_site, view_of};

    #[test]
    fn test_format_output_variants() {
        let site = blog_site().with_view(view_of(ViewKind::Page, Some(2)));
        let config = BreadcrumbConfig::default()
            .with_separator(" > ")
            .with_list_element("ul");
        let builder = BreadcrumbBuilder::new(&site, &config);

        assert_eq!(
            format_output(&builder, OutputFormat::Text).unwrap(),
            "Home > About > Team"
        );
        assert_eq!(
            format_output(&builder, OutputFormat::Html).unwrap(),
            builder.render(" > ")
        );
        assert!(format_output(&builder, OutputFormat::List)
            .unwrap()
            .starts_with("<ul>"));
        assert!(format_output(&builder, OutputFormat::Json)
            .unwrap()
            .contains("\"view\": \"page\""));
    }
}
