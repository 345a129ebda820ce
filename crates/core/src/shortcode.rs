//! Template tag and shortcode surface
//!
//! [`render_breadcrumb`] is the single entry point hosts call from their
//! templates. [`ShortcodeRegistry`] expands `[breadcrumb sep=" > "]` style
//! tags found in content, layering the tag's attributes over a base
//! [`BreadcrumbConfig`].

use crate::builder::BreadcrumbBuilder;
use crate::config::BreadcrumbConfig;
use crate::context::SiteContext;
use regex::{Captures, Regex};
use std::collections::HashMap;
use std::sync::LazyLock;
use tracing::debug;

/// Tag name of the breadcrumb shortcode
pub const BREADCRUMB_TAG: &str = "breadcrumb";

static SHORTCODE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[([A-Za-z0-9_-]+)((?:\s[^\]]*)?)\]").unwrap());

static ATTRIBUTE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"([\w-]+)\s*=\s*(?:"([^"]*)"|'([^']*)'|([^\s"']+))"#).unwrap()
});

/// Render the breadcrumb for the current request as html
pub fn render_breadcrumb<C: SiteContext + ?Sized>(
    site: &C,
    separator: &str,
    home: Option<&str>,
    index: Option<&str>,
) -> String {
    BreadcrumbBuilder::with_labels(site, separator, home, index).render(separator)
}

/// Parse `name="value"`, `name='value'` and `name=value` pairs
pub fn parse_attributes(input: &str) -> HashMap<String, String> {
    ATTRIBUTE
        .captures_iter(input)
        .map(|caps| {
            let value = caps
                .get(2)
                .or_else(|| caps.get(3))
                .or_else(|| caps.get(4))
                .map(|m| m.as_str())
                .unwrap_or_default();
            (caps[1].to_lowercase(), value.to_string())
        })
        .collect()
}

/// Attributes accepted by the breadcrumb shortcode. Unset attributes keep
/// the base configuration's value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShortcodeAttrs {
    pub sep: Option<String>,
    pub home: Option<String>,
    pub index: Option<String>,
}

impl ShortcodeAttrs {
    /// Pick known attributes, ignoring the rest. Empty labels count as unset.
    pub fn from_attributes(attrs: &HashMap<String, String>) -> Self {
        Self {
            sep: attrs.get("sep").cloned(),
            home: attrs.get("home").filter(|v| !v.is_empty()).cloned(),
            index: attrs.get("index").filter(|v| !v.is_empty()).cloned(),
        }
    }

    /// Parse from a raw attribute string
    pub fn parse(input: &str) -> Self {
        Self::from_attributes(&parse_attributes(input))
    }

    /// Layer these attributes over `base`
    pub fn apply(&self, base: &BreadcrumbConfig) -> BreadcrumbConfig {
        let mut config = base.clone();
        if let Some(sep) = &self.sep {
            config.separator = sep.clone();
        }
        if let Some(home) = &self.home {
            config.names.home = Some(home.clone());
        }
        if let Some(index) = &self.index {
            config.names.index = Some(index.clone());
        }
        config
    }

    /// Render the breadcrumb with these attributes over the default configuration
    pub fn render<C: SiteContext + ?Sized>(&self, site: &C) -> String {
        self.render_with(site, &BreadcrumbConfig::default())
    }

    /// Render the breadcrumb with these attributes over `base`
    pub fn render_with<C: SiteContext + ?Sized>(&self, site: &C, base: &BreadcrumbConfig) -> String {
        let config = self.apply(base);
        BreadcrumbBuilder::new(site, &config).render(&config.separator)
    }
}

/// Shortcode handler: parsed attributes and the site in, html out
pub type ShortcodeHandler = Box<dyn Fn(&HashMap<String, String>, &dyn SiteContext) -> String>;

/// Registered shortcodes by tag name
#[derive(Default)]
pub struct ShortcodeRegistry {
    handlers: HashMap<String, ShortcodeHandler>,
}

impl ShortcodeRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry with the breadcrumb shortcode registered
    pub fn with_breadcrumb() -> Self {
        Self::with_breadcrumb_config(BreadcrumbConfig::default())
    }

    /// Create a registry whose breadcrumb shortcode renders over `config`
    pub fn with_breadcrumb_config(config: BreadcrumbConfig) -> Self {
        let mut registry = Self::new();
        registry.register(BREADCRUMB_TAG, move |attrs, site| {
            ShortcodeAttrs::from_attributes(attrs).render_with(site, &config)
        });
        registry
    }

    /// Register a handler, replacing any previous one for the tag
    pub fn register<F>(&mut self, tag: &str, handler: F)
    where
        F: Fn(&HashMap<String, String>, &dyn SiteContext) -> String + 'static,
    {
        if self.contains(tag) {
            debug!(tag, "replacing shortcode handler");
        }
        self.handlers.insert(tag.to_string(), Box::new(handler));
    }

    /// Check if a tag is registered
    pub fn contains(&self, tag: &str) -> bool {
        self.handlers.contains_key(tag)
    }

    /// Replace every registered shortcode in `content` with its output
    pub fn expand(&self, content: &str, site: &dyn SiteContext) -> String {
        SHORTCODE
            .replace_all(content, |caps: &Captures| match self.handlers.get(&caps[1]) {
                Some(handler) => {
                    debug!(tag = &caps[1], "expanding shortcode");
                    handler(&parse_attributes(&caps[2]), site)
                }
                None => caps[0].to_string(),
            })
            .into_owned()
    }
}
