//! mta_sitecrumbs_core - Core library for site breadcrumb trails
//!
//! This crate classifies the view being rendered on a content-managed site,
//! walks the ancestor chain of hierarchical content and renders the
//! resulting Home → Section → … → Current Page trail as HTML.
//!
//! # Features
//!
//! - **View Classification**: Fourteen mutually exclusive view kinds checked
//!   in a fixed priority order.
//! - **Ancestor Trails**: Parent chains are walked and inserted root first.
//! - **Never Fails**: Missing titles, labels and lookups fall back to literal
//!   defaults so a breadcrumb never breaks page rendering.
//! - **Configurable Rendering**: printf-style templates, separators and list
//!   markup, with host filter hooks as the final override stage.
//! - **Multiple Output Formats**: HTML, JSON, YAML, ANSI and plain text.
//!
//! # Example
//!
//! ```rust
//! use mta_sitecrumbs_core::{BreadcrumbBuilder, BreadcrumbConfig, SiteSnapshot, ViewKind, ViewState};
//!
//! let site = SiteSnapshot::new("https://example.com/").with_view(ViewState {
//!     kinds: vec![ViewKind::Search],
//!     ..Default::default()
//! });
//!
//! let builder = BreadcrumbBuilder::new(&site, &BreadcrumbConfig::default());
//! assert_eq!(builder.items().len(), 2);
//! println!("{}", builder.render(" / "));
//! ```

pub mod builder;
pub mod config;
pub mod context;
pub mod models;
pub mod output;
pub mod shortcode;
pub mod site;
pub mod template;

#[cfg(test)]
mod testing;

// Re-exports for convenience
pub use builder::BreadcrumbBuilder;
pub use config::{
    BreadcrumbConfig, ConfigError, DateFormats, DocumentError, DocumentFormat, NameOverrides,
    Names, TemplateOverrides, Templates,
};
pub use context::{ContentItem, ItemId, PostType, SiteContext, Taxonomy, Term};
pub use models::{BreadcrumbEntry, EntryKind, Trail, ViewKind};
pub use output::{format_output, FormatError, OutputFormat};
pub use shortcode::{render_breadcrumb, ShortcodeAttrs, ShortcodeRegistry};
pub use site::{ShowOnFront, SiteError, SiteSnapshot, ViewState};
