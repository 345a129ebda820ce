//! Data models for site breadcrumbs
//!
//! This module defines the core data structures used throughout the breadcrumbs tool,
//! including view kinds, breadcrumb entries, and the rendered trail snapshot.

use serde::{Deserialize, Serialize};

/// Kinds of request views a site can serve, in classification priority order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewKind {
    FrontPage,
    Home,
    Page,
    Singular,
    Category,
    Tag,
    Taxonomy,
    Search,
    Day,
    Month,
    Year,
    PostTypeArchive,
    Archive,
    NotFound,
}

impl ViewKind {
    /// Every view kind, earliest first. The first true predicate wins.
    pub const ALL: [ViewKind; 14] = [
        ViewKind::FrontPage,
        ViewKind::Home,
        ViewKind::Page,
        ViewKind::Singular,
        ViewKind::Category,
        ViewKind::Tag,
        ViewKind::Taxonomy,
        ViewKind::Search,
        ViewKind::Day,
        ViewKind::Month,
        ViewKind::Year,
        ViewKind::PostTypeArchive,
        ViewKind::Archive,
        ViewKind::NotFound,
    ];

    /// Get the machine label for the view kind
    pub fn label(&self) -> &'static str {
        match self {
            ViewKind::FrontPage => "front_page",
            ViewKind::Home => "home",
            ViewKind::Page => "page",
            ViewKind::Singular => "singular",
            ViewKind::Category => "category",
            ViewKind::Tag => "tag",
            ViewKind::Taxonomy => "taxonomy",
            ViewKind::Search => "search",
            ViewKind::Day => "day",
            ViewKind::Month => "month",
            ViewKind::Year => "year",
            ViewKind::PostTypeArchive => "post_type_archive",
            ViewKind::Archive => "archive",
            ViewKind::NotFound => "not_found",
        }
    }
}

impl std::fmt::Display for ViewKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// How an entry is rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryKind {
    /// Entry with a url
    Link,
    /// The page being viewed
    Current,
    /// Label without a url
    Plain,
}

/// A single entry in a breadcrumb trail
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreadcrumbEntry {
    /// Display text
    pub text: String,

    /// Target url, if the entry links anywhere
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// Whether this entry is the page being viewed
    #[serde(default)]
    pub current: bool,
}

impl BreadcrumbEntry {
    /// Create a linked entry
    pub fn link(text: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            url: Some(url.into()),
            current: false,
        }
    }

    /// Create an unlinked, non-current entry
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            url: None,
            current: false,
        }
    }

    /// Create the current entry
    pub fn current(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            url: None,
            current: true,
        }
    }

    /// Template kind used when rendering. A url takes precedence over the current flag.
    pub fn kind(&self) -> EntryKind {
        match (&self.url, self.current) {
            (Some(url), _) if !url.is_empty() => EntryKind::Link,
            (_, true) => EntryKind::Current,
            _ => EntryKind::Plain,
        }
    }
}

/// A finished breadcrumb trail, ready for serialization
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Trail {
    /// View kind selected during classification (None = no predicate matched)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub view: Option<ViewKind>,

    /// The entries from root to current
    pub entries: Vec<BreadcrumbEntry>,

    /// Separator used for the html rendering
    pub separator: String,

    /// Rendered html
    pub html: String,
}

impl Trail {
    /// Get the formatted path string
    pub fn path(&self) -> String {
        self.entries
            .iter()
            .map(|e| e.text.as_str())
            .collect::<Vec<_>>()
            .join(&self.separator)
    }

    /// Get the current entry
    pub fn current_entry(&self) -> Option<&BreadcrumbEntry> {
        self.entries.iter().rev().find(|e| e.current)
    }

    /// Number of entries in the trail
    pub fn depth(&self) -> usize {
        self.entries.len()
    }
}
