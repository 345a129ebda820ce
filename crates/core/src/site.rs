//! Site snapshots
//!
//! A [`SiteSnapshot`] is a plain data description of a site and of the
//! request being rendered. It implements [`SiteContext`] so the builder can
//! run against fixtures, files and the CLI without a live host.

use crate::config::{DocumentError, DocumentFormat, NameOverrides, Names, TemplateOverrides, Templates};
use crate::context::{ContentItem, ItemId, PostType, SiteContext, Taxonomy, Term};
use crate::models::ViewKind;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Site snapshot errors
#[derive(Error, Debug)]
pub enum SiteError {
    #[error("IO error reading {path}: {source}")]
    IoError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid site snapshot: {0}")]
    InvalidSnapshot(#[from] DocumentError),
}

/// What the site shows at its root
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShowOnFront {
    /// Latest posts
    #[default]
    Posts,
    /// A static page
    Page,
}

/// The request being rendered
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewState {
    /// Predicates that are true for this request
    #[serde(default)]
    pub kinds: Vec<ViewKind>,

    /// Item being viewed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub item: Option<ItemId>,

    /// Term being viewed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub term: Option<Term>,

    /// Date of a dated archive
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,

    /// Post type of a post type archive
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub post_type: Option<String>,
}

/// Data-backed site context
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteSnapshot {
    #[serde(default = "default_home_url")]
    pub home_url: String,

    #[serde(default)]
    pub show_on_front: ShowOnFront,

    /// Page used as the posts index
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_for_posts: Option<ItemId>,

    #[serde(default)]
    pub items: Vec<ContentItem>,

    #[serde(default)]
    pub post_types: Vec<PostType>,

    #[serde(default)]
    pub taxonomies: Vec<Taxonomy>,

    #[serde(default)]
    pub view: ViewState,

    /// Label filter applied after caller overrides
    #[serde(default)]
    pub name_filter: NameOverrides,

    /// Template filter applied after config overrides
    #[serde(default)]
    pub template_filter: TemplateOverrides,
}

fn default_home_url() -> String {
    "/".to_string()
}

impl Default for SiteSnapshot {
    fn default() -> Self {
        Self {
            home_url: default_home_url(),
            show_on_front: ShowOnFront::default(),
            page_for_posts: None,
            items: Vec::new(),
            post_types: Vec::new(),
            taxonomies: Vec::new(),
            view: ViewState::default(),
            name_filter: NameOverrides::default(),
            template_filter: TemplateOverrides::default(),
        }
    }
}

impl SiteSnapshot {
    /// Create an empty snapshot rooted at `home_url`
    pub fn new(home_url: impl Into<String>) -> Self {
        Self {
            home_url: home_url.into(),
            ..Default::default()
        }
    }

    /// Load a snapshot from a JSON, YAML or TOML file
    pub fn from_path(path: &Path) -> Result<Self, SiteError> {
        let format = DocumentFormat::from_path(path)
            .ok_or_else(|| DocumentError::UnsupportedFormat(path.to_path_buf()))?;
        let text = fs::read_to_string(path).map_err(|source| SiteError::IoError {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_str_with_format(&text, format)
    }

    /// Parse a snapshot from text
    pub fn from_str_with_format(text: &str, format: DocumentFormat) -> Result<Self, SiteError> {
        Ok(format.parse(text)?)
    }

    /// Add a content item (builder pattern)
    pub fn with_item(mut self, item: ContentItem) -> Self {
        self.items.push(item);
        self
    }

    /// Register a post type (builder pattern)
    pub fn with_post_type(mut self, post_type: PostType) -> Self {
        self.post_types.push(post_type);
        self
    }

    /// Register a taxonomy (builder pattern)
    pub fn with_taxonomy(mut self, taxonomy: Taxonomy) -> Self {
        self.taxonomies.push(taxonomy);
        self
    }

    /// Use a static front page with the given posts index page (builder pattern)
    pub fn with_static_front(mut self, page_for_posts: Option<ItemId>) -> Self {
        self.show_on_front = ShowOnFront::Page;
        self.page_for_posts = page_for_posts;
        self
    }

    /// Set the request being rendered (builder pattern)
    pub fn with_view(mut self, view: ViewState) -> Self {
        self.view = view;
        self
    }
}

impl SiteContext for SiteSnapshot {
    fn is_view(&self, kind: ViewKind) -> bool {
        self.view.kinds.contains(&kind)
    }

    fn home_url(&self) -> String {
        self.home_url.clone()
    }

    fn current_item(&self) -> Option<ContentItem> {
        self.view.item.and_then(|id| self.item(id))
    }

    fn item(&self, id: ItemId) -> Option<ContentItem> {
        self.items.iter().find(|i| i.id == id).cloned()
    }

    fn post_type(&self, name: &str) -> Option<PostType> {
        self.post_types.iter().find(|t| t.name == name).cloned()
    }

    fn has_static_front_page(&self) -> bool {
        self.show_on_front == ShowOnFront::Page
    }

    fn posts_page_id(&self) -> Option<ItemId> {
        self.page_for_posts.filter(|id| *id != 0)
    }

    fn queried_term(&self) -> Option<Term> {
        self.view.term.clone()
    }

    fn taxonomy(&self, name: &str) -> Option<Taxonomy> {
        self.taxonomies.iter().find(|t| t.name == name).cloned()
    }

    fn archive_date(&self) -> Option<NaiveDate> {
        self.view.date
    }

    fn archive_post_type(&self) -> Option<String> {
        self.view.post_type.clone()
    }

    fn filter_names(&self, names: Names) -> Names {
        self.name_filter.merge_into(names)
    }

    fn filter_templates(&self, templates: Templates) -> Templates {
        self.template_filter.merge_into(templates)
    }
}
