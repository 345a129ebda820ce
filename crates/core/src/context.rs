//! Host environment abstraction
//!
//! The breadcrumb builder never looks anything up on its own. Everything it
//! knows about the site and the current request comes through [`SiteContext`].

use crate::config::{Names, Templates};
use crate::models::ViewKind;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Identifier of a content item
pub type ItemId = u64;

/// A page, post or custom post type item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentItem {
    pub id: ItemId,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub permalink: Option<String>,

    /// Parent item (hierarchical types only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<ItemId>,

    #[serde(default = "default_post_type")]
    pub post_type: String,
}

fn default_post_type() -> String {
    "page".to_string()
}

/// A registered post type
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostType {
    pub name: String,

    /// Plural label
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub archive_link: Option<String>,
}

/// A registered taxonomy
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Taxonomy {
    pub name: String,

    /// Plural label
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

/// A taxonomy term (category, tag or custom)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Term {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    pub taxonomy: String,
}

/// Read-only view of the host site and the request being rendered
pub trait SiteContext {
    /// Classification predicate for one view kind
    fn is_view(&self, kind: ViewKind) -> bool;

    /// Site root url
    fn home_url(&self) -> String;

    /// Item being viewed (pages and singular views)
    fn current_item(&self) -> Option<ContentItem>;

    /// Look up any item by id
    fn item(&self, id: ItemId) -> Option<ContentItem>;

    /// Look up a post type by name
    fn post_type(&self, name: &str) -> Option<PostType>;

    /// Whether the site shows a static page at its root
    fn has_static_front_page(&self) -> bool;

    /// Page configured as the posts index
    fn posts_page_id(&self) -> Option<ItemId>;

    /// Term of the current taxonomy view
    fn queried_term(&self) -> Option<Term> {
        None
    }

    /// Look up a taxonomy by name
    fn taxonomy(&self, _name: &str) -> Option<Taxonomy> {
        None
    }

    /// Date of the current dated archive view
    fn archive_date(&self) -> Option<NaiveDate> {
        None
    }

    /// Post type of the current post type archive view
    fn archive_post_type(&self) -> Option<String> {
        None
    }

    /// Final stage of label resolution
    fn filter_names(&self, names: Names) -> Names {
        names
    }

    /// Final stage of template resolution
    fn filter_templates(&self, templates: Templates) -> Templates {
        templates
    }
}
