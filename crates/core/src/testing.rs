//! Shared site fixtures for unit tests

use crate::context::{ContentItem, ItemId, PostType, Taxonomy, Term};
use crate::models::ViewKind;
use crate::site::{SiteSnapshot, ViewState};

fn item(id: ItemId, title: &str, path: &str, parent: Option<ItemId>, post_type: &str) -> ContentItem {
    ContentItem {
        id,
        title: Some(title.to_string()),
        permalink: Some(format!("https://example.com{}", path)),
        parent,
        post_type: post_type.to_string(),
    }
}

/// Site showing latest posts on its front page
pub(crate) fn blog_site() -> SiteSnapshot {
    SiteSnapshot::new("https://example.com/")
        .with_item(item(1, "About", "/about/", None, "page"))
        .with_item(item(2, "Team", "/about/team/", Some(1), "page"))
        .with_item(item(3, "Leadership", "/about/team/leadership/", Some(2), "page"))
        .with_item(item(9, "Company", "/company/", None, "page"))
        .with_item(item(7, "Latest News", "/company/news/", Some(9), "page"))
        .with_item(item(20, "Hello World", "/2024/hello-world/", None, "post"))
        .with_item(item(30, "Widget", "/products/widget/", None, "product"))
        .with_item(item(31, "Launch Party", "/events/launch/", None, "event"))
        .with_item(item(40, "Loop A", "/loop-a/", Some(41), "page"))
        .with_item(item(41, "Loop B", "/loop-b/", Some(40), "page"))
        .with_item(ContentItem {
            id: 50,
            title: None,
            permalink: None,
            parent: Some(999),
            post_type: "page".into(),
        })
        .with_post_type(PostType {
            name: "post".into(),
            label: Some("Articles".into()),
            archive_link: None,
        })
        .with_post_type(PostType {
            name: "product".into(),
            label: Some("Products".into()),
            archive_link: Some("https://example.com/products/".into()),
        })
        .with_post_type(PostType {
            name: "event".into(),
            label: None,
            archive_link: None,
        })
        .with_taxonomy(Taxonomy {
            name: "genre".into(),
            label: Some("Genres".into()),
        })
}

/// Site with a static front page and "Latest News" (id 7) as the posts index
pub(crate) fn static_front_site() -> SiteSnapshot {
    blog_site().with_static_front(Some(7))
}

pub(crate) fn view_of(kind: ViewKind, item: Option<ItemId>) -> ViewState {
    ViewState {
        kinds: vec![kind],
        item,
        ..Default::default()
    }
}

pub(crate) fn term_view(kind: ViewKind, name: &str, taxonomy: &str) -> ViewState {
    ViewState {
        kinds: vec![kind, ViewKind::Archive],
        term: Some(Term {
            name: Some(name.to_string()),
            taxonomy: taxonomy.to_string(),
        }),
        ..Default::default()
    }
}
