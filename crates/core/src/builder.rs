//! Breadcrumb builder
//!
//! Classifies the current view through a [`SiteContext`], assembles the
//! matching trail of entries and renders it with the configured templates.

use crate::config::{BreadcrumbConfig, DateFormats, Names, Templates};
use crate::context::{ContentItem, ItemId, SiteContext};
use crate::models::{BreadcrumbEntry, EntryKind, Trail, ViewKind};
use crate::template::{escape_html, format_template};
use chrono::NaiveDate;
use std::borrow::Cow;
use std::collections::HashSet;
use std::fmt::Write;
use tracing::{debug, trace, warn};

pub const DEFAULT_HOME_LABEL: &str = "Home";
pub const DEFAULT_INDEX_LABEL: &str = "Posts";
pub const CATEGORY_LABEL: &str = "Category";
pub const TAG_LABEL: &str = "Tag";
pub const SEARCH_LABEL: &str = "Search results";
pub const ARCHIVE_LABEL: &str = "Archive";
pub const NOT_FOUND_LABEL: &str = "Page not found";
pub const UNTITLED_LABEL: &str = "Untitled";
pub const TAXONOMY_LABEL: &str = "Taxonomy";

/// Name of the default post type
const POST_TYPE: &str = "post";

/// Builds the breadcrumb trail for one request
pub struct BreadcrumbBuilder<'a, C: SiteContext + ?Sized> {
    site: &'a C,
    names: Names,
    templates: Templates,
    date_formats: DateFormats,
    separator: String,
    list_element: String,
    escape: bool,
    items: Vec<BreadcrumbEntry>,
    view: Option<ViewKind>,
}

impl<'a, C: SiteContext + ?Sized> BreadcrumbBuilder<'a, C> {
    /// Resolve labels and templates, add the home entry and classify the view
    pub fn new(site: &'a C, config: &BreadcrumbConfig) -> Self {
        let names = site.filter_names(config.names.merge_into(default_names(site)));
        let templates = site.filter_templates(config.templates.merge_into(Templates::default()));

        let mut builder = Self {
            site,
            names,
            templates,
            date_formats: config.date_formats.clone(),
            separator: config.separator.clone(),
            list_element: config.list_element.clone(),
            escape: config.escape_html,
            items: Vec::new(),
            view: None,
        };

        let home = builder.names.home.clone();
        builder.add(BreadcrumbEntry::link(home, site.home_url()));
        builder.update();
        builder
    }

    /// Build with a separator and optional home/index label overrides
    pub fn with_labels(
        site: &'a C,
        separator: &str,
        home: Option<&str>,
        index: Option<&str>,
    ) -> Self {
        let mut config = BreadcrumbConfig::new().with_separator(separator);
        config.names.home = home.map(str::to_string);
        config.names.index = index.map(str::to_string);
        Self::new(site, &config)
    }

    /// Entries from root to current
    pub fn items(&self) -> &[BreadcrumbEntry] {
        &self.items
    }

    pub fn into_items(self) -> Vec<BreadcrumbEntry> {
        self.items
    }

    /// View kind selected during classification
    pub fn view_kind(&self) -> Option<ViewKind> {
        self.view
    }

    /// Resolved home and index labels
    pub fn names(&self) -> &Names {
        &self.names
    }

    /// Resolved entry templates
    pub fn templates(&self) -> &Templates {
        &self.templates
    }

    /// Separator from the configuration
    pub fn separator(&self) -> &str {
        &self.separator
    }

    /// List container element from the configuration
    pub fn list_element(&self) -> &str {
        &self.list_element
    }

    /// Render every entry with its template
    pub fn links(&self) -> Vec<String> {
        self.items.iter().map(|e| self.render_entry(e)).collect()
    }

    /// Render entries joined by `sep`
    pub fn render(&self, sep: &str) -> String {
        self.links().join(sep)
    }

    /// Render entries as `<li>` items inside `element`
    pub fn render_list(&self, element: &str) -> String {
        let items = self
            .links()
            .into_iter()
            .map(|link| format!("<li>{}</li>", link))
            .collect::<Vec<_>>()
            .join("\n");
        format!("<{element}>{items}</{element}>")
    }

    /// Snapshot of the finished trail
    pub fn trail(&self) -> Trail {
        Trail {
            view: self.view,
            entries: self.items.clone(),
            separator: self.separator.clone(),
            html: self.render(&self.separator),
        }
    }

    fn render_entry(&self, entry: &BreadcrumbEntry) -> String {
        let text = self.escaped(&entry.text);
        match entry.kind() {
            EntryKind::Link => {
                let url = self.escaped(entry.url.as_deref().unwrap_or_default());
                format_template(&self.templates.link, &[&*text, &*url])
            }
            EntryKind::Current => format_template(&self.templates.current, &[&*text]),
            EntryKind::Plain => format_template(&self.templates.plain, &[&*text]),
        }
    }

    fn escaped<'s>(&self, s: &'s str) -> Cow<'s, str> {
        if self.escape {
            Cow::Owned(escape_html(s))
        } else {
            Cow::Borrowed(s)
        }
    }

    fn add(&mut self, entry: BreadcrumbEntry) {
        trace!(text = %entry.text, url = ?entry.url, current = entry.current, "add entry");
        self.items.push(entry);
    }

    /// Run the first matching view handler
    fn update(&mut self) {
        let Some(kind) = ViewKind::ALL.into_iter().find(|k| self.site.is_view(*k)) else {
            debug!("no view predicate matched, keeping home entry only");
            return;
        };

        debug!(view = %kind, "classified view");
        self.view = Some(kind);

        match kind {
            ViewKind::FrontPage => self.front_page(),
            ViewKind::Home => self.home(),
            ViewKind::Page => self.page(),
            ViewKind::Singular => self.singular(),
            ViewKind::Category => self.term_archive(CATEGORY_LABEL),
            ViewKind::Tag => self.term_archive(TAG_LABEL),
            ViewKind::Taxonomy => self.taxonomy(),
            ViewKind::Search => self.add(BreadcrumbEntry::current(SEARCH_LABEL)),
            ViewKind::Day | ViewKind::Month | ViewKind::Year => self.date_archive(kind),
            ViewKind::PostTypeArchive => self.post_type_archive(),
            ViewKind::Archive => self.add(BreadcrumbEntry::current(ARCHIVE_LABEL)),
            ViewKind::NotFound => self.add(BreadcrumbEntry::current(NOT_FOUND_LABEL)),
        }
    }

    fn front_page(&mut self) {
        if let Some(home) = self.items.first_mut() {
            home.url = None;
            home.current = true;
        }
    }

    /// Posts index. Without a static front page it is the front page.
    fn home(&mut self) {
        if self.site.has_static_front_page() {
            self.add_index_page(true);
        } else {
            self.front_page();
        }
    }

    fn page(&mut self) {
        let text = match self.site.current_item() {
            Some(item) => {
                self.add_ancestors(&item);
                title_or_default(&item)
            }
            None => UNTITLED_LABEL.to_string(),
        };
        self.add(BreadcrumbEntry::current(text));
    }

    fn singular(&mut self) {
        let item = self.site.current_item();
        let post_type = item
            .as_ref()
            .map(|i| i.post_type.clone())
            .unwrap_or_else(|| POST_TYPE.to_string());

        if post_type == POST_TYPE {
            if self.site.has_static_front_page() {
                self.add_index_page(false);
            }
        } else {
            let object = self.site.post_type(&post_type);
            let label = object
                .as_ref()
                .and_then(|t| non_empty(t.label.as_deref()))
                .unwrap_or_else(|| DEFAULT_INDEX_LABEL.to_string());
            let url = object
                .and_then(|t| non_empty(t.archive_link.as_deref()))
                .unwrap_or_else(|| self.site.home_url());
            self.add(BreadcrumbEntry::link(label, url));
        }

        let text = item
            .as_ref()
            .map(title_or_default)
            .unwrap_or_else(|| UNTITLED_LABEL.to_string());
        self.add(BreadcrumbEntry::current(text));
    }

    /// Category and tag archives
    fn term_archive(&mut self, label: &str) {
        if self.site.has_static_front_page() {
            self.add_index_page(false);
        }

        self.add(BreadcrumbEntry::plain(label));
        self.add(BreadcrumbEntry::current(self.term_name()));
    }

    fn taxonomy(&mut self) {
        let label = self
            .site
            .queried_term()
            .and_then(|term| self.site.taxonomy(&term.taxonomy))
            .and_then(|tax| non_empty(tax.label.as_deref()))
            .unwrap_or_else(|| TAXONOMY_LABEL.to_string());

        self.add(BreadcrumbEntry::plain(label));
        self.add(BreadcrumbEntry::current(self.term_name()));
    }

    fn date_archive(&mut self, kind: ViewKind) {
        if self.site.has_static_front_page() {
            self.add_index_page(false);
        }

        let format = match kind {
            ViewKind::Day => &self.date_formats.day,
            ViewKind::Month => &self.date_formats.month,
            _ => &self.date_formats.year,
        };
        let text = self
            .site
            .archive_date()
            .and_then(|date| format_date(date, format))
            .unwrap_or_else(|| ARCHIVE_LABEL.to_string());
        self.add(BreadcrumbEntry::current(text));
    }

    fn post_type_archive(&mut self) {
        let text = self
            .site
            .archive_post_type()
            .and_then(|name| self.site.post_type(&name))
            .and_then(|t| non_empty(t.label.as_deref()))
            .unwrap_or_else(|| ARCHIVE_LABEL.to_string());
        self.add(BreadcrumbEntry::current(text));
    }

    fn term_name(&self) -> String {
        self.site
            .queried_term()
            .and_then(|term| non_empty(term.name.as_deref()))
            .unwrap_or_else(|| UNTITLED_LABEL.to_string())
    }

    /// Add the posts index page and its ancestors
    fn add_index_page(&mut self, current: bool) {
        let title = self.names.index.clone();
        let mut url = None;

        if let Some(page) = self.index_id().and_then(|id| self.site.item(id)) {
            url = non_empty(page.permalink.as_deref());
            self.add_ancestors(&page);
        }

        let entry = match url {
            _ if current => BreadcrumbEntry::current(title),
            Some(url) => BreadcrumbEntry::link(title, url),
            None => BreadcrumbEntry::plain(title),
        };
        self.add(entry);
    }

    /// Walk the parent chain and add each ancestor root first
    fn add_ancestors(&mut self, item: &ContentItem) {
        let mut ancestors = Vec::new();
        let mut seen = HashSet::from([item.id]);
        let mut parent = item.parent;

        while let Some(id) = parent.filter(|id| *id != 0) {
            if !seen.insert(id) {
                warn!(item = item.id, ancestor = id, "cycle in parent chain, stopping walk");
                break;
            }
            let Some(ancestor) = self.site.item(id) else {
                debug!(item = item.id, ancestor = id, "missing ancestor, stopping walk");
                break;
            };
            parent = ancestor.parent;
            ancestors.push(ancestor);
        }

        for ancestor in ancestors.iter().rev() {
            let text = title_or_default(ancestor);
            let entry = match non_empty(ancestor.permalink.as_deref()) {
                Some(url) => BreadcrumbEntry::link(text, url),
                None => BreadcrumbEntry::plain(text),
            };
            self.add(entry);
        }
    }

    fn index_id(&self) -> Option<ItemId> {
        if !self.site.has_static_front_page() {
            return None;
        }
        self.site.posts_page_id()
    }
}

/// Labels before caller overrides and filters
fn default_names<C: SiteContext + ?Sized>(site: &C) -> Names {
    let mut index = site
        .post_type(POST_TYPE)
        .and_then(|t| non_empty(t.label.as_deref()))
        .unwrap_or_else(|| DEFAULT_INDEX_LABEL.to_string());

    if site.has_static_front_page() {
        if let Some(title) = site
            .posts_page_id()
            .and_then(|id| site.item(id))
            .and_then(|page| non_empty(page.title.as_deref()))
        {
            index = title;
        }
    }

    Names {
        home: DEFAULT_HOME_LABEL.to_string(),
        index,
    }
}

fn title_or_default(item: &ContentItem) -> String {
    non_empty(item.title.as_deref()).unwrap_or_else(|| UNTITLED_LABEL.to_string())
}

fn non_empty(value: Option<&str>) -> Option<String> {
    value.filter(|v| !v.is_empty()).map(str::to_string)
}

/// Format a date, or None when the format string is invalid
fn format_date(date: NaiveDate, format: &str) -> Option<String> {
    let mut out = String::new();
    match write!(out, "{}", date.format(format)) {
        Ok(()) => Some(out),
        Err(_) => {
            warn!(format = %format, "invalid date format");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::NameOverrides;
    use crate::site::{SiteSnapshot, ViewState};
    use crate::testing::{blog_site, static_front_site, term_view, view_of};

    fn build(site: &SiteSnapshot) -> BreadcrumbBuilder<'_, SiteSnapshot> {
        BreadcrumbBuilder::new(site, &BreadcrumbConfig::default())
    }

    fn texts(builder: &BreadcrumbBuilder<'_, SiteSnapshot>) -> Vec<String> {
        builder.items().iter().map(|e| e.text.clone()).collect()
    }

    /// A request for every view kind, against a static front page site
    fn all_views() -> Vec<SiteSnapshot> {
        let date = NaiveDate::from_ymd_opt(2024, 3, 5);
        vec![
            static_front_site().with_view(view_of(ViewKind::FrontPage, None)),
            static_front_site().with_view(view_of(ViewKind::Home, Some(7))),
            static_front_site().with_view(view_of(ViewKind::Page, Some(3))),
            static_front_site().with_view(view_of(ViewKind::Singular, Some(20))),
            static_front_site().with_view(view_of(ViewKind::Singular, Some(30))),
            static_front_site().with_view(term_view(ViewKind::Category, "News", "category")),
            static_front_site().with_view(term_view(ViewKind::Tag, "rust", "post_tag")),
            static_front_site().with_view(term_view(ViewKind::Taxonomy, "Jazz", "genre")),
            static_front_site().with_view(view_of(ViewKind::Search, None)),
            static_front_site().with_view(ViewState {
                kinds: vec![ViewKind::Day, ViewKind::Archive],
                date,
                ..Default::default()
            }),
            static_front_site().with_view(ViewState {
                kinds: vec![ViewKind::Month, ViewKind::Archive],
                date,
                ..Default::default()
            }),
            static_front_site().with_view(ViewState {
                kinds: vec![ViewKind::Year, ViewKind::Archive],
                date,
                ..Default::default()
            }),
            static_front_site().with_view(ViewState {
                kinds: vec![ViewKind::PostTypeArchive, ViewKind::Archive],
                post_type: Some("product".into()),
                ..Default::default()
            }),
            static_front_site().with_view(view_of(ViewKind::Archive, None)),
            static_front_site().with_view(view_of(ViewKind::NotFound, None)),
        ]
    }

    #[test]
    fn test_exactly_one_current_entry_and_it_is_last() {
        for site in all_views() {
            let builder = build(&site);
            let items = builder.items();
            let current: Vec<_> = items.iter().filter(|e| e.current).collect();

            assert_eq!(current.len(), 1, "view {:?}: {:?}", builder.view_kind(), items);
            assert!(items.last().unwrap().current, "view {:?}", builder.view_kind());
            assert_eq!(items[0].text, "Home");
        }
    }

    #[test]
    fn test_every_view_kind_is_classified() {
        let kinds: HashSet<_> = all_views()
            .iter()
            .filter_map(|site| build(site).view_kind())
            .collect();
        assert_eq!(kinds.len(), ViewKind::ALL.len());
    }

    #[test]
    fn test_front_page() {
        let site = blog_site().with_view(view_of(ViewKind::FrontPage, None));
        let builder = build(&site);

        assert_eq!(builder.items().len(), 1);
        assert_eq!(builder.items()[0].url, None);
        assert!(builder.items()[0].current);
        assert_eq!(
            builder.render(" / "),
            r#"<span class="breadcrumb-item current">Home</span>"#
        );
    }

    #[test]
    fn test_front_page_wins_over_home() {
        let site = blog_site().with_view(ViewState {
            kinds: vec![ViewKind::Home, ViewKind::FrontPage],
            ..Default::default()
        });
        assert_eq!(build(&site).view_kind(), Some(ViewKind::FrontPage));
    }

    #[test]
    fn test_three_level_page() {
        let site = blog_site().with_view(view_of(ViewKind::Page, Some(3)));
        let builder = build(&site);
        let items = builder.items();

        assert_eq!(items.len(), 4);
        assert_eq!(items[0], BreadcrumbEntry::link("Home", "https://example.com/"));
        assert_eq!(items[1], BreadcrumbEntry::link("About", "https://example.com/about/"));
        assert_eq!(items[2], BreadcrumbEntry::link("Team", "https://example.com/about/team/"));
        assert_eq!(items[3], BreadcrumbEntry::current("Leadership"));
    }

    #[test]
    fn test_page_wins_over_singular() {
        let site = blog_site().with_view(ViewState {
            kinds: vec![ViewKind::Singular, ViewKind::Page],
            item: Some(1),
            ..Default::default()
        });
        let builder = build(&site);
        assert_eq!(builder.view_kind(), Some(ViewKind::Page));
        assert_eq!(texts(&builder), vec!["Home", "About"]);
    }

    #[test]
    fn test_page_parent_cycle_stops() {
        let site = blog_site().with_view(view_of(ViewKind::Page, Some(41)));
        let builder = build(&site);
        assert_eq!(texts(&builder), vec!["Home", "Loop A", "Loop B"]);
    }

    #[test]
    fn test_page_missing_ancestor_and_title() {
        let site = blog_site().with_view(view_of(ViewKind::Page, Some(50)));
        let builder = build(&site);
        assert_eq!(texts(&builder), vec!["Home", "Untitled"]);
    }

    #[test]
    fn test_no_predicate_keeps_home_only() {
        let site = blog_site();
        let builder = build(&site);

        assert_eq!(builder.view_kind(), None);
        assert_eq!(builder.items().len(), 1);
        assert_eq!(
            builder.render(" / "),
            r#"<a href="https://example.com/" class="breadcrumb-item link">Home</a>"#
        );
    }

    #[test]
    fn test_home_without_static_front_acts_as_front_page() {
        let site = blog_site().with_view(view_of(ViewKind::Home, None));
        let builder = build(&site);

        assert_eq!(builder.items().len(), 1);
        assert!(builder.items()[0].current);
        assert!(builder.items()[0].url.is_none());
    }

    #[test]
    fn test_home_with_static_front_splices_index_ancestors() {
        let site = static_front_site().with_view(view_of(ViewKind::Home, Some(7)));
        let builder = build(&site);
        let items = builder.items();

        assert_eq!(items.len(), 3);
        assert_eq!(items[1], BreadcrumbEntry::link("Company", "https://example.com/company/"));
        assert_eq!(items[2], BreadcrumbEntry::current("Latest News"));
    }

    #[test]
    fn test_singular_post_with_static_front() {
        let site = static_front_site().with_view(view_of(ViewKind::Singular, Some(20)));
        let builder = build(&site);
        let items = builder.items();

        assert_eq!(items.len(), 4);
        assert_eq!(
            items[2],
            BreadcrumbEntry::link("Latest News", "https://example.com/company/news/")
        );
        assert_eq!(items[3], BreadcrumbEntry::current("Hello World"));
    }

    #[test]
    fn test_singular_post_without_static_front() {
        let site = blog_site().with_view(view_of(ViewKind::Singular, Some(20)));
        assert_eq!(texts(&build(&site)), vec!["Home", "Hello World"]);
    }

    #[test]
    fn test_singular_custom_type_links_archive() {
        let site = blog_site().with_view(view_of(ViewKind::Singular, Some(30)));
        let items = build(&site).into_items();

        assert_eq!(items[1], BreadcrumbEntry::link("Products", "https://example.com/products/"));
        assert_eq!(items[2], BreadcrumbEntry::current("Widget"));
    }

    #[test]
    fn test_singular_custom_type_without_archive_falls_back() {
        let site = blog_site().with_view(view_of(ViewKind::Singular, Some(31)));
        let items = build(&site).into_items();

        assert_eq!(items[1], BreadcrumbEntry::link("Posts", "https://example.com/"));
        assert_eq!(items[2], BreadcrumbEntry::current("Launch Party"));
    }

    #[test]
    fn test_category_and_tag() {
        let site = static_front_site().with_view(term_view(ViewKind::Category, "Releases", "category"));
        let builder = build(&site);
        assert_eq!(
            texts(&builder),
            vec!["Home", "Company", "Latest News", "Category", "Releases"]
        );
        assert_eq!(builder.items()[3].kind(), EntryKind::Plain);

        let site = blog_site().with_view(term_view(ViewKind::Tag, "rust", "post_tag"));
        assert_eq!(texts(&build(&site)), vec!["Home", "Tag", "rust"]);
    }

    #[test]
    fn test_taxonomy() {
        let site = blog_site().with_view(term_view(ViewKind::Taxonomy, "Jazz", "genre"));
        assert_eq!(texts(&build(&site)), vec!["Home", "Genres", "Jazz"]);

        let site = blog_site().with_view(view_of(ViewKind::Taxonomy, None));
        assert_eq!(texts(&build(&site)), vec!["Home", "Taxonomy", "Untitled"]);
    }

    #[test]
    fn test_date_archives() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 5);
        let cases = [
            (ViewKind::Day, "March 5, 2024"),
            (ViewKind::Month, "March 2024"),
            (ViewKind::Year, "2024"),
        ];

        for (kind, expected) in cases {
            let site = blog_site().with_view(ViewState {
                kinds: vec![kind],
                date,
                ..Default::default()
            });
            assert_eq!(texts(&build(&site)), vec!["Home", expected]);
        }
    }

    #[test]
    fn test_date_archive_fallbacks() {
        let site = blog_site().with_view(view_of(ViewKind::Month, None));
        assert_eq!(texts(&build(&site)), vec!["Home", "Archive"]);

        let site = blog_site().with_view(ViewState {
            kinds: vec![ViewKind::Year],
            date: NaiveDate::from_ymd_opt(2024, 3, 5),
            ..Default::default()
        });
        let mut config = BreadcrumbConfig::default();
        config.date_formats.year = "%Q".into();
        let builder = BreadcrumbBuilder::new(&site, &config);
        assert_eq!(texts(&builder), vec!["Home", "Archive"]);
    }

    #[test]
    fn test_literal_views() {
        let cases = [
            (ViewKind::Search, "Search results"),
            (ViewKind::Archive, "Archive"),
            (ViewKind::NotFound, "Page not found"),
        ];
        for (kind, expected) in cases {
            let site = blog_site().with_view(view_of(kind, None));
            assert_eq!(texts(&build(&site)), vec!["Home", expected]);
        }
    }

    #[test]
    fn test_post_type_archive() {
        let site = blog_site().with_view(ViewState {
            kinds: vec![ViewKind::PostTypeArchive],
            post_type: Some("product".into()),
            ..Default::default()
        });
        assert_eq!(texts(&build(&site)), vec!["Home", "Products"]);

        let site = blog_site().with_view(ViewState {
            kinds: vec![ViewKind::PostTypeArchive],
            post_type: Some("event".into()),
            ..Default::default()
        });
        assert_eq!(texts(&build(&site)), vec!["Home", "Archive"]);
    }

    #[test]
    fn test_render_separator_count_and_order() {
        let site = blog_site().with_view(view_of(ViewKind::Page, Some(3)));
        let builder = build(&site);
        let html = builder.render(" | ");

        assert_eq!(html.matches(" | ").count(), builder.items().len() - 1);
        let about = html.find(">About<").unwrap();
        let team = html.find(">Team<").unwrap();
        let leadership = html.find(">Leadership<").unwrap();
        assert!(about < team && team < leadership);
        assert!(html.ends_with(r#"<span class="breadcrumb-item current">Leadership</span>"#));
    }

    #[test]
    fn test_render_list() {
        let site = blog_site().with_view(term_view(ViewKind::Tag, "rust", "post_tag"));
        let builder = build(&site);
        let html = builder.render_list("ul");

        assert!(html.starts_with("<ul><li>"));
        assert!(html.ends_with("</li></ul>"));
        assert_eq!(html.matches("<li>").count(), 3);
        assert_eq!(html.matches("</li>").count(), 3);
        assert_eq!(html.matches('\n').count(), 2);
        assert!(html.contains(r#"<li><span class="breadcrumb-item span">Tag</span></li>"#));
    }

    #[test]
    fn test_render_escapes_text_and_url() {
        let site = SiteSnapshot::new("/?a=1&b=2").with_view(view_of(ViewKind::Search, None));
        let config = BreadcrumbConfig::default().with_home_label("<Start>");
        let builder = BreadcrumbBuilder::new(&site, &config);

        assert_eq!(
            builder.links()[0],
            r#"<a href="/?a=1&amp;b=2" class="breadcrumb-item link">&lt;Start&gt;</a>"#
        );

        let raw = BreadcrumbBuilder::new(&site, &config.with_escape_html(false));
        assert!(raw.links()[0].contains("<Start>"));
    }

    #[test]
    fn test_name_precedence() {
        // computed default: posts page title
        let site = static_front_site().with_view(view_of(ViewKind::Home, Some(7)));
        assert_eq!(build(&site).names().index, "Latest News");

        // caller override beats the computed default
        let config = BreadcrumbConfig::default().with_index_label("Blog");
        let builder = BreadcrumbBuilder::new(&site, &config);
        assert_eq!(builder.names().index, "Blog");
        assert_eq!(builder.items().last().unwrap().text, "Blog");

        // host filter runs last and beats the override
        let mut filtered = site.clone();
        filtered.name_filter = NameOverrides {
            index: Some("Journal".into()),
            home: None,
        };
        let builder = BreadcrumbBuilder::new(&filtered, &config);
        assert_eq!(builder.names().index, "Journal");
        assert_eq!(builder.names().home, "Home");
    }

    #[test]
    fn test_default_index_label_from_post_type() {
        let site = blog_site();
        assert_eq!(build(&site).names().index, "Articles");

        let bare = SiteSnapshot::default();
        assert_eq!(build(&bare).names().index, "Posts");
    }

    #[test]
    fn test_with_labels() {
        let site = blog_site().with_view(view_of(ViewKind::FrontPage, None));
        let builder = BreadcrumbBuilder::with_labels(&site, " > ", Some("Start"), None);

        assert_eq!(builder.items()[0].text, "Start");
        assert_eq!(builder.separator(), " > ");
        assert_eq!(builder.trail().html, builder.render(" > "));
    }

    #[test]
    fn test_template_filter_and_override() {
        let mut site = blog_site().with_view(view_of(ViewKind::Search, None));
        site.template_filter.current = Some("<b>%s</b>".into());

        let mut config = BreadcrumbConfig::default();
        config.templates.link = Some(r#"<a href="%2$s">%1$s</a>"#.into());
        config.templates.current = Some("<i>%s</i>".into());

        let builder = BreadcrumbBuilder::new(&site, &config);
        assert_eq!(
            builder.render(" / "),
            r#"<a href="https://example.com/">Home</a> / <b>Search results</b>"#
        );
    }
}
