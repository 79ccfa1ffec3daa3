//! Breadcrumb trail builder.
//!
//! Converts a request path into the ordered, localized trail rendered as
//! site navigation:
//! 1. An optional leading language segment selects the [`Locale`]
//! 2. Home is always first, linked unless it is the current page
//! 3. A known [`Section`] (and, under goodies, a category) links to its root
//! 4. The final segment is the unlinked current page
//!
//! Unknown paths never fail; they degrade to Home plus a title-cased leaf.

use tracing::{debug, instrument};

use sitecrumbs_shared::BreadcrumbEntry;

use crate::locale::Locale;
use crate::section::{Section, category_label};
use crate::slug::title_case_slug;

/// Build the breadcrumb trail for `path`.
///
/// `base_url` is the site origin (a trailing slash is tolerated).
/// `current_page_title` replaces the title-cased slug of the final entry
/// when that entry is a page rather than a section or category root.
///
/// The result always starts with Home and only its last entry lacks a URL.
#[instrument(level = "debug", skip(base_url, current_page_title))]
pub fn generate_breadcrumbs(
    path: &str,
    base_url: &str,
    current_page_title: Option<&str>,
) -> Vec<BreadcrumbEntry> {
    let mut segments = path_segments(path);

    let detected = segments.first().and_then(|first| Locale::from_code(first));
    if detected.is_some() {
        segments.remove(0);
    }
    let home_url = locale_root(base_url, detected);
    let locale = detected.unwrap_or_default();
    debug!(%locale, prefixed = detected.is_some(), "resolved locale");

    let home = locale.labels().home;
    let Some((&first, rest)) = segments.split_first() else {
        return vec![BreadcrumbEntry::current(home)];
    };

    let leaf = |slug: &str| BreadcrumbEntry::current(leaf_label(slug, current_page_title));
    let mut trail = vec![BreadcrumbEntry::linked(home, &home_url)];

    let Some(section) = Section::from_slug(first) else {
        debug!(slug = first, "unknown section, using leaf fallback");
        trail.push(leaf(rest.last().copied().unwrap_or(first)));
        return trail;
    };

    let section_url = format!("{home_url}/{}", section.slug());
    let Some((&next, rest)) = rest.split_first() else {
        trail.push(BreadcrumbEntry::current(section.label(locale)));
        return trail;
    };
    trail.push(BreadcrumbEntry::linked(section.label(locale), &section_url));

    if section == Section::Goodies {
        let label = category_label(locale, next);
        match rest.last() {
            Some(&item) => {
                trail.push(BreadcrumbEntry::linked(label, format!("{section_url}/{next}")));
                trail.push(leaf(item));
            }
            None => trail.push(BreadcrumbEntry::current(label)),
        }
    } else {
        trail.push(leaf(rest.last().copied().unwrap_or(next)));
    }

    trail
}

/// Home, Blog (linked), post title.
pub fn generate_blog_breadcrumbs(
    lang: &str,
    base_url: &str,
    post_title: &str,
) -> Vec<BreadcrumbEntry> {
    titled_section_page(lang, base_url, Section::Blog, post_title)
}

/// Home, Projects (linked), project title.
pub fn generate_project_breadcrumbs(
    lang: &str,
    base_url: &str,
    project_title: &str,
) -> Vec<BreadcrumbEntry> {
    titled_section_page(lang, base_url, Section::Projects, project_title)
}

/// Home, Services (linked), service title.
pub fn generate_service_breadcrumbs(
    lang: &str,
    base_url: &str,
    service_title: &str,
) -> Vec<BreadcrumbEntry> {
    titled_section_page(lang, base_url, Section::Services, service_title)
}

/// Trail for a goodies category page, or for an item inside it.
///
/// Without `item_title` the category is the current page and carries no
/// URL; with one, the category links to its root and the item is last.
/// `category` is a single slug, never split as path syntax.
pub fn generate_goodies_breadcrumbs(
    lang: &str,
    base_url: &str,
    category: &str,
    item_title: Option<&str>,
) -> Vec<BreadcrumbEntry> {
    let (mut trail, locale, goodies_url) = section_root(lang, base_url, Section::Goodies);
    let label = category_label(locale, category);

    match item_title {
        Some(item) => {
            trail.push(BreadcrumbEntry::linked(label, format!("{goodies_url}/{category}")));
            trail.push(BreadcrumbEntry::current(item));
        }
        None => trail.push(BreadcrumbEntry::current(label)),
    }
    trail
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn titled_section_page(
    lang: &str,
    base_url: &str,
    section: Section,
    title: &str,
) -> Vec<BreadcrumbEntry> {
    let (mut trail, _, _) = section_root(lang, base_url, section);
    trail.push(BreadcrumbEntry::current(title));
    trail
}

/// Home and `section`, both linked, plus the locale and section root URL
/// the caller needs to finish the trail.
///
/// Unsupported codes get English labels and prefix-less URLs, exactly as
/// if the caller had passed no language at all.
fn section_root(
    lang: &str,
    base_url: &str,
    section: Section,
) -> (Vec<BreadcrumbEntry>, Locale, String) {
    let detected = Locale::from_code(lang);
    if detected.is_none() {
        debug!(lang, "unsupported locale, falling back to English");
    }
    let locale = detected.unwrap_or_default();
    let home_url = locale_root(base_url, detected);
    let section_url = format!("{home_url}/{}", section.slug());

    let trail = vec![
        BreadcrumbEntry::linked(locale.labels().home, &home_url),
        BreadcrumbEntry::linked(section.label(locale), &section_url),
    ];
    (trail, locale, section_url)
}

/// `{base_url}` or `{base_url}/{code}`, without a trailing slash.
fn locale_root(base_url: &str, locale: Option<Locale>) -> String {
    let base_url = base_url.trim_end_matches('/');
    match locale {
        Some(locale) => format!("{base_url}/{}", locale.code()),
        None => base_url.to_string(),
    }
}

/// Non-empty path segments, ignoring any query string or fragment.
fn path_segments(path: &str) -> Vec<&str> {
    let path = path.split(['?', '#']).next().unwrap_or_default();
    path.split('/').filter(|s| !s.is_empty()).collect()
}

fn leaf_label(slug: &str, current_page_title: Option<&str>) -> String {
    match current_page_title {
        Some(title) => title.to_string(),
        None => title_case_slug(slug),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
