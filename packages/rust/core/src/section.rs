//! Site section taxonomy.
//!
//! The first content segment of a path selects a [`Section`]; inside
//! `goodies` the next segment selects a [`GoodiesCategory`]. Slugs that
//! match nothing are not errors: callers fall back to title-casing.

use crate::locale::Locale;
use crate::slug::title_case_slug;

/// Top-level content section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Blog,
    Projects,
    Services,
    Goodies,
}

impl Section {
    #[cfg(test)]
    pub(crate) const ALL: [Section; 4] = [
        Section::Blog,
        Section::Projects,
        Section::Services,
        Section::Goodies,
    ];

    /// Parse a path segment. `None` means "unknown section".
    pub fn from_slug(slug: &str) -> Option<Section> {
        match slug {
            "blog" => Some(Section::Blog),
            "projects" => Some(Section::Projects),
            "services" => Some(Section::Services),
            "goodies" => Some(Section::Goodies),
            _ => None,
        }
    }

    /// URL segment of the section root.
    pub fn slug(self) -> &'static str {
        match self {
            Section::Blog => "blog",
            Section::Projects => "projects",
            Section::Services => "services",
            Section::Goodies => "goodies",
        }
    }

    pub fn label(self, locale: Locale) -> &'static str {
        let labels = locale.labels();
        match self {
            Section::Blog => labels.blog,
            Section::Projects => labels.projects,
            Section::Services => labels.services,
            Section::Goodies => labels.goodies,
        }
    }
}

/// Category under `/goodies`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GoodiesCategory {
    CssTricks,
    Snippets,
    Tools,
    UsefulLinks,
}

impl GoodiesCategory {
    #[cfg(test)]
    pub(crate) const ALL: [GoodiesCategory; 4] = [
        GoodiesCategory::CssTricks,
        GoodiesCategory::Snippets,
        GoodiesCategory::Tools,
        GoodiesCategory::UsefulLinks,
    ];

    pub fn from_slug(slug: &str) -> Option<GoodiesCategory> {
        match slug {
            "css-tricks" => Some(GoodiesCategory::CssTricks),
            "snippets" => Some(GoodiesCategory::Snippets),
            "tools" => Some(GoodiesCategory::Tools),
            "useful-links" => Some(GoodiesCategory::UsefulLinks),
            _ => None,
        }
    }

    pub fn slug(self) -> &'static str {
        match self {
            GoodiesCategory::CssTricks => "css-tricks",
            GoodiesCategory::Snippets => "snippets",
            GoodiesCategory::Tools => "tools",
            GoodiesCategory::UsefulLinks => "useful-links",
        }
    }

    pub fn label(self, locale: Locale) -> &'static str {
        let labels = locale.labels();
        match self {
            GoodiesCategory::CssTricks => labels.css_tricks,
            GoodiesCategory::Snippets => labels.snippets,
            GoodiesCategory::Tools => labels.tools,
            GoodiesCategory::UsefulLinks => labels.useful_links,
        }
    }
}

/// Label for a goodies category slug, title-casing unknown categories.
pub fn category_label(locale: Locale, slug: &str) -> String {
    match GoodiesCategory::from_slug(slug) {
        Some(category) => category.label(locale).to_string(),
        None => title_case_slug(slug),
    }
}
