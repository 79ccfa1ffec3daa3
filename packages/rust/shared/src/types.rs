//! Core domain types for SiteCrumbs breadcrumb trails.

use serde::{Deserialize, Serialize};

/// `@context` value for schema.org structured data.
pub const SCHEMA_CONTEXT: &str = "https://schema.org";

/// `@type` of the structured-data root.
pub const BREADCRUMB_LIST_TYPE: &str = "BreadcrumbList";

/// `@type` of each structured-data element.
pub const LIST_ITEM_TYPE: &str = "ListItem";

// ---------------------------------------------------------------------------
// BreadcrumbEntry
// ---------------------------------------------------------------------------

/// A single node of a navigation trail.
///
/// `url` is `None` for the current page; every ancestor carries an absolute
/// URL. When serialized, the `url` key is omitted for the current page.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BreadcrumbEntry {
    /// Display label, already localized.
    pub name: String,
    /// Absolute link target (absent for the current page).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl BreadcrumbEntry {
    /// An ancestor entry that links to `url`.
    pub fn linked(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: Some(url.into()),
        }
    }

    /// The "you are here" entry, which is never a link.
    pub fn current(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: None,
        }
    }
}

impl std::fmt::Display for BreadcrumbEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.url {
            Some(url) => write!(f, "{} ({url})", self.name),
            None => write!(f, "{}", self.name),
        }
    }
}

// ---------------------------------------------------------------------------
// BreadcrumbList (schema.org JSON-LD)
// ---------------------------------------------------------------------------

/// Root of a schema.org `BreadcrumbList` JSON-LD block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreadcrumbList {
    #[serde(rename = "@context")]
    pub context: String,
    #[serde(rename = "@type")]
    pub kind: String,
    /// Trail elements, root first.
    #[serde(rename = "itemListElement")]
    pub item_list_element: Vec<ListItem>,
}

/// One `ListItem` inside a [`BreadcrumbList`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListItem {
    #[serde(rename = "@type")]
    pub kind: String,
    /// 1-based position in the trail.
    pub position: usize,
    pub name: String,
    /// Absolute URL of the element; omitted for the current page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub item: Option<String>,
}
