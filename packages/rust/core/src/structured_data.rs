//! schema.org `BreadcrumbList` output for search engines.
//!
//! Maps a trail onto JSON-LD `ListItem`s with 1-based positions. The
//! current page has no URL, so its `item` field is left out.

use sitecrumbs_shared::{
    BREADCRUMB_LIST_TYPE, BreadcrumbEntry, BreadcrumbList, LIST_ITEM_TYPE, ListItem, Result,
    SCHEMA_CONTEXT,
};

/// Convert a trail into a `BreadcrumbList` document.
pub fn to_breadcrumb_list(trail: &[BreadcrumbEntry]) -> BreadcrumbList {
    let item_list_element = trail
        .iter()
        .enumerate()
        .map(|(index, entry)| ListItem {
            kind: LIST_ITEM_TYPE.to_string(),
            position: index + 1,
            name: entry.name.clone(),
            item: entry.url.clone(),
        })
        .collect();

    BreadcrumbList {
        context: SCHEMA_CONTEXT.to_string(),
        kind: BREADCRUMB_LIST_TYPE.to_string(),
        item_list_element,
    }
}

/// Pretty-printed JSON-LD for a trail.
pub fn to_json_ld(trail: &[BreadcrumbEntry]) -> Result<String> {
    Ok(serde_json::to_string_pretty(&to_breadcrumb_list(trail))?)
}

/// JSON-LD wrapped in a `<script type="application/ld+json">` element.
///
/// `</` is written as `<\/` so a label can never close the tag early;
/// JSON parsers read both forms as the same string.
pub fn json_ld_script_tag(trail: &[BreadcrumbEntry]) -> Result<String> {
    let json = to_json_ld(trail)?.replace("</", "<\\/");
    Ok(format!(
        "<script type=\"application/ld+json\">\n{json}\n</script>"
    ))
}
