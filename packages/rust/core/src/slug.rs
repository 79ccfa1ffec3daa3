//! Slug helpers: readable labels from URL slugs, and clean slugs from
//! localized content entry ids.

use crate::locale::Locale;

/// Turn a hyphenated slug into a label by capitalizing each word.
///
/// `some-unknown-page` becomes `Some Unknown Page`. Empty words (from
/// doubled, leading, or trailing hyphens) are dropped; the rest of each
/// word is left as written. A slug with no words at all (`---`) comes back
/// unchanged rather than as an empty label.
pub fn title_case_slug(slug: &str) -> String {
    let label = slug
        .split('-')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(c) => {
                    let upper: String = c.to_uppercase().collect();
                    format!("{upper}{}", chars.as_str())
                }
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ");

    if label.is_empty() {
        slug.to_string()
    } else {
        label
    }
}

/// Clean URL slug for a content entry stored as `{slug}-{lang}.md`.
///
/// Strips a `.md` extension, then a `-{code}` suffix for any supported
/// locale: `hospeda-en.md` becomes `hospeda`. Ids without those suffixes
/// come back unchanged.
pub fn content_slug(entry_id: &str) -> &str {
    let stem = entry_id.strip_suffix(".md").unwrap_or(entry_id);

    Locale::ALL
        .iter()
        .find_map(|locale| {
            stem.strip_suffix(locale.code())
                .and_then(|rest| rest.strip_suffix('-'))
        })
        .unwrap_or(stem)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_case_converts_slugs() {
        assert_eq!(title_case_slug("some-unknown-page"), "Some Unknown Page");
        assert_eq!(title_case_slug("landing-pages"), "Landing Pages");
        assert_eq!(title_case_slug("post"), "Post");
    }

    #[test]
    fn title_case_drops_empty_words() {
        assert_eq!(title_case_slug("web--apps"), "Web Apps");
        assert_eq!(title_case_slug("-leading-and-trailing-"), "Leading And Trailing");
        assert_eq!(title_case_slug("---"), "---");
        assert_eq!(title_case_slug("-"), "-");
        assert_eq!(title_case_slug(""), "");
    }

    #[test]
    fn title_case_keeps_rest_of_word() {
        assert_eq!(title_case_slug("iOS-tips"), "IOS Tips");
        assert_eq!(title_case_slug("api_v2"), "Api_v2");
        assert_eq!(title_case_slug("ñandú-guide"), "Ñandú Guide");
    }

    #[test]
    fn content_slug_strips_language_suffix() {
        assert_eq!(content_slug("hospeda-en.md"), "hospeda");
        assert_eq!(content_slug("hospeda-es.md"), "hospeda");
        assert_eq!(content_slug("zod-smith-en"), "zod-smith");
    }

    #[test]
    fn content_slug_leaves_other_ids_alone() {
        assert_eq!(content_slug("hospeda.md"), "hospeda");
        assert_eq!(content_slug("garden"), "garden");
        assert_eq!(content_slug("kitchen-fr.md"), "kitchen-fr");
        // "-en" must be a separate suffix, not the tail of a word
        assert_eq!(content_slug("golden.md"), "golden");
    }
}
