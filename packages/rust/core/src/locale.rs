//! Supported display languages and their label dictionaries.
//!
//! The dictionaries are compiled in as `const` tables. Adding a language
//! means adding a [`Locale`] variant, its code in [`Locale::code`] /
//! [`Locale::from_code`], and a [`Labels`] table below.

/// A display language for breadcrumb labels.
///
/// The site serves `/en/...` and `/es/...`; English is also the fallback for
/// paths without a language prefix and for unsupported codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Locale {
    #[default]
    En,
    Es,
}

impl Locale {
    /// Every supported locale, in display order.
    pub const ALL: [Locale; 2] = [Locale::En, Locale::Es];

    /// ISO 639-1 code, as used in URL paths.
    pub fn code(self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Es => "es",
        }
    }

    /// Parse a URL language segment. Case-sensitive; `None` for anything
    /// that is not a supported code.
    pub fn from_code(code: &str) -> Option<Locale> {
        match code {
            "en" => Some(Locale::En),
            "es" => Some(Locale::Es),
            _ => None,
        }
    }

    /// Label dictionary for this locale.
    pub fn labels(self) -> &'static Labels {
        match self {
            Locale::En => &EN,
            Locale::Es => &ES,
        }
    }
}

impl std::fmt::Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

/// Display labels for the fixed parts of the site hierarchy.
#[derive(Debug, PartialEq, Eq)]
pub struct Labels {
    pub home: &'static str,
    pub blog: &'static str,
    pub projects: &'static str,
    pub services: &'static str,
    pub goodies: &'static str,
    pub css_tricks: &'static str,
    pub snippets: &'static str,
    pub tools: &'static str,
    pub useful_links: &'static str,
}

// ─── Dictionaries ───────────────────────────────────────────────────

const EN: Labels = Labels {
    home: "Home",
    blog: "Blog",
    projects: "Projects",
    services: "Services",
    goodies: "Goodies",
    css_tricks: "CSS Tricks",
    snippets: "Snippets",
    tools: "Tools",
    useful_links: "Useful Links",
};

const ES: Labels = Labels {
    home: "Inicio",
    blog: "Blog",
    projects: "Proyectos",
    services: "Servicios",
    goodies: "Recursos",
    css_tricks: "Trucos CSS",
    snippets: "Snippets",
    tools: "Herramientas",
    useful_links: "Enlaces Útiles",
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_roundtrip() {
        for locale in Locale::ALL {
            assert_eq!(Locale::from_code(locale.code()), Some(locale));
        }
    }

    #[test]
    fn unsupported_codes_are_rejected() {
        assert_eq!(Locale::from_code("fr"), None);
        assert_eq!(Locale::from_code("EN"), None);
        assert_eq!(Locale::from_code(""), None);
        assert_eq!(Locale::from_code("blog"), None);
    }

    #[test]
    fn default_is_english() {
        assert_eq!(Locale::default(), Locale::En);
        assert_eq!(Locale::default().labels().home, "Home");
    }

    #[test]
    fn spanish_labels() {
        let labels = Locale::Es.labels();
        assert_eq!(labels.home, "Inicio");
        assert_eq!(labels.projects, "Proyectos");
        assert_eq!(labels.services, "Servicios");
        assert_eq!(labels.goodies, "Recursos");
        assert_eq!(labels.tools, "Herramientas");
        assert_eq!(labels.useful_links, "Enlaces Útiles");
    }

    #[test]
    fn no_label_is_empty() {
        for locale in Locale::ALL {
            let l = locale.labels();
            for label in [
                l.home,
                l.blog,
                l.projects,
                l.services,
                l.goodies,
                l.css_tricks,
                l.snippets,
                l.tools,
                l.useful_links,
            ] {
                assert!(!label.is_empty(), "empty label in {locale}");
            }
        }
    }
}
