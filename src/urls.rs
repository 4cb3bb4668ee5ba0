//! Route paths and locale-switch links.
//!
//! The canonical locale lives at the site root (`/satoshi`), every other
//! locale under its code (`/es/satoshi`).

use crate::i18n::{Locale, LocaleRegistry};
use serde::Serialize;

/// Produces the href of the current page in another locale.
pub type HrefGenerator = dyn Fn(Locale) -> String + Send + Sync;

/// All route paths for one locale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Routes {
    pub home: String,
    pub about: String,
    pub satoshi: SatoshiRoutes,
    pub library: LibraryRoutes,
    pub mempool: MempoolRoutes,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SatoshiRoutes {
    pub index: String,
    pub emails: String,
    pub posts: String,
    pub code: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LibraryRoutes {
    pub index: String,
}

impl LibraryRoutes {
    /// Path of a single library document.
    pub fn doc(&self, slug: &str) -> String {
        format!("{}/{}", self.index, slug)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MempoolRoutes {
    pub index: String,
}

impl MempoolRoutes {
    /// Path of a single Mempool blog post.
    pub fn post(&self, slug: &str) -> String {
        format!("{}/{}", self.index, slug)
    }
}

impl Routes {
    pub fn for_locale(locale: Locale) -> Routes {
        let prefix = locale_prefix(locale);
        let home = if prefix.is_empty() {
            "/".to_string()
        } else {
            prefix.clone()
        };
        let satoshi = format!("{}/satoshi", prefix);

        Routes {
            home,
            about: format!("{}/about", prefix),
            satoshi: SatoshiRoutes {
                emails: format!("{}/emails", satoshi),
                posts: format!("{}/posts", satoshi),
                code: format!("{}/code", satoshi),
                index: satoshi,
            },
            library: LibraryRoutes {
                index: format!("{}/library", prefix),
            },
            mempool: MempoolRoutes {
                index: format!("{}/mempool", prefix),
            },
        }
    }
}

/// Shorthand for [`Routes::for_locale`].
pub fn urls(locale: Locale) -> Routes {
    Routes::for_locale(locale)
}

fn locale_prefix(locale: Locale) -> String {
    if locale.is_canonical() {
        String::new()
    } else {
        format!("/{}", locale.code())
    }
}

/// One entry of the language menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ToggleLink {
    pub locale: Locale,
    pub href: String,
    /// Native language name (e.g., "Deutsch")
    pub label: &'static str,
    pub is_current: bool,
}

/// Language menu for a page, one link per supported locale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LocaleToggleLinks {
    pub current: Locale,
    pub links: Vec<ToggleLink>,
}

/// Build the language menu for the page rendered in `locale`.
///
/// `generate_href` maps each locale to the equivalent page in that locale
/// and is called once per supported locale, in registry order.
pub fn generate_locale_toggle_links<F>(locale: Locale, generate_href: F) -> LocaleToggleLinks
where
    F: Fn(Locale) -> String,
{
    let links = LocaleRegistry::get()
        .list_all()
        .iter()
        .map(|config| ToggleLink {
            locale: config.locale,
            href: generate_href(config.locale),
            label: config.native_name,
            is_current: config.locale == locale,
        })
        .collect();

    LocaleToggleLinks {
        current: locale,
        links,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== Routes Tests ====================

    #[test]
    fn test_canonical_routes_live_at_root() {
        let routes = Routes::for_locale(Locale::English);
        assert_eq!(routes.home, "/");
        assert_eq!(routes.about, "/about");
        assert_eq!(routes.satoshi.index, "/satoshi");
        assert_eq!(routes.satoshi.emails, "/satoshi/emails");
        assert_eq!(routes.library.index, "/library");
        assert_eq!(routes.mempool.index, "/mempool");
    }

    #[test]
    fn test_translated_routes_are_prefixed() {
        let routes = Routes::for_locale(Locale::Spanish);
        assert_eq!(routes.home, "/es");
        assert_eq!(routes.satoshi.index, "/es/satoshi");
        assert_eq!(routes.satoshi.code, "/es/satoshi/code");
        assert_eq!(routes.library.index, "/es/library");
        assert_eq!(routes.mempool.index, "/es/mempool");
    }

    #[test]
    fn test_slug_routes() {
        let routes = urls(Locale::German);
        assert_eq!(routes.library.doc("bitcoin"), "/de/library/bitcoin");
        assert_eq!(routes.mempool.post("the-price-of-bitcoin"), "/de/mempool/the-price-of-bitcoin");
        assert_eq!(urls(Locale::English).mempool.post("x"), "/mempool/x");
    }

    #[test]
    fn test_routes_are_distinct_per_locale() {
        for a in Locale::ALL {
            for b in Locale::ALL {
                if a != b {
                    assert_ne!(urls(a).home, urls(b).home);
                }
            }
        }
    }

    // ==================== Toggle Link Tests ====================

    #[test]
    fn test_toggle_links_cover_every_locale_in_order() {
        let toggle = generate_locale_toggle_links(Locale::French, |l| urls(l).library.index);

        assert_eq!(toggle.current, Locale::French);
        let locales: Vec<_> = toggle.links.iter().map(|link| link.locale).collect();
        assert_eq!(locales, Locale::ALL);
    }

    #[test]
    fn test_toggle_links_use_generator_and_native_names() {
        let toggle = generate_locale_toggle_links(Locale::English, |l| urls(l).mempool.post("p"));

        let spanish = &toggle.links[1];
        assert_eq!(spanish.href, "/es/mempool/p");
        assert_eq!(spanish.label, "Español");
        assert!(!spanish.is_current);
    }

    #[test]
    fn test_toggle_links_mark_exactly_one_current() {
        let toggle = generate_locale_toggle_links(Locale::Russian, |l| urls(l).home);
        let current: Vec<_> = toggle.links.iter().filter(|link| link.is_current).collect();
        assert_eq!(current.len(), 1);
        assert_eq!(current[0].locale, Locale::Russian);
    }

    #[test]
    fn test_toggle_links_accept_boxed_generator() {
        let generator: Box<HrefGenerator> = Box::new(|l| format!("/x/{}", l.code()));
        let toggle = generate_locale_toggle_links(Locale::English, &generator);
        assert_eq!(toggle.links[0].href, "/x/en");
    }

    #[test]
    fn test_toggle_links_serialize() {
        let toggle = generate_locale_toggle_links(Locale::English, |l| urls(l).home);
        let json = serde_json::to_value(&toggle).unwrap();
        assert_eq!(json["current"], "en");
        assert_eq!(json["links"][2]["href"], "/de");
        assert_eq!(json["links"][2]["label"], "Deutsch");
    }
}
