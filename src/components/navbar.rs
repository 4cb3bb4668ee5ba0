use crate::i18n::{Locale, ShellStrings};
use crate::urls::LocaleToggleLinks;
use maud::{html, Markup, Render};
use serde::Serialize;

/// A navigation destination with already-localized text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavLink {
    pub href: String,
    pub text: String,
}

impl NavLink {
    pub fn new(href: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            href: href.into(),
            text: text.into(),
        }
    }
}

/// Language switch shown in the navbar.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LocaleToggle {
    /// The page has no known equivalent in other locales
    #[default]
    None,
    Links(LocaleToggleLinks),
}

impl LocaleToggle {
    pub fn links(&self) -> Option<&LocaleToggleLinks> {
        match self {
            LocaleToggle::None => None,
            LocaleToggle::Links(links) => Some(links),
        }
    }

    pub fn is_none(&self) -> bool {
        matches!(self, LocaleToggle::None)
    }
}

/// Top navigation bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navbar {
    pub locale: Locale,
    pub home_href: String,
    pub nav_links: Vec<NavLink>,
    pub toggle: LocaleToggle,
}

impl Render for Navbar {
    fn render(&self) -> Markup {
        let strings = ShellStrings::for_locale(self.locale);

        html! {
            header class="border-b border-gray-200" {
                nav class="twbs-container flex flex-wrap items-center justify-between py-4" {
                    a class="text-lg font-bold" href=(self.home_href) {
                        (strings.institute_name)
                    }
                    ul class="nav-links flex gap-6" {
                        @for link in &self.nav_links {
                            li {
                                a href=(link.href) { (link.text) }
                            }
                        }
                    }
                    @if let LocaleToggle::Links(toggle) = &self.toggle {
                        details class="locale-toggle relative" {
                            summary { (strings.language) }
                            ul class="absolute right-0" {
                                @for link in &toggle.links {
                                    li {
                                        a href=(link.href)
                                            hreflang=(link.locale.code())
                                            lang=(link.locale.code())
                                            aria-current=[link.is_current.then_some("page")] {
                                            (link.label)
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
