//! Shared page shell: navbar, main content region and footer.

use crate::components::{class_names, Footer, LocaleToggle, NavLink, Navbar};
use crate::error::I18nError;
use crate::i18n::strings::{LIBRARY, MEMPOOL, THE_COMPLETE_SATOSHI};
use crate::i18n::{Locale, TranslationProvider};
use crate::urls::{generate_locale_toggle_links, urls, HrefGenerator};
use maud::{html, Markup, Render};
use tracing::debug;

/// Classes of the outer `<body>` container.
pub const BODY_CLASS: &str = "flex min-h-screen flex-col";

/// Classes always present on `<main>`; caller classes are appended after them.
pub const MAIN_BASE_CLASS: &str = "twbs-container mb-4 flex-grow pb-4";

/// Inputs of [`page_layout`].
pub struct PageLayoutProps {
    /// Extra classes for `<main>`
    pub class_name: Option<String>,
    /// Maps each locale to this page's equivalent; enables the language menu
    pub generate_href: Option<Box<HrefGenerator>>,
    pub locale: Locale,
    /// Page content, rendered once inside `<main>`
    pub children: Markup,
}

impl PageLayoutProps {
    pub fn new(locale: Locale, children: Markup) -> Self {
        Self {
            class_name: None,
            generate_href: None,
            locale,
            children,
        }
    }

    pub fn with_class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = Some(class_name.into());
        self
    }

    pub fn with_generate_href<F>(mut self, generate_href: F) -> Self
    where
        F: Fn(Locale) -> String + Send + Sync + 'static,
    {
        self.generate_href = Some(Box::new(generate_href));
        self
    }
}

/// The composed render tree of a page.
#[derive(Debug, Clone)]
pub struct PageShell {
    pub body_class: &'static str,
    pub navbar: Navbar,
    pub main_class: String,
    pub children: Markup,
    pub footer: Footer,
}

impl Render for PageShell {
    fn render(&self) -> Markup {
        html! {
            body class=(self.body_class) {
                (self.navbar)
                main class=(self.main_class) {
                    (self.children)
                }
                (self.footer)
            }
        }
    }
}

/// Compose the page shell for `props.locale` around `props.children`.
///
/// The translation lookup is the only await. Errors from the provider are
/// returned as-is.
pub async fn compose_page_layout<P>(
    provider: &P,
    props: PageLayoutProps,
) -> Result<PageShell, I18nError>
where
    P: TranslationProvider,
{
    let PageLayoutProps {
        class_name,
        generate_href,
        locale,
        children,
    } = props;

    let translation = provider.translation(locale).await?;

    let toggle = match &generate_href {
        Some(generate_href) => {
            LocaleToggle::Links(generate_locale_toggle_links(locale, generate_href))
        }
        None => LocaleToggle::None,
    };

    let routes = urls(locale);
    let nav_links = vec![
        NavLink::new(
            routes.satoshi.index.as_str(),
            translation.t(THE_COMPLETE_SATOSHI),
        ),
        NavLink::new(routes.library.index.as_str(), translation.t(LIBRARY)),
        NavLink::new(routes.mempool.index.as_str(), translation.t(MEMPOOL)),
    ];

    debug!(
        "Composed page shell for {} (language menu: {})",
        locale.code(),
        !toggle.is_none()
    );

    Ok(PageShell {
        body_class: BODY_CLASS,
        navbar: Navbar {
            locale,
            home_href: routes.home,
            nav_links,
            toggle,
        },
        main_class: class_names([Some(MAIN_BASE_CLASS), class_name.as_deref()]),
        children,
        footer: Footer { locale },
    })
}

/// Compose and render the page shell to markup.
pub async fn page_layout<P>(provider: &P, props: PageLayoutProps) -> Result<Markup, I18nError>
where
    P: TranslationProvider,
{
    let shell = compose_page_layout(provider, props).await?;
    Ok(shell.render())
}
