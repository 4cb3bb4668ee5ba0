//! Localized page shell for the Satoshi Nakamoto Institute site.
//!
//! Renders the navbar, main content region and footer around page content,
//! with navigation labels resolved through a [`i18n::TranslationProvider`].

pub mod components;
pub mod config;
pub mod error;
pub mod i18n;
pub mod urls;

pub use components::{compose_page_layout, page_layout, PageLayoutProps, PageShell};
pub use error::I18nError;
pub use i18n::{Locale, Translation, TranslationProvider};
