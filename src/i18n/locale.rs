//! Locale type: closed set of supported languages.

use crate::error::I18nError;
use crate::i18n::registry::{
    LocaleConfig, CHINESE, ENGLISH, FRENCH, GERMAN, ITALIAN, JAPANESE, PORTUGUESE, RUSSIAN,
    SPANISH,
};
use crate::i18n::LocaleRegistry;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// A supported locale.
///
/// Every value of this type is valid, so code that holds a `Locale` never has
/// to handle an "unsupported locale" case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Locale {
    #[serde(rename = "en")]
    English,
    #[serde(rename = "es")]
    Spanish,
    #[serde(rename = "de")]
    German,
    #[serde(rename = "fr")]
    French,
    #[serde(rename = "it")]
    Italian,
    #[serde(rename = "pt")]
    Portuguese,
    #[serde(rename = "ru")]
    Russian,
    #[serde(rename = "zh")]
    Chinese,
    #[serde(rename = "ja")]
    Japanese,
}

impl Locale {
    /// Every locale, in registry (menu) order.
    pub const ALL: [Locale; 9] = [
        Locale::English,
        Locale::Spanish,
        Locale::German,
        Locale::French,
        Locale::Italian,
        Locale::Portuguese,
        Locale::Russian,
        Locale::Chinese,
        Locale::Japanese,
    ];

    /// Create a Locale from an ISO 639-1 code.
    ///
    /// # Returns
    /// * `Ok(Locale)` if the code is supported
    /// * `Err(I18nError::UnknownLocale)` otherwise
    ///
    /// # Example
    /// ```
    /// use sni_shell::i18n::Locale;
    ///
    /// let spanish = Locale::from_code("es").unwrap();
    /// assert_eq!(spanish, Locale::Spanish);
    /// ```
    pub fn from_code(code: &str) -> Result<Locale, I18nError> {
        LocaleRegistry::get()
            .get_by_code(code)
            .map(|config| config.locale)
            .ok_or_else(|| I18nError::UnknownLocale(code.to_string()))
    }

    /// The canonical (source) locale.
    pub fn canonical() -> Locale {
        LocaleRegistry::get().canonical().locale
    }

    /// Registry metadata for this locale.
    pub fn config(self) -> &'static LocaleConfig {
        match self {
            Locale::English => &ENGLISH,
            Locale::Spanish => &SPANISH,
            Locale::German => &GERMAN,
            Locale::French => &FRENCH,
            Locale::Italian => &ITALIAN,
            Locale::Portuguese => &PORTUGUESE,
            Locale::Russian => &RUSSIAN,
            Locale::Chinese => &CHINESE,
            Locale::Japanese => &JAPANESE,
        }
    }

    /// ISO 639-1 code (e.g., "en").
    pub fn code(self) -> &'static str {
        self.config().code
    }

    /// English name of the language.
    pub fn name(self) -> &'static str {
        self.config().name
    }

    /// Native name of the language.
    pub fn native_name(self) -> &'static str {
        self.config().native_name
    }

    pub fn is_canonical(self) -> bool {
        self.config().is_canonical
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Locale {
    type Err = I18nError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Locale::from_code(s)
    }
}
