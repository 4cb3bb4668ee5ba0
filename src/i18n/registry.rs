//! Locale registry: single source of truth for all supported locales.
//!
//! The registry is plain `const` data. Nothing here is initialized at
//! runtime, so every lookup is a read of immutable tables.

use crate::i18n::Locale;

/// Metadata for a supported locale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleConfig {
    /// The locale this entry describes
    pub locale: Locale,

    /// ISO 639-1 code (e.g., "en", "es"), also used as the URL prefix
    pub code: &'static str,

    /// English name of the language (e.g., "Spanish")
    pub name: &'static str,

    /// Native name of the language (e.g., "Español"), shown in the language menu
    pub native_name: &'static str,

    /// Whether this is the canonical/source locale (exactly one is)
    pub is_canonical: bool,
}

pub(crate) const ENGLISH: LocaleConfig = LocaleConfig {
    locale: Locale::English,
    code: "en",
    name: "English",
    native_name: "English",
    is_canonical: true,
};

pub(crate) const SPANISH: LocaleConfig = LocaleConfig {
    locale: Locale::Spanish,
    code: "es",
    name: "Spanish",
    native_name: "Español",
    is_canonical: false,
};

pub(crate) const GERMAN: LocaleConfig = LocaleConfig {
    locale: Locale::German,
    code: "de",
    name: "German",
    native_name: "Deutsch",
    is_canonical: false,
};

pub(crate) const FRENCH: LocaleConfig = LocaleConfig {
    locale: Locale::French,
    code: "fr",
    name: "French",
    native_name: "Français",
    is_canonical: false,
};

pub(crate) const ITALIAN: LocaleConfig = LocaleConfig {
    locale: Locale::Italian,
    code: "it",
    name: "Italian",
    native_name: "Italiano",
    is_canonical: false,
};

pub(crate) const PORTUGUESE: LocaleConfig = LocaleConfig {
    locale: Locale::Portuguese,
    code: "pt",
    name: "Portuguese",
    native_name: "Português",
    is_canonical: false,
};

pub(crate) const RUSSIAN: LocaleConfig = LocaleConfig {
    locale: Locale::Russian,
    code: "ru",
    name: "Russian",
    native_name: "Русский",
    is_canonical: false,
};

pub(crate) const CHINESE: LocaleConfig = LocaleConfig {
    locale: Locale::Chinese,
    code: "zh",
    name: "Chinese",
    native_name: "中文",
    is_canonical: false,
};

pub(crate) const JAPANESE: LocaleConfig = LocaleConfig {
    locale: Locale::Japanese,
    code: "ja",
    name: "Japanese",
    native_name: "日本語",
    is_canonical: false,
};

/// Registry of every supported locale, in menu order.
pub struct LocaleRegistry {
    locales: &'static [LocaleConfig],
}

static REGISTRY: LocaleRegistry = LocaleRegistry {
    locales: &[
        ENGLISH, SPANISH, GERMAN, FRENCH, ITALIAN, PORTUGUESE, RUSSIAN, CHINESE, JAPANESE,
    ],
};

impl LocaleRegistry {
    /// Get the registry.
    pub fn get() -> &'static LocaleRegistry {
        &REGISTRY
    }

    /// Get a locale configuration by its code.
    ///
    /// # Returns
    /// * `Some(&LocaleConfig)` if the code is supported
    /// * `None` otherwise
    pub fn get_by_code(&self, code: &str) -> Option<&'static LocaleConfig> {
        self.locales.iter().find(|config| config.code == code)
    }

    /// All locale configurations, in menu order.
    pub fn list_all(&self) -> &'static [LocaleConfig] {
        self.locales
    }

    /// The canonical (source) locale configuration.
    pub fn canonical(&self) -> &'static LocaleConfig {
        &ENGLISH
    }

    /// Check if a locale code is supported.
    pub fn is_supported(&self, code: &str) -> bool {
        self.get_by_code(code).is_some()
    }
}
