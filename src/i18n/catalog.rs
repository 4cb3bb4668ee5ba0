//! Translation providers.
//!
//! A provider resolves a [`Translation`] for a locale. The page layout awaits
//! exactly one of these lookups per render.

use crate::error::I18nError;
use crate::i18n::{CatalogValidator, Locale, ShellStrings};
use std::collections::HashMap;
use std::future::Future;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Locale-scoped text lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Translation {
    locale: Locale,
    messages: HashMap<String, String>,
}

impl Translation {
    pub fn new(locale: Locale, messages: HashMap<String, String>) -> Self {
        Self { locale, messages }
    }

    /// A translation with no entries: every lookup returns its key.
    pub fn identity(locale: Locale) -> Self {
        Self::new(locale, HashMap::new())
    }

    /// Build a translation from the embedded shell strings for a locale.
    pub fn from_shell_strings(locale: Locale) -> Self {
        let messages = ShellStrings::for_locale(locale)
            .entries()
            .iter()
            .map(|(key, text)| (key.to_string(), text.to_string()))
            .collect();
        Self::new(locale, messages)
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// Look up the localized text for a source string.
    ///
    /// Unknown keys come back unchanged.
    pub fn t<'a>(&'a self, key: &'a str) -> &'a str {
        self.messages.get(key).map(String::as_str).unwrap_or(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.messages.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

/// Resolves the translation for a locale.
pub trait TranslationProvider {
    fn translation(
        &self,
        locale: Locale,
    ) -> impl Future<Output = Result<Translation, I18nError>> + Send;
}

impl<P: TranslationProvider + Sync> TranslationProvider for &P {
    fn translation(
        &self,
        locale: Locale,
    ) -> impl Future<Output = Result<Translation, I18nError>> + Send {
        (**self).translation(locale)
    }
}

/// Provider backed by the strings compiled into the binary. Never fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticCatalog;

impl TranslationProvider for StaticCatalog {
    async fn translation(&self, locale: Locale) -> Result<Translation, I18nError> {
        Ok(Translation::from_shell_strings(locale))
    }
}

/// Provider reading `<dir>/<code>.json` files.
///
/// Each file is a flat JSON object mapping source strings to localized
/// strings. The canonical locale may omit its file, in which case lookups
/// return the source strings.
#[derive(Debug, Clone)]
pub struct JsonCatalog {
    dir: PathBuf,
}

impl JsonCatalog {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the catalog file for a locale.
    pub fn path_for(&self, locale: Locale) -> PathBuf {
        self.dir.join(format!("{}.json", locale.code()))
    }
}

impl TranslationProvider for JsonCatalog {
    async fn translation(&self, locale: Locale) -> Result<Translation, I18nError> {
        let path = self.path_for(locale);

        let raw = match tokio::fs::read_to_string(&path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                if locale.is_canonical() {
                    return Ok(Translation::identity(locale));
                }
                return Err(I18nError::MissingCatalog {
                    locale: locale.code().to_string(),
                    path,
                });
            }
            Err(source) => return Err(I18nError::Io { path, source }),
        };

        let messages: HashMap<String, String> = match serde_json::from_str(&raw) {
            Ok(messages) => messages,
            Err(source) => return Err(I18nError::Parse { path, source }),
        };

        let validation = CatalogValidator::validate(&messages);
        if validation.has_warnings() {
            warn!(
                "Catalog validation warnings for {} ({}): {:?}",
                locale.name(),
                locale.code(),
                validation.warnings
            );
        }
        if validation.has_errors() {
            warn!(
                "Catalog validation errors for {} ({}): {:?}",
                locale.name(),
                locale.code(),
                validation.errors
            );
        }

        info!(
            "Loaded {} messages for {} from {}",
            messages.len(),
            locale.code(),
            path.display()
        );

        Ok(Translation::new(locale, messages))
    }
}
