use crate::error::I18nError;
use crate::i18n::{JsonCatalog, Locale, StaticCatalog, Translation, TranslationProvider};
use anyhow::{Context, Result};
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct Config {
    // Rendering
    pub locale: Locale,
    pub main_class: Option<String>,

    // Content
    pub content_file: Option<PathBuf>,

    // Translations
    pub locales_dir: Option<PathBuf>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let locale_code = std::env::var("SITE_LOCALE").unwrap_or_else(|_| "en".to_string());

        Ok(Self {
            locale: Locale::from_code(&locale_code)
                .with_context(|| format!("SITE_LOCALE is not a supported locale: {}", locale_code))?,
            main_class: std::env::var("SITE_MAIN_CLASS")
                .ok()
                .filter(|v| !v.trim().is_empty()),

            content_file: std::env::var("SITE_CONTENT_FILE").ok().map(PathBuf::from),

            locales_dir: std::env::var("SITE_LOCALES_DIR").ok().map(PathBuf::from),
        })
    }

    /// The translation provider selected by this configuration.
    pub fn catalog(&self) -> Catalog {
        match &self.locales_dir {
            Some(dir) => Catalog::Json(JsonCatalog::new(dir)),
            None => Catalog::Static(StaticCatalog),
        }
    }
}

/// Either embedded or on-disk translations.
#[derive(Debug, Clone)]
pub enum Catalog {
    Static(StaticCatalog),
    Json(JsonCatalog),
}

impl TranslationProvider for Catalog {
    async fn translation(&self, locale: Locale) -> Result<Translation, I18nError> {
        match self {
            Catalog::Static(catalog) => catalog.translation(locale).await,
            Catalog::Json(catalog) => catalog.translation(locale).await,
        }
    }
}
