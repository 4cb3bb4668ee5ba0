//! Internationalization (i18n) for the page shell.
//!
//! # Architecture
//!
//! - `registry`: Single source of truth for all supported locales and their metadata
//! - `locale`: The closed `Locale` enum
//! - `strings`: Embedded shell strings per locale
//! - `catalog`: Translation providers (`StaticCatalog`, `JsonCatalog`)
//! - `validator`: Catalog coverage and placeholder checks
//!
//! # Example
//!
//! ```rust,ignore
//! use sni_shell::i18n::{Locale, StaticCatalog, TranslationProvider};
//!
//! let spanish = Locale::from_code("es")?;
//! let translation = StaticCatalog.translation(spanish).await?;
//! assert_eq!(translation.t("Library"), "Biblioteca");
//! ```

mod catalog;
mod locale;
mod registry;
pub mod strings;
mod validator;

pub use catalog::{JsonCatalog, StaticCatalog, Translation, TranslationProvider};
pub use locale::Locale;
pub use registry::{LocaleConfig, LocaleRegistry};
pub use strings::ShellStrings;
pub use validator::{CatalogValidator, ValidationReport};
