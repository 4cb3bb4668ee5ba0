use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by the translation collaborators.
///
/// The page layout never constructs these itself; it only forwards them.
#[derive(Debug, Error)]
pub enum I18nError {
    #[error("Unknown locale code: '{0}'")]
    UnknownLocale(String),

    #[error("No translation catalog for locale '{locale}' at {}", path.display())]
    MissingCatalog { locale: String, path: PathBuf },

    #[error("Failed to read translation catalog {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse translation catalog {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
