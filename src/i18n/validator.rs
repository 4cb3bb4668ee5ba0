//! Translation catalog validation.
//!
//! Checks that a catalog loaded from disk covers every string the page shell
//! looks up, and that translations keep `{placeholder}` tokens intact.

use crate::i18n::strings::SHELL_KEYS;
use regex::Regex;
use std::collections::{BTreeSet, HashMap};
use std::sync::OnceLock;

/// Validation report containing errors and warnings about a catalog.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ValidationReport {
    /// Critical problems (missing shell keys)
    pub errors: Vec<String>,

    /// Non-critical problems (empty values, dropped placeholders)
    pub warnings: Vec<String>,
}

impl ValidationReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// Check if the report is clean (no errors or warnings)
    pub fn is_clean(&self) -> bool {
        !self.has_errors() && !self.has_warnings()
    }
}

/// Validator for translation catalogs.
pub struct CatalogValidator;

static PLACEHOLDER_REGEX: OnceLock<Regex> = OnceLock::new();

impl CatalogValidator {
    /// Validate a `{ source: localized }` catalog.
    ///
    /// This function checks that:
    /// - every shell key is present (error otherwise)
    /// - no value is empty (warning)
    /// - every `{name}` placeholder in a key survives in its value (warning)
    pub fn validate(messages: &HashMap<String, String>) -> ValidationReport {
        let mut report = ValidationReport::new();

        for key in SHELL_KEYS {
            if !messages.contains_key(key) {
                report.errors.push(format!("Missing shell key: {:?}", key));
            }
        }

        // Sorted so the report is stable across runs
        let mut keys: Vec<_> = messages.keys().collect();
        keys.sort();

        for key in keys {
            let value = &messages[key];
            if value.trim().is_empty() {
                report
                    .warnings
                    .push(format!("Empty translation for {:?}", key));
                continue;
            }

            let expected = Self::extract_placeholders(key);
            let actual = Self::extract_placeholders(value);
            if expected != actual {
                report.warnings.push(format!(
                    "Placeholder mismatch for {:?}: source has {:?}, translation has {:?}",
                    key, expected, actual
                ));
            }
        }

        report
    }

    /// Extract all `{name}` placeholders from text
    fn extract_placeholders(text: &str) -> BTreeSet<String> {
        let regex = PLACEHOLDER_REGEX
            .get_or_init(|| Regex::new(r"\{[A-Za-z_][A-Za-z0-9_]*\}").unwrap());

        regex
            .find_iter(text)
            .map(|m| m.as_str().to_string())
            .collect()
    }
}
