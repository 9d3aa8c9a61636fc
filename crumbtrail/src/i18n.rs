//! Localization of built-in crumb labels.

use std::collections::BTreeMap;

/// Source string of the synthesized first crumb.
pub const HOME: &str = "Home";

/// Translates interface strings into a given language.
#[cfg_attr(test, mockall::automock)]
pub trait Translator {
    /// Returns `source` translated into `langcode`, or `source` itself.
    fn translate(&self, source: &str, langcode: &str) -> String;
}

/// A translator backed by a `langcode -> source -> translation` table.
///
/// # Examples
///
/// ```
/// use crumbtrail::i18n::{TranslationTable, Translator};
///
/// let mut table = TranslationTable::default();
/// table.insert("fr", "Home", "Accueil");
///
/// assert_eq!(table.translate("Home", "fr"), "Accueil");
/// assert_eq!(table.translate("Home", "de"), "Home");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TranslationTable {
    entries: BTreeMap<String, BTreeMap<String, String>>,
}

impl TranslationTable {
    /// Builds a table from nested maps keyed by language then source string.
    #[must_use]
    pub fn new(entries: BTreeMap<String, BTreeMap<String, String>>) -> Self {
        Self { entries }
    }

    /// Adds one translation.
    pub fn insert(
        &mut self,
        langcode: impl Into<String>,
        source: impl Into<String>,
        translation: impl Into<String>,
    ) {
        self.entries
            .entry(langcode.into())
            .or_default()
            .insert(source.into(), translation.into());
    }
}

impl Translator for TranslationTable {
    fn translate(&self, source: &str, langcode: &str) -> String {
        self.entries
            .get(langcode)
            .and_then(|strings| strings.get(source))
            .cloned()
            .unwrap_or_else(|| source.to_string())
    }
}
