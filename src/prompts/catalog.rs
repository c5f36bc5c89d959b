use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::templates::STRINGS;
use crate::traits::Translate;
use crate::types::Locale;

/// A string in both supported languages; Korean falls back to English when absent
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalizedText {
    pub en: String,
    #[serde(default)]
    pub ko: Option<String>,
}

impl LocalizedText {
    pub fn get(&self, locale: Locale) -> &str {
        match locale {
            Locale::En => &self.en,
            Locale::Ko => self.ko.as_deref().unwrap_or(&self.en),
        }
    }
}

/// Localized string table bound to one session locale
#[derive(Debug, Clone)]
pub struct Catalog {
    locale: Locale,
    entries: HashMap<String, LocalizedText>,
}

impl Catalog {
    /// The built-in table for `locale`
    pub fn builtin(locale: Locale) -> Self {
        let entries = STRINGS
            .iter()
            .map(|(key, en, ko)| {
                (
                    key.to_string(),
                    LocalizedText {
                        en: en.to_string(),
                        ko: Some(ko.to_string()),
                    },
                )
            })
            .collect();
        Self { locale, entries }
    }

    /// Replaces or adds entries, keeping everything else
    pub fn with_overrides(mut self, overrides: HashMap<String, LocalizedText>) -> Self {
        self.entries.extend(overrides);
        self
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(|text| text.get(self.locale))
    }
}

impl Translate for Catalog {
    fn translate(&self, key: &str) -> String {
        self.get(key)
            .map(str::to_string)
            .unwrap_or_else(|| format!("[{}]", key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_per_locale() {
        assert_eq!(Catalog::builtin(Locale::En).translate("YELL_MSG_1"), "STOP!");
        assert_eq!(Catalog::builtin(Locale::Ko).translate("YELL_MSG_1"), "멈춰!");
    }

    #[test]
    fn missing_keys_become_visible_placeholders() {
        let catalog = Catalog::builtin(Locale::En);
        assert_eq!(catalog.translate("NO_SUCH_KEY"), "[NO_SUCH_KEY]");
    }

    #[test]
    fn korean_falls_back_to_english() {
        let mut overrides = HashMap::new();
        overrides.insert(
            "CUSTOM".to_string(),
            LocalizedText {
                en: "only english".into(),
                ko: None,
            },
        );
        let catalog = Catalog::builtin(Locale::Ko).with_overrides(overrides);
        assert_eq!(catalog.translate("CUSTOM"), "only english");
    }

    #[test]
    fn builtin_keys_are_unique() {
        let mut seen = std::collections::HashSet::new();
        for (key, _, _) in STRINGS {
            assert!(seen.insert(*key), "duplicate key {}", key);
        }
    }
}
