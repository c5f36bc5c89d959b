use anyhow::Result;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use super::catalog::{Catalog, LocalizedText};
use crate::types::Locale;

/// Loads string overrides from the data directory with fallback to the built-in table
pub struct CatalogLoader {
    data_dir: PathBuf,
}

impl CatalogLoader {
    pub fn new(data_path: impl AsRef<Path>) -> Self {
        Self {
            data_dir: data_path.as_ref().to_path_buf(),
        }
    }

    /// Build the catalog for `locale`, applying `strings.json` if one exists
    pub fn load(&self, locale: Locale) -> Result<Catalog> {
        let catalog = Catalog::builtin(locale);

        // Try multiple possible locations
        let possible_paths = vec![
            self.data_dir.join("prompts").join("strings.json"),
            self.data_dir.join("strings.json"),
        ];

        for path in possible_paths {
            if path.exists() {
                log::debug!("Loading string overrides from: {:?}", path);
                let overrides = Self::read_overrides(&path)?;
                log::info!("Applied {} string overrides", overrides.len());
                return Ok(catalog.with_overrides(overrides));
            }
        }

        log::debug!("Using built-in strings");
        Ok(catalog)
    }

    fn read_overrides(path: &Path) -> Result<HashMap<String, LocalizedText>> {
        let content = fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Failed to read string overrides: {}", e))?;
        serde_json::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse string overrides: {}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::Translate;

    #[test]
    fn falls_back_to_builtin_without_file() {
        let dir = tempfile::tempdir().unwrap();
        let catalog = CatalogLoader::new(dir.path()).load(Locale::En).unwrap();
        assert_eq!(catalog.translate("CALM_MSG"), "... analysis complete. Fragment removed.");
    }

    #[test]
    fn overrides_replace_single_entries() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("strings.json"),
            r#"{ "CALM_MSG": { "en": "quiet now", "ko": "조용" } }"#,
        )
        .unwrap();

        let catalog = CatalogLoader::new(dir.path()).load(Locale::Ko).unwrap();
        assert_eq!(catalog.translate("CALM_MSG"), "조용");
        assert_eq!(catalog.translate("YELL_MSG_2"), "안돼!");
    }

    #[test]
    fn malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("strings.json"), "{ not json").unwrap();
        assert!(CatalogLoader::new(dir.path()).load(Locale::En).is_err());
    }
}
