use async_trait::async_trait;
use std::sync::Arc;

use super::LlmClient;
use crate::error::LlmError;
use crate::prompts::fill;
use crate::traits::Translate;
use crate::types::Locale;

/// Stand-in backend used when no API key is configured; acknowledges the input verbatim
#[derive(Clone)]
pub struct OfflineClient {
    strings: Arc<dyn Translate>,
}

impl OfflineClient {
    /// Reads its placeholder from the session's string table, overrides included
    pub fn new(strings: Arc<dyn Translate>) -> Self {
        Self { strings }
    }
}

#[async_trait]
impl LlmClient for OfflineClient {
    async fn complete(
        &self,
        _system_instruction: &str,
        user_text: &str,
        _locale: Locale,
    ) -> Result<String, LlmError> {
        let template = self.strings.translate("PLACEHOLDER_OFFLINE");
        Ok(fill(&template, &[("prompt", user_text)]))
    }

    fn name(&self) -> &str {
        "offline"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prompts::{Catalog, LocalizedText};
    use std::collections::HashMap;

    #[tokio::test]
    async fn acknowledges_in_session_language() {
        let english = OfflineClient::new(Arc::new(Catalog::builtin(Locale::En)));
        assert_eq!(
            english.complete("sys", "hi", Locale::En).await,
            Ok("[Placeholder - LLM Offline] Ack: hi".to_string())
        );
        let korean = OfflineClient::new(Arc::new(Catalog::builtin(Locale::Ko)));
        assert_eq!(
            korean.complete("sys", "안녕", Locale::Ko).await,
            Ok("[플레이스홀더 - LLM 오프라인] 확인: 안녕".to_string())
        );
    }

    #[tokio::test]
    async fn placeholder_follows_catalog_overrides() {
        let mut overrides = HashMap::new();
        overrides.insert(
            "PLACEHOLDER_OFFLINE".to_string(),
            LocalizedText {
                en: "(core asleep) {prompt}".into(),
                ko: None,
            },
        );
        let catalog = Catalog::builtin(Locale::En).with_overrides(overrides);
        let client = OfflineClient::new(Arc::new(catalog));
        assert_eq!(
            client.complete("sys", "status?", Locale::En).await,
            Ok("(core asleep) status?".to_string())
        );
    }
}
