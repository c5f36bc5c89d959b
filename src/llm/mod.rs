pub mod gemini;
pub mod offline;
pub mod ollama;

use async_trait::async_trait;

use crate::error::LlmError;
use crate::types::Locale;

/// A text-completion backend.
///
/// Implementations must not log `user_text` or the completion; the controller only ever
/// logs that a reply arrived.
#[async_trait]
pub trait LlmClient: Send + Sync {
    async fn complete(
        &self,
        system_instruction: &str,
        user_text: &str,
        locale: Locale,
    ) -> Result<String, LlmError>;

    /// Short backend name for logs
    fn name(&self) -> &str;
}

/// Maps transport failures onto `LlmError::Connection`; the URL is stripped since it may carry a key
pub(crate) fn connection_error(error: reqwest::Error) -> LlmError {
    if error.is_timeout() {
        LlmError::Connection("timeout".to_string())
    } else if let Some(status) = error.status() {
        LlmError::Connection(status.as_u16().to_string())
    } else {
        LlmError::Connection(error.without_url().to_string())
    }
}

pub use gemini::GeminiClient;
pub use offline::OfflineClient;
pub use ollama::OllamaClient;
