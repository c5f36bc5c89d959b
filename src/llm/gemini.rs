use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::{connection_error, LlmClient};
use crate::error::LlmError;
use crate::prompts::compose_turn;
use crate::types::Locale;

pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_MODEL: &str = "gemini-1.5-flash";

#[derive(Serialize)]
struct GenerateRequest {
    contents: Vec<Content>,
}

#[derive(Serialize, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Serialize, Deserialize)]
struct Part {
    #[serde(default)]
    text: String,
}

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<Content>,
}

/// Google Generative Language `generateContent` backend
pub struct GeminiClient {
    client: Client,
    base_url: String,
    model: String,
    api_key: String,
}

impl GeminiClient {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_endpoint(DEFAULT_BASE_URL, DEFAULT_MODEL, api_key)
    }

    pub fn with_endpoint(base_url: &str, model: &str, api_key: impl Into<String>) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .unwrap_or_else(|_| Client::new());
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            model: model.to_string(),
            api_key: api_key.into(),
        }
    }

    fn url(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model
        )
    }
}

#[async_trait]
impl LlmClient for GeminiClient {
    async fn complete(
        &self,
        system_instruction: &str,
        user_text: &str,
        _locale: Locale,
    ) -> Result<String, LlmError> {
        let request = GenerateRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: compose_turn(system_instruction, user_text),
                }],
            }],
        };

        let response = self
            .client
            .post(self.url())
            .query(&[("key", self.api_key.as_str())])
            .json(&request)
            .send()
            .await
            .map_err(connection_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(LlmError::Connection(status.as_u16().to_string()));
        }

        let body: GenerateResponse = response.json().await.map_err(connection_error)?;

        // A missing candidate means the prompt or reply was filtered
        let text = body
            .candidates
            .into_iter()
            .next()
            .and_then(|candidate| candidate.content)
            .map(|content| {
                content
                    .parts
                    .into_iter()
                    .map(|part| part.text)
                    .collect::<String>()
            })
            .unwrap_or_default();

        if text.trim().is_empty() {
            return Err(LlmError::Blocked);
        }
        Ok(text)
    }

    fn name(&self) -> &str {
        "gemini"
    }
}
