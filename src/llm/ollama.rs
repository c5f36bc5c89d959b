use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use super::{connection_error, LlmClient};
use crate::error::LlmError;
use crate::types::Locale;

pub const DEFAULT_ENDPOINT: &str = "http://localhost:11434";

#[derive(Serialize)]
struct OllamaRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    stream: bool,
    system: &'a str,
}

#[derive(Deserialize)]
struct OllamaResponse {
    #[serde(default)]
    response: String,
}

/// Local models served by Ollama's `/api/generate`
pub struct OllamaClient {
    client: Client,
    endpoint: String,
    model: String,
}

impl OllamaClient {
    pub fn new(model: &str) -> Self {
        Self::with_endpoint(DEFAULT_ENDPOINT, model)
    }

    pub fn with_endpoint(endpoint: &str, model: &str) -> Self {
        Self {
            client: Client::new(),
            endpoint: endpoint.trim_end_matches('/').to_string(),
            model: model.to_string(),
        }
    }
}

#[async_trait]
impl LlmClient for OllamaClient {
    async fn complete(
        &self,
        system_instruction: &str,
        user_text: &str,
        _locale: Locale,
    ) -> Result<String, LlmError> {
        let request = OllamaRequest {
            model: &self.model,
            prompt: user_text,
            stream: false,
            system: system_instruction,
        };

        let res = self
            .client
            .post(format!("{}/api/generate", self.endpoint))
            .json(&request)
            .send()
            .await
            .map_err(connection_error)?;

        if !res.status().is_success() {
            return Err(LlmError::Connection(res.status().as_u16().to_string()));
        }

        let body: OllamaResponse = res.json().await.map_err(connection_error)?;
        if body.response.trim().is_empty() {
            return Err(LlmError::Blocked);
        }
        Ok(body.response)
    }

    fn name(&self) -> &str {
        "ollama"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Matcher;

    #[tokio::test]
    async fn sends_system_and_prompt_separately() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/api/generate")
            .match_body(Matcher::Json(serde_json::json!({
                "model": "llama3.2",
                "prompt": "hello",
                "stream": false,
                "system": "You are AURA."
            })))
            .with_status(200)
            .with_body(r#"{"response":"Greetings.","done":true}"#)
            .create_async()
            .await;

        let client = OllamaClient::with_endpoint(&server.url(), "llama3.2");
        let reply = client.complete("You are AURA.", "hello", Locale::En).await;

        assert_eq!(reply, Ok("Greetings.".to_string()));
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn empty_response_counts_as_blocked() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/api/generate")
            .with_status(200)
            .with_body(r#"{"response":"   "}"#)
            .create_async()
            .await;

        let client = OllamaClient::with_endpoint(&server.url(), "llama3.2");
        assert_eq!(
            client.complete("s", "u", Locale::En).await,
            Err(LlmError::Blocked)
        );
    }

    #[tokio::test]
    async fn unreachable_server_is_a_connection_error() {
        let client = OllamaClient::with_endpoint("http://127.0.0.1:9", "llama3.2");
        let reply = client.complete("s", "u", Locale::En).await;
        assert!(matches!(reply, Err(LlmError::Connection(_))));
    }
}
