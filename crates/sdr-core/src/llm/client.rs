//! Minimal client for an OpenAI-compatible chat-completions endpoint

use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use tracing::instrument;

use super::parser::extract_json;
use crate::config::ClientConfig;
use crate::error::{CapabilityError, SdrError, SdrResult};

/// One chat message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system".to_string(),
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

/// Grok (xAI) chat-completions client
pub struct GrokClient {
    config: ClientConfig,
    http_client: Client,
}

impl GrokClient {
    /// Create a new client
    pub fn new(config: ClientConfig) -> SdrResult<Self> {
        config.validate()?;
        let http_client = Client::builder()
            .build()
            .map_err(|e| SdrError::Http(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            config,
            http_client,
        })
    }

    /// Get the configuration
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Model identifier in use
    pub fn model(&self) -> &str {
        &self.config.model
    }

    /// Check that the endpoint answers a tiny completion
    ///
    /// Uses the short connectivity timeout. Never errors: any failure,
    /// including a missing API key, reports `false`.
    pub async fn test_connection(&self) -> bool {
        let Some(api_key) = self.config.api_key.as_deref().filter(|k| !k.is_empty()) else {
            return false;
        };

        let body = json!({
            "model": self.config.model,
            "messages": [ChatMessage::user("Hi")],
            "max_tokens": 5,
        });

        let result = self
            .http_client
            .post(self.config.completions_url())
            .bearer_auth(api_key)
            .timeout(self.config.connect_timeout())
            .json(&body)
            .send()
            .await;

        match result {
            Ok(response) => response.status().is_success(),
            Err(e) => {
                tracing::warn!("Connection test failed: {}", e);
                false
            }
        }
    }

    /// Send a chat completion request and return the raw response body
    #[instrument(skip(self, messages), level = "debug")]
    pub async fn chat_completion(
        &self,
        messages: &[ChatMessage],
        temperature: f32,
        max_tokens: u32,
    ) -> Result<Value, CapabilityError> {
        let api_key = self
            .config
            .api_key
            .as_deref()
            .filter(|k| !k.is_empty())
            .ok_or(CapabilityError::NotConfigured)?;

        let body = json!({
            "model": self.config.model,
            "messages": messages,
            "temperature": temperature,
            "max_tokens": max_tokens,
        });

        let response = self
            .http_client
            .post(self.config.completions_url())
            .bearer_auth(api_key)
            .timeout(self.config.request_timeout())
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    CapabilityError::Timeout {
                        seconds: self.config.request_timeout_secs,
                    }
                } else {
                    CapabilityError::from(e)
                }
            })?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(CapabilityError::Status { status, body });
        }

        let text = response.text().await?;
        serde_json::from_str(&text).map_err(|_| CapabilityError::Parse { raw: text })
    }

    /// Ask the model to analyze `data` and answer with a JSON object
    pub async fn analyze_json(
        &self,
        prompt: &str,
        data: &Value,
        system_prompt: Option<&str>,
    ) -> Result<Value, CapabilityError> {
        let mut messages = Vec::with_capacity(2);
        if let Some(system) = system_prompt {
            messages.push(ChatMessage::system(system));
        }
        messages.push(ChatMessage::user(format!(
            "{}\n\nData: {}\n\nRespond with valid JSON only.",
            prompt, data
        )));

        let response = self
            .chat_completion(&messages, self.config.temperature, self.config.max_tokens)
            .await?;

        let content = response["choices"][0]["message"]["content"]
            .as_str()
            .ok_or_else(|| CapabilityError::Parse {
                raw: response.to_string(),
            })?;

        extract_json(content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_connection_without_key_is_false() {
        let client = GrokClient::new(ClientConfig::default()).unwrap();
        assert!(!client.test_connection().await);
    }

    #[tokio::test]
    async fn test_chat_without_key_is_not_configured() {
        let client = GrokClient::new(ClientConfig::default()).unwrap();
        let result = client
            .chat_completion(&[ChatMessage::user("Hi")], 0.3, 5)
            .await;
        assert_eq!(result, Err(CapabilityError::NotConfigured));
    }

    #[test]
    fn test_new_rejects_invalid_config() {
        let result = GrokClient::new(ClientConfig::default().with_base_url(""));
        assert!(matches!(result, Err(SdrError::Config(_))));
    }

    #[test]
    fn test_chat_message_roles() {
        assert_eq!(ChatMessage::system("x").role, "system");
        assert_eq!(ChatMessage::user("x").role, "user");
    }
}
