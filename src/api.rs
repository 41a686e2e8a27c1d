//! Summarization provider interface.
//!
//! The pipeline talks to its language model through the narrow
//! [`Summarize`] trait: hand over instructions and a document, get a short
//! text back. [`OpenAiChat`] is the production implementation, speaking the
//! OpenAI-compatible chat-completions protocol over the shared HTTP client.
//! Keeping the trait this small decouples everything downstream from the
//! model client and lets tests substitute a stub.

use crate::prompts;
use crate::utils::truncate_for_log;
use serde::{Deserialize, Serialize};
use std::env;
use std::error::Error;
use std::fmt;
use std::time::Instant;
use tracing::{info, instrument, warn};

const DEFAULT_MODEL: &str = "gpt-3.5-turbo-1106";
const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// Trait for turning (instructions, document) into a short text.
///
/// `instructions` is a template carrying a `{text}` placeholder; the
/// implementation renders the document into it and returns the model's
/// reply verbatim.
pub trait Summarize {
    async fn summarize(&self, instructions: &str, document: &str)
    -> Result<String, Box<dyn Error>>;
}

/// Chat-completions summarization provider.
///
/// Configuration comes from the environment (see [`OpenAiChat::from_env`])
/// and is carried explicitly; there is no process-wide client state.
pub struct OpenAiChat {
    http: reqwest::Client,
    api_key: String,
    model: String,
    base_url: String,
    temperature: f32,
}

impl OpenAiChat {
    pub fn new(http: reqwest::Client, api_key: String, model: String, base_url: String) -> Self {
        Self {
            http,
            api_key,
            model,
            base_url,
            temperature: 0.0,
        }
    }

    /// Build a provider from the process environment.
    ///
    /// Reads `OPENAI_API_KEY` (required), `OPENAI_MODEL`, and
    /// `OPENAI_BASE_URL` (both optional, with defaults matching the public
    /// OpenAI endpoint).
    pub fn from_env(http: reqwest::Client) -> Result<Self, Box<dyn Error>> {
        let api_key = env::var("OPENAI_API_KEY")
            .map_err(|_| "OPENAI_API_KEY is not set; export it or add it to a local .env file")?;
        let model = env::var("OPENAI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());
        let base_url = env::var("OPENAI_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        Ok(Self::new(http, api_key, model, base_url))
    }
}

impl fmt::Debug for OpenAiChat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OpenAiChat")
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .field("temperature", &self.temperature)
            .finish_non_exhaustive()
    }
}

impl Summarize for OpenAiChat {
    #[instrument(level = "info", skip_all, fields(model = %self.model))]
    async fn summarize(
        &self,
        instructions: &str,
        document: &str,
    ) -> Result<String, Box<dyn Error>> {
        let request = ChatRequest {
            model: self.model.clone(),
            messages: vec![ChatMessage {
                role: "user".to_string(),
                content: prompts::render(instructions, document),
            }],
            temperature: self.temperature,
        };

        let t0 = Instant::now();
        let response = self
            .http
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            warn!(%status, body = %truncate_for_log(&body, 300), "Summarization API returned an error");
            return Err(format!("summarization API error ({status})").into());
        }

        let parsed: ChatResponse = response.json().await?;
        let text = parsed
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or("summarization API returned no choices")?;

        info!(
            elapsed_ms = t0.elapsed().as_millis() as u128,
            chars = text.len(),
            "Summarization call succeeded"
        );
        Ok(text)
    }
}

#[derive(Debug, Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    temperature: f32,
}

#[derive(Debug, Serialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ChatResponseMessage {
    content: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chat_request_wire_shape() {
        let request = ChatRequest {
            model: "gpt-3.5-turbo-1106".to_string(),
            messages: vec![ChatMessage {
                role: "user".to_string(),
                content: "Summarize this.".to_string(),
            }],
            temperature: 0.0,
        };

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["model"], "gpt-3.5-turbo-1106");
        assert_eq!(value["temperature"], 0.0);
        assert_eq!(value["messages"][0]["role"], "user");
        assert_eq!(value["messages"][0]["content"], "Summarize this.");
    }

    #[test]
    fn test_chat_response_parses_first_choice() {
        let json = r#"{
            "id": "chatcmpl-1",
            "object": "chat.completion",
            "choices": [
                {"index": 0, "message": {"role": "assistant", "content": "A short summary."}, "finish_reason": "stop"}
            ],
            "usage": {"prompt_tokens": 10, "completion_tokens": 5}
        }"#;

        let parsed: ChatResponse = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.choices.len(), 1);
        assert_eq!(parsed.choices[0].message.content, "A short summary.");
    }

    #[test]
    fn test_chat_response_empty_choices() {
        let parsed: ChatResponse = serde_json::from_str(r#"{"choices": []}"#).unwrap();
        assert!(parsed.choices.is_empty());
    }

    #[test]
    fn test_provider_debug_hides_api_key() {
        let provider = OpenAiChat::new(
            reqwest::Client::new(),
            "sk-secret".to_string(),
            "gpt-3.5-turbo-1106".to_string(),
            DEFAULT_BASE_URL.to_string(),
        );
        let rendered = format!("{provider:?}");
        assert!(!rendered.contains("sk-secret"));
        assert!(rendered.contains("gpt-3.5-turbo-1106"));
    }
}
