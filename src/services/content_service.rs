//! AI content generation - proxies an external completion API.
//!
//! Builds a per-kind prompt, forwards it to the configured chat
//! completion endpoint and returns the generated text verbatim.
//! Upstream failures surface as 502 responses.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::config::{Config, AI_REQUEST_TIMEOUT_SECONDS};
use crate::errors::{AppError, AppResult};

/// What the caller wants generated
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentKind {
    Description,
    Faqs,
    Schedule,
}

impl ContentKind {
    /// Parse from a request value
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "description" => Some(ContentKind::Description),
            "faqs" => Some(ContentKind::Faqs),
            "schedule" => Some(ContentKind::Schedule),
            _ => None,
        }
    }
}

/// Build the prompt forwarded to the completion API.
fn build_prompt(kind: ContentKind, topic: &str, extra: Option<&str>) -> String {
    let mut prompt = match kind {
        ContentKind::Description => format!(
            "Write an engaging, factual marketing description (2-3 paragraphs) \
             for the following event: {}",
            topic
        ),
        ContentKind::Faqs => format!(
            "Write 5 frequently asked questions with concise answers \
             for attendees of the following event: {}",
            topic
        ),
        ContentKind::Schedule => format!(
            "Draft a realistic hour-by-hour schedule for the following event: {}",
            topic
        ),
    };

    if let Some(extra) = extra {
        prompt.push_str("\nAdditional context: ");
        prompt.push_str(extra);
    }

    prompt
}

/// Content generation service trait for dependency injection.
#[async_trait]
pub trait ContentService: Send + Sync {
    /// Generate content of the given kind for a topic
    async fn generate(
        &self,
        kind: ContentKind,
        topic: String,
        extra: Option<String>,
    ) -> AppResult<String>;
}

// Wire types of the chat completion API

#[derive(Debug, Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
}

#[derive(Debug, Serialize, Deserialize)]
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
    message: ChatMessage,
}

/// Concrete implementation of ContentService backed by an HTTP
/// chat completion API.
pub struct ContentGenerator {
    http: Client,
    api_url: String,
    api_key: Option<String>,
    model: String,
}

impl ContentGenerator {
    /// Create a generator from application configuration
    pub fn new(config: &Config) -> Self {
        Self::with_endpoint(
            config.ai_api_url.clone(),
            config.ai_api_key.clone(),
            config.ai_model.clone(),
        )
    }

    /// Create a generator against an explicit endpoint (used by tests)
    pub fn with_endpoint(api_url: String, api_key: Option<String>, model: String) -> Self {
        let http = Client::builder()
            .timeout(Duration::from_secs(AI_REQUEST_TIMEOUT_SECONDS))
            .build()
            .expect("Failed to build HTTP client");

        Self {
            http,
            api_url,
            api_key,
            model,
        }
    }

    fn completions_url(&self) -> String {
        format!("{}/v1/chat/completions", self.api_url.trim_end_matches('/'))
    }
}

#[async_trait]
impl ContentService for ContentGenerator {
    async fn generate(
        &self,
        kind: ContentKind,
        topic: String,
        extra: Option<String>,
    ) -> AppResult<String> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or_else(|| AppError::upstream("Content generation is not configured"))?;

        let request = ChatRequest {
            model: self.model.clone(),
            messages: vec![ChatMessage {
                role: "user".to_string(),
                content: build_prompt(kind, &topic, extra.as_deref()),
            }],
        };

        let response = self
            .http
            .post(self.completions_url())
            .bearer_auth(api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| AppError::upstream(format!("Completion request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::upstream(format!(
                "Completion API returned status {}",
                status
            )));
        }

        let body: ChatResponse = response
            .json()
            .await
            .map_err(|e| AppError::upstream(format!("Malformed completion response: {}", e)))?;

        let content = body
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or_else(|| AppError::upstream("Completion API returned no choices"))?;

        Ok(content)
    }
}
