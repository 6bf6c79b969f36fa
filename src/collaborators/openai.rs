//! OpenAI-compatible chat-completions narrator

use std::time::Duration;

use anyhow::Context;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::history::{ChatRole, ChatTurn};
use super::{NarrativeGenerator, NarrativeRequest};
use crate::error::NarrativeError;

pub const DEFAULT_MAX_TOKENS: u32 = 800;
pub const DEFAULT_TEMPERATURE: f32 = 0.7;

pub struct OpenAiNarrator {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
    model: String,
    max_tokens: u32,
    temperature: f32,
}

impl OpenAiNarrator {
    pub fn new(base_url: &str, api_key: &str, model: &str, timeout: Duration) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to build chat-completions HTTP client")?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
            model: model.to_string(),
            max_tokens: DEFAULT_MAX_TOKENS,
            temperature: DEFAULT_TEMPERATURE,
        })
    }
}

#[derive(Debug, Serialize)]
struct CompletionRequest<'a> {
    model: &'a str,
    messages: Vec<ChatTurn>,
    max_tokens: u32,
    temperature: f32,
}

#[derive(Debug, Deserialize)]
struct CompletionResponse {
    choices: Option<Vec<CompletionChoice>>,
}

#[derive(Debug, Deserialize)]
struct CompletionChoice {
    message: Option<CompletionMessage>,
}

#[derive(Debug, Deserialize)]
struct CompletionMessage {
    content: Option<String>,
}

/// System turn, windowed history, then the user prompt
fn build_messages(request: &NarrativeRequest) -> Vec<ChatTurn> {
    let mut messages = Vec::with_capacity(request.history.len() + 2);
    messages.push(ChatTurn {
        role: ChatRole::System,
        content: request.system_instruction.clone(),
    });
    messages.extend(request.history.iter().cloned());
    messages.push(ChatTurn::user(request.user_prompt.clone()));
    messages
}

fn first_content(body: &str) -> Result<String, NarrativeError> {
    let parsed: CompletionResponse =
        serde_json::from_str(body).map_err(|e| NarrativeError::Decode(e.to_string()))?;

    parsed
        .choices
        .and_then(|c| c.into_iter().next())
        .and_then(|c| c.message)
        .and_then(|m| m.content)
        .filter(|c| !c.trim().is_empty())
        .ok_or(NarrativeError::Empty)
}

#[async_trait]
impl NarrativeGenerator for OpenAiNarrator {
    async fn generate(&self, request: &NarrativeRequest) -> Result<String, NarrativeError> {
        let body = CompletionRequest {
            model: &self.model,
            messages: build_messages(request),
            max_tokens: self.max_tokens,
            temperature: self.temperature,
        };

        let res = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| NarrativeError::Http(e.to_string()))?;

        let status = res.status();
        let text = res.text().await.map_err(|e| NarrativeError::Http(e.to_string()))?;

        if !status.is_success() {
            return Err(NarrativeError::Status(status.as_u16(), text));
        }

        first_content(&text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_order() {
        let request = NarrativeRequest {
            system_instruction: "sys".to_string(),
            history: vec![ChatTurn::user("a"), ChatTurn::assistant("b")],
            user_prompt: "prompt".to_string(),
        };
        let messages = build_messages(&request);
        let roles: Vec<ChatRole> = messages.iter().map(|m| m.role).collect();
        assert_eq!(roles, vec![ChatRole::System, ChatRole::User, ChatRole::Assistant, ChatRole::User]);
        assert_eq!(messages[3].content, "prompt");

        let json = serde_json::to_value(&messages[0]).unwrap();
        assert_eq!(json["role"], "system");
    }

    #[test]
    fn test_first_content() {
        let body = r#"{"choices": [{"message": {"role": "assistant", "content": "Plant trees."}}]}"#;
        assert_eq!(first_content(body).unwrap(), "Plant trees.");

        assert!(matches!(first_content(r#"{"choices": []}"#), Err(NarrativeError::Empty)));
        assert!(matches!(
            first_content(r#"{"choices": [{"message": {"content": "  "}}]}"#),
            Err(NarrativeError::Empty)
        ));
        assert!(matches!(first_content("nope"), Err(NarrativeError::Decode(_))));
    }
}
