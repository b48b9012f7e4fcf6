use super::{LlmError, TextGenerator};
use crate::config::OpenAiConfig;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;

const TIMEOUT_SECS: u64 = 90;

#[derive(Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<Message>,
    temperature: f32,
}

#[derive(Serialize)]
struct Message {
    role: String,
    content: String,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Deserialize)]
struct ResponseMessage {
    content: String,
}

/// OpenAI chat-completion client.
pub struct OpenAiChat {
    client: reqwest::Client,
    endpoint: String,
    model: String,
    temperature: f32,
    api_key: Option<String>,
}

impl OpenAiChat {
    pub fn new(cfg: &OpenAiConfig, api_key: Option<String>) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(TIMEOUT_SECS))
            .build()
            .expect("failed to build HTTP client");

        Self {
            client,
            endpoint: format!("{}/chat/completions", cfg.api_base.trim_end_matches('/')),
            model: cfg.chat_model.clone(),
            temperature: cfg.temperature,
            api_key,
        }
    }
}

#[async_trait]
impl TextGenerator for OpenAiChat {
    async fn generate(&self, prompt: &str) -> Result<String, LlmError> {
        let api_key = self.api_key.as_deref().ok_or(LlmError::MissingApiKey)?;

        let request = ChatRequest {
            model: self.model.clone(),
            messages: vec![Message {
                role: "user".to_string(),
                content: prompt.to_string(),
            }],
            temperature: self.temperature,
        };

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| LlmError::Request(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(LlmError::Provider {
                status: status.as_u16(),
                body,
            });
        }

        let chat: ChatResponse = response
            .json()
            .await
            .map_err(|e| LlmError::InvalidResponse(e.to_string()))?;

        chat.choices
            .into_iter()
            .next()
            .map(|c| c.message.content)
            .ok_or_else(|| LlmError::InvalidResponse("no choices in reply".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> OpenAiConfig {
        OpenAiConfig {
            api_base: "https://api.openai.com/v1".to_string(),
            whisper_model: "whisper-1".to_string(),
            chat_model: "gpt-4".to_string(),
            temperature: 0.3,
        }
    }

    #[tokio::test]
    async fn missing_key_fails_before_any_network_call() {
        let llm = OpenAiChat::new(&test_config(), None);
        let err = llm.generate("summarize this").await.unwrap_err();
        assert!(matches!(err, LlmError::MissingApiKey));
    }

    #[test]
    fn chat_reply_extracts_first_choice() {
        let json = r#"{
            "choices": [
                {"message": {"role": "assistant", "content": "first"}},
                {"message": {"role": "assistant", "content": "second"}}
            ]
        }"#;
        let chat: ChatResponse = serde_json::from_str(json).unwrap();
        let content = chat.choices.into_iter().next().unwrap().message.content;
        assert_eq!(content, "first");
    }
}
