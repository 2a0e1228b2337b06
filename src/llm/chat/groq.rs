use async_trait::async_trait;
use log::debug;
use reqwest::{ Client as HttpClient, header::{ HeaderMap, HeaderValue, CONTENT_TYPE, AUTHORIZATION } };
use serde::{ Deserialize, Serialize };

use super::{ ChatClient, CompletionResponse };
use crate::error::LlmError;
use crate::llm::{ LlmConfig, DEFAULT_BASE_URL, DEFAULT_CHAT_MODEL };
use crate::models::chat::ChatMessage;

pub struct GroqChatClient {
    http: HttpClient,
    model: String,
    base_url: String,
    temperature: f32,
    max_tokens: u32,
}

#[derive(Serialize)]
struct GroqRequest<'a> {
    messages: &'a [ChatMessage],
    model: &'a str,
    temperature: f32,
    max_tokens: u32,
}

#[derive(Deserialize)]
struct GroqResponse {
    choices: Vec<GroqChoice>,
}

#[derive(Deserialize)]
struct GroqChoice {
    message: GroqMessage,
}

#[derive(Deserialize)]
struct GroqMessage {
    #[serde(default)]
    content: Option<String>,
}

impl GroqChatClient {
    pub fn new(
        api_key: String,
        model: Option<String>,
        base_url: Option<String>,
        temperature: f32,
        max_tokens: u32,
    ) -> Result<Self, LlmError> {
        let chat_model = model.unwrap_or_else(|| DEFAULT_CHAT_MODEL.to_string());
        let api_url = base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        // A key that is not a valid header value is sent without auth and rejected upstream.
        if let Ok(value) = HeaderValue::from_str(&format!("Bearer {}", api_key)) {
            headers.insert(AUTHORIZATION, value);
        }

        let http = HttpClient::builder().default_headers(headers).build()?;

        Ok(Self {
            http,
            model: chat_model,
            base_url: api_url,
            temperature,
            max_tokens,
        })
    }

    pub fn from_config(config: &LlmConfig) -> Result<Self, LlmError> {
        Self::new(
            config.api_key.clone().unwrap_or_default(),
            config.completion_model.clone(),
            config.base_url.clone(),
            config.temperature,
            config.max_tokens,
        )
    }

    fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.base_url.trim_end_matches('/'))
    }
}

#[async_trait]
impl ChatClient for GroqChatClient {
    async fn complete(&self, messages: &[ChatMessage]) -> Result<CompletionResponse, LlmError> {
        let url = self.completions_url();
        let req = GroqRequest {
            messages,
            model: &self.model,
            temperature: self.temperature,
            max_tokens: self.max_tokens,
        };

        debug!("Sending {} messages to {} (model {})", messages.len(), url, self.model);
        let resp = self.http.post(&url).json(&req).send().await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(LlmError::Api { status: status.as_u16(), body });
        }

        let parsed = resp.json::<GroqResponse>().await?;
        let content = parsed.choices
            .into_iter()
            .next()
            .ok_or(LlmError::EmptyChoices)?
            .message.content.unwrap_or_default();

        Ok(CompletionResponse { response: content })
    }

    fn get_model(&self) -> String {
        self.model.clone()
    }

    fn get_base_url(&self) -> Option<String> {
        Some(self.base_url.clone())
    }
}
