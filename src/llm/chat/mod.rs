pub mod groq;

use async_trait::async_trait;
use serde::Deserialize;
use std::sync::Arc;

use super::LlmConfig;
use self::groq::GroqChatClient;
use crate::error::LlmError;
use crate::models::chat::ChatMessage;

#[derive(Deserialize, Debug, Clone)]
pub struct CompletionResponse {
    pub response: String,
}

/// A hosted chat-completion backend. One call, one answer.
#[async_trait]
pub trait ChatClient: Send + Sync {
    async fn complete(&self, messages: &[ChatMessage]) -> Result<CompletionResponse, LlmError>;

    fn get_model(&self) -> String;
    fn get_base_url(&self) -> Option<String>;
}

pub fn new_client(config: &LlmConfig) -> Result<Arc<dyn ChatClient>, LlmError> {
    let client: Arc<dyn ChatClient> = Arc::new(GroqChatClient::from_config(config)?);
    Ok(client)
}
