use crate::cli::Args;
use crate::composer::{ self, PromptInput };
use crate::config::prompt;
use crate::error::InterpretError;
use crate::llm::LlmConfig;
use crate::llm::chat::{ ChatClient, new_client as new_chat_client };
use crate::models::api::ChatRequest;
use crate::sanitizer::clean_response;

use log::{ debug, info, warn };
use std::error::Error;
use std::sync::Arc;

#[derive(Clone)]
pub struct InterpreterAgent {
    chat_client: Arc<dyn ChatClient>,
    system_prompt: Arc<str>,
}

impl InterpreterAgent {
    pub fn new(chat_client: Arc<dyn ChatClient>, system_prompt: Arc<str>) -> Self {
        Self { chat_client, system_prompt }
    }

    pub fn from_args(args: &Args) -> Result<Self, Box<dyn Error + Send + Sync>> {
        let chat_config = LlmConfig::from_args(args);
        if chat_config.api_key.is_none() {
            warn!("GROQ_API_KEY is not set. Chat requests will fail upstream.");
        }
        let chat_client = new_chat_client(&chat_config)?;
        info!(
            "Chat client configured: Model={}, BaseURL={}",
            chat_client.get_model(),
            chat_client.get_base_url().as_deref().unwrap_or("adapter default")
        );

        let system_prompt = prompt::load_system_prompt(args.system_prompt_path.as_deref())?;
        Ok(Self::new(chat_client, system_prompt))
    }

    pub fn system_prompt(&self) -> &str {
        &self.system_prompt
    }

    /// Runs one chat turn: validate and compose, call the model, strip markdown.
    pub async fn interpret(
        &self,
        request_id: &str,
        request: &ChatRequest
    ) -> Result<String, InterpretError> {
        let input = PromptInput::from_request(request);
        let messages = composer::compose(&self.system_prompt, &input)?;
        debug!(
            "[{}] Composed {} messages, final user turn {} chars",
            request_id,
            messages.len(),
            messages.last().map(|m| m.content.len()).unwrap_or(0)
        );

        let completion = self.chat_client.complete(&messages).await?;
        debug!("[{}] Raw completion {} chars", request_id, completion.response.len());

        Ok(clean_response(&completion.response))
    }
}
