use serde::{ Serialize, Deserialize };

use super::chat::{ ConversationEntry, HorseMetadata };

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub document_text: Option<String>,
    #[serde(default)]
    pub history: Option<Vec<ConversationEntry>>,
    #[serde(default)]
    pub horse_age: Option<String>,
    #[serde(default)]
    pub horse_breed: Option<String>,
    #[serde(default)]
    pub activity_level: Option<String>,
}

impl ChatRequest {
    pub fn message(&self) -> &str {
        self.message.as_deref().unwrap_or("")
    }

    pub fn document_text(&self) -> &str {
        self.document_text.as_deref().unwrap_or("")
    }

    pub fn history(&self) -> &[ConversationEntry] {
        self.history.as_deref().unwrap_or(&[])
    }

    pub fn metadata(&self) -> HorseMetadata {
        HorseMetadata {
            age: self.horse_age.clone().unwrap_or_default(),
            breed: self.horse_breed.clone().unwrap_or_default(),
            activity_level: self.activity_level.clone().unwrap_or_default(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ChatResponse {
    pub response: String,
    pub success: bool,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Endpoints {
    pub health: String,
    pub chat: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct IndexResponse {
    pub message: String,
    pub endpoints: Endpoints,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}
