use serde::{ Serialize, Deserialize };

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

impl ChatMessage {
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self { role, content: content.into() }
    }

    pub fn system(content: impl Into<String>) -> Self {
        Self::new(Role::System, content)
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self::new(Role::User, content)
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(Role::Assistant, content)
    }
}

/// One prior turn as the frontend sends it back to us.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ConversationEntry {
    #[serde(default)]
    pub sender: Option<String>,
    #[serde(default)]
    pub text: Option<String>,
}

impl ConversationEntry {
    pub fn new(sender: &str, text: &str) -> Self {
        Self {
            sender: Some(sender.to_string()),
            text: Some(text.to_string()),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HorseMetadata {
    pub age: String,
    pub breed: String,
    pub activity_level: String,
}

impl HorseMetadata {
    pub fn is_empty(&self) -> bool {
        self.age.is_empty() && self.breed.is_empty() && self.activity_level.is_empty()
    }
}
