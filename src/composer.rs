use log::warn;

use crate::error::InterpretError;
use crate::history;
use crate::models::api::ChatRequest;
use crate::models::chat::{ ChatMessage, ConversationEntry, HorseMetadata };

const DOCUMENT_HEADER: &str = "HEALTH RECORD DOCUMENT:";
const METADATA_HEADER: &str = "HORSE INFORMATION:";

/// Everything the user supplied for one turn.
#[derive(Clone, Debug, Default)]
pub struct PromptInput<'a> {
    pub user_message: &'a str,
    pub document_text: &'a str,
    pub history: &'a [ConversationEntry],
    pub metadata: HorseMetadata,
}

impl<'a> PromptInput<'a> {
    pub fn from_request(request: &'a ChatRequest) -> Self {
        Self {
            user_message: request.message(),
            document_text: request.document_text(),
            history: request.history(),
            metadata: request.metadata(),
        }
    }
}

fn metadata_block(metadata: &HorseMetadata) -> Option<String> {
    let mut parts = Vec::new();
    if !metadata.age.is_empty() {
        parts.push(format!("Horse Age: {}", metadata.age));
    }
    if !metadata.breed.is_empty() {
        parts.push(format!("Breed: {}", metadata.breed));
    }
    if !metadata.activity_level.is_empty() {
        parts.push(format!("Activity Level: {}", metadata.activity_level));
    }
    if parts.is_empty() {
        return None;
    }
    Some(format!("{}\n{}\n", METADATA_HEADER, parts.join(", ")))
}

/// Builds the final user turn: metadata, then the document, then the question.
pub fn compose_user_content(input: &PromptInput<'_>) -> String {
    let mut context_parts = Vec::new();
    if let Some(block) = metadata_block(&input.metadata) {
        context_parts.push(block);
    }
    if !input.document_text.is_empty() {
        context_parts.push(format!("{}\n{}", DOCUMENT_HEADER, input.document_text));
    }

    let mut content = if context_parts.is_empty() {
        input.user_message.to_string()
    } else {
        let mut content = context_parts.join("\n\n");
        if !input.user_message.is_empty() {
            if input.document_text.is_empty() {
                content.push_str(&format!("\n\nUSER QUESTION: {}", input.user_message));
            } else {
                content.push_str(
                    &format!("\n\nUSER QUESTION (about the above document): {}", input.user_message)
                );
            }
        }
        content
    };

    if !input.document_text.is_empty() && !content.contains(input.document_text) {
        warn!("Document text missing from composed prompt; prepending it");
        content = format!("{}\n{}\n\n{}", DOCUMENT_HEADER, input.document_text, content);
    }

    content
}

/// Assembles the ordered message list sent to the model.
///
/// Fails with `InterpretError::MissingInput` when there is neither a question
/// nor a document to talk about.
pub fn compose(
    system_prompt: &str,
    input: &PromptInput<'_>
) -> Result<Vec<ChatMessage>, InterpretError> {
    if input.user_message.is_empty() && input.document_text.is_empty() {
        return Err(InterpretError::MissingInput);
    }

    let mut messages = Vec::with_capacity(input.history.len().min(history::HISTORY_WINDOW) + 2);
    messages.push(ChatMessage::system(system_prompt));
    messages.extend(history::to_messages(input.history));
    messages.push(ChatMessage::user(compose_user_content(input)));
    Ok(messages)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::chat::Role;

    fn input<'a>(message: &'a str, document: &'a str) -> PromptInput<'a> {
        PromptInput {
            user_message: message,
            document_text: document,
            ..Default::default()
        }
    }

    #[test]
    fn rejects_empty_request() {
        let err = compose("sys", &input("", "")).unwrap_err();
        assert!(matches!(err, InterpretError::MissingInput));
    }

    #[test]
    fn question_only_is_sent_verbatim() {
        let messages = compose("sys", &input("What does CK mean?", "")).unwrap();
        assert_eq!(
            messages,
            vec![ChatMessage::system("sys"), ChatMessage::user("What does CK mean?")]
        );
    }

    #[test]
    fn document_with_metadata_and_no_question() {
        let mut input = input("", "CK levels elevated in Section 2");
        input.metadata.age = "8".into();
        let content = compose_user_content(&input);

        assert!(content.starts_with("HORSE INFORMATION:\nHorse Age: 8\n"));
        assert!(content.contains("HEALTH RECORD DOCUMENT:\nCK levels elevated in Section 2"));
        assert!(!content.contains("USER QUESTION"));
        assert_eq!(
            content,
            "HORSE INFORMATION:\nHorse Age: 8\n\n\nHEALTH RECORD DOCUMENT:\nCK levels elevated in Section 2"
        );
    }

    #[test]
    fn document_and_question() {
        let content = compose_user_content(&input("Is this normal?", "Hct 32%"));
        assert_eq!(
            content,
            "HEALTH RECORD DOCUMENT:\nHct 32%\n\nUSER QUESTION (about the above document): Is this normal?"
        );
    }

    #[test]
    fn metadata_and_question_without_document() {
        let mut input = input("Anything to watch?", "");
        input.metadata.breed = "Arabian".into();
        input.metadata.activity_level = "Endurance".into();
        let content = compose_user_content(&input);
        assert_eq!(
            content,
            "HORSE INFORMATION:\nBreed: Arabian, Activity Level: Endurance\n\n\nUSER QUESTION: Anything to watch?"
        );
    }

    #[test]
    fn document_always_present() {
        for doc in ["x", "HEALTH RECORD DOCUMENT:", "multi\nline\n\n\nrecord", "  padded  "] {
            let content = compose_user_content(&input("q", doc));
            assert!(content.contains(doc), "document {:?} dropped", doc);
        }
    }

    #[test]
    fn system_first_then_history_then_user() {
        let history = vec![
            ConversationEntry::new("user", "first"),
            ConversationEntry::new("bot", "skipped"),
            ConversationEntry::new("assistant", "reply"),
        ];
        let input = PromptInput {
            user_message: "follow up",
            document_text: "",
            history: &history,
            metadata: HorseMetadata::default(),
        };
        let messages = compose("sys", &input).unwrap();
        let roles: Vec<Role> = messages
            .iter()
            .map(|m| m.role)
            .collect();
        assert_eq!(roles, vec![Role::System, Role::User, Role::Assistant, Role::User]);
        assert_eq!(messages[3].content, "follow up");
    }

    #[test]
    fn from_request_treats_missing_fields_as_empty() {
        let request: ChatRequest = serde_json
            ::from_str(r#"{"document_text": "WBC 9.1", "horse_age": null}"#)
            .unwrap();
        let input = PromptInput::from_request(&request);
        assert_eq!(input.user_message, "");
        assert_eq!(input.document_text, "WBC 9.1");
        assert!(input.metadata.is_empty());
        assert!(input.history.is_empty());
    }
}
