use crate::models::chat::{ ChatMessage, ConversationEntry, Role };

/// Number of prior turns forwarded to the model.
pub const HISTORY_WINDOW: usize = 10;

fn role_for_sender(sender: Option<&str>) -> Option<Role> {
    match sender {
        Some("user") => Some(Role::User),
        Some("assistant") => Some(Role::Assistant),
        _ => None,
    }
}

/// Translates the trailing window of `history` into chat messages.
///
/// The window is taken before unknown senders are dropped, so fewer than
/// `HISTORY_WINDOW` messages may come back even when more entries were sent.
pub fn to_messages(history: &[ConversationEntry]) -> Vec<ChatMessage> {
    let start = history.len().saturating_sub(HISTORY_WINDOW);
    history[start..]
        .iter()
        .filter_map(|entry| {
            let role = role_for_sender(entry.sender.as_deref())?;
            Some(ChatMessage::new(role, entry.text.clone().unwrap_or_default()))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_last_ten_in_order() {
        let history: Vec<ConversationEntry> = (0..15)
            .map(|i| {
                let sender = if i % 2 == 0 { "user" } else { "assistant" };
                ConversationEntry::new(sender, &format!("turn {}", i))
            })
            .collect();

        let messages = to_messages(&history);
        assert_eq!(messages.len(), HISTORY_WINDOW);
        let contents: Vec<&str> = messages
            .iter()
            .map(|m| m.content.as_str())
            .collect();
        let expected: Vec<String> = (5..15).map(|i| format!("turn {}", i)).collect();
        assert_eq!(contents, expected);
        assert_eq!(messages[0].role, Role::Assistant);
        assert_eq!(messages[9].role, Role::User);
    }

    #[test]
    fn unknown_senders_are_dropped_after_windowing() {
        let mut history = vec![ConversationEntry::new("user", "too old")];
        history.extend((0..9).map(|i| ConversationEntry::new("user", &format!("q{}", i))));
        history.push(ConversationEntry::new("system", "ignore me"));

        let messages = to_messages(&history);
        assert_eq!(messages.len(), 9);
        assert!(messages.iter().all(|m| m.content != "too old" && m.content != "ignore me"));
    }

    #[test]
    fn sender_match_is_exact() {
        let history = vec![
            ConversationEntry::new("User", "capitalised"),
            ConversationEntry { sender: None, text: Some("no sender".into()) },
            ConversationEntry { sender: Some("assistant".into()), text: None },
        ];
        let messages = to_messages(&history);
        assert_eq!(messages, vec![ChatMessage::assistant("")]);
    }

    #[test]
    fn empty_history() {
        assert!(to_messages(&[]).is_empty());
    }
}
