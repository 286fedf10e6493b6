use serde::Serialize;

use crate::config::DashboardStrings;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChatSuggestion {
    pub text: &'static str,
    pub description: String,
}

/// Example identifiers offered when a chat list field is focused while empty.
pub fn chat_suggestions(strings: &DashboardStrings) -> Vec<ChatSuggestion> {
    vec![
        ChatSuggestion {
            text: "@channel_name",
            description: strings.suggestion_channel.clone(),
        },
        ChatSuggestion {
            text: "+966501234567",
            description: strings.suggestion_phone.clone(),
        },
        ChatSuggestion {
            text: "-1001234567890",
            description: strings.suggestion_group.clone(),
        },
    ]
}

pub fn should_offer_suggestions(current_value: &str) -> bool {
    current_value.trim().is_empty()
}

/// Appends `suggestion` on its own line, or replaces an empty value.
pub fn append_suggestion(current_value: &str, suggestion: &str) -> String {
    if current_value.is_empty() {
        suggestion.to_string()
    } else {
        format!("{current_value}\n{suggestion}")
    }
}
