use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

/// One entry in the conversation transcript. Immutable once created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
}

impl Message {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
            created_at: Utc::now(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roles_serialize_lowercase() {
        let user = serde_json::to_value(Message::user("hi")).unwrap();
        let assistant = serde_json::to_value(Message::assistant("hello")).unwrap();
        assert_eq!(user["role"], "user");
        assert_eq!(assistant["role"], "assistant");
    }

    #[test]
    fn constructors_keep_content() {
        let msg = Message::user("how are you");
        assert_eq!(msg.role, Role::User);
        assert_eq!(msg.content, "how are you");
    }
}
