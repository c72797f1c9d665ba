use serde::{Deserialize, Serialize};

/// Author of a conversation turn. The remote API only understands these two
/// roles, so this stays a closed enum rather than an open string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Model,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Model => "model",
        }
    }
}

/// One message unit in a conversation.
///
/// `is_error` marks turns synthesized locally after a failed completion call.
/// Error turns are rendered to the user but never sent back to the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn {
    pub role: Role,
    pub text: String,
    #[serde(default, skip_serializing_if = "is_false")]
    pub is_error: bool,
}

fn is_false(v: &bool) -> bool {
    !v
}

impl Turn {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            text: text.into(),
            is_error: false,
        }
    }

    pub fn model(text: impl Into<String>) -> Self {
        Self {
            role: Role::Model,
            text: text.into(),
            is_error: false,
        }
    }

    /// A synthesized failure turn. Attributed to the model so it renders on
    /// the model side of the transcript.
    pub fn error(text: impl Into<String>) -> Self {
        Self {
            role: Role::Model,
            text: text.into(),
            is_error: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Role::User).unwrap(), "\"user\"");
        assert_eq!(serde_json::to_string(&Role::Model).unwrap(), "\"model\"");
    }

    #[test]
    fn error_flag_is_skipped_when_false() {
        let json = serde_json::to_string(&Turn::user("hi")).unwrap();
        assert!(!json.contains("is_error"));

        let json = serde_json::to_string(&Turn::error("boom")).unwrap();
        assert!(json.contains("\"is_error\":true"));
    }

    #[test]
    fn error_flag_defaults_false_on_deserialize() {
        let turn: Turn = serde_json::from_str(r#"{"role":"user","text":"hi"}"#).unwrap();
        assert!(!turn.is_error);
    }
}
