use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::{MentorId, SessionKind, StoryCategory, TimeSlot};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Credentials {
    pub identifier: String,
    #[serde(skip_serializing, default)]
    pub secret: String,
}

impl Credentials {
    pub fn new(identifier: impl Into<String>, secret: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            secret: secret.into(),
        }
    }

    /// Both fields carry something other than whitespace.
    pub fn is_complete(&self) -> bool {
        !self.identifier.trim().is_empty() && !self.secret.trim().is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserIdentity {
    pub identifier: String,
    pub display_name: String,
}

impl UserIdentity {
    /// Display name is the local part of an e-mail style identifier.
    pub fn from_identifier(identifier: &str) -> Self {
        let identifier = identifier.trim();
        let display_name = match identifier.split_once('@') {
            Some((local, _)) if !local.is_empty() => local,
            _ => identifier,
        };
        Self {
            identifier: identifier.to_string(),
            display_name: display_name.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingRequest {
    pub mentor_id: MentorId,
    pub session: SessionKind,
    pub slot: TimeSlot,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingConfirmation {
    pub reference: Uuid,
    pub mentor_id: MentorId,
    pub session: SessionKind,
    pub slot: TimeSlot,
    pub confirmed_at: DateTime<Utc>,
    pub notice: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoryDraft {
    pub title: String,
    pub content: String,
    pub category: StoryCategory,
    pub is_anonymous: bool,
    pub tags: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_name_uses_email_local_part() {
        let identity = UserIdentity::from_identifier(" sam@example.org ");
        assert_eq!(identity.identifier, "sam@example.org");
        assert_eq!(identity.display_name, "sam");
    }

    #[test]
    fn display_name_falls_back_to_identifier() {
        assert_eq!(UserIdentity::from_identifier("sam").display_name, "sam");
        assert_eq!(UserIdentity::from_identifier("@host").display_name, "@host");
    }

    #[test]
    fn credentials_require_both_fields() {
        assert!(Credentials::new("sam", "pw").is_complete());
        assert!(!Credentials::new("sam", "  ").is_complete());
        assert!(!Credentials::new("", "pw").is_complete());
    }

    #[test]
    fn secret_is_never_serialized() {
        let json = serde_json::to_string(&Credentials::new("sam", "hunter2")).expect("serialize");
        assert!(!json.contains("hunter2"));
    }
}
