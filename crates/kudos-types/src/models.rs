use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub title: String,
}

/// A recognition message from one user to another.
///
/// `message` is stored HTML-escaped and is never escaped again on read.
/// Field names on the wire match what the web client already consumes,
/// which is why the moderation fields keep their snake_case spelling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Kudo {
    pub id: Uuid,
    #[serde(rename = "senderId")]
    pub sender_id: String,
    #[serde(rename = "recipientId")]
    pub recipient_id: String,
    pub message: String,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
    pub is_visible: bool,
    pub moderated_by: Option<String>,
    pub moderated_at: Option<DateTime<Utc>>,
    #[serde(rename = "reason_for_moderation")]
    pub moderation_reason: Option<String>,
}

impl Kudo {
    pub fn new(sender_id: &str, recipient_id: &str, message: String, created_at: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            sender_id: sender_id.to_string(),
            recipient_id: recipient_id.to_string(),
            message,
            created_at,
            is_visible: true,
            moderated_by: None,
            moderated_at: None,
            moderation_reason: None,
        }
    }

    /// Visible -> Hidden. Hiding twice re-stamps the moderation fields.
    pub fn hide(&mut self, admin_id: &str, at: DateTime<Utc>, reason: Option<String>) {
        self.is_visible = false;
        self.moderated_by = Some(admin_id.to_string());
        self.moderated_at = Some(at);
        self.moderation_reason = reason;
    }

    /// Hidden -> Visible, clearing every moderation field.
    pub fn unhide(&mut self) {
        self.is_visible = true;
        self.moderated_by = None;
        self.moderated_at = None;
        self.moderation_reason = None;
    }
}

/// A kudo with its sender and recipient resolved against the user directory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KudoView {
    #[serde(flatten)]
    pub kudo: Kudo,
    pub sender: Option<User>,
    pub recipient: Option<User>,
}
