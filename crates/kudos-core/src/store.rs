use chrono::{DateTime, Duration, Utc};
use uuid::Uuid;

use kudos_types::models::Kudo;

/// In-memory kudo collection, kept in insertion order.
#[derive(Debug, Default)]
pub struct KudoStore {
    kudos: Vec<Kudo>,
}

impl KudoStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.kudos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.kudos.is_empty()
    }

    pub fn insert(&mut self, kudo: Kudo) {
        self.kudos.push(kudo);
    }

    pub fn get(&self, id: Uuid) -> Option<&Kudo> {
        self.kudos.iter().find(|k| k.id == id)
    }

    pub fn get_mut(&mut self, id: Uuid) -> Option<&mut Kudo> {
        self.kudos.iter_mut().find(|k| k.id == id)
    }

    pub fn remove(&mut self, id: Uuid) -> Option<Kudo> {
        let index = self.kudos.iter().position(|k| k.id == id)?;
        Some(self.kudos.remove(index))
    }

    /// Visible kudos, most recent first.
    pub fn visible_newest_first(&self) -> Vec<Kudo> {
        let mut visible: Vec<Kudo> = self.kudos.iter().filter(|k| k.is_visible).cloned().collect();
        visible.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        visible
    }

    /// True when `sender` already sent `recipient` the same (escaped) text
    /// strictly after `now - window`.
    pub fn has_recent_duplicate(
        &self,
        sender: &str,
        recipient: &str,
        escaped_message: &str,
        window: Duration,
        now: DateTime<Utc>,
    ) -> bool {
        let cutoff = now - window;
        self.kudos.iter().any(|k| {
            k.sender_id == sender
                && k.recipient_id == recipient
                && k.message.trim() == escaped_message
                && k.created_at > cutoff
        })
    }
}
