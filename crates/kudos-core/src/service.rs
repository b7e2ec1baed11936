use std::sync::{Arc, Mutex};

use chrono::{DateTime, Duration, Utc};
use tracing::{debug, info, warn};
use uuid::Uuid;

use kudos_types::models::{Kudo, KudoView};

use crate::audit::{AuditEntry, AuditLog, ModerationAction};
use crate::config::ModerationConfig;
use crate::content::{ContentFilter, escape_html};
use crate::directory::UserDirectory;
use crate::error::{KudosError, Result};
use crate::store::KudoStore;

/// The kudos board: creation rules, the visible feed and admin moderation.
///
/// Every call takes the store lock exactly once, so mutations are applied
/// atomically and `list` always reads a consistent snapshot. Validation runs
/// before the lock is taken and nothing is written on failure.
pub struct KudosService {
    store: Mutex<KudoStore>,
    directory: Arc<UserDirectory>,
    filter: ContentFilter,
    config: ModerationConfig,
    audit: Arc<dyn AuditLog>,
}

impl KudosService {
    pub fn new(directory: Arc<UserDirectory>, config: ModerationConfig, audit: Arc<dyn AuditLog>) -> Self {
        let filter = ContentFilter::new(&config.banned_words);
        Self {
            store: Mutex::new(KudoStore::new()),
            directory,
            filter,
            config,
            audit,
        }
    }

    pub fn directory(&self) -> &UserDirectory {
        &self.directory
    }

    pub fn config(&self) -> &ModerationConfig {
        &self.config
    }

    fn with_store<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&mut KudoStore) -> Result<T>,
    {
        let mut store = self
            .store
            .lock()
            .map_err(|e| KudosError::StoreUnavailable(format!("lock poisoned: {}", e)))?;
        f(&mut store)
    }

    /// Number of stored kudos, hidden ones included.
    pub fn len(&self) -> Result<usize> {
        self.with_store(|store| Ok(store.len()))
    }

    pub fn is_empty(&self) -> Result<bool> {
        self.with_store(|store| Ok(store.is_empty()))
    }

    fn view(&self, kudo: Kudo) -> KudoView {
        let sender = self.directory.find_user(&kudo.sender_id).cloned();
        let recipient = self.directory.find_user(&kudo.recipient_id).cloned();
        KudoView { kudo, sender, recipient }
    }

    // -- Creation --

    pub fn create(&self, sender_id: &str, recipient_id: Option<&str>, message: Option<&str>) -> Result<KudoView> {
        self.create_at(sender_id, recipient_id, message, Utc::now())
    }

    /// Same as [`create`](Self::create) with an explicit "now", which is both
    /// the new kudo's timestamp and the end of the duplicate window.
    pub fn create_at(
        &self,
        sender_id: &str,
        recipient_id: Option<&str>,
        message: Option<&str>,
        now: DateTime<Utc>,
    ) -> Result<KudoView> {
        let recipient_id = recipient_id.filter(|r| !r.is_empty()).ok_or(KudosError::MissingField)?;
        let message = message.filter(|m| !m.is_empty()).ok_or(KudosError::MissingField)?;

        if recipient_id == sender_id {
            return Err(KudosError::SelfRecipient);
        }
        if self.directory.find_user(recipient_id).is_none() {
            return Err(KudosError::RecipientNotFound);
        }

        let trimmed = message.trim();
        if trimmed.is_empty() {
            return Err(KudosError::EmptyMessage);
        }
        let max = self.config.max_message_chars;
        if trimmed.chars().count() > max {
            return Err(KudosError::MessageTooLong { max });
        }
        if self.filter.contains_banned(trimmed) {
            return Err(KudosError::BannedContent);
        }

        let escaped = escape_html(trimmed);
        let window = self.config.duplicate_window;
        let kudo = self.with_store(|store| {
            if store.has_recent_duplicate(sender_id, recipient_id, &escaped, window, now) {
                return Err(KudosError::DuplicateSubmission);
            }
            let kudo = Kudo::new(sender_id, recipient_id, escaped, now);
            store.insert(kudo.clone());
            Ok(kudo)
        })?;

        info!("Kudo {} created: {} -> {}", kudo.id, kudo.sender_id, kudo.recipient_id);
        Ok(self.view(kudo))
    }

    // -- Feed --

    /// Visible kudos, newest first. Hidden kudos are never returned, whoever
    /// is asking.
    pub fn list(&self, viewer_is_admin: bool) -> Result<Vec<KudoView>> {
        let kudos = self.with_store(|store| Ok(store.visible_newest_first()))?;
        debug!(viewer_is_admin, count = kudos.len(), "listing kudos");
        Ok(kudos.into_iter().map(|k| self.view(k)).collect())
    }

    // -- Moderation --

    fn authorize(&self, acting_user_id: &str) -> Result<()> {
        if self.directory.is_admin(acting_user_id) {
            Ok(())
        } else {
            warn!("Rejected moderation attempt by non-admin {}", acting_user_id);
            Err(KudosError::Unauthorized)
        }
    }

    /// Ids that are not well-formed can never name a stored kudo.
    fn parse_id(kudo_id: &str) -> Result<Uuid> {
        Uuid::parse_str(kudo_id).map_err(|_| KudosError::NotFound)
    }

    pub fn hide(&self, kudo_id: &str, acting_user_id: &str, reason: Option<&str>) -> Result<KudoView> {
        self.authorize(acting_user_id)?;
        let id = Self::parse_id(kudo_id)?;
        let reason = reason.filter(|r| !r.trim().is_empty()).map(str::to_string);
        let now = Utc::now();

        let kudo = self.with_store(|store| {
            let kudo = store.get_mut(id).ok_or(KudosError::NotFound)?;
            kudo.hide(acting_user_id, now, reason.clone());
            Ok(kudo.clone())
        })?;

        self.audit.record(AuditEntry {
            action: ModerationAction::Hide,
            kudo_id: id,
            admin_id: acting_user_id.to_string(),
            reason,
            at: now,
        });
        Ok(self.view(kudo))
    }

    pub fn unhide(&self, kudo_id: &str, acting_user_id: &str) -> Result<KudoView> {
        self.authorize(acting_user_id)?;
        let id = Self::parse_id(kudo_id)?;

        let kudo = self.with_store(|store| {
            let kudo = store.get_mut(id).ok_or(KudosError::NotFound)?;
            kudo.unhide();
            Ok(kudo.clone())
        })?;

        self.audit.record(AuditEntry {
            action: ModerationAction::Unhide,
            kudo_id: id,
            admin_id: acting_user_id.to_string(),
            reason: None,
            at: Utc::now(),
        });
        Ok(self.view(kudo))
    }

    /// Permanently removes a kudo. The audit entry is written before the
    /// record goes away.
    pub fn delete(&self, kudo_id: &str, acting_user_id: &str) -> Result<()> {
        self.authorize(acting_user_id)?;
        let id = Self::parse_id(kudo_id)?;

        self.with_store(|store| {
            if store.get(id).is_none() {
                return Err(KudosError::NotFound);
            }
            self.audit.record(AuditEntry {
                action: ModerationAction::Delete,
                kudo_id: id,
                admin_id: acting_user_id.to_string(),
                reason: None,
                at: Utc::now(),
            });
            store.remove(id);
            Ok(())
        })
    }

    /// Loads the two sample kudos the board starts with in demo mode.
    pub fn seed_demo(&self) -> Result<()> {
        let now = Utc::now();
        let samples = [
            (
                "u1",
                "u2",
                "Thanks for the quick turnaround on the prototype updates!",
                now - Duration::hours(5),
            ),
            (
                "u3",
                "u1",
                "Appreciate you jumping on the deployment issues last night.",
                now - Duration::hours(8),
            ),
        ];
        self.with_store(|store| {
            for (sender, recipient, message, at) in samples {
                store.insert(Kudo::new(sender, recipient, escape_html(message), at));
            }
            Ok(())
        })?;
        info!("Seeded {} demo kudos", samples.len());
        Ok(())
    }
}
