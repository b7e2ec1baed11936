//! Moderation audit trail.
//!
//! Recording is fire-and-forget: a sink can never fail a moderation action.

use std::fmt;
use std::sync::Mutex;

use chrono::{DateTime, Utc};
use tracing::{info, warn};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModerationAction {
    Hide,
    Unhide,
    Delete,
}

impl fmt::Display for ModerationAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Hide => "HIDE",
            Self::Unhide => "UNHIDE",
            Self::Delete => "DELETE",
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AuditEntry {
    pub action: ModerationAction,
    pub kudo_id: Uuid,
    pub admin_id: String,
    pub reason: Option<String>,
    pub at: DateTime<Utc>,
}

pub trait AuditLog: Send + Sync {
    fn record(&self, entry: AuditEntry);
}

/// Writes each entry as a structured event on the `kudos::moderation` target.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingAuditLog;

impl AuditLog for TracingAuditLog {
    fn record(&self, entry: AuditEntry) {
        info!(
            target: "kudos::moderation",
            action = %entry.action,
            kudo = %entry.kudo_id,
            admin = %entry.admin_id,
            reason = entry.reason.as_deref().unwrap_or("N/A"),
            time = %entry.at.to_rfc3339(),
            "[MODERATION] {} | Kudos: {} | Admin: {}",
            entry.action,
            entry.kudo_id,
            entry.admin_id,
        );
    }
}

/// Keeps entries in memory so callers can inspect what was recorded.
#[derive(Debug, Default)]
pub struct MemoryAuditLog {
    entries: Mutex<Vec<AuditEntry>>,
}

impl MemoryAuditLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> Vec<AuditEntry> {
        match self.entries.lock() {
            Ok(entries) => entries.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }
}

impl AuditLog for MemoryAuditLog {
    fn record(&self, entry: AuditEntry) {
        match self.entries.lock() {
            Ok(mut entries) => entries.push(entry),
            Err(e) => warn!("audit log lock poisoned, dropping entry: {}", e),
        }
    }
}
