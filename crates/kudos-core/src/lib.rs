pub mod audit;
pub mod config;
pub mod content;
pub mod directory;
pub mod error;
pub mod service;
pub mod store;

pub use audit::{AuditEntry, AuditLog, MemoryAuditLog, ModerationAction, TracingAuditLog};
pub use config::ModerationConfig;
pub use directory::UserDirectory;
pub use error::{KudosError, Result};
pub use service::KudosService;
