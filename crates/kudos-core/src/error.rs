use thiserror::Error;

pub type Result<T> = std::result::Result<T, KudosError>;

/// Failures surfaced by the kudos service. Every variant is recoverable at
/// the HTTP boundary and none of them leaves a partial mutation behind.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KudosError {
    #[error("recipientId and message are required.")]
    MissingField,

    #[error("You cannot send kudos to yourself.")]
    SelfRecipient,

    #[error("Recipient not found.")]
    RecipientNotFound,

    #[error("Message cannot be empty.")]
    EmptyMessage,

    #[error("Message must be {max} characters or less.")]
    MessageTooLong { max: usize },

    #[error("Message contains inappropriate content.")]
    BannedContent,

    #[error("Duplicate submission detected. Please wait before sending the same message again.")]
    DuplicateSubmission,

    #[error("Unauthorized. Admin access required.")]
    Unauthorized,

    #[error("Kudos not found.")]
    NotFound,

    #[error("Kudos store unavailable: {0}")]
    StoreUnavailable(String),
}

impl KudosError {
    /// Whether the caller supplied bad input (as opposed to an unknown id,
    /// a missing permission or an internal fault).
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::MissingField
                | Self::SelfRecipient
                | Self::EmptyMessage
                | Self::MessageTooLong { .. }
                | Self::BannedContent
                | Self::DuplicateSubmission
        )
    }
}
