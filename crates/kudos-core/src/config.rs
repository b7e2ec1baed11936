use chrono::Duration;

/// Deny-list entries used when no other list is configured.
pub const DEFAULT_BANNED_WORDS: &[&str] = &["spam", "test123", "inappropriate"];

pub const DEFAULT_DUPLICATE_WINDOW_SECS: i64 = 60;

pub const DEFAULT_MAX_MESSAGE_CHARS: usize = 500;

/// Content and duplicate-submission rules applied when a kudo is created.
#[derive(Debug, Clone)]
pub struct ModerationConfig {
    /// Matched case-insensitively as substrings of the trimmed message.
    pub banned_words: Vec<String>,
    /// Identical sender/recipient/message within this window is rejected.
    pub duplicate_window: Duration,
    /// Upper bound on the trimmed message, counted in chars.
    pub max_message_chars: usize,
}

impl Default for ModerationConfig {
    fn default() -> Self {
        Self {
            banned_words: DEFAULT_BANNED_WORDS.iter().map(|w| w.to_string()).collect(),
            duplicate_window: Duration::seconds(DEFAULT_DUPLICATE_WINDOW_SECS),
            max_message_chars: DEFAULT_MAX_MESSAGE_CHARS,
        }
    }
}
