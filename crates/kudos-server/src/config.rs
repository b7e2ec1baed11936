use std::env;

use anyhow::{Context, Result};
use tracing::info;

use kudos_core::ModerationConfig;
use kudos_core::config::{DEFAULT_DUPLICATE_WINDOW_SECS, DEFAULT_MAX_MESSAGE_CHARS};

pub struct Config {
    pub host: String,
    pub port: u16,
    pub default_user_id: String,
    pub seed_demo: bool,
    pub moderation: ModerationConfig,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let host = env::var("KUDOS_HOST").unwrap_or_else(|_| "0.0.0.0".into());
        let port: u16 = parse_var("KUDOS_PORT", 3000)?;
        let default_user_id = env::var("KUDOS_DEFAULT_USER").unwrap_or_else(|_| "u1".into());
        let seed_demo: bool = parse_var("KUDOS_SEED_DEMO", true)?;

        let mut moderation = ModerationConfig::default();
        if let Ok(words) = env::var("KUDOS_BANNED_WORDS") {
            moderation.banned_words = parse_word_list(&words);
        }
        let window_secs: i64 = parse_var("KUDOS_DUPLICATE_WINDOW_SECS", DEFAULT_DUPLICATE_WINDOW_SECS)?;
        moderation.duplicate_window = chrono::Duration::seconds(window_secs);
        moderation.max_message_chars = parse_var("KUDOS_MAX_MESSAGE_CHARS", DEFAULT_MAX_MESSAGE_CHARS)?;

        info!(
            "Moderation: {} banned words, {}s duplicate window, {} char limit",
            moderation.banned_words.len(),
            window_secs,
            moderation.max_message_chars
        );

        Ok(Self {
            host,
            port,
            default_user_id,
            seed_demo,
            moderation,
        })
    }
}

fn parse_var<T>(key: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(key) {
        Ok(raw) => raw.trim().parse().with_context(|| format!("invalid {} value '{}'", key, raw)),
        Err(_) => Ok(default),
    }
}

fn parse_word_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|w| !w.is_empty())
        .map(str::to_string)
        .collect()
}
