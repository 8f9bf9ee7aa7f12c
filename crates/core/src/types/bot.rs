//! Bot domain types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::id::BotId;

/// A managed Telegram bot.
///
/// Bots are seeded at startup and never created or deleted through the API;
/// every other entity hangs off a bot via its denormalized `botId`.
///
/// Implements `Debug` manually to redact the bot token.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bot {
    /// Unique bot ID.
    pub id: BotId,
    /// Bot username (without the leading `@`).
    pub name: String,
    /// Telegram bot API token.
    pub token: String,
    /// Whether the bot is currently active.
    pub status: BotStatus,
    /// Greeting sent to users when they start the bot.
    pub welcome_message: String,
    /// When the bot was registered.
    pub created_at: DateTime<Utc>,
}

impl std::fmt::Debug for Bot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Bot")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("token", &"[REDACTED]")
            .field("status", &self.status)
            .field("welcome_message", &self.welcome_message)
            .field("created_at", &self.created_at)
            .finish()
    }
}

/// Bot lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum BotStatus {
    #[default]
    Active,
    Inactive,
}
