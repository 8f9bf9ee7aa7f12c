//! Shopper and contact domain types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::id::{BotId, ContactId, UserId};

/// A Telegram user who has interacted with the bot.
///
/// Users are seeded only; no API mutates them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Unique user ID.
    pub id: UserId,
    /// Telegram username (without the leading `@`).
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    /// Last time the user talked to the bot.
    pub last_active: DateTime<Utc>,
    /// Owning bot.
    pub bot_id: BotId,
}

/// A support contact shown to shoppers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    pub id: ContactId,
    pub name: String,
    pub email: String,
    pub phone: String,
    /// Telegram handle, including the leading `@`.
    pub telegram: String,
    pub bot_id: BotId,
}
