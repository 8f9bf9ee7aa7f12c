//! Broadcast domain types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::id::BroadcastId;

/// A logged broadcast to all users of a bot.
///
/// No delivery happens in this scope; a broadcast is a log entry recording
/// the intent to message every user, with the recipient count captured at
/// send time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Broadcast {
    /// Unique broadcast ID.
    pub id: BroadcastId,
    /// Message body.
    pub message: String,
    /// When the broadcast was recorded.
    pub sent_at: DateTime<Utc>,
    /// Number of users targeted (the user count at send time).
    pub recipients: u64,
    pub status: BroadcastStatus,
}

/// Broadcast delivery status. Always `sent` in this scope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum BroadcastStatus {
    #[default]
    Sent,
}
