//! Store settings.

use serde::{Deserialize, Serialize};

use super::id::{BotId, SettingId};

/// A key/value store setting, e.g. the display name or support email.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Setting {
    pub id: SettingId,
    pub key: String,
    pub value: String,
    pub bot_id: BotId,
}
