// SPDX-License-Identifier: MPL-2.0
//! Console operators.

use super::{LocalizedText, RelativeTime};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Admin,
    Operator,
    Viewer,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PresenceStatus {
    Online,
    Offline,
    Idle,
}

impl PresenceStatus {
    /// Legend order on the users page.
    pub const LEGEND: [PresenceStatus; 3] = [
        PresenceStatus::Online,
        PresenceStatus::Idle,
        PresenceStatus::Offline,
    ];
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    pub id: String,
    pub name: LocalizedText,
    /// Login handle; not localized.
    pub username: String,
    pub role: UserRole,
    pub status: PresenceStatus,
    pub last_active: RelativeTime,
}
