// SPDX-License-Identifier: MPL-2.0
//! Managed cameras.

use super::{LocalizedText, RelativeTime};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CameraStatus {
    Active,
    Inactive,
    Maintenance,
}

impl CameraStatus {
    /// Every status, in summary order.
    pub const ALL: [CameraStatus; 3] = [
        CameraStatus::Active,
        CameraStatus::Inactive,
        CameraStatus::Maintenance,
    ];
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CameraRecord {
    pub id: String,
    pub name: LocalizedText,
    /// Human-readable code such as `CAM-001`.
    pub number: String,
    pub status: CameraStatus,
    pub location: LocalizedText,
    pub resolution: String,
    pub stream_url: String,
    pub last_active: RelativeTime,
}
