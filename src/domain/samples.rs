// SPDX-License-Identifier: MPL-2.0
//! Static sample data shown until a backend exists.
//!
//! Each record is last seen at a fixed offset before the moment the data is
//! built, and its relative time is measured from that timestamp.

use super::{
    CameraRecord, CameraStatus, LocalizedText, PresenceStatus, RelativeTime, UserRecord, UserRole,
};
use chrono::{DateTime, TimeDelta, Utc};

fn seen(now: DateTime<Utc>, ago: TimeDelta) -> RelativeTime {
    RelativeTime::between(now - ago, now)
}

fn user(
    id: &str,
    fa: &str,
    en: &str,
    username: &str,
    role: UserRole,
    status: PresenceStatus,
    last_active: RelativeTime,
) -> UserRecord {
    UserRecord {
        id: id.to_string(),
        name: LocalizedText::new(fa, en),
        username: username.to_string(),
        role,
        status,
        last_active,
    }
}

#[allow(clippy::too_many_arguments)]
fn camera(
    id: &str,
    name: LocalizedText,
    number: &str,
    status: CameraStatus,
    location: LocalizedText,
    resolution: &str,
    stream_url: &str,
    last_active: RelativeTime,
) -> CameraRecord {
    CameraRecord {
        id: id.to_string(),
        name,
        number: number.to_string(),
        status,
        location,
        resolution: resolution.to_string(),
        stream_url: stream_url.to_string(),
        last_active,
    }
}

#[must_use]
pub fn sample_users() -> Vec<UserRecord> {
    sample_users_at(Utc::now())
}

/// Users as seen from `now`.
#[must_use]
pub fn sample_users_at(now: DateTime<Utc>) -> Vec<UserRecord> {
    vec![
        user(
            "1",
            "علی رضایی",
            "Ali Rezaei",
            "ali.rezaei",
            UserRole::Admin,
            PresenceStatus::Online,
            seen(now, TimeDelta::minutes(3)),
        ),
        user(
            "2",
            "سارا محسنی",
            "Sara Mohseni",
            "s.mohseni",
            UserRole::Operator,
            PresenceStatus::Idle,
            seen(now, TimeDelta::minutes(18)),
        ),
        user(
            "3",
            "احسان لطفی",
            "Ehsan Lotfi",
            "e.lotfi",
            UserRole::Viewer,
            PresenceStatus::Offline,
            seen(now, TimeDelta::hours(4)),
        ),
        user(
            "4",
            "مهسا غلامی",
            "Mahsa Gholami",
            "m.gholami",
            UserRole::Operator,
            PresenceStatus::Online,
            seen(now, TimeDelta::minutes(1)),
        ),
    ]
}

#[must_use]
pub fn sample_cameras() -> Vec<CameraRecord> {
    sample_cameras_at(Utc::now())
}

/// Cameras as seen from `now`.
#[must_use]
pub fn sample_cameras_at(now: DateTime<Utc>) -> Vec<CameraRecord> {
    vec![
        camera(
            "cam-01",
            LocalizedText::new("دوربین ورودی شمالی", "North Entrance Camera"),
            "CAM-001",
            CameraStatus::Active,
            LocalizedText::new("ورودی اصلی شمالی", "North Main Entrance"),
            "1080p",
            "rtsp://192.168.1.101:554/stream",
            seen(now, TimeDelta::minutes(2)),
        ),
        camera(
            "cam-02",
            LocalizedText::new("دوربین پارکینگ طبقه اول", "Parking Level 1"),
            "CAM-002",
            CameraStatus::Inactive,
            LocalizedText::new("پارکینگ شمالی", "North Parking"),
            "720p",
            "rtsp://192.168.1.102:554/stream",
            seen(now, TimeDelta::hours(6)),
        ),
        camera(
            "cam-03",
            LocalizedText::new("دوربین انبار مرکزی", "Warehouse Camera"),
            "CAM-003",
            CameraStatus::Maintenance,
            LocalizedText::new("انبار مرکزی", "Main Warehouse"),
            "4K",
            "rtsp://192.168.1.103:554/stream",
            seen(now, TimeDelta::hours(12)),
        ),
        camera(
            "cam-04",
            LocalizedText::new("دوربین خروجی جنوبی", "South Exit Camera"),
            "CAM-004",
            CameraStatus::Active,
            LocalizedText::new("خروجی جنوبی", "South Exit"),
            "1080p",
            "rtsp://192.168.1.104:554/stream",
            seen(now, TimeDelta::minutes(8)),
        ),
    ]
}
