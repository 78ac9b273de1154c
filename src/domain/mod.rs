// SPDX-License-Identifier: MPL-2.0
//! Domain layer - records shown by the console.
//!
//! Every type here is transient and held in memory. Page composers own the
//! collections; display components only read them.
//!
//! # Modules
//!
//! - [`localized`]: [`LocalizedText`](localized::LocalizedText)
//! - [`relative_time`]: [`RelativeTime`](relative_time::RelativeTime) (unit, count) pairs
//! - [`user`]: [`UserRecord`](user::UserRecord), roles and presence
//! - [`camera`]: [`CameraRecord`](camera::CameraRecord) and [`CameraStatus`](camera::CameraStatus)
//! - [`samples`]: the static sample collections

pub mod camera;
pub mod localized;
pub mod relative_time;
pub mod samples;
pub mod user;

pub use camera::{CameraRecord, CameraStatus};
pub use localized::LocalizedText;
pub use relative_time::{RelativeTime, TimeUnit};
pub use user::{PresenceStatus, UserRecord, UserRole};
