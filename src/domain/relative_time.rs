// SPDX-License-Identifier: MPL-2.0
//! Elapsed time since last activity, as a (unit, count) pair.

use chrono::{DateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeUnit {
    Minutes,
    Hours,
}

/// "`count` `unit` ago", rendered through the catalog's plural rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelativeTime {
    pub unit: TimeUnit,
    pub count: u32,
}

impl RelativeTime {
    #[must_use]
    pub const fn minutes(count: u32) -> Self {
        Self {
            unit: TimeUnit::Minutes,
            count,
        }
    }

    #[must_use]
    pub const fn hours(count: u32) -> Self {
        Self {
            unit: TimeUnit::Hours,
            count,
        }
    }

    /// Whole minutes below one hour, whole hours above. Negative deltas
    /// (clock skew) count as zero minutes.
    #[must_use]
    pub fn from_elapsed(elapsed: TimeDelta) -> Self {
        let minutes = elapsed.num_minutes().max(0);
        if minutes < 60 {
            Self::minutes(minutes as u32)
        } else {
            let hours = u32::try_from(elapsed.num_hours()).unwrap_or(u32::MAX);
            Self::hours(hours)
        }
    }

    /// Pair describing the time between `then` and `now`.
    #[must_use]
    pub fn between(then: DateTime<Utc>, now: DateTime<Utc>) -> Self {
        Self::from_elapsed(now - then)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn under_an_hour_is_minutes() {
        assert_eq!(
            RelativeTime::from_elapsed(TimeDelta::minutes(18)),
            RelativeTime::minutes(18)
        );
        assert_eq!(
            RelativeTime::from_elapsed(TimeDelta::seconds(59)),
            RelativeTime::minutes(0)
        );
    }

    #[test]
    fn an_hour_or_more_is_hours() {
        assert_eq!(
            RelativeTime::from_elapsed(TimeDelta::minutes(60)),
            RelativeTime::hours(1)
        );
        assert_eq!(
            RelativeTime::from_elapsed(TimeDelta::minutes(12 * 60 + 59)),
            RelativeTime::hours(12)
        );
    }

    #[test]
    fn negative_delta_clamps_to_zero_minutes() {
        assert_eq!(
            RelativeTime::from_elapsed(TimeDelta::minutes(-5)),
            RelativeTime::minutes(0)
        );
    }

    #[test]
    fn between_uses_wall_clock_difference() {
        let now = Utc::now();
        let then = now - TimeDelta::hours(4);
        assert_eq!(RelativeTime::between(then, now), RelativeTime::hours(4));
    }
}
