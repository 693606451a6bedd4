//! Unix-epoch seconds decoded into an absolute point in time.

use std::fmt;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use humantime::format_rfc3339;
use serde::de::Error;
use serde::{Deserialize, Deserializer};

/// Absolute time read from a JSON integer of seconds since the Unix epoch.
///
/// Slack's `tooling.tokens.rotate` reports `iat` and `exp` this way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct UnixTimestamp(SystemTime);

impl UnixTimestamp {
    /// Negative values land before the epoch. Returns `None` when the value
    /// does not fit the platform's `SystemTime`.
    pub fn from_secs(secs: i64) -> Option<Self> {
        let offset = Duration::from_secs(secs.unsigned_abs());
        let time = if secs >= 0 {
            UNIX_EPOCH.checked_add(offset)
        } else {
            UNIX_EPOCH.checked_sub(offset)
        };
        time.map(Self)
    }

    pub fn as_system_time(&self) -> SystemTime {
        self.0
    }

    /// Seconds since the epoch, negative before it.
    pub fn as_secs(&self) -> i64 {
        match self.0.duration_since(UNIX_EPOCH) {
            Ok(after) => after.as_secs() as i64,
            Err(before) => -(before.duration().as_secs() as i64),
        }
    }

    /// True once `now + skew` has reached this instant.
    pub fn has_passed(&self, now: SystemTime, skew: Duration) -> bool {
        now + skew >= self.0
    }
}

impl From<SystemTime> for UnixTimestamp {
    fn from(value: SystemTime) -> Self {
        Self(value)
    }
}

impl fmt::Display for UnixTimestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 < UNIX_EPOCH {
            return write!(f, "{}s before epoch", -self.as_secs());
        }
        write!(f, "{}", format_rfc3339(self.0))
    }
}

impl<'de> Deserialize<'de> for UnixTimestamp {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let secs = i64::deserialize(deserializer)?;
        Self::from_secs(secs).ok_or_else(|| {
            D::Error::custom(format!("timestamp {secs} is out of range"))
        })
    }
}
