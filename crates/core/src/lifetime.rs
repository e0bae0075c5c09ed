//! Lifecycle timestamps shared by departments, positions and locations.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};
use crate::value_object::ValueObject;

/// `(created_at, updated_at, is_active)` for a directory entity.
///
/// Invariants: `updated_at >= created_at`, and neither timestamp is one of the
/// `DateTime<Utc>` sentinels. Timestamps are UTC by construction.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawLifeTime")]
pub struct EntityLifeTime {
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    is_active: bool,
}

#[derive(Deserialize)]
struct RawLifeTime {
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    is_active: bool,
}

impl TryFrom<RawLifeTime> for EntityLifeTime {
    type Error = DomainError;

    fn try_from(raw: RawLifeTime) -> Result<Self, Self::Error> {
        Self::new(raw.created_at, raw.updated_at, raw.is_active)
    }
}

impl ValueObject for EntityLifeTime {}

fn is_sentinel(at: DateTime<Utc>) -> bool {
    at == DateTime::<Utc>::MIN_UTC || at == DateTime::<Utc>::MAX_UTC
}

impl EntityLifeTime {
    /// Validate a persisted lifetime.
    pub fn new(
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
        is_active: bool,
    ) -> DomainResult<Self> {
        if is_sentinel(created_at) {
            return Err(DomainError::invalid_argument(
                "created_at is not a valid instant",
            ));
        }
        if is_sentinel(updated_at) {
            return Err(DomainError::invalid_argument(
                "updated_at is not a valid instant",
            ));
        }
        if updated_at < created_at {
            return Err(DomainError::invalid_argument(
                "updated_at cannot be earlier than created_at",
            ));
        }
        Ok(Self {
            created_at,
            updated_at,
            is_active,
        })
    }

    /// Fresh lifetime stamped with the current time.
    pub fn started(is_active: bool) -> Self {
        Self::started_at(Utc::now(), is_active)
    }

    /// Fresh lifetime stamped with `now` for both timestamps.
    pub fn started_at(now: DateTime<Utc>, is_active: bool) -> Self {
        Self {
            created_at: now,
            updated_at: now,
            is_active,
        }
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    pub fn is_active(&self) -> bool {
        self.is_active
    }

    /// New value with `updated_at` advanced to the current time.
    #[must_use]
    pub fn touch(&self) -> Self {
        self.touch_at(Utc::now())
    }

    /// New value with `updated_at` advanced to `now`.
    ///
    /// `updated_at` never moves backwards, even if the clock does.
    #[must_use]
    pub fn touch_at(&self, now: DateTime<Utc>) -> Self {
        Self {
            created_at: self.created_at,
            updated_at: now.max(self.updated_at),
            is_active: self.is_active,
        }
    }

    /// Copy with the active flag replaced. Timestamps are untouched.
    #[must_use]
    pub fn with_active(&self, is_active: bool) -> Self {
        Self { is_active, ..*self }
    }

    /// Copy marked inactive and touched.
    #[must_use]
    pub fn archive(&self) -> Self {
        self.with_active(false).touch()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn at(secs: i64) -> DateTime<Utc> {
        Utc.timestamp_opt(1_700_000_000 + secs, 0).unwrap()
    }

    #[test]
    fn new_accepts_ordered_instants() {
        let lt = EntityLifeTime::new(at(0), at(10), true).unwrap();
        assert_eq!(lt.created_at(), at(0));
        assert_eq!(lt.updated_at(), at(10));
        assert!(lt.is_active());
    }

    #[test]
    fn new_rejects_updated_before_created() {
        let err = EntityLifeTime::new(at(10), at(0), true).unwrap_err();
        assert!(matches!(err, DomainError::InvalidArgument(_)));
    }

    #[test]
    fn new_rejects_sentinels() {
        assert!(EntityLifeTime::new(DateTime::<Utc>::MIN_UTC, at(0), true).is_err());
        assert!(EntityLifeTime::new(at(0), DateTime::<Utc>::MAX_UTC, true).is_err());
    }

    #[test]
    fn touch_keeps_created_at_and_never_goes_backwards() {
        let lt = EntityLifeTime::new(at(0), at(100), true).unwrap();

        let later = lt.touch_at(at(200));
        assert_eq!(later.created_at(), at(0));
        assert_eq!(later.updated_at(), at(200));

        let skewed = later.touch_at(at(150));
        assert_eq!(skewed.updated_at(), at(200));
    }

    #[test]
    fn touch_uses_wall_clock() {
        let lt = EntityLifeTime::started_at(Utc::now() - Duration::seconds(5), true);
        let touched = lt.touch();
        assert!(touched.updated_at() > lt.updated_at());
        assert_eq!(touched.created_at(), lt.created_at());
    }

    #[test]
    fn archive_clears_active_flag() {
        let lt = EntityLifeTime::started(true);
        let archived = lt.archive();
        assert!(!archived.is_active());
        assert!(archived.updated_at() >= lt.updated_at());
    }

    #[test]
    fn deserialize_validates_ordering() {
        let json = r#"{"created_at":"2024-01-02T00:00:00Z","updated_at":"2024-01-01T00:00:00Z","is_active":true}"#;
        assert!(serde_json::from_str::<EntityLifeTime>(json).is_err());

        let json = r#"{"created_at":"2024-01-01T00:00:00Z","updated_at":"2024-01-02T00:00:00Z","is_active":false}"#;
        let lt: EntityLifeTime = serde_json::from_str(json).unwrap();
        assert!(!lt.is_active());
    }
}
