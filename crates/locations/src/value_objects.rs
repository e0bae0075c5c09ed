//! Validated scalars owned by a location.

use serde::{Deserialize, Serialize};

use directory_core::value_object::bounded_text;
use directory_core::{DomainError, DomainResult, ValueObject};

/// Display name of a location.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct LocationName(String);

impl LocationName {
    pub const MAX_LEN: usize = 120;

    pub fn new(raw: &str) -> DomainResult<Self> {
        bounded_text(raw, "location name", Self::MAX_LEN).map(Self)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Postal address, kept as its comma-separated parts.
///
/// Parts are trimmed and blank parts dropped; at least one must remain.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct LocationAddress {
    parts: Vec<String>,
}

impl LocationAddress {
    pub const MAX_LEN: usize = 500;

    pub fn new(raw: &str) -> DomainResult<Self> {
        let raw = bounded_text(raw, "location address", Self::MAX_LEN)?;
        let parts: Vec<String> = raw
            .split(',')
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .map(str::to_owned)
            .collect();
        if parts.is_empty() {
            return Err(DomainError::invalid_argument(
                "location address must contain at least one part",
            ));
        }
        Ok(Self { parts })
    }

    pub fn parts(&self) -> &[String] {
        &self.parts
    }

    /// Parts joined with `", "`.
    pub fn value(&self) -> String {
        self.parts.join(", ")
    }
}

/// IANA time zone name, e.g. `Europe/Moscow` or `UTC`.
///
/// Only the shape is checked; the name is not resolved against a tz database.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct IanaTimeZone(String);

impl IanaTimeZone {
    pub const MAX_LEN: usize = 64;

    pub fn new(raw: &str) -> DomainResult<Self> {
        let value = bounded_text(raw, "time zone", Self::MAX_LEN)?;
        let allowed = |c: char| c.is_ascii_alphanumeric() || matches!(c, '_' | '+' | '-' | '/');
        if !value.chars().all(allowed) {
            return Err(DomainError::invalid_argument(format!(
                "time zone '{value}' contains invalid characters"
            )));
        }
        if value.split('/').any(str::is_empty) {
            return Err(DomainError::invalid_argument(format!(
                "time zone '{value}' has an empty segment"
            )));
        }
        Ok(Self(value))
    }

    pub fn utc() -> Self {
        Self("UTC".to_owned())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

macro_rules! impl_string_conversions {
    ($t:ty) => {
        impl ValueObject for $t {}

        impl TryFrom<String> for $t {
            type Error = DomainError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::new(&value)
            }
        }

        impl core::fmt::Display for $t {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                f.write_str(&String::from(self.clone()))
            }
        }
    };
}

impl_string_conversions!(LocationName);
impl_string_conversions!(LocationAddress);
impl_string_conversions!(IanaTimeZone);

impl From<LocationName> for String {
    fn from(value: LocationName) -> Self {
        value.0
    }
}

impl From<LocationAddress> for String {
    fn from(value: LocationAddress) -> Self {
        value.value()
    }
}

impl From<IanaTimeZone> for String {
    fn from(value: IanaTimeZone) -> Self {
        value.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_is_trimmed_and_bounded() {
        assert_eq!(LocationName::new("  HQ ").unwrap().as_str(), "HQ");
        assert!(LocationName::new("").is_err());
        assert!(LocationName::new(&"x".repeat(LocationName::MAX_LEN)).is_ok());
        assert!(LocationName::new(&"x".repeat(LocationName::MAX_LEN + 1)).is_err());
    }

    #[test]
    fn address_splits_parts_and_drops_blanks() {
        let address = LocationAddress::new(" Moscow ,, Tverskaya st. 1 , ").unwrap();
        assert_eq!(address.parts(), ["Moscow", "Tverskaya st. 1"]);
        assert_eq!(address.value(), "Moscow, Tverskaya st. 1");
        assert_eq!(address.to_string(), "Moscow, Tverskaya st. 1");
    }

    #[test]
    fn address_of_only_separators_is_rejected() {
        let err = LocationAddress::new(" , , ").unwrap_err();
        assert!(matches!(err, DomainError::InvalidArgument(_)));
    }

    #[test]
    fn time_zone_accepts_iana_shapes() {
        for tz in ["UTC", "Europe/Moscow", "America/Argentina/Buenos_Aires", "Etc/GMT+3"] {
            assert_eq!(IanaTimeZone::new(tz).unwrap().as_str(), tz);
        }
    }

    #[test]
    fn time_zone_rejects_malformed() {
        for tz in ["", "   ", "Europe//Moscow", "/UTC", "UTC/", "Europe Moscow", "Москва"] {
            assert!(IanaTimeZone::new(tz).is_err(), "{tz:?} should be rejected");
        }
    }

    #[test]
    fn serde_goes_through_validation() {
        let tz: IanaTimeZone = serde_json::from_str("\"Asia/Tokyo\"").unwrap();
        assert_eq!(tz.as_str(), "Asia/Tokyo");
        assert!(serde_json::from_str::<IanaTimeZone>("\"Asia//Tokyo\"").is_err());

        let address = LocationAddress::new("Berlin, Unter den Linden 5").unwrap();
        let json = serde_json::to_string(&address).unwrap();
        assert_eq!(json, "\"Berlin, Unter den Linden 5\"");
    }
}
