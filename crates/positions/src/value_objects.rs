//! Validated scalars owned by a position.

use serde::{Deserialize, Serialize};

use directory_core::value_object::bounded_text;
use directory_core::{DomainError, DomainResult, ValueObject};

/// Position title, e.g. "Senior Engineer".
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PositionName(String);

impl PositionName {
    pub const MAX_LEN: usize = 100;

    pub fn new(raw: &str) -> DomainResult<Self> {
        bounded_text(raw, "position name", Self::MAX_LEN).map(Self)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl ValueObject for PositionName {}

impl TryFrom<String> for PositionName {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl From<PositionName> for String {
    fn from(value: PositionName) -> Self {
        value.0
    }
}

impl core::fmt::Display for PositionName {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Free-form description; may be empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PositionDescription(String);

impl PositionDescription {
    pub const MAX_LEN: usize = 500;

    pub fn new(raw: &str) -> DomainResult<Self> {
        let trimmed = raw.trim();
        if trimmed.chars().count() > Self::MAX_LEN {
            return Err(DomainError::invalid_argument(format!(
                "position description cannot exceed {} characters",
                Self::MAX_LEN
            )));
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// `None` means "no description".
    pub fn from_optional(raw: Option<&str>) -> DomainResult<Self> {
        raw.map_or_else(|| Ok(Self::default()), Self::new)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl ValueObject for PositionDescription {}

impl TryFrom<String> for PositionDescription {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl From<PositionDescription> for String {
    fn from(value: PositionDescription) -> Self {
        value.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_bounds() {
        assert_eq!(PositionName::new(" Engineer ").unwrap().as_str(), "Engineer");
        assert!(PositionName::new("  ").is_err());
        assert!(PositionName::new(&"a".repeat(100)).is_ok());
        assert!(PositionName::new(&"a".repeat(101)).is_err());
    }

    #[test]
    fn description_may_be_empty_but_is_bounded() {
        assert!(PositionDescription::from_optional(None).unwrap().is_empty());
        assert!(PositionDescription::new("   ").unwrap().is_empty());
        assert_eq!(
            PositionDescription::from_optional(Some(" Writes code ")).unwrap().as_str(),
            "Writes code"
        );
        let err = PositionDescription::new(&"d".repeat(501)).unwrap_err();
        assert!(matches!(err, DomainError::InvalidArgument(_)));
    }

    #[test]
    fn serde_validates_name() {
        assert!(serde_json::from_str::<PositionName>("\"\"").is_err());
        let name: PositionName = serde_json::from_str("\"Analyst\"").unwrap();
        assert_eq!(name.to_string(), "Analyst");
    }
}
