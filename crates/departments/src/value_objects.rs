//! Department scalars: name, slug identifier, materialized path and depth.
//!
//! Path and depth are derived from the parent when a department is created;
//! [`DepartmentPath::parse`] and [`DepartmentDepth::new`] exist only to rebuild
//! values that were derived earlier and persisted.

use serde::{Deserialize, Serialize};

use directory_core::value_object::bounded_text;
use directory_core::{DomainError, DomainResult, ValueObject};

/// Human-readable department name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DepartmentName(String);

impl DepartmentName {
    pub const MAX_LEN: usize = 100;

    pub fn new(raw: &str) -> DomainResult<Self> {
        bounded_text(raw, "department name", Self::MAX_LEN).map(Self)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Slug used as this department's segment of the materialized path.
///
/// Lowercase latin letters, digits and hyphens only.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DepartmentIdentifier(String);

impl DepartmentIdentifier {
    pub const MAX_LEN: usize = 50;
    pub const ROOT: &'static str = "root";

    pub fn new(raw: &str) -> DomainResult<Self> {
        let value = bounded_text(raw, "department identifier", Self::MAX_LEN)?;
        if !value.chars().all(is_slug_char) {
            return Err(DomainError::invalid_argument(format!(
                "department identifier '{value}' must contain only lowercase latin letters, digits and hyphens"
            )));
        }
        Ok(Self(value))
    }

    /// Canonical identifier of a tree root.
    pub fn root() -> Self {
        Self(Self::ROOT.to_owned())
    }

    pub fn is_root(&self) -> bool {
        self.0 == Self::ROOT
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

fn is_slug_char(c: char) -> bool {
    c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-'
}

fn is_path_char(c: char) -> bool {
    is_slug_char(c) || c == '.' || c == '/'
}

/// Materialized path: ancestor identifiers joined with `.`.
///
/// Roots have the empty path. A child of a root has just its own identifier.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DepartmentPath(String);

impl DepartmentPath {
    pub const MAX_LEN: usize = 255;
    pub const SEPARATOR: char = '.';

    pub fn root() -> Self {
        Self(String::new())
    }

    /// Derive the path of a child with `identifier` under `parent`.
    pub fn child(parent: &DepartmentPath, identifier: &DepartmentIdentifier) -> DomainResult<Self> {
        let value = if parent.is_root() {
            identifier.as_str().to_owned()
        } else {
            format!("{}{}{}", parent.0, Self::SEPARATOR, identifier.as_str())
        };
        Self::check(value)
    }

    /// Rebuild a persisted path. The empty string is the root path.
    pub fn parse(raw: &str) -> DomainResult<Self> {
        if raw.is_empty() {
            return Ok(Self::root());
        }
        if raw.split(Self::SEPARATOR).any(str::is_empty) {
            return Err(DomainError::invalid_path(format!(
                "path '{raw}' has an empty segment"
            )));
        }
        Self::check(raw.to_owned())
    }

    fn check(value: String) -> DomainResult<Self> {
        if value.chars().count() > Self::MAX_LEN {
            return Err(DomainError::invalid_path(format!(
                "path cannot exceed {} characters",
                Self::MAX_LEN
            )));
        }
        if !value.chars().all(is_path_char) {
            return Err(DomainError::invalid_path(format!(
                "path '{value}' must contain only lowercase latin letters, digits, hyphens, dots and slashes"
            )));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    /// Path segments from the top of the tree down to this node.
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.0.split(Self::SEPARATOR).filter(|s| !s.is_empty())
    }

    /// Whether `other` lies strictly below this path.
    ///
    /// Segment-aware: `it` is an ancestor of `it.dev` but not of `itsec`.
    pub fn is_ancestor_of(&self, other: &DepartmentPath) -> bool {
        if self.is_root() {
            return !other.is_root();
        }
        other
            .0
            .strip_prefix(self.0.as_str())
            .is_some_and(|rest| rest.starts_with(Self::SEPARATOR))
    }

    pub fn is_descendant_of(&self, other: &DepartmentPath) -> bool {
        other.is_ancestor_of(self)
    }
}

/// Distance from the tree root. Roots are at depth 0.
#[derive(
    Debug, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct DepartmentDepth(u16);

impl DepartmentDepth {
    pub const ROOT: DepartmentDepth = DepartmentDepth(0);

    pub fn new(value: u16) -> Self {
        Self(value)
    }

    /// Depth of a child of `parent`.
    pub fn child(parent: DepartmentDepth) -> DomainResult<Self> {
        parent
            .0
            .checked_add(1)
            .map(Self)
            .ok_or_else(|| DomainError::invalid_depth(format!("depth cannot exceed {}", u16::MAX)))
    }

    pub fn value(self) -> u16 {
        self.0
    }

    pub fn is_root(self) -> bool {
        self.0 == 0
    }
}

impl TryFrom<i32> for DepartmentDepth {
    type Error = DomainError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        u16::try_from(value)
            .map(Self)
            .map_err(|_| DomainError::invalid_depth(format!("depth {value} is out of range")))
    }
}

impl From<DepartmentDepth> for i32 {
    fn from(value: DepartmentDepth) -> Self {
        i32::from(value.0)
    }
}

impl core::fmt::Display for DepartmentDepth {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl ValueObject for DepartmentDepth {}

macro_rules! impl_string_value {
    ($t:ident, $ctor:path) => {
        impl ValueObject for $t {}

        impl TryFrom<String> for $t {
            type Error = DomainError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                $ctor(&value)
            }
        }

        impl From<$t> for String {
            fn from(value: $t) -> Self {
                value.0
            }
        }

        impl core::fmt::Display for $t {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

impl_string_value!(DepartmentName, DepartmentName::new);
impl_string_value!(DepartmentIdentifier, DepartmentIdentifier::new);
impl_string_value!(DepartmentPath, DepartmentPath::parse);
