//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Every variant is detected at the operation that violates it and returned
/// straight to the caller. Nothing here is retried internally.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Empty, oversized or malformed scalar (name, slug, address, time zone, id).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Child creation attempted without a parent instance.
    #[error("parent department is required")]
    NullParent,

    /// Uniqueness check failed, either in the verifier or at the storage boundary.
    #[error("duplicate entity: {0}")]
    DuplicateEntity(String),

    /// The location or position is already linked to the department.
    #[error("duplicate association: {0}")]
    DuplicateAssociation(String),

    /// Mutation attempted on an inactive (archived) entity.
    #[error("entity is archived: {0}")]
    EntityArchived(String),

    /// A derived materialized path would exceed its bounds.
    #[error("invalid path: {0}")]
    InvalidPath(String),

    /// A derived depth would exceed its bounds.
    #[error("invalid depth: {0}")]
    InvalidDepth(String),

    /// A requested entity does not exist in the store.
    #[error("not found: {0}")]
    NotFound(String),

    /// Storage failed for a reason other than a uniqueness conflict.
    #[error("storage failure: {0}")]
    Storage(String),
}

impl DomainError {
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    pub fn duplicate_entity(msg: impl Into<String>) -> Self {
        Self::DuplicateEntity(msg.into())
    }

    pub fn duplicate_association(msg: impl Into<String>) -> Self {
        Self::DuplicateAssociation(msg.into())
    }

    pub fn archived(msg: impl Into<String>) -> Self {
        Self::EntityArchived(msg.into())
    }

    pub fn invalid_path(msg: impl Into<String>) -> Self {
        Self::InvalidPath(msg.into())
    }

    pub fn invalid_depth(msg: impl Into<String>) -> Self {
        Self::InvalidDepth(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn storage(msg: impl Into<String>) -> Self {
        Self::Storage(msg.into())
    }

    /// Whether this error reports a uniqueness collision.
    pub fn is_duplicate(&self) -> bool {
        matches!(self, Self::DuplicateEntity(_) | Self::DuplicateAssociation(_))
    }
}
