use std::sync::Arc;

use thiserror::Error;

use directory_core::{DepartmentId, DomainError, LocationId, PositionId};
use directory_departments::Department;
use directory_locations::Location;
use directory_positions::Position;

/// Directory store operation error.
///
/// These are **infrastructure errors** as opposed to domain errors. They map
/// into [`DomainError`] so callers see one error family regardless of which
/// layer caught the problem:
///
/// - **UniqueViolation** → `DuplicateEntity` (a storage-level uniqueness
///   conflict, e.g. a lost check-then-insert race)
/// - **NotFound** → `NotFound`
/// - **Poisoned** → `Storage`
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("unique constraint violated: {0}")]
    UniqueViolation(String),

    #[error("record not found: {0}")]
    NotFound(String),

    #[error("store lock poisoned")]
    Poisoned,
}

impl From<StoreError> for DomainError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::UniqueViolation(key) => DomainError::duplicate_entity(key),
            StoreError::NotFound(what) => DomainError::not_found(what),
            StoreError::Poisoned => DomainError::storage("store lock poisoned"),
        }
    }
}

/// Persistence boundary for directory aggregates.
///
/// Implementations must enforce uniqueness on insert atomically, independent
/// of any earlier [`UniquenessVerifier`](directory_core::UniquenessVerifier)
/// check:
///
/// - department name and identifier are unique among siblings (roots share a
///   scope)
/// - non-root materialized paths are unique across the store
/// - position names are unique (case-insensitive)
/// - ids are unique per table
pub trait DirectoryStore: Send + Sync {
    fn insert_department(&self, department: Department) -> Result<(), StoreError>;

    /// Overwrite an existing department (same id), re-checking sibling
    /// uniqueness against everyone else.
    fn replace_department(&self, department: Department) -> Result<(), StoreError>;

    fn department(&self, id: DepartmentId) -> Result<Option<Department>, StoreError>;

    /// Snapshot of every stored department.
    fn departments(&self) -> Result<Vec<Department>, StoreError>;

    fn insert_position(&self, position: Arc<Position>) -> Result<(), StoreError>;

    fn position(&self, id: PositionId) -> Result<Option<Arc<Position>>, StoreError>;

    fn insert_location(&self, location: Arc<Location>) -> Result<(), StoreError>;

    fn location(&self, id: LocationId) -> Result<Option<Arc<Location>>, StoreError>;
}

impl<S> DirectoryStore for Arc<S>
where
    S: DirectoryStore + ?Sized,
{
    fn insert_department(&self, department: Department) -> Result<(), StoreError> {
        (**self).insert_department(department)
    }

    fn replace_department(&self, department: Department) -> Result<(), StoreError> {
        (**self).replace_department(department)
    }

    fn department(&self, id: DepartmentId) -> Result<Option<Department>, StoreError> {
        (**self).department(id)
    }

    fn departments(&self) -> Result<Vec<Department>, StoreError> {
        (**self).departments()
    }

    fn insert_position(&self, position: Arc<Position>) -> Result<(), StoreError> {
        (**self).insert_position(position)
    }

    fn position(&self, id: PositionId) -> Result<Option<Arc<Position>>, StoreError> {
        (**self).position(id)
    }

    fn insert_location(&self, location: Arc<Location>) -> Result<(), StoreError> {
        (**self).insert_location(location)
    }

    fn location(&self, id: LocationId) -> Result<Option<Arc<Location>>, StoreError> {
        (**self).location(id)
    }
}
