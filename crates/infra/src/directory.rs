//! Application-level orchestration over a [`DirectoryStore`].
//!
//! Each operation runs the domain factory or mutator, with the store acting as
//! the uniqueness verifier, then persists the result. The verifier gives a fast
//! rejection for the common case; the store's own constraint check on write is
//! what actually guarantees uniqueness, and its conflicts surface as the same
//! `DuplicateEntity` error.
//!
//! Read-modify-write operations (`update_department`, `link_*`) are not
//! serialized here. Callers keep at most one mutation in flight per department.

use std::sync::Arc;

use tracing::{info, warn};

use directory_core::{
    DepartmentId, DomainError, DomainResult, LocationId, PositionId, UniquenessVerifier,
};
use directory_departments::{
    Department, DepartmentIdentifier, DepartmentName, LocationInDepartment, PositionInDepartment,
};
use directory_locations::Location;
use directory_positions::{Position, PositionDescription, PositionName};

use crate::hierarchy;
use crate::store::DirectoryStore;

/// Directory service composed over a store.
#[derive(Debug, Clone, Default)]
pub struct Directory<S> {
    store: S,
}

fn logged<T>(
    operation: &'static str,
    run: impl FnOnce() -> DomainResult<T>,
) -> DomainResult<T> {
    let result = run();
    if let Err(err) = &result {
        warn!(operation, error = %err, "directory operation rejected");
    }
    result
}

impl<S> Directory<S>
where
    S: DirectoryStore + UniquenessVerifier<Department> + UniquenessVerifier<Position>,
{
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn create_root_department(
        &self,
        name: DepartmentName,
        identifier: DepartmentIdentifier,
        is_active: bool,
    ) -> DomainResult<Department> {
        logged("create_root_department", || {
            let department =
                Department::create_root(name, identifier, is_active, Some(&self.store))?;
            self.store.insert_department(department.clone())?;
            info!(
                department_id = %department.id_typed(),
                name = %department.name(),
                "root department created"
            );
            Ok(department)
        })
    }

    /// Create a department under the stored department `parent_id`.
    ///
    /// An unknown parent reaches the factory as `None` and fails with
    /// [`DomainError::NullParent`].
    pub fn create_child_department(
        &self,
        parent_id: DepartmentId,
        name: DepartmentName,
        identifier: DepartmentIdentifier,
        is_active: bool,
    ) -> DomainResult<Department> {
        logged("create_child_department", || {
            let parent = self.store.department(parent_id)?;
            let department = Department::create_child(
                name,
                identifier,
                parent.as_ref(),
                is_active,
                Some(&self.store),
            )?;
            self.store.insert_department(department.clone())?;
            info!(
                department_id = %department.id_typed(),
                parent_id = %parent_id,
                path = %department.path(),
                "child department created"
            );
            Ok(department)
        })
    }

    pub fn update_department(
        &self,
        id: DepartmentId,
        name: DepartmentName,
        identifier: DepartmentIdentifier,
        is_active: bool,
    ) -> DomainResult<Department> {
        logged("update_department", || {
            let mut department = self.department(id)?;
            department.update(name, identifier, is_active)?;
            self.store.replace_department(department.clone())?;
            Ok(department)
        })
    }

    pub fn department(&self, id: DepartmentId) -> DomainResult<Department> {
        self.store
            .department(id)?
            .ok_or_else(|| DomainError::not_found(format!("department {id}")))
    }

    pub fn create_position(
        &self,
        name: PositionName,
        description: PositionDescription,
        is_active: bool,
    ) -> DomainResult<Arc<Position>> {
        logged("create_position", || {
            let position = Position::create(name, description, is_active, &self.store)?;
            let position = Arc::new(position);
            self.store.insert_position(Arc::clone(&position))?;
            info!(position_id = %position.id_typed(), name = %position.name(), "position created");
            Ok(position)
        })
    }

    pub fn position(&self, id: PositionId) -> DomainResult<Arc<Position>> {
        self.store
            .position(id)?
            .ok_or_else(|| DomainError::not_found(format!("position {id}")))
    }

    pub fn add_location(&self, location: Location) -> DomainResult<Arc<Location>> {
        let location = Arc::new(location);
        self.store.insert_location(Arc::clone(&location))?;
        info!(location_id = %location.id_typed(), name = %location.name(), "location added");
        Ok(location)
    }

    pub fn location(&self, id: LocationId) -> DomainResult<Arc<Location>> {
        self.store
            .location(id)?
            .ok_or_else(|| DomainError::not_found(format!("location {id}")))
    }

    pub fn link_location(
        &self,
        department_id: DepartmentId,
        location_id: LocationId,
    ) -> DomainResult<Department> {
        logged("link_location", || {
            let mut department = self.department(department_id)?;
            let location = self.location(location_id)?;
            department.add_location_link(LocationInDepartment::new(&department, location))?;
            self.store.replace_department(department.clone())?;
            Ok(department)
        })
    }

    pub fn link_position(
        &self,
        department_id: DepartmentId,
        position_id: PositionId,
    ) -> DomainResult<Department> {
        logged("link_position", || {
            let mut department = self.department(department_id)?;
            let position = self.position(position_id)?;
            department.add_position_link(PositionInDepartment::new(&department, position))?;
            self.store.replace_department(department.clone())?;
            Ok(department)
        })
    }

    pub fn roots(&self) -> DomainResult<Vec<Department>> {
        Ok(hierarchy::roots(&self.store.departments()?))
    }

    pub fn children(&self, id: DepartmentId) -> DomainResult<Vec<Department>> {
        let parent = self.department(id)?;
        Ok(hierarchy::children(&self.store.departments()?, &parent))
    }

    pub fn descendants(&self, id: DepartmentId) -> DomainResult<Vec<Department>> {
        let ancestor = self.department(id)?;
        Ok(hierarchy::descendants(&self.store.departments()?, &ancestor))
    }

    pub fn ancestors(&self, id: DepartmentId) -> DomainResult<Vec<Department>> {
        let department = self.department(id)?;
        Ok(hierarchy::ancestors(&self.store.departments()?, &department))
    }
}
