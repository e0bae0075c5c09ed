//! Association records placing locations and positions inside a department.
//!
//! A link holds both ids for comparison plus a shared, read-only handle to the
//! linked aggregate. The owning department is referenced by id only: the link
//! lives inside that department's collection.

use std::sync::Arc;

use directory_core::{DepartmentId, LocationId, PositionId};
use directory_locations::Location;
use directory_positions::Position;

use crate::department::Department;

/// A location assigned to a department.
#[derive(Debug, Clone)]
pub struct LocationInDepartment {
    department_id: DepartmentId,
    location_id: LocationId,
    location: Arc<Location>,
}

impl LocationInDepartment {
    pub fn new(department: &Department, location: Arc<Location>) -> Self {
        Self {
            department_id: department.id_typed(),
            location_id: location.id_typed(),
            location,
        }
    }

    pub fn department_id(&self) -> DepartmentId {
        self.department_id
    }

    pub fn location_id(&self) -> LocationId {
        self.location_id
    }

    pub fn location(&self) -> &Arc<Location> {
        &self.location
    }
}

impl PartialEq for LocationInDepartment {
    fn eq(&self, other: &Self) -> bool {
        self.department_id == other.department_id && self.location_id == other.location_id
    }
}

impl Eq for LocationInDepartment {}

/// A position staffed in a department.
#[derive(Debug, Clone)]
pub struct PositionInDepartment {
    department_id: DepartmentId,
    position_id: PositionId,
    position: Arc<Position>,
}

impl PositionInDepartment {
    pub fn new(department: &Department, position: Arc<Position>) -> Self {
        Self {
            department_id: department.id_typed(),
            position_id: position.id_typed(),
            position,
        }
    }

    pub fn department_id(&self) -> DepartmentId {
        self.department_id
    }

    pub fn position_id(&self) -> PositionId {
        self.position_id
    }

    pub fn position(&self) -> &Arc<Position> {
        &self.position
    }
}

impl PartialEq for PositionInDepartment {
    fn eq(&self, other: &Self) -> bool {
        self.department_id == other.department_id && self.position_id == other.position_id
    }
}

impl Eq for PositionInDepartment {}
