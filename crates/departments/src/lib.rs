//! Departments domain module.
//!
//! Departments form a strict tree. Each node stores its position as a
//! materialized path plus depth, both derived from the parent at creation, so
//! ancestor and descendant lookups never walk the parent chain.
//!
//! Locations and positions are attached through association records that
//! reject duplicates per department.

pub mod department;
pub mod links;
pub mod value_objects;

pub use department::{Department, DepartmentVerifier, RestoreDepartment};
pub use links::{LocationInDepartment, PositionInDepartment};
pub use value_objects::{DepartmentDepth, DepartmentIdentifier, DepartmentName, DepartmentPath};
