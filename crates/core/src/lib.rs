//! `directory-core`: domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives shared by the department,
//! position and location contexts (no infrastructure concerns).

pub mod entity;
pub mod error;
pub mod id;
pub mod lifetime;
pub mod uniqueness;
pub mod value_object;

pub use entity::Entity;
pub use error::{DomainError, DomainResult};
pub use id::{DepartmentId, LocationId, PositionId};
pub use lifetime::EntityLifeTime;
pub use uniqueness::{AcceptAll, FnVerifier, UniquenessVerifier};
pub use value_object::ValueObject;
