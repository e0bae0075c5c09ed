//! Positions domain module.
//!
//! Job positions that can be staffed inside departments. Pure domain logic;
//! uniqueness is checked through an injected verifier.

pub mod position;
pub mod value_objects;

pub use position::Position;
pub use value_objects::{PositionDescription, PositionName};
