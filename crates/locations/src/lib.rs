//! Locations domain module.
//!
//! Physical sites where departments operate, implemented purely as
//! deterministic domain logic (no IO, no HTTP, no storage).

pub mod location;
pub mod value_objects;

pub use location::Location;
pub use value_objects::{IanaTimeZone, LocationAddress, LocationName};
