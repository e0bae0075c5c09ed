//! Persistence boundary for departments, positions and locations.
//!
//! The trait makes no storage assumptions; the in-memory implementation backs
//! tests and dev setups and doubles as the uniqueness verifier.

pub mod in_memory;
pub mod r#trait;

pub use in_memory::InMemoryDirectoryStore;
pub use r#trait::{DirectoryStore, StoreError};
