//! Infrastructure layer: storage adapters and directory orchestration.

pub mod directory;
pub mod hierarchy;
pub mod store;

pub use directory::Directory;
pub use store::{DirectoryStore, InMemoryDirectoryStore, StoreError};
