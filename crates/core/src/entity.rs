//! Entity trait: identity + continuity across state changes.

use crate::lifetime::EntityLifeTime;

/// Entity marker + minimal interface.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;

    /// Creation/update timestamps and the active flag.
    fn lifetime(&self) -> &EntityLifeTime;

    /// Archived entities reject every further mutation.
    fn is_archived(&self) -> bool {
        !self.lifetime().is_active()
    }
}
