//! Uniqueness verification capability injected into creation factories.
//!
//! The check is advisory: it is evaluated against whatever state the
//! implementation sees at call time, so two concurrent creations can both
//! pass. Storage must still enforce the constraint and report a collision as
//! [`DomainError::DuplicateEntity`](crate::DomainError::DuplicateEntity).

use std::sync::Arc;

/// Answers whether a not-yet-persisted candidate's identifying key is free.
pub trait UniquenessVerifier<T: ?Sized> {
    /// `true` when no existing entity in the candidate's scope shares its key.
    fn check_unique(&self, candidate: &T) -> bool;
}

impl<T, V> UniquenessVerifier<T> for &V
where
    T: ?Sized,
    V: UniquenessVerifier<T> + ?Sized,
{
    fn check_unique(&self, candidate: &T) -> bool {
        (**self).check_unique(candidate)
    }
}

impl<T, V> UniquenessVerifier<T> for Arc<V>
where
    T: ?Sized,
    V: UniquenessVerifier<T> + ?Sized,
{
    fn check_unique(&self, candidate: &T) -> bool {
        (**self).check_unique(candidate)
    }
}

/// Verifier that accepts every candidate.
///
/// For rehydration paths and tests where uniqueness was already established.
#[derive(Debug, Default, Copy, Clone)]
pub struct AcceptAll;

impl<T: ?Sized> UniquenessVerifier<T> for AcceptAll {
    fn check_unique(&self, _candidate: &T) -> bool {
        true
    }
}

/// Adapts a closure into a verifier.
///
/// ```ignore
/// let taken = ["sales"];
/// let verifier = FnVerifier(|d: &Department| !taken.contains(&d.identifier().as_str()));
/// ```
#[derive(Debug, Copy, Clone)]
pub struct FnVerifier<F>(pub F);

impl<T, F> UniquenessVerifier<T> for FnVerifier<F>
where
    T: ?Sized,
    F: Fn(&T) -> bool,
{
    fn check_unique(&self, candidate: &T) -> bool {
        (self.0)(candidate)
    }
}
