//! Value object trait: equality by value, not identity.
//!
//! Value objects have **no identity**; they are defined entirely by their
//! attribute values. In this workspace every value object is built through a
//! validating constructor and exposes no setters, so a value that exists is a
//! value that is valid.

/// Marker trait for value objects.
///
/// The trait requires:
/// - **Clone**: value objects are copied, never shared mutably
/// - **PartialEq**: compared by their attribute values
/// - **Debug**: debuggable in logs and tests
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq, Eq)]
/// struct DepartmentName(String);
///
/// impl ValueObject for DepartmentName {}
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}

/// Trim `raw` and check it is non-empty and at most `max_chars` characters.
///
/// Shared by the string value objects (names, slugs, addresses). `what` names
/// the value in the error message.
pub fn bounded_text(raw: &str, what: &str, max_chars: usize) -> crate::DomainResult<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(crate::DomainError::invalid_argument(format!(
            "{what} cannot be empty"
        )));
    }
    if trimmed.chars().count() > max_chars {
        return Err(crate::DomainError::invalid_argument(format!(
            "{what} cannot exceed {max_chars} characters"
        )));
    }
    Ok(trimmed.to_owned())
}
