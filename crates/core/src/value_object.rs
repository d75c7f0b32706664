//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects carry no identity. Two values with the same attributes are
/// equal, and "changing" one means building a new one.
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq, Eq)]
/// struct Socket(String);
///
/// impl ValueObject for Socket {}
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
