//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**: two instances
/// with the same attribute values are the same value. `Money` is the
/// canonical example here: $25.99 is $25.99 no matter where it came from.
/// Contrast with entities such as a catalog `Book`, which carries an
/// identity (its title/author key) that outlives attribute changes.
///
/// The bounds keep value objects cheap to copy, comparable, and debuggable.
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
