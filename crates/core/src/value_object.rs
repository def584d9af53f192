//! Value equality vs identity equality.
//!
//! `PartialEq` on a value object compares field contents. Two independently
//! built values with equal fields are `==` yet live at different addresses;
//! [`same_instance`] tells them apart.

/// Marker trait for value objects.
///
/// Value objects are compared by their attribute values and duplicated with
/// `Clone`, which always yields a new, value-equal instance.
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq)]
/// struct Easy { id: EntityId, name: String }
///
/// impl ValueObject for Easy {}
///
/// let a = Easy { id: "id".into(), name: "name".into() };
/// let b = a.clone();
/// assert_eq!(a, b);               // equal by value
/// assert!(!same_instance(&a, &b)); // distinct identity
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}

/// Identity equality: `true` only when both references point at the same value.
pub fn same_instance<T: ?Sized>(a: &T, b: &T) -> bool {
    core::ptr::eq(a, b)
}
