//! The [`constraint`](self) module defines the [`Constraint`] trait and a set of
//! pre-defined constraints that may be used to check the arguments of an
//! expected call.

/// Implements [`Constraint::as_any`] and a structural [`Constraint::eq_constraint`]
/// for the current type based on its [`PartialEq`] implementation.
macro_rules! impl_value_eq {
    () => {
        fn as_any(&self) -> &dyn std::any::Any {
            self
        }

        fn eq_constraint(&self, other: &dyn $crate::Constraint) -> bool {
            other
                .as_any()
                .downcast_ref::<Self>()
                .is_some_and(|other| self == other)
        }
    };
}

mod any;
mod capture;
mod closure;
mod compare;
mod inspect;
mod null;
mod range;
mod string;
mod type_of;

use std::any::Any as StdAny;
use std::fmt::{Debug, Display, Formatter, Result as FmtResult};
use std::ptr;

use crate::Argument;

pub use any::{any, Any};
pub use capture::{capture, Capture};
pub use closure::{closure, Closure};
pub use compare::{eq, ge, gt, le, lt, ne, Eq, Ge, Gt, Le, Lt, Ne};
pub use inspect::{inspect, Inspect};
pub use null::{is_none, is_some, IsNone, IsSome};
pub use range::{range, Range};
pub use string::{
    contains as str_contains, ends_with as str_ends_with, is_empty, starts_with as str_starts_with,
    Contains as StrContains, EndsWith as StrEndsWith, IsEmpty, StartsWith as StrStartsWith,
};
pub use type_of::{type_of, TypeOf};

/// A constraint is used to check if a single argument of a call matches a
/// pre-defined expectation. Each constraint also knows how to describe itself
/// in a human readable way.
pub trait Constraint: Debug + 'static {
    /// Returns `true` if the passed `value` satisfies the constraint, `false`
    /// otherwise.
    fn eval(&self, value: &dyn Argument) -> bool;

    /// Write a human readable description of the constraint to the passed
    /// formatter.
    ///
    /// # Errors
    /// Returns an error if writing to the formatter failed.
    fn describe(&self, f: &mut Formatter<'_>) -> FmtResult;

    /// Get the constraint as [`Any`](std::any::Any) to downcast it to the
    /// concrete type.
    fn as_any(&self) -> &dyn StdAny;

    /// Returns `true` if `other` is equal to this constraint.
    ///
    /// The default implementation compares the type and the identity of both
    /// objects. Values of a zero sized type share their address, so two
    /// constraints of the same zero sized type are always equal.
    fn eq_constraint(&self, other: &dyn Constraint) -> bool {
        let this = self.as_any();
        let other = other.as_any();

        StdAny::type_id(this) == StdAny::type_id(other)
            && ptr::eq(
                this as *const dyn StdAny as *const (),
                other as *const dyn StdAny as *const (),
            )
    }

    /// Returns the description of the constraint as string.
    fn message(&self) -> String {
        Message(self).to_string()
    }
}

/// Owned constraint object as it is stored in an expectation.
pub type BoxedConstraint = Box<dyn Constraint>;

impl dyn Constraint {
    /// Returns a reference to the constraint if it is of type `T`.
    #[must_use]
    pub fn downcast_ref<T: Constraint>(&self) -> Option<&T> {
        self.as_any().downcast_ref::<T>()
    }
}

impl PartialEq for dyn Constraint {
    fn eq(&self, other: &Self) -> bool {
        self.eq_constraint(other)
    }
}

/// Helper to use the description of a constraint as [`Display`].
pub struct Message<'a, C: ?Sized>(pub &'a C);

impl<C> Display for Message<'_, C>
where
    C: Constraint + ?Sized,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        self.0.describe(f)
    }
}

/// Unvalidated sequence of constraints that is passed to the constructor of a
/// [`ConstraintsExpectation`](crate::ConstraintsExpectation).
///
/// The sequence itself may be missing, and single positions may be unset.
/// Both are rejected when the expectation is built.
#[must_use]
#[derive(Debug)]
pub struct Constraints(Option<Vec<Option<BoxedConstraint>>>);

impl Constraints {
    /// Create a new empty sequence.
    pub fn new() -> Self {
        Self(Some(Vec::new()))
    }

    /// Create a missing sequence.
    pub fn missing() -> Self {
        Self(None)
    }

    /// Append the passed `constraint` to the sequence.
    pub fn with<C: Constraint>(self, constraint: C) -> Self {
        self.push(Some(Box::new(constraint)))
    }

    /// Append an unset position to the sequence.
    pub fn unset(self) -> Self {
        self.push(None)
    }

    /// Append the passed slot to the sequence.
    ///
    /// A missing sequence stays missing.
    pub fn push(self, slot: Option<BoxedConstraint>) -> Self {
        Self(self.0.map(|mut items| {
            items.push(slot);

            items
        }))
    }

    /// Returns `true` if the sequence is missing.
    #[must_use]
    pub fn is_missing(&self) -> bool {
        self.0.is_none()
    }

    /// Take the inner slots of the sequence.
    #[must_use]
    pub fn into_inner(self) -> Option<Vec<Option<BoxedConstraint>>> {
        self.0
    }
}

impl Default for Constraints {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Vec<BoxedConstraint>> for Constraints {
    fn from(value: Vec<BoxedConstraint>) -> Self {
        Self(Some(value.into_iter().map(Some).collect()))
    }
}

impl From<Vec<Option<BoxedConstraint>>> for Constraints {
    fn from(value: Vec<Option<BoxedConstraint>>) -> Self {
        Self(Some(value))
    }
}

impl From<Option<Vec<Option<BoxedConstraint>>>> for Constraints {
    fn from(value: Option<Vec<Option<BoxedConstraint>>>) -> Self {
        Self(value)
    }
}

impl FromIterator<BoxedConstraint> for Constraints {
    fn from_iter<I: IntoIterator<Item = BoxedConstraint>>(iter: I) -> Self {
        Self(Some(iter.into_iter().map(Some).collect()))
    }
}

/// Create a fully populated [`Constraints`] sequence from the passed constraints.
///
/// ```
/// use murf_constraints::{constraints, constraint::{any, eq}};
///
/// let constraints = constraints![eq(1), any()];
/// assert!(!constraints.is_missing());
/// ```
#[macro_export]
macro_rules! constraints {
    () => {
        $crate::Constraints::new()
    };
    ($( $constraint:expr ),+ $(,)?) => {
        $crate::Constraints::new()
            $( .with($constraint) )+
    };
}
