//! The [`argument`](self) module defines the type erased [`Argument`] that is
//! passed to a [`Constraint`](crate::Constraint).

use std::any::Any;
use std::fmt::Debug;

/// Type erased value of an actual argument of a mocked call.
///
/// Any `'static` type that implements [`Debug`] is an argument. A `None`
/// value of an [`Option`] is used to represent a missing (null) argument.
pub trait Argument: Any + Debug + 'static {
    /// Get the argument as [`Any`] to downcast it to the concrete type.
    fn as_any(&self) -> &dyn Any;
}

impl<T> Argument for T
where
    T: Any + Debug,
{
    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl dyn Argument {
    /// Returns `true` if the argument is of type `T`.
    #[must_use]
    pub fn is<T: Any>(&self) -> bool {
        self.as_any().is::<T>()
    }

    /// Returns a reference to the argument if it is of type `T`.
    #[must_use]
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.as_any().downcast_ref::<T>()
    }
}

/// Create an array of [`Argument`] references from the passed expressions.
///
/// ```
/// use murf_constraints::args;
///
/// let args = args![1usize, "fuu"];
/// assert_eq!(args.len(), 2);
/// ```
#[macro_export]
macro_rules! args {
    () => {
        [] as [&dyn $crate::Argument; 0]
    };
    ($( $arg:expr ),+ $(,)?) => {
        [$( &$arg as &dyn $crate::Argument ),+]
    };
}
