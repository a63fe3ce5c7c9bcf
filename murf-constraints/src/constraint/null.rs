use std::any::type_name;
use std::fmt::{Debug, Formatter, Result as FmtResult};
use std::marker::PhantomData;

use crate::{Argument, Constraint};

/// Create an [`IsNone`] constraint that accepts `None` values of `Option<T>`.
pub fn is_none<T>() -> IsNone<T> {
    IsNone(PhantomData)
}

/// Create an [`IsSome`] constraint that accepts `Some` values of `Option<T>`.
pub fn is_some<T>() -> IsSome<T> {
    IsSome(PhantomData)
}

/// Constraint that accepts `None` values of `Option<T>`.
///
/// This is the explicit way to expect a missing argument.
#[must_use]
pub struct IsNone<T>(PhantomData<fn() -> T>);

/// Constraint that accepts `Some` values of `Option<T>`.
#[must_use]
pub struct IsSome<T>(PhantomData<fn() -> T>);

macro_rules! impl_option_constraint {
    ($type:ident, Option::$method:ident, $fmt:tt) => {
        impl<T> Constraint for $type<T>
        where
            T: 'static,
        {
            fn eval(&self, value: &dyn Argument) -> bool {
                value
                    .downcast_ref::<Option<T>>()
                    .is_some_and(Option::$method)
            }

            fn describe(&self, f: &mut Formatter<'_>) -> FmtResult {
                write!(f, $fmt)
            }

            impl_value_eq!();
        }

        impl<T> Debug for $type<T> {
            fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
                write!(f, "{}<{}>", stringify!($type), type_name::<T>())
            }
        }

        impl<T> PartialEq for $type<T> {
            fn eq(&self, _other: &Self) -> bool {
                true
            }
        }
    };
}

impl_option_constraint!(IsNone, Option::is_none, "equal to None");
impl_option_constraint!(IsSome, Option::is_some, "not equal to None");
