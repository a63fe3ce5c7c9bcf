use std::fmt::{Debug, Formatter, Result as FmtResult};

use crate::{Argument, Constraint};

macro_rules! impl_constraint {
    ($type:ident, $fn:ident, $trait:ident::$method:ident, $fmt:tt) => {
        pub fn $fn<T>(value: T) -> $type<T> {
            $type(value)
        }

        #[must_use]
        #[derive(Debug, Clone, PartialEq)]
        pub struct $type<T>(pub T);

        impl<T> Constraint for $type<T>
        where
            T: $trait + Debug + 'static,
        {
            fn eval(&self, value: &dyn Argument) -> bool {
                value
                    .downcast_ref::<T>()
                    .is_some_and(|value| value.$method(&self.0))
            }

            fn describe(&self, f: &mut Formatter<'_>) -> FmtResult {
                write!(f, $fmt, self.0)
            }

            impl_value_eq!();
        }
    };
}

impl_constraint!(Eq, eq, PartialEq::eq, "equal to {:?}");
impl_constraint!(Ne, ne, PartialEq::ne, "not equal to {:?}");

impl_constraint!(Lt, lt, PartialOrd::lt, "less than {:?}");
impl_constraint!(Le, le, PartialOrd::le, "less than or equal to {:?}");
impl_constraint!(Gt, gt, PartialOrd::gt, "greater than {:?}");
impl_constraint!(Ge, ge, PartialOrd::ge, "greater than or equal to {:?}");
