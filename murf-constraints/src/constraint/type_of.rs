use std::any::{type_name, Any};
use std::fmt::{Debug, Formatter, Result as FmtResult};
use std::marker::PhantomData;

use crate::{Argument, Constraint};

/// Create a [`TypeOf`] constraint that accepts every value of type `T`.
pub fn type_of<T>() -> TypeOf<T> {
    TypeOf(PhantomData)
}

/// Constraint that accepts every value of type `T`.
#[must_use]
pub struct TypeOf<T>(PhantomData<fn() -> T>);

impl<T> Constraint for TypeOf<T>
where
    T: Any,
{
    fn eval(&self, value: &dyn Argument) -> bool {
        value.is::<T>()
    }

    fn describe(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "type of {}", type_name::<T>())
    }

    impl_value_eq!();
}

impl<T> Debug for TypeOf<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "TypeOf<{}>", type_name::<T>())
    }
}

impl<T> PartialEq for TypeOf<T> {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use crate::{args, Constraint};

    use super::type_of;

    #[test]
    fn checks_type_only() {
        let [number, text] = args![5i64, String::from("fuu")];

        assert!(type_of::<i64>().eval(number));
        assert!(!type_of::<i64>().eval(text));
        assert!(type_of::<String>().eval(text));
        assert_eq!(type_of::<i64>().message(), "type of i64");
    }
}
