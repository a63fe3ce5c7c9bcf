use std::fmt::{Formatter, Result as FmtResult};

use crate::{Argument, Constraint};

/// Get the string slice of `value` if it is a `&'static str` or a [`String`].
fn as_str(value: &dyn Argument) -> Option<&str> {
    if let Some(value) = value.downcast_ref::<&'static str>() {
        Some(*value)
    } else {
        value.downcast_ref::<String>().map(String::as_str)
    }
}

/* IsEmpty */

pub fn is_empty() -> IsEmpty {
    IsEmpty
}

#[must_use]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IsEmpty;

impl Constraint for IsEmpty {
    fn eval(&self, value: &dyn Argument) -> bool {
        as_str(value).is_some_and(str::is_empty)
    }

    fn describe(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "is empty")
    }

    impl_value_eq!();
}

macro_rules! impl_str_constraint {
    ($type:ident, str::$method:ident, $fmt:tt) => {
        pub fn $method<P: Into<String>>(pattern: P) -> $type {
            $type(pattern.into())
        }

        #[must_use]
        #[derive(Debug, Clone, PartialEq)]
        pub struct $type(String);

        impl Constraint for $type {
            fn eval(&self, value: &dyn Argument) -> bool {
                as_str(value).is_some_and(|value| value.$method(self.0.as_str()))
            }

            fn describe(&self, f: &mut Formatter<'_>) -> FmtResult {
                write!(f, $fmt, self.0)
            }

            impl_value_eq!();
        }
    };
}

impl_str_constraint!(StartsWith, str::starts_with, "starts with {:?}");
impl_str_constraint!(EndsWith, str::ends_with, "ends with {:?}");
impl_str_constraint!(Contains, str::contains, "contains {:?}");

#[cfg(test)]
mod tests {
    use crate::{args, Constraint};

    use super::{contains, ends_with, is_empty, starts_with};

    #[test]
    fn accepts_str_and_string() {
        let [slice, owned, empty, number] = args!["fuu bar", String::from("fuu bar"), "", 5];

        for value in [slice, owned] {
            assert!(starts_with("fuu").eval(value));
            assert!(ends_with("bar").eval(value));
            assert!(contains("u b").eval(value));
            assert!(!contains("baz").eval(value));
            assert!(!is_empty().eval(value));
        }

        assert!(is_empty().eval(empty));
        assert!(!is_empty().eval(number));
        assert!(!contains("5").eval(number));
    }

    #[test]
    fn messages() {
        assert_eq!(starts_with("fuu").message(), "starts with \"fuu\"");
        assert_eq!(contains("x").message(), "contains \"x\"");
        assert_eq!(is_empty().message(), "is empty");
    }
}
