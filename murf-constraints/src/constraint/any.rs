use std::fmt::{Formatter, Result as FmtResult};

use crate::{Argument, Constraint};

/// Create an [`Any`] constraint that accepts every value.
pub fn any() -> Any {
    Any
}

/// Constraint that accepts any value, including `None`.
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Any;

impl Constraint for Any {
    fn eval(&self, _value: &dyn Argument) -> bool {
        true
    }

    fn describe(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "anything")
    }

    impl_value_eq!();
}
