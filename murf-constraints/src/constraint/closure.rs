use std::fmt::{Debug, Formatter, Result as FmtResult};
use std::marker::PhantomData;

use crate::{Argument, Constraint};

/// Create a [`Closure`] constraint that uses `f` to check values of type `T`.
pub fn closure<T, F>(f: F) -> Closure<T, F>
where
    F: Fn(&T) -> bool,
{
    Closure {
        func: f,
        name: None,
        _marker: PhantomData,
    }
}

/// Constraint that forwards values of type `T` to a user defined predicate.
///
/// Closures can not be compared, so two [`Closure`] constraints are only
/// equal if they are the same object.
#[must_use]
pub struct Closure<T, F> {
    func: F,
    name: Option<String>,
    _marker: PhantomData<fn(&T)>,
}

impl<T, F> Closure<T, F> {
    /// Set the name that is used to describe the predicate.
    pub fn named<N: Into<String>>(mut self, name: N) -> Self {
        self.name = Some(name.into());

        self
    }
}

impl<T, F> Constraint for Closure<T, F>
where
    T: 'static,
    F: Fn(&T) -> bool + 'static,
{
    fn eval(&self, value: &dyn Argument) -> bool {
        value.downcast_ref::<T>().is_some_and(|value| (self.func)(value))
    }

    fn describe(&self, f: &mut Formatter<'_>) -> FmtResult {
        match &self.name {
            Some(name) => write!(f, "matches {name}"),
            None => write!(f, "matches closure"),
        }
    }

    fn as_any(&self) -> &dyn std::any::Any {
        self
    }
}

impl<T, F> Debug for Closure<T, F> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("Closure")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}
