use std::fmt::{Debug, Formatter, Result as FmtResult};
use std::marker::PhantomData;
use std::ops::{Bound, RangeBounds};

use crate::{Argument, Constraint};

/// Create a [`Range`] constraint that accepts values contained in `range`.
pub fn range<R, T>(range: R) -> Range<R, T>
where
    R: RangeBounds<T>,
{
    Range::new(range)
}

/// Constraint that accepts values of type `T` that are contained in the range `R`.
#[must_use]
pub struct Range<R, T> {
    range: R,
    _marker: PhantomData<fn() -> T>,
}

impl<R, T> Range<R, T> {
    pub fn new(range: R) -> Self {
        Self {
            range,
            _marker: PhantomData,
        }
    }
}

impl<R, T> Constraint for Range<R, T>
where
    R: RangeBounds<T> + PartialEq + Debug + 'static,
    T: PartialOrd + Debug + 'static,
{
    fn eval(&self, value: &dyn Argument) -> bool {
        value
            .downcast_ref::<T>()
            .is_some_and(|value| self.range.contains(value))
    }

    fn describe(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "in range ")?;

        match self.range.start_bound() {
            Bound::Unbounded => write!(f, "[_, "),
            Bound::Included(x) => write!(f, "[{x:?}, "),
            Bound::Excluded(x) => write!(f, "({x:?}, "),
        }?;

        match self.range.end_bound() {
            Bound::Unbounded => write!(f, "_]"),
            Bound::Included(x) => write!(f, "{x:?}]"),
            Bound::Excluded(x) => write!(f, "{x:?})"),
        }?;

        Ok(())
    }

    impl_value_eq!();
}

impl<R, T> Debug for Range<R, T>
where
    R: Debug,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_tuple("Range").field(&self.range).finish()
    }
}

impl<R, T> PartialEq for Range<R, T>
where
    R: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.range == other.range
    }
}
