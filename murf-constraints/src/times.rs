//! The [`times`](self) module contains the call-count policy of an expectation:
//! how often the expected call may happen and how often it already happened.

use std::fmt::{Display, Formatter, Result as FmtResult};
use std::ops::{
    Bound, Range, RangeBounds, RangeFrom, RangeFull, RangeInclusive, RangeTo, RangeToInclusive,
};
use std::sync::atomic::{AtomicUsize, Ordering};

/// Type to keep track of the number of calls expected for a specific call expectation.
#[derive(Default, Debug)]
pub struct Times {
    /// Number of calls the expectation was already executed.
    pub count: AtomicUsize,

    /// Expected number of calls.
    pub range: TimesRange,
}

impl Times {
    /// Create a new [`Times`] instance from the passed `range`.
    pub fn new<R: Into<TimesRange>>(range: R) -> Self {
        Self {
            count: AtomicUsize::default(),
            range: range.into(),
        }
    }

    /// Create a copy of the expected range with a call count of zero.
    #[must_use]
    pub fn fresh(&self) -> Self {
        Self::new(self.range.clone())
    }

    /// Increment the current call count. Returns the count before the call.
    pub fn increment(&self) -> usize {
        self.count.fetch_add(1, Ordering::Relaxed)
    }

    /// Get the number of calls that were recorded so far.
    #[must_use]
    pub fn count(&self) -> usize {
        self.count.load(Ordering::Relaxed)
    }

    /// Return `true` if lower bound of the range is fulfilled.
    #[must_use]
    pub fn is_ready(&self) -> bool {
        match &self.range.lower {
            Bound::Unbounded => true,
            Bound::Included(x) => *x <= self.count(),
            Bound::Excluded(x) => *x < self.count(),
        }
    }

    /// Return `true` if upper bound of the range is fulfilled.
    #[must_use]
    pub fn is_done(&self) -> bool {
        match &self.range.upper {
            Bound::Unbounded => false,
            Bound::Included(x) => self.count() >= *x,
            Bound::Excluded(x) => self.count() + 1 >= *x,
        }
    }
}

/// Defines the range of expected calls with a lower and a upper limit.
///
/// Similar to [`RangeBounds`] from the standard library but as struct instead
/// of trait.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimesRange {
    lower: Bound<usize>,
    upper: Bound<usize>,
}

impl Default for TimesRange {
    fn default() -> Self {
        Self {
            lower: Bound::Unbounded,
            upper: Bound::Unbounded,
        }
    }
}

impl From<usize> for TimesRange {
    fn from(value: usize) -> Self {
        Self {
            lower: Bound::Included(value),
            upper: Bound::Included(value),
        }
    }
}

impl Display for TimesRange {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match (&self.lower, &self.upper) {
            (Bound::Included(lower), Bound::Included(upper)) if lower == upper => {
                write!(f, "{lower}")
            }
            (lower, upper) => {
                match lower {
                    Bound::Unbounded => {}
                    Bound::Included(x) => write!(f, "{x}")?,
                    Bound::Excluded(x) => write!(f, "{}", x + 1)?,
                }

                match upper {
                    Bound::Unbounded => write!(f, ".."),
                    Bound::Included(x) => write!(f, "..={x}"),
                    Bound::Excluded(x) => write!(f, "..{x}"),
                }
            }
        }
    }
}

macro_rules! impl_from_range_bounds {
    ($x:ty) => {
        impl From<$x> for TimesRange {
            fn from(value: $x) -> Self {
                Self {
                    lower: value.start_bound().cloned(),
                    upper: value.end_bound().cloned(),
                }
            }
        }
    };
}

impl_from_range_bounds!(Range<usize>);
impl_from_range_bounds!(RangeFrom<usize>);
impl_from_range_bounds!(RangeFull);
impl_from_range_bounds!(RangeInclusive<usize>);
impl_from_range_bounds!(RangeTo<usize>);
impl_from_range_bounds!(RangeToInclusive<usize>);

#[cfg(test)]
mod tests {
    use super::{Times, TimesRange};

    /// Asserts `(is_ready, is_done)` before the first and after every call.
    fn assert_policy<R: Into<TimesRange>>(range: R, states: &[(bool, bool)]) {
        let t = Times::new(range);

        for (calls, (ready, done)) in states.iter().enumerate() {
            assert_eq!(t.count(), calls);
            assert_eq!(t.is_ready(), *ready, "is_ready after {calls} calls of {}", t.range);
            assert_eq!(t.is_done(), *done, "is_done after {calls} calls of {}", t.range);

            t.increment();
        }
    }

    #[test]
    fn call_count_policy() {
        assert_policy(2, &[(false, false), (false, false), (true, true)]);
        assert_policy(1..3, &[(false, false), (true, false), (true, true)]);
        assert_policy(2.., &[(false, false), (false, false), (true, false), (true, false)]);
        assert_policy(.., &[(true, false), (true, false)]);
        assert_policy(0..=1, &[(true, false), (true, true)]);
        assert_policy(..=2, &[(true, false), (true, false), (true, true), (true, true)]);
    }

    #[test]
    fn display() {
        assert_eq!(TimesRange::from(1).to_string(), "1");
        assert_eq!(TimesRange::from(1..3).to_string(), "1..3");
        assert_eq!(TimesRange::from(2..=3).to_string(), "2..=3");
        assert_eq!(TimesRange::from(2..).to_string(), "2..");
        assert_eq!(TimesRange::from(..3).to_string(), "..3");
        assert_eq!(TimesRange::from(..).to_string(), "..");
    }

    #[test]
    fn fresh_resets_count() {
        let t = Times::new(2..=3);
        t.increment();
        t.increment();
        assert!(t.is_ready());

        let fresh = t.fresh();
        assert_eq!(t.count(), 2);
        assert_eq!(fresh.count(), 0);
        assert_eq!(fresh.range, t.range);
        assert_eq!(fresh.range.to_string(), "2..=3");
        assert!(!fresh.is_ready());
        assert!(!fresh.is_done());
    }

    #[test]
    fn fresh_of_exhausted_range_accepts_calls_again() {
        let t = Times::new(..2);
        t.increment();
        assert!(t.is_done());

        let fresh = t.fresh();
        assert!(fresh.is_ready());
        assert!(!fresh.is_done());
        assert_eq!(fresh.range.to_string(), "..2");
    }
}
