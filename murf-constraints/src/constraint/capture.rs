use std::any::type_name;
use std::fmt::{Debug, Formatter, Result as FmtResult};
use std::sync::Arc;

use parking_lot::Mutex;

use crate::{Argument, Constraint};

/// Create a new [`Capture`] constraint for values of type `T`.
pub fn capture<T>() -> Capture<T> {
    Capture::default()
}

/// Constraint that accepts every value of type `T` and records a copy of it.
///
/// Clones of a [`Capture`] share the recorded values, so a clone can be kept
/// by the test to inspect the arguments after the call.
#[must_use]
pub struct Capture<T> {
    values: Arc<Mutex<Vec<T>>>,
}

impl<T> Capture<T>
where
    T: Clone,
{
    /// Get all values recorded so far.
    #[must_use]
    pub fn values(&self) -> Vec<T> {
        self.values.lock().clone()
    }

    /// Get the most recently recorded value.
    #[must_use]
    pub fn last(&self) -> Option<T> {
        self.values.lock().last().cloned()
    }
}

impl<T> Capture<T> {
    /// Number of recorded values.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.lock().len()
    }

    /// Returns `true` if no value was recorded yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.lock().is_empty()
    }
}

impl<T> Default for Capture<T> {
    fn default() -> Self {
        Self {
            values: Arc::new(Mutex::new(Vec::new())),
        }
    }
}

impl<T> Clone for Capture<T> {
    fn clone(&self) -> Self {
        Self {
            values: self.values.clone(),
        }
    }
}

impl<T> Constraint for Capture<T>
where
    T: Clone + Debug + 'static,
{
    fn eval(&self, value: &dyn Argument) -> bool {
        match value.downcast_ref::<T>() {
            Some(value) => {
                self.values.lock().push(value.clone());

                true
            }
            None => false,
        }
    }

    fn describe(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "captured {}", type_name::<T>())
    }

    fn as_any(&self) -> &dyn std::any::Any {
        self
    }

    fn eq_constraint(&self, other: &dyn Constraint) -> bool {
        other
            .downcast_ref::<Self>()
            .is_some_and(|other| Arc::ptr_eq(&self.values, &other.values))
    }
}

impl<T> Debug for Capture<T>
where
    T: Debug,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("Capture")
            .field("values", &*self.values.lock())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use crate::{args, Constraint};

    use super::capture;

    #[test]
    fn records_values_of_its_type() {
        let [a, b, other] = args![1u8, 2u8, "x"];
        let captured = capture::<u8>();
        let handle = captured.clone();

        assert!(handle.is_empty());
        assert!(captured.eval(a));
        assert!(captured.eval(b));
        assert!(!captured.eval(other));

        assert_eq!(handle.values(), vec![1, 2]);
        assert_eq!(handle.last(), Some(2));
        assert_eq!(handle.len(), 2);
    }

    #[test]
    fn clones_are_equal() {
        let captured = capture::<u8>();

        assert!(captured.eq_constraint(&captured.clone()));
        assert!(!captured.eq_constraint(&capture::<u8>()));
    }
}
