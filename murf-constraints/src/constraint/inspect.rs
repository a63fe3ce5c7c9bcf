use std::fmt::{Formatter, Result as FmtResult};

use tracing::debug;

use crate::{Argument, Constraint};

use super::Message;

/// Create an [`Inspect`] constraint that logs every evaluation of `inner`.
pub fn inspect<C>(inner: C) -> Inspect<C> {
    Inspect(inner)
}

/// Constraint that forwards to the inner constraint `C` and logs the evaluated
/// value and the result on `DEBUG` level.
#[must_use]
#[derive(Debug)]
pub struct Inspect<C>(pub C);

impl<C> Constraint for Inspect<C>
where
    C: Constraint,
{
    fn eval(&self, value: &dyn Argument) -> bool {
        let result = self.0.eval(value);

        debug!(
            constraint = %Message(&self.0),
            ?value,
            result,
            "Evaluated constraint"
        );

        result
    }

    fn describe(&self, f: &mut Formatter<'_>) -> FmtResult {
        self.0.describe(f)
    }

    fn as_any(&self) -> &dyn std::any::Any {
        self
    }

    fn eq_constraint(&self, other: &dyn Constraint) -> bool {
        other
            .downcast_ref::<Self>()
            .is_some_and(|other| self.0.eq_constraint(&other.0))
    }
}

#[cfg(test)]
mod tests {
    use crate::{args, constraint::eq, Constraint};

    use super::inspect;

    #[test]
    fn forwards_to_inner() {
        let _ = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_test_writer()
            .try_init();

        let [one, two] = args![1, 2];
        let constraint = inspect(eq(1));

        assert!(constraint.eval(one));
        assert!(!constraint.eval(two));
        assert_eq!(constraint.message(), "equal to 1");
        assert!(constraint.eq_constraint(&inspect(eq(1))));
        assert!(!constraint.eq_constraint(&eq(1)));
    }
}
