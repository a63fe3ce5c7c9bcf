use std::any::Any;
use std::fmt::{Display, Formatter, Result as FmtResult};
use std::hash::{Hash, Hasher};

use tracing::trace;

use crate::constraint::Message;
use crate::format::format_call;
use crate::{Argument, BoxedConstraint, Constraints, Error, Method, Result, TimesRange};

use super::{Expectation, ExpectationBase};

/// Expectation that checks each argument of a call against the constraint
/// at the same position.
///
/// The constraints are validated against the signature of the method once,
/// when the expectation is created. After that the expectation is immutable,
/// only the call counter of the [`ExpectationBase`] changes.
///
/// # Equality and hashing
///
/// Two expectations are equal if they were created for the same method and
/// their constraints are equal position by position. The hash is derived from
/// the method and the number of constraints only, because constraints can not
/// be hashed. Equal expectations therefore always have equal hashes, and the
/// expectation may be used as key of a [`HashSet`](std::collections::HashSet)
/// or [`HashMap`](std::collections::HashMap).
///
/// Equality is only reflexive if every constraint is equal to itself. This is
/// not the case for a constraint that compares with a value that is not equal
/// to itself, like `eq(f64::NAN)`.
///
/// # Diagnostics
///
/// Matching never describes the constraints. The diagnostic message is built
/// on demand by [`error_message`](Expectation::error_message) and
/// [`Display`].
#[derive(Debug)]
pub struct ConstraintsExpectation {
    base: ExpectationBase,
    constraints: Vec<BoxedConstraint>,
}

impl ConstraintsExpectation {
    /// Create a new expectation for `method` that checks the arguments of a
    /// call using the passed `constraints`.
    ///
    /// # Errors
    /// Returns an error if the constraints are missing, if the number of
    /// constraints does not match the number of parameters of the method, or
    /// if any constraint is not set.
    pub fn new<C>(method: Method, constraints: C) -> Result<Self>
    where
        C: Into<Constraints>,
    {
        Self::with_base(ExpectationBase::new(method), constraints.into())
    }

    /// Create a new expectation from an existing `expectation` that checks the
    /// arguments of a call using the passed `constraints`.
    ///
    /// Method, expected number of calls and description are taken from the
    /// passed expectation.
    ///
    /// # Errors
    /// Returns the same errors as [`new`](Self::new).
    pub fn from_expectation<C>(expectation: &dyn Expectation, constraints: C) -> Result<Self>
    where
        C: Into<Constraints>,
    {
        Self::with_base(
            ExpectationBase::from_expectation(expectation),
            constraints.into(),
        )
    }

    fn with_base(base: ExpectationBase, constraints: Constraints) -> Result<Self> {
        let slots = constraints
            .into_inner()
            .ok_or(Error::MissingValue {
                name: "constraints",
            })?;

        let parameters = base.method().parameter_count();
        if slots.len() != parameters {
            return Err(Error::ConstraintCount {
                constraints: slots.len(),
                parameters,
            });
        }

        let constraints = slots
            .into_iter()
            .enumerate()
            .map(|(index, slot)| slot.ok_or(Error::UnsetConstraint { index }))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { base, constraints })
    }

    /// Set the expected number of calls.
    #[must_use]
    pub fn times<R: Into<TimesRange>>(mut self, range: R) -> Self {
        self.base = self.base.times(range);

        self
    }

    /// Set the description that is added to the diagnostic message.
    #[must_use]
    pub fn description<S: Into<String>>(mut self, value: S) -> Self {
        self.base = self.base.description(value);

        self
    }

    /// Get the constraints of this expectation.
    #[must_use]
    pub fn constraints(&self) -> &[BoxedConstraint] {
        &self.constraints
    }

    /// Returns `Ok(true)` if every argument satisfies the constraint at the
    /// same position, `Ok(false)` otherwise.
    ///
    /// The constraints are evaluated from left to right. The evaluation stops
    /// at the first constraint that rejects its argument.
    ///
    /// # Errors
    /// Returns [`Error::ArgumentCount`] if the number of `args` differs from
    /// the number of constraints.
    pub fn matches(&self, args: &[&dyn Argument]) -> Result<bool> {
        if args.len() != self.constraints.len() {
            return Err(Error::ArgumentCount {
                arguments: args.len(),
                parameters: self.constraints.len(),
            });
        }

        for (index, (constraint, arg)) in self.constraints.iter().zip(args).enumerate() {
            if !constraint.eval(*arg) {
                trace!(
                    method = %self.method(),
                    index,
                    constraint = %Message(&**constraint),
                    value = ?arg,
                    "Argument rejected by constraint"
                );

                return Ok(false);
            }
        }

        Ok(true)
    }
}

impl Expectation for ConstraintsExpectation {
    fn base(&self) -> &ExpectationBase {
        &self.base
    }

    fn is_expected(&self, args: &[&dyn Argument]) -> Result<bool> {
        self.matches(args)
    }

    fn error_message(&self) -> String {
        self.base.create_error_message(&self.to_string())
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn eq_expectation(&self, other: &dyn Expectation) -> bool {
        other
            .as_any()
            .downcast_ref::<Self>()
            .is_some_and(|other| self == other)
    }
}

impl Display for ConstraintsExpectation {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        format_call(self.method(), self.constraints.len(), |f, index| {
            self.constraints[index].describe(f)
        })
        .fmt(f)
    }
}

impl PartialEq for ConstraintsExpectation {
    fn eq(&self, other: &Self) -> bool {
        self.method() == other.method()
            && self.constraints.len() == other.constraints.len()
            && self
                .constraints
                .iter()
                .zip(&other.constraints)
                .all(|(a, b)| a.eq_constraint(&**b))
    }
}

impl Eq for ConstraintsExpectation {}

impl Hash for ConstraintsExpectation {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.method().hash(state);
        self.constraints.len().hash(state);
    }
}

#[cfg(test)]
mod tests {
    use std::collections::hash_map::DefaultHasher;
    use std::collections::HashSet;
    use std::hash::{Hash, Hasher};

    use crate::constraint::{any, closure, eq, is_none};
    use crate::{args, constraints, Constraints, Error, Expectation, Method};

    use super::ConstraintsExpectation;

    fn fuu() -> Method {
        Method::new("MyStruct", "fuu")
            .with_trait("Fuu")
            .with_param("x", "i32")
            .with_param("y", "&str")
    }

    fn hash_of<T: Hash>(value: &T) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);

        hasher.finish()
    }

    #[test]
    fn missing_constraints() {
        let err = ConstraintsExpectation::new(fuu(), Constraints::missing()).unwrap_err();

        assert_eq!(err, Error::MissingValue { name: "constraints" });
        assert!(err.to_string().contains("constraints"));
    }

    #[test]
    fn constraint_count_mismatch() {
        let err = ConstraintsExpectation::new(fuu(), constraints![eq(1)]).unwrap_err();

        assert_eq!(
            err,
            Error::ConstraintCount {
                constraints: 1,
                parameters: 2
            }
        );
    }

    #[test]
    fn count_is_checked_before_unset_elements() {
        let err =
            ConstraintsExpectation::new(fuu(), Constraints::new().unset()).unwrap_err();

        assert!(matches!(err, Error::ConstraintCount { .. }));
    }

    #[test]
    fn unset_constraint() {
        let err = ConstraintsExpectation::new(fuu(), Constraints::new().with(eq(1)).unset())
            .unwrap_err();

        assert_eq!(err, Error::UnsetConstraint { index: 1 });
    }

    #[test]
    fn matches_all_arguments() {
        let ex = ConstraintsExpectation::new(fuu(), constraints![eq(1), eq("a")]).unwrap();

        assert!(ex.matches(&args![1, "a"]).unwrap());
        assert!(!ex.matches(&args![1, "b"]).unwrap());
        assert!(!ex.matches(&args![2, "a"]).unwrap());
        assert!(ex.is_expected(&args![1, "a"]).unwrap());
    }

    #[test]
    fn argument_count_is_an_error() {
        let ex = ConstraintsExpectation::new(fuu(), constraints![eq(1), any()]).unwrap();

        assert_eq!(
            ex.matches(&args![1]),
            Err(Error::ArgumentCount {
                arguments: 1,
                parameters: 2
            })
        );
    }

    #[test]
    fn none_argument() {
        let method = Method::new("MyStruct", "bar").with_param_of::<Option<u32>>("x");
        let ex = ConstraintsExpectation::new(method, constraints![is_none::<u32>()]).unwrap();

        assert!(ex.matches(&args![None::<u32>]).unwrap());
        assert!(!ex.matches(&args![Some(1u32)]).unwrap());
    }

    #[test]
    fn error_message() {
        let ex = ConstraintsExpectation::new(fuu(), constraints![eq(1), eq("a")]).unwrap();

        assert_eq!(ex.to_string(), "<MyStruct as Fuu>::fuu(equal to 1, equal to \"a\")");
        assert_eq!(
            ex.error_message(),
            "<MyStruct as Fuu>::fuu(equal to 1, equal to \"a\") Expected #1, Actual #0."
        );
        assert_eq!(ex.error_message(), ex.error_message());
    }

    #[test]
    fn error_message_uses_named_closure() {
        let ex = ConstraintsExpectation::new(
            fuu(),
            constraints![closure(|x: &i32| *x > 0).named("positive"), any()],
        )
        .unwrap();

        assert!(!ex.matches(&args![0, "x"]).unwrap());
        assert!(ex.matches(&args![1, "x"]).unwrap());
        assert!(ex
            .error_message()
            .contains("fuu(matches positive, anything)"));
    }

    #[test]
    fn equality() {
        let a = ConstraintsExpectation::new(fuu(), constraints![eq(1), eq("a")]).unwrap();
        let b = ConstraintsExpectation::new(fuu(), constraints![eq(1), eq("a")]).unwrap();
        let c = ConstraintsExpectation::new(fuu(), constraints![eq(1), eq("b")]).unwrap();
        let d = ConstraintsExpectation::new(fuu(), constraints![eq("a"), eq(1)]).unwrap();

        assert!(a == b);
        assert!(b == a);
        assert!(a != c);
        assert!(a != d);
        assert!(a.eq_expectation(&b));
        assert_eq!(hash_of(&a), hash_of(&b));
    }

    #[test]
    fn usable_as_set_key() {
        let mut set = HashSet::new();

        assert!(set.insert(ConstraintsExpectation::new(fuu(), constraints![eq(1), eq("a")]).unwrap()));
        assert!(set.insert(ConstraintsExpectation::new(fuu(), constraints![eq(2), eq("a")]).unwrap()));
        assert!(!set.insert(ConstraintsExpectation::new(fuu(), constraints![eq(1), eq("a")]).unwrap()));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn equality_requires_same_method() {
        let other = Method::new("MyStruct", "fuu")
            .with_param("x", "i32")
            .with_param("y", "&str");
        let a = ConstraintsExpectation::new(fuu(), constraints![eq(1), any()]).unwrap();
        let b = ConstraintsExpectation::new(other, constraints![eq(1), any()]).unwrap();

        assert!(a != b);
    }
}
