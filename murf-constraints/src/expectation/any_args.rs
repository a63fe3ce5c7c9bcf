use std::any::Any;
use std::fmt::{Display, Formatter, Result as FmtResult};

use crate::format::format_call;
use crate::{Argument, Error, Method, Result, TimesRange};

use super::{Expectation, ExpectationBase};

/// Expectation that accepts a call with any arguments.
///
/// This is the plain expectation that is recorded for a method before
/// constraints are added to it.
#[derive(Debug)]
pub struct AnyArgsExpectation {
    base: ExpectationBase,
}

impl AnyArgsExpectation {
    /// Create a new expectation for the passed `method`.
    #[must_use]
    pub fn new(method: Method) -> Self {
        Self {
            base: ExpectationBase::new(method),
        }
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
}

impl Expectation for AnyArgsExpectation {
    fn base(&self) -> &ExpectationBase {
        &self.base
    }

    fn is_expected(&self, args: &[&dyn Argument]) -> Result<bool> {
        let parameters = self.method().parameter_count();
        if args.len() != parameters {
            return Err(Error::ArgumentCount {
                arguments: args.len(),
                parameters,
            });
        }

        Ok(true)
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
            .is_some_and(|other| self.method() == other.method())
    }
}

impl Display for AnyArgsExpectation {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        let method = self.method();

        format_call(method, method.parameter_count(), |f, _| write!(f, "any")).fmt(f)
    }
}
