//! The [`expectation`](self) module defines the [`Expectation`] trait, the
//! state every expectation shares ([`ExpectationBase`]) and the concrete
//! expectation types.

mod any_args;
mod constraints;

use std::any::Any;
use std::fmt::Display;

use crate::{Argument, Method, Result, Times, TimesRange};

pub use any_args::AnyArgsExpectation;
pub use constraints::ConstraintsExpectation;

/// Defines a expectation for a function call on a mocked object.
pub trait Expectation: Display {
    /// Get the state shared by all expectations.
    fn base(&self) -> &ExpectationBase;

    /// Returns `Ok(true)` if the passed `args` are expected by this
    /// expectation, `Ok(false)` otherwise.
    ///
    /// # Errors
    /// Returns an error if the number of arguments does not fit the method
    /// the expectation was created for.
    fn is_expected(&self, args: &[&dyn Argument]) -> Result<bool>;

    /// Get the diagnostic message that describes this expectation.
    fn error_message(&self) -> String;

    /// Get the expectation as [`Any`] to downcast it to the concrete type.
    fn as_any(&self) -> &dyn Any;

    /// Returns `true` if `other` is an expectation of the same kind that is
    /// equal to this one.
    fn eq_expectation(&self, other: &dyn Expectation) -> bool;

    /// Get the method this expectation was created for.
    fn method(&self) -> &Method {
        &self.base().method
    }
}

/// State that is shared by all expectations: the expected method, the
/// call-count policy and an optional user defined description.
#[derive(Debug)]
pub struct ExpectationBase {
    method: Method,
    times: Times,
    description: Option<String>,
}

impl ExpectationBase {
    /// Create a new base for the passed `method` that expects exactly one call.
    #[must_use]
    pub fn new(method: Method) -> Self {
        Self {
            method,
            times: Times::new(1),
            description: None,
        }
    }

    /// Create a new base from an existing expectation.
    ///
    /// Method, expected call range and description are copied. The number of
    /// actual calls starts at zero.
    #[must_use]
    pub fn from_expectation(expectation: &dyn Expectation) -> Self {
        let base = expectation.base();

        Self {
            method: base.method.clone(),
            times: base.times.fresh(),
            description: base.description.clone(),
        }
    }

    /// Set the expected number of calls.
    #[must_use]
    pub fn times<R: Into<TimesRange>>(mut self, range: R) -> Self {
        self.times = Times::new(range);

        self
    }

    /// Set the description that is added to the diagnostic message.
    #[must_use]
    pub fn description<S: Into<String>>(mut self, value: S) -> Self {
        self.description = Some(value.into());

        self
    }

    /// Get the method of the expectation.
    #[must_use]
    pub fn method(&self) -> &Method {
        &self.method
    }

    /// Get the user defined description, if any.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Get the expected range of calls.
    #[must_use]
    pub fn expected(&self) -> &TimesRange {
        &self.times.range
    }

    /// Get the number of calls that were recorded so far.
    #[must_use]
    pub fn actual_calls(&self) -> usize {
        self.times.count()
    }

    /// Record a call to the expectation.
    pub fn record_call(&self) {
        self.times.increment();
    }

    /// Returns `true` if the expectation was called at least as often as expected.
    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.times.is_ready()
    }

    /// Returns `true` if the expectation may be called again.
    #[must_use]
    pub fn can_accept_calls(&self) -> bool {
        !self.times.is_done()
    }

    /// Create the full diagnostic message for the passed textual representation
    /// of the expected call.
    #[must_use]
    pub fn create_error_message(&self, call: &str) -> String {
        let msg = format!(
            "{call} Expected #{}, Actual #{}.",
            self.times.range,
            self.times.count()
        );

        match &self.description {
            Some(description) => format!("Message: {description}\n{msg}"),
            None => msg,
        }
    }
}
