//! The [`error`](self) module defines the errors raised while building or
//! evaluating a call expectation.

use thiserror::Error;

/// Errors returned by the expectation types of this crate.
///
/// The first three variants are configuration errors: the expectation was
/// declared in a way that can never work and is rejected when it is built.
/// [`Error::ArgumentCount`] is raised at call time and signals a broken
/// contract between the interception layer and the expectation. It is never
/// a plain "did not match" result.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A required value was not provided.
    #[error("Value for '{name}' is required!")]
    MissingValue {
        /// Name of the missing value.
        name: &'static str,
    },

    /// The number of constraints differs from the number of parameters of the method.
    #[error(
        "The number of constraints ({constraints}) is not the same as the number of the method's parameters ({parameters})!"
    )]
    ConstraintCount {
        /// Number of passed constraints.
        constraints: usize,

        /// Number of parameters declared by the method.
        parameters: usize,
    },

    /// A position of the constraint sequence was left unset.
    #[error(
        "The constraint at index {index} is not set! Use `any()` or `is_none()` to represent unconstrained or `None` parameters."
    )]
    UnsetConstraint {
        /// Position of the unset constraint.
        index: usize,
    },

    /// The number of actual arguments differs from the number of constraints.
    #[error("Number of arguments ({arguments}) doesn't match the number of parameters ({parameters})!")]
    ArgumentCount {
        /// Number of arguments the expectation was called with.
        arguments: usize,

        /// Number of parameters (and constraints) of the expectation.
        parameters: usize,
    },
}

impl Error {
    /// Returns `true` if this error was caused by an invalid expectation
    /// declaration, `false` if it was raised while evaluating a call.
    #[must_use]
    pub fn is_configuration(&self) -> bool {
        !matches!(self, Self::ArgumentCount { .. })
    }
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::Error;

    #[test]
    fn unset_constraint_names_index() {
        let err = Error::UnsetConstraint { index: 2 };

        assert!(err.to_string().contains("index 2"));
        assert!(err.to_string().contains("is_none()"));
        assert!(err.is_configuration());
    }

    #[test]
    fn argument_count_is_not_configuration() {
        let err = Error::ArgumentCount {
            arguments: 1,
            parameters: 2,
        };

        assert!(!err.is_configuration());
    }
}
