//! Constraint based call expectations for mocked methods.
//!
//! A [`ConstraintsExpectation`] records that a [`Method`] is expected to be
//! called with arguments that satisfy one [`Constraint`] per parameter.
//!
//! ```
//! use murf_constraints::{args, constraints, constraint::{eq, str_starts_with}};
//! use murf_constraints::{ConstraintsExpectation, Expectation, Method};
//!
//! let method = Method::new("MyStruct", "fuu")
//!     .with_param("x", "i32")
//!     .with_param("name", "&str");
//! let expectation =
//!     ConstraintsExpectation::new(method, constraints![eq(1), str_starts_with("f")]).unwrap();
//!
//! assert!(expectation.matches(&args![1, "fuu"]).unwrap());
//! assert!(!expectation.matches(&args![1, "bar"]).unwrap());
//! assert_eq!(
//!     expectation.error_message(),
//!     "MyStruct::fuu(equal to 1, starts with \"f\") Expected #1, Actual #0."
//! );
//! ```

pub mod argument;
pub mod constraint;
pub mod error;
pub mod expectation;
pub mod format;
pub mod method;
pub mod times;

pub use argument::Argument;
pub use constraint::{BoxedConstraint, Constraint, Constraints};
pub use error::{Error, Result};
pub use expectation::{AnyArgsExpectation, ConstraintsExpectation, Expectation, ExpectationBase};
pub use method::{Method, Parameter};
pub use times::{Times, TimesRange};
