//! The [`method`](self) module implements the [`Method`] descriptor that
//! identifies the mocked method an expectation belongs to.

use std::any::type_name;
use std::fmt::{Display, Formatter, Result as FmtResult};

/// Immutable descriptor of a mocked method.
///
/// The descriptor is created once when the expectation is registered. It is
/// used to validate the number of constraints and to compare expectations.
#[must_use]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Method {
    declaring_type: String,
    trait_: Option<String>,
    name: String,
    parameters: Vec<Parameter>,
}

/// A single parameter of a [`Method`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Parameter {
    /// Name of the parameter.
    pub name: String,

    /// Name of the type of the parameter.
    pub type_name: String,
}

impl Method {
    /// Create a new method descriptor without any parameters.
    pub fn new<T, N>(declaring_type: T, name: N) -> Self
    where
        T: Into<String>,
        N: Into<String>,
    {
        Self {
            declaring_type: declaring_type.into(),
            trait_: None,
            name: name.into(),
            parameters: Vec::new(),
        }
    }

    /// Set the trait the method is defined by.
    pub fn with_trait<T: Into<String>>(mut self, trait_: T) -> Self {
        self.trait_ = Some(trait_.into());

        self
    }

    /// Append a parameter with the passed `name` and `type_name`.
    pub fn with_param<N, T>(mut self, name: N, type_name: T) -> Self
    where
        N: Into<String>,
        T: Into<String>,
    {
        self.parameters.push(Parameter {
            name: name.into(),
            type_name: type_name.into(),
        });

        self
    }

    /// Append a parameter with the passed `name` of type `T`.
    pub fn with_param_of<T: ?Sized>(self, name: &str) -> Self {
        self.with_param(name, type_name::<T>())
    }

    /// Name of the type that declares the method.
    #[must_use]
    pub fn declaring_type(&self) -> &str {
        &self.declaring_type
    }

    /// Name of the trait that defines the method, if any.
    #[must_use]
    pub fn trait_(&self) -> Option<&str> {
        self.trait_.as_deref()
    }

    /// Name of the method.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Parameters of the method.
    #[must_use]
    pub fn parameters(&self) -> &[Parameter] {
        &self.parameters
    }

    /// Number of parameters of the method.
    #[must_use]
    pub fn parameter_count(&self) -> usize {
        self.parameters.len()
    }
}

impl Display for Method {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match &self.trait_ {
            Some(trait_) => write!(f, "<{} as {}>::{}", self.declaring_type, trait_, self.name),
            None => write!(f, "{}::{}", self.declaring_type, self.name),
        }
    }
}
