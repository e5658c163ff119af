//! Boundary error types signalled across the container surface.

use crate::failure::Failure;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt;

/// Three-way state discriminant of a container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StateKind {
    /// The container holds a usable value.
    Value,
    /// The container holds a captured failure.
    Exception,
    /// The container holds neither value nor failure.
    Empty,
}

impl StateKind {
    /// Returns the canonical string identifier.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Value => "value",
            Self::Exception => "exception",
            Self::Empty => "empty",
        }
    }
}

impl fmt::Display for StateKind {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

/// Extraction was attempted in a state that cannot satisfy it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvalidStateError {
    /// State the caller asked for.
    pub requested: StateKind,
    /// State the container was actually in.
    pub actual: StateKind,
}

impl fmt::Display for InvalidStateError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            formatter,
            "{} requested but the container is in {} state",
            self.requested, self.actual
        )
    }
}

impl Error for InvalidStateError {}

/// Failure raised when bridging a container back into `Result`.
#[derive(Debug)]
pub enum ExtractError {
    /// The container held a captured failure; it is the error's source.
    Wrapped(Failure),
    /// The container was empty.
    Absent,
}

impl ExtractError {
    /// Borrow the wrapped failure, when one exists.
    #[must_use]
    pub fn cause(&self) -> Option<&Failure> {
        match self {
            Self::Wrapped(failure) => Some(failure),
            Self::Absent => None,
        }
    }

    /// Consume the error and return the wrapped failure, when one exists.
    #[must_use]
    pub fn into_cause(self) -> Option<Failure> {
        match self {
            Self::Wrapped(failure) => Some(failure),
            Self::Absent => None,
        }
    }
}

impl fmt::Display for ExtractError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Wrapped(failure) => write!(formatter, "captured failure: {failure}"),
            Self::Absent => formatter.write_str("container is empty"),
        }
    }
}

impl Error for ExtractError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Wrapped(failure) => Some(failure.as_dyn_error()),
            Self::Absent => None,
        }
    }
}

/// A failure object's runtime type did not match the declared failure type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FailureTypeMismatch {
    /// Declared failure type name.
    pub expected: Box<str>,
    /// Description of the failure that was rejected.
    pub actual: Box<str>,
}

impl FailureTypeMismatch {
    pub(crate) fn new(expected: &'static str, failure: &Failure) -> Self {
        Self {
            expected: expected.into(),
            actual: failure.to_string().into_boxed_str(),
        }
    }
}

impl fmt::Display for FailureTypeMismatch {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            formatter,
            "failure of type {} expected, got: {}",
            self.expected, self.actual
        )
    }
}

impl Error for FailureTypeMismatch {}
