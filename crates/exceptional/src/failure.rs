//! Opaque failure object with runtime type-membership queries.

use std::error::Error;
use std::fmt;

/// Captured failure held by a container in failure state.
///
/// Wraps any `std::error::Error` behind a single opaque type while keeping
/// the concrete kind inspectable at runtime via [`Failure::is`],
/// [`Failure::downcast_ref`], and [`Failure::downcast`].
///
/// `Failure` deliberately does not implement `std::error::Error` itself:
/// that keeps the blanket `From<E: Error>` conversion coherent, so any
/// error type flows into the capture paths with `?`-style ergonomics.
#[derive(Debug)]
pub struct Failure(Box<dyn Error + Send + Sync + 'static>);

impl Failure {
    /// Wrap a concrete error value.
    pub fn new<E>(error: E) -> Self
    where
        E: Error + Send + Sync + 'static,
    {
        Self(Box::new(error))
    }

    /// Build an ad-hoc failure from a message.
    pub fn msg(message: impl Into<String>) -> Self {
        Self(Box::new(MessageFailure(message.into())))
    }

    /// Returns true when the held error is of concrete kind `E`.
    #[must_use]
    pub fn is<E>(&self) -> bool
    where
        E: Error + Send + Sync + 'static,
    {
        self.0.is::<E>()
    }

    /// Borrow the held error as concrete kind `E`, when it matches.
    #[must_use]
    pub fn downcast_ref<E>(&self) -> Option<&E>
    where
        E: Error + Send + Sync + 'static,
    {
        self.0.downcast_ref::<E>()
    }

    /// Recover the held error as concrete kind `E`, or return the failure
    /// unchanged when the kind does not match.
    pub fn downcast<E>(self) -> Result<E, Self>
    where
        E: Error + Send + Sync + 'static,
    {
        match self.0.downcast::<E>() {
            Ok(error) => Ok(*error),
            Err(other) => Err(Self(other)),
        }
    }

    /// Borrow the held error as a trait object, for cause chains.
    #[must_use]
    pub fn as_dyn_error(&self) -> &(dyn Error + 'static) {
        &*self.0
    }

    /// Consume the failure and return the boxed error.
    #[must_use]
    pub fn into_inner(self) -> Box<dyn Error + Send + Sync + 'static> {
        self.0
    }
}

impl fmt::Display for Failure {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, formatter)
    }
}

impl<E> From<E> for Failure
where
    E: Error + Send + Sync + 'static,
{
    fn from(error: E) -> Self {
        Self::new(error)
    }
}

/// Message-only failure used by [`Failure::msg`].
#[derive(Debug)]
struct MessageFailure(String);

impl fmt::Display for MessageFailure {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(&self.0)
    }
}

impl Error for MessageFailure {}

/// Return type accepted by the side-effecting combinators.
///
/// Implemented for `()` (an effect that cannot fail) and for
/// `Result<(), E>` (a fallible effect whose `Err` replaces the chain state
/// with a fresh failure container).
pub trait SideEffect {
    /// Convert the callback outcome into the capture-path representation.
    fn into_effect_result(self) -> Result<(), Failure>;
}

impl SideEffect for () {
    fn into_effect_result(self) -> Result<(), Failure> {
        Ok(())
    }
}

impl<E> SideEffect for Result<(), E>
where
    E: Into<Failure>,
{
    fn into_effect_result(self) -> Result<(), Failure> {
        self.map_err(Into::into)
    }
}
