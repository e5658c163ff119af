//! Type-restricted container variant with a declared failure type.

use crate::errors::{FailureTypeMismatch, InvalidStateError, StateKind};
use crate::exceptional::Exceptional;
use crate::failure::Failure;
use std::any::type_name;
use std::error::Error;

/// Container variant whose failure slot is a declared concrete type.
///
/// Mirrors the shape of [`Exceptional`] with a reduced combinator set, for
/// call sites that want a static guarantee about which failure type can
/// appear. Constructors that accept an untyped [`Failure`] validate the
/// runtime type and reject mismatches immediately instead of deferring the
/// surprise to later inspection.
#[derive(Debug)]
pub struct TypedExceptional<T, E> {
    state: TypedState<T, E>,
}

#[derive(Debug)]
enum TypedState<T, E> {
    Value(T),
    Failure(E),
    Empty,
}

impl<T, E> TypedExceptional<T, E>
where
    E: Error + Send + Sync + 'static,
{
    /// Wrap a value.
    pub const fn of(value: T) -> Self {
        Self {
            state: TypedState::Value(value),
        }
    }

    /// Wrap a possibly-absent value. Absence yields the empty state.
    pub fn from_option(value: Option<T>) -> Self {
        match value {
            Some(value) => Self::of(value),
            None => Self::empty(),
        }
    }

    /// A container in empty state.
    pub const fn empty() -> Self {
        Self {
            state: TypedState::Empty,
        }
    }

    /// Wrap a failure of the declared type. A mismatched failure is
    /// unrepresentable here; use [`TypedExceptional::from_failure`] when
    /// starting from an untyped failure.
    pub const fn of_exception(exception: E) -> Self {
        Self {
            state: TypedState::Failure(exception),
        }
    }

    /// Build a failure-state container from an untyped failure, rejecting
    /// it immediately when its runtime type is not `E`.
    pub fn from_failure(failure: Failure) -> Result<Self, FailureTypeMismatch> {
        match failure.downcast::<E>() {
            Ok(exception) => Ok(Self::of_exception(exception)),
            Err(failure) => Err(FailureTypeMismatch::new(type_name::<E>(), &failure)),
        }
    }

    /// Run a fallible supplier, capturing its typed error as the failure
    /// state.
    pub fn attempt<F>(supplier: F) -> Self
    where
        F: FnOnce() -> Result<T, E>,
    {
        match supplier() {
            Ok(value) => Self::of(value),
            Err(exception) => Self::of_exception(exception),
        }
    }

    /// Run a supplier whose error channel is untyped, validating at
    /// capture time that any failure is of the declared type.
    pub fn attempt_filtered<F>(supplier: F) -> Result<Self, FailureTypeMismatch>
    where
        F: FnOnce() -> Result<T, Failure>,
    {
        match supplier() {
            Ok(value) => Ok(Self::of(value)),
            Err(failure) => Self::from_failure(failure),
        }
    }

    /// Returns true when the container holds a value.
    #[must_use]
    pub const fn is_value_present(&self) -> bool {
        matches!(self.state, TypedState::Value(_))
    }

    /// Returns true when the container holds a failure.
    #[must_use]
    pub const fn is_exception(&self) -> bool {
        matches!(self.state, TypedState::Failure(_))
    }

    /// Returns true when the container holds neither value nor failure.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        matches!(self.state, TypedState::Empty)
    }

    /// Returns the state discriminant, for diagnostics.
    #[must_use]
    pub const fn kind(&self) -> StateKind {
        match self.state {
            TypedState::Value(_) => StateKind::Value,
            TypedState::Failure(_) => StateKind::Exception,
            TypedState::Empty => StateKind::Empty,
        }
    }

    /// Map the value to a new value; failure and empty states pass through
    /// at the new value type. Mapper failures propagate uncaptured.
    #[must_use]
    pub fn map<U, F>(self, mapper: F) -> TypedExceptional<U, E>
    where
        F: FnOnce(T) -> U,
    {
        match self.state {
            TypedState::Value(value) => TypedExceptional::of(mapper(value)),
            TypedState::Failure(exception) => TypedExceptional::of_exception(exception),
            TypedState::Empty => TypedExceptional::empty(),
        }
    }

    /// Map the value through the fallible-capture path, widening back to
    /// the untyped [`Exceptional`]: both the declared failure type and the
    /// mapper's error type are erased into [`Failure`].
    #[must_use]
    pub fn safely_map<U, E2, F>(self, mapper: F) -> Exceptional<U>
    where
        F: FnOnce(T) -> Result<U, E2>,
        E2: Into<Failure>,
    {
        match self.state {
            TypedState::Value(value) => Exceptional::attempt(|| mapper(value)),
            TypedState::Failure(exception) => Exceptional::of_exception(exception),
            TypedState::Empty => Exceptional::empty(),
        }
    }

    /// Run a consumer on the value, when one is present.
    pub fn if_value<F>(self, consumer: F) -> Self
    where
        F: FnOnce(&T),
    {
        if let TypedState::Value(value) = &self.state {
            consumer(value);
        }
        self
    }

    /// Run a consumer on the typed failure, when one is held.
    pub fn if_exception<F>(self, consumer: F) -> Self
    where
        F: FnOnce(&E),
    {
        if let TypedState::Failure(exception) = &self.state {
            consumer(exception);
        }
        self
    }

    /// Run an action when the container is empty.
    pub fn if_empty<F>(self, action: F) -> Self
    where
        F: FnOnce(),
    {
        if let TypedState::Empty = &self.state {
            action();
        }
        self
    }

    /// Extract the value, or an invalid-state error naming the actual
    /// state.
    pub fn get_value(self) -> Result<T, InvalidStateError> {
        let actual = self.kind();
        match self.state {
            TypedState::Value(value) => Ok(value),
            _ => Err(InvalidStateError {
                requested: StateKind::Value,
                actual,
            }),
        }
    }

    /// Extract the typed failure, or an invalid-state error naming the
    /// actual state.
    pub fn get_exception(self) -> Result<E, InvalidStateError> {
        let actual = self.kind();
        match self.state {
            TypedState::Failure(exception) => Ok(exception),
            _ => Err(InvalidStateError {
                requested: StateKind::Exception,
                actual,
            }),
        }
    }

    /// The value when present, otherwise the default.
    #[must_use]
    pub fn get_or_default(self, default: T) -> T {
        match self.state {
            TypedState::Value(value) => value,
            _ => default,
        }
    }

    /// The value when present, otherwise `None`. Failure information is
    /// discarded.
    #[must_use]
    pub fn into_option(self) -> Option<T> {
        match self.state {
            TypedState::Value(value) => Some(value),
            _ => None,
        }
    }

    /// Erase the declared failure type and rejoin the full combinator set.
    #[must_use]
    pub fn into_untyped(self) -> Exceptional<T> {
        match self.state {
            TypedState::Value(value) => Exceptional::of(value),
            TypedState::Failure(exception) => Exceptional::of_exception(exception),
            TypedState::Empty => Exceptional::empty(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::io;
    use std::num::ParseIntError;

    fn io_failure(message: &str) -> io::Error {
        io::Error::other(message.to_string())
    }

    #[test]
    fn of_value_round_trips() -> Result<(), InvalidStateError> {
        let container = TypedExceptional::<_, io::Error>::of("test");

        assert!(container.is_value_present());
        assert_eq!(container.get_value()?, "test");
        Ok(())
    }

    #[test]
    fn of_exception_holds_the_typed_failure() -> Result<(), InvalidStateError> {
        let container =
            TypedExceptional::<i32, io::Error>::of_exception(io_failure("boom"));

        assert!(container.is_exception());
        assert_eq!(container.get_exception()?.to_string(), "boom");
        Ok(())
    }

    #[test]
    fn from_failure_accepts_a_matching_runtime_type() -> Result<(), FailureTypeMismatch> {
        let failure = Failure::new(io_failure("boom"));

        let container = TypedExceptional::<i32, io::Error>::from_failure(failure)?;
        assert!(container.is_exception());
        Ok(())
    }

    #[test]
    fn from_failure_rejects_a_mismatch_immediately() {
        let failure = Failure::new(io_failure("boom"));

        let Err(mismatch) = TypedExceptional::<i32, ParseIntError>::from_failure(failure)
        else {
            panic!("io failure should not satisfy a ParseIntError restriction");
        };
        assert!(mismatch.expected.contains("ParseIntError"));
        assert_eq!(&*mismatch.actual, "boom");
    }

    #[test]
    fn attempt_captures_the_typed_error() {
        let container = TypedExceptional::attempt(|| "12.3".parse::<i32>());

        assert!(container.is_exception());
        let _ = container.if_exception(|error: &ParseIntError| {
            assert!(!error.to_string().is_empty());
        });
    }

    #[test]
    fn attempt_filtered_validates_at_capture_time() {
        let accepted = TypedExceptional::<i32, io::Error>::attempt_filtered(|| {
            Err(Failure::new(io_failure("boom")))
        });
        let rejected = TypedExceptional::<i32, ParseIntError>::attempt_filtered(|| {
            Err(Failure::new(io_failure("boom")))
        });

        assert!(matches!(accepted, Ok(container) if container.is_exception()));
        assert!(rejected.is_err());
    }

    #[test]
    fn map_keeps_the_declared_failure_type() -> Result<(), InvalidStateError> {
        let container = TypedExceptional::<i32, io::Error>::of_exception(io_failure("boom"))
            .map(|value| value.to_string());

        assert_eq!(container.get_exception()?.to_string(), "boom");
        Ok(())
    }

    #[test]
    fn safely_map_widens_to_the_untyped_container() {
        let widened = TypedExceptional::<&str, io::Error>::of("12.3")
            .safely_map(|raw| raw.parse::<i32>());

        assert!(widened.is_exception());
        let _ = widened.if_exception(|failure| assert!(failure.is::<ParseIntError>()));
    }

    #[test]
    fn side_effects_fire_per_state() {
        let values = Cell::new(0u32);
        let exceptions = Cell::new(0u32);
        let empties = Cell::new(0u32);

        let _ = TypedExceptional::<_, io::Error>::of(1)
            .if_value(|_| values.set(values.get() + 1))
            .if_exception(|_| exceptions.set(exceptions.get() + 1))
            .if_empty(|| empties.set(empties.get() + 1));
        let _ = TypedExceptional::<i32, io::Error>::empty()
            .if_value(|_| values.set(values.get() + 1))
            .if_empty(|| empties.set(empties.get() + 1));

        assert_eq!(values.get(), 1);
        assert_eq!(exceptions.get(), 0);
        assert_eq!(empties.get(), 1);
    }

    #[test]
    fn into_untyped_preserves_the_state() {
        let value = TypedExceptional::<_, io::Error>::of(1).into_untyped();
        let empty = TypedExceptional::<i32, io::Error>::empty().into_untyped();
        let failed = TypedExceptional::<i32, io::Error>::of_exception(io_failure("boom"))
            .into_untyped();

        assert!(value.is_value_present());
        assert!(empty.is_empty());
        assert!(failed.is_exception());
    }

    #[test]
    fn get_or_default_and_into_option_cover_all_states() {
        assert_eq!(
            TypedExceptional::<_, io::Error>::of("test").get_or_default("123"),
            "test"
        );
        assert_eq!(
            TypedExceptional::<&str, io::Error>::empty().get_or_default("123"),
            "123"
        );
        assert_eq!(
            TypedExceptional::<i32, io::Error>::of_exception(io_failure("boom"))
                .into_option(),
            None
        );
    }
}
