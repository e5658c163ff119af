//! Tri-state result container and its combinators.

use crate::errors::{ExtractError, InvalidStateError, StateKind};
use crate::failure::{Failure, SideEffect};
use std::error::Error;

/// Tri-state result container: a value, a captured failure, or neither.
///
/// A chain threads one container through combinators; every combinator
/// consumes `self` and returns a new container, so state transitions are
/// explicit in the chain rather than hidden behind shared mutation.
///
/// # Example
///
/// ```
/// use exceptional::Exceptional;
///
/// let parsed = Exceptional::attempt(|| "123".parse::<i32>())
///     .map(|value| value * 2)
///     .get_or_default(0);
///
/// assert_eq!(parsed, 246);
/// ```
#[derive(Debug)]
pub struct Exceptional<T> {
    pub(crate) state: State<T>,
}

/// Discriminated container state. `Value` and `Failure` are mutually
/// exclusive by construction; `handled` records whether an exactly-once
/// handler already ran for this failure.
#[derive(Debug)]
pub(crate) enum State<T> {
    Value(T),
    Failure { failure: Failure, handled: bool },
    Empty,
}

impl<T> Exceptional<T> {
    /// Wrap a value.
    pub const fn of(value: T) -> Self {
        Self {
            state: State::Value(value),
        }
    }

    /// Wrap a possibly-absent value. Absence yields the empty state, never
    /// a failure.
    pub fn from_option(value: Option<T>) -> Self {
        match value {
            Some(value) => Self::of(value),
            None => Self::empty(),
        }
    }

    /// A container in empty state.
    pub const fn empty() -> Self {
        Self {
            state: State::Empty,
        }
    }

    /// Wrap a failure.
    pub fn of_exception(failure: impl Into<Failure>) -> Self {
        Self {
            state: State::Failure {
                failure: failure.into(),
                handled: false,
            },
        }
    }

    /// Run a fallible supplier, capturing its error as the failure state.
    ///
    /// The supplier is invoked exactly once.
    pub fn attempt<E, F>(supplier: F) -> Self
    where
        F: FnOnce() -> Result<T, E>,
        E: Into<Failure>,
    {
        match supplier() {
            Ok(value) => Self::of(value),
            Err(error) => Self::of_exception(error),
        }
    }

    /// Run a fallible supplier whose success is possibly absent.
    ///
    /// `Ok(None)` yields the empty state; `Err` is captured as the failure
    /// state.
    pub fn attempt_option<E, F>(supplier: F) -> Self
    where
        F: FnOnce() -> Result<Option<T>, E>,
        E: Into<Failure>,
    {
        match supplier() {
            Ok(value) => Self::from_option(value),
            Err(error) => Self::of_exception(error),
        }
    }

    /// Run a fallible supplier, re-invoking it after a failure up to
    /// `retries` more times.
    ///
    /// Stops at the first non-failure outcome. Total invocations never
    /// exceed `retries + 1`; when every attempt fails, the container holds
    /// the last failure.
    pub fn attempt_with_retries<E, F>(mut supplier: F, retries: u32) -> Self
    where
        F: FnMut() -> Result<T, E>,
        E: Into<Failure>,
    {
        let mut attempt = 0u32;
        loop {
            attempt = attempt.saturating_add(1);
            match supplier() {
                Ok(value) => return Self::of(value),
                Err(error) => {
                    if attempt > retries {
                        return Self::of_exception(error);
                    }
                },
            }
        }
    }

    /// Returns true when the container holds a value.
    #[must_use]
    pub const fn is_value_present(&self) -> bool {
        matches!(self.state, State::Value(_))
    }

    /// Returns true when the container holds a captured failure.
    #[must_use]
    pub const fn is_exception(&self) -> bool {
        matches!(self.state, State::Failure { .. })
    }

    /// Returns true when the container holds neither value nor failure.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        matches!(self.state, State::Empty)
    }

    /// Returns true when an exactly-once handler already ran for the held
    /// failure.
    #[must_use]
    pub const fn is_exception_handled(&self) -> bool {
        matches!(
            self.state,
            State::Failure { handled: true, .. }
        )
    }

    /// Returns the state discriminant, for diagnostics.
    #[must_use]
    pub const fn kind(&self) -> StateKind {
        match self.state {
            State::Value(_) => StateKind::Value,
            State::Failure { .. } => StateKind::Exception,
            State::Empty => StateKind::Empty,
        }
    }

    /// Map the value to a new value.
    ///
    /// The mapper is infallible by signature: a failure inside it can only
    /// be a panic, which propagates to the caller uncaptured. Use
    /// [`Exceptional::safely_map`] to capture mapper failures instead.
    /// Failure and empty states pass through at the new value type, with
    /// the held failure (and its handled flag) preserved.
    #[must_use]
    pub fn map<U, F>(self, mapper: F) -> Exceptional<U>
    where
        F: FnOnce(T) -> U,
    {
        match self.state {
            State::Value(value) => Exceptional::of(mapper(value)),
            State::Failure { failure, handled } => Exceptional {
                state: State::Failure { failure, handled },
            },
            State::Empty => Exceptional::empty(),
        }
    }

    /// Map the value to a possibly-absent new value; `None` yields the
    /// empty state. Mapper failures propagate uncaptured, as with
    /// [`Exceptional::map`].
    #[must_use]
    pub fn map_option<U, F>(self, mapper: F) -> Exceptional<U>
    where
        F: FnOnce(T) -> Option<U>,
    {
        match self.state {
            State::Value(value) => Exceptional::from_option(mapper(value)),
            State::Failure { failure, handled } => Exceptional {
                state: State::Failure { failure, handled },
            },
            State::Empty => Exceptional::empty(),
        }
    }

    /// Map the value through the fallible-capture path: an `Err` from the
    /// mapper becomes the new failure state instead of propagating.
    ///
    /// This is the captured sibling of [`Exceptional::map`]; the asymmetry
    /// is deliberate, so programmer errors in pure transformations are not
    /// silently swallowed while expected fallibility stays in the chain.
    #[must_use]
    pub fn safely_map<U, E, F>(self, mapper: F) -> Exceptional<U>
    where
        F: FnOnce(T) -> Result<U, E>,
        E: Into<Failure>,
    {
        match self.state {
            State::Value(value) => Exceptional::attempt(|| mapper(value)),
            State::Failure { failure, handled } => Exceptional {
                state: State::Failure { failure, handled },
            },
            State::Empty => Exceptional::empty(),
        }
    }

    /// Map the value to another container and return it directly, allowing
    /// a chain to transition from value to failure or empty. Mapper
    /// failures propagate uncaptured.
    #[must_use]
    pub fn flat_map<U, F>(self, mapper: F) -> Exceptional<U>
    where
        F: FnOnce(T) -> Exceptional<U>,
    {
        match self.state {
            State::Value(value) => mapper(value),
            State::Failure { failure, handled } => Exceptional {
                state: State::Failure { failure, handled },
            },
            State::Empty => Exceptional::empty(),
        }
    }

    /// Replace an empty container with the supplier's container; non-empty
    /// states pass through untouched.
    #[must_use]
    pub fn flat_map_if_empty<F>(self, supplier: F) -> Self
    where
        F: FnOnce() -> Self,
    {
        match self.state {
            State::Empty => supplier(),
            other => Self { state: other },
        }
    }

    /// Recover from a failure by mapping it to a new value through the
    /// fallible-capture path: an `Err` from the mapper becomes the new
    /// failure state. Value and empty states pass through untouched.
    #[must_use]
    pub fn resume_on_exception<E, F>(self, mapper: F) -> Self
    where
        F: FnOnce(Failure) -> Result<T, E>,
        E: Into<Failure>,
    {
        match self.state {
            State::Failure { failure, .. } => Self::attempt(|| mapper(failure)),
            other => Self { state: other },
        }
    }

    /// Replace the held failure with the mapper's failure. The mapper is
    /// infallible by signature; its panics propagate uncaptured. Value and
    /// empty states pass through untouched.
    #[must_use]
    pub fn map_exception<F>(self, mapper: F) -> Self
    where
        F: FnOnce(Failure) -> Failure,
    {
        match self.state {
            State::Failure { failure, .. } => Self::of_exception(mapper(failure)),
            other => Self { state: other },
        }
    }

    /// Replace the held failure when it is of concrete kind `E`; the
    /// mapper receives the owned, concretely-typed error. Non-matching
    /// failures and other states pass through untouched.
    #[must_use]
    pub fn map_exception_of<E, F>(self, mapper: F) -> Self
    where
        E: Error + Send + Sync + 'static,
        F: FnOnce(E) -> Failure,
    {
        match self.state {
            State::Failure { failure, handled } => match failure.downcast::<E>() {
                Ok(error) => Self::of_exception(mapper(error)),
                Err(failure) => Self {
                    state: State::Failure { failure, handled },
                },
            },
            other => Self { state: other },
        }
    }

    /// Run a consumer on the value, when one is present.
    ///
    /// The consumer runs through the safe-execution helper: an `Err`
    /// returned from it replaces the chain state with a fresh failure.
    pub fn if_value<R, F>(self, consumer: F) -> Self
    where
        F: FnOnce(&T) -> R,
        R: SideEffect,
    {
        let outcome = match &self.state {
            State::Value(value) => consumer(value).into_effect_result(),
            _ => return self,
        };
        self.absorb(outcome)
    }

    /// Run a consumer on the failure, when one is held. Runs through the
    /// safe-execution helper.
    pub fn if_exception<R, F>(self, consumer: F) -> Self
    where
        F: FnOnce(&Failure) -> R,
        R: SideEffect,
    {
        let outcome = match &self.state {
            State::Failure { failure, .. } => consumer(failure).into_effect_result(),
            _ => return self,
        };
        self.absorb(outcome)
    }

    /// Run a consumer on the failure when it is of concrete kind `E`.
    /// Runs through the safe-execution helper.
    pub fn if_exception_of<E, R, F>(self, consumer: F) -> Self
    where
        E: Error + Send + Sync + 'static,
        F: FnOnce(&E) -> R,
        R: SideEffect,
    {
        let outcome = match &self.state {
            State::Failure { failure, .. } => match failure.downcast_ref::<E>() {
                Some(error) => consumer(error).into_effect_result(),
                None => return self,
            },
            _ => return self,
        };
        self.absorb(outcome)
    }

    /// Run an action when the container is empty. Runs through the
    /// safe-execution helper.
    pub fn if_empty<R, F>(self, action: F) -> Self
    where
        F: FnOnce() -> R,
        R: SideEffect,
    {
        let outcome = match &self.state {
            State::Empty => action().into_effect_result(),
            _ => return self,
        };
        self.absorb(outcome)
    }

    /// Run a consumer on the failure at most once per chain.
    ///
    /// The handled flag is set on the first attempt regardless of the
    /// consumer's outcome: when the consumer itself fails, the replacement
    /// failure container is created already marked handled, so any later
    /// `handle_exception` in the chain stays a no-op. Unguarded
    /// [`Exceptional::if_exception`] still fires on a handled failure.
    pub fn handle_exception<R, F>(self, consumer: F) -> Self
    where
        F: FnOnce(&Failure) -> R,
        R: SideEffect,
    {
        match self.state {
            State::Failure {
                failure,
                handled: false,
            } => match consumer(&failure).into_effect_result() {
                Ok(()) => Self {
                    state: State::Failure {
                        failure,
                        handled: true,
                    },
                },
                Err(raised) => Self {
                    state: State::Failure {
                        failure: raised,
                        handled: true,
                    },
                },
            },
            other => Self { state: other },
        }
    }

    /// Run a consumer on the failure at most once per chain, only when the
    /// failure is of concrete kind `E`. A non-matching failure passes
    /// through without consuming the exactly-once guard.
    pub fn handle_exception_of<E, R, F>(self, consumer: F) -> Self
    where
        E: Error + Send + Sync + 'static,
        F: FnOnce(&E) -> R,
        R: SideEffect,
    {
        match self.state {
            State::Failure {
                failure,
                handled: false,
            } => {
                let outcome = match failure.downcast_ref::<E>() {
                    Some(error) => Some(consumer(error).into_effect_result()),
                    None => None,
                };
                match outcome {
                    None => Self {
                        state: State::Failure {
                            failure,
                            handled: false,
                        },
                    },
                    Some(Ok(())) => Self {
                        state: State::Failure {
                            failure,
                            handled: true,
                        },
                    },
                    Some(Err(raised)) => Self {
                        state: State::Failure {
                            failure: raised,
                            handled: true,
                        },
                    },
                }
            },
            other => Self { state: other },
        }
    }

    /// Extract the value, or an invalid-state error naming the actual
    /// state.
    pub fn get_value(self) -> Result<T, InvalidStateError> {
        let actual = self.kind();
        match self.state {
            State::Value(value) => Ok(value),
            _ => Err(InvalidStateError {
                requested: StateKind::Value,
                actual,
            }),
        }
    }

    /// Extract the failure, or an invalid-state error naming the actual
    /// state.
    pub fn get_exception(self) -> Result<Failure, InvalidStateError> {
        let actual = self.kind();
        match self.state {
            State::Failure { failure, .. } => Ok(failure),
            _ => Err(InvalidStateError {
                requested: StateKind::Exception,
                actual,
            }),
        }
    }

    /// The value when present, otherwise the default. Covers both failure
    /// and empty states.
    #[must_use]
    pub fn get_or_default(self, default: T) -> T {
        match self.state {
            State::Value(value) => value,
            _ => default,
        }
    }

    /// The value when present, otherwise `None`. Failure information is
    /// discarded.
    #[must_use]
    pub fn into_option(self) -> Option<T> {
        match self.state {
            State::Value(value) => Some(value),
            _ => None,
        }
    }

    /// Iterate over zero or one borrowed elements: the value when present.
    #[must_use]
    pub fn iter(&self) -> std::option::IntoIter<&T> {
        let value = match &self.state {
            State::Value(value) => Some(value),
            _ => None,
        };
        value.into_iter()
    }

    /// Bridge back into `Result`: the value, or an [`ExtractError`] whose
    /// source is the held failure, or [`ExtractError::Absent`] when empty.
    pub fn into_result(self) -> Result<T, ExtractError> {
        match self.state {
            State::Value(value) => Ok(value),
            State::Failure { failure, .. } => Err(ExtractError::Wrapped(failure)),
            State::Empty => Err(ExtractError::Absent),
        }
    }

    /// Lenient bridge back into `Result`: empty becomes `Ok(None)` — an
    /// explicit absence marker, not an error — while a held failure is
    /// re-raised directly, unwrapped.
    ///
    /// The empty-case asymmetry with [`Exceptional::into_result`] is
    /// deliberate and part of the contract.
    pub fn try_into_option(self) -> Result<Option<T>, Failure> {
        match self.state {
            State::Value(value) => Ok(Some(value)),
            State::Failure { failure, .. } => Err(failure),
            State::Empty => Ok(None),
        }
    }

    /// Safe-execution helper shared by the side-effecting combinators: a
    /// callback failure replaces whatever state preceded it, so only the
    /// most recent failure in a chain is observable.
    fn absorb(self, outcome: Result<(), Failure>) -> Self {
        match outcome {
            Ok(()) => self,
            Err(failure) => Self::of_exception(failure),
        }
    }
}

impl<T> From<Option<T>> for Exceptional<T> {
    fn from(value: Option<T>) -> Self {
        Self::from_option(value)
    }
}

impl<T, E> From<Result<T, E>> for Exceptional<T>
where
    E: Into<Failure>,
{
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::of(value),
            Err(error) => Self::of_exception(error),
        }
    }
}

impl<T> IntoIterator for Exceptional<T> {
    type Item = T;
    type IntoIter = std::option::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_option().into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Exceptional<T> {
    type Item = &'a T;
    type IntoIter = std::option::IntoIter<&'a T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
