//! # exceptional
//!
//! Tri-state result container: a value, a captured failure, or the
//! deliberate absence of both.
//!
//! This crate provides pure in-memory value types with no I/O:
//!
//! - **Container** - [`Exceptional`], the tri-state container and its
//!   combinator surface
//! - **Typed variant** - [`TypedExceptional`], with a declared failure type
//! - **Batch fold** - [`ProcessingResult`] and
//!   [`Exceptional::process_collection`]
//! - **Failure model** - [`Failure`], an opaque error with runtime
//!   type-membership queries
//! - **Boundary errors** - [`InvalidStateError`], [`ExtractError`],
//!   [`FailureTypeMismatch`]
//!
//! ## Design Principles
//!
//! 1. **Three states by construction** - value, failure, and empty are a
//!    tagged union; "value and failure at once" is unrepresentable
//! 2. **Consume and return** - every combinator takes `self` and returns a
//!    container, so state transitions are visible in the chain
//! 3. **Captured vs uncaptured** - fallible-capture paths take
//!    `Result`-returning closures; pure transformation paths take
//!    infallible closures whose panics propagate
//!
//! ## Example
//!
//! ```
//! use exceptional::Exceptional;
//!
//! let total = Exceptional::attempt(|| "40".parse::<i32>())
//!     .map(|value| value + 2)
//!     .if_value(|value| println!("got {value}"))
//!     .get_or_default(0);
//!
//! assert_eq!(total, 42);
//! ```

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

// =============================================================================
// MODULES
// =============================================================================

pub mod errors;
pub mod exceptional;
pub mod failure;
pub mod processing;
pub mod typed;

pub use errors::{ExtractError, FailureTypeMismatch, InvalidStateError, StateKind};
pub use exceptional::Exceptional;
pub use failure::{Failure, SideEffect};
pub use processing::ProcessingResult;
pub use typed::TypedExceptional;

/// Returns the crate version.
#[must_use]
pub const fn crate_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

// =============================================================================
// TESTS
// =============================================================================
