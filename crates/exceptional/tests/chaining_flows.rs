//! End-to-end combinator chains across the public surface.

use exceptional::{Exceptional, ExtractError, Failure, InvalidStateError, TypedExceptional};
use std::cell::{Cell, RefCell};
use std::io;
use std::num::ParseIntError;

fn io_failure(message: &str) -> io::Error {
    io::Error::other(message.to_string())
}

#[test]
fn parse_chain_recovers_and_reports() -> Result<(), InvalidStateError> {
    let reported = RefCell::new(Vec::new());

    let value = Exceptional::attempt(|| "not-a-number".parse::<i32>())
        .if_exception_of::<ParseIntError, _, _>(|error| {
            reported.borrow_mut().push(error.to_string());
        })
        .resume_on_exception(|_| Ok::<_, io::Error>(0))
        .map(|value| value + 1)
        .get_value()?;

    assert_eq!(value, 1);
    assert_eq!(reported.borrow().len(), 1);
    Ok(())
}

#[test]
fn side_effect_failure_takes_over_the_chain() {
    let handled = RefCell::new(Vec::new());

    let container = Exceptional::of("payload")
        .if_value(|_| Err::<(), _>(io_failure("effect failed")))
        .handle_exception(|failure| {
            handled.borrow_mut().push(failure.to_string());
        });

    assert!(container.is_exception());
    assert_eq!(*handled.borrow(), vec!["effect failed"]);
}

#[test]
fn handle_exception_reports_once_across_a_long_chain() {
    let reports = Cell::new(0u32);

    let container = Exceptional::<i32>::attempt(|| Err::<i32, _>(io_failure("boom")))
        .map(|value| value * 2)
        .handle_exception(|_| reports.set(reports.get() + 1))
        .flat_map_if_empty(|| Exceptional::of(0))
        .handle_exception(|_| reports.set(reports.get() + 1))
        .handle_exception_of::<io::Error, _, _>(|_| reports.set(reports.get() + 1));

    assert_eq!(reports.get(), 1);
    assert!(container.is_exception_handled());
}

#[test]
fn typed_restriction_bridges_back_into_the_full_chain() -> Result<(), InvalidStateError> {
    let recovered = TypedExceptional::<i32, ParseIntError>::attempt(|| "x".parse())
        .map(|value| value * 10)
        .into_untyped()
        .resume_on_exception(|failure| {
            if failure.is::<ParseIntError>() {
                Ok(-1)
            } else {
                Err(Failure::msg("unexpected failure kind"))
            }
        })
        .get_value()?;

    assert_eq!(recovered, -1);
    Ok(())
}

#[test]
fn interop_round_trip_into_result() {
    let Err(error) = Exceptional::<i32>::of_exception(io_failure("boom")).into_result()
    else {
        panic!("failure state should bridge to Err");
    };
    let Some(cause) = error.cause() else {
        panic!("wrapped error should carry the failure");
    };
    assert_eq!(cause.to_string(), "boom");

    assert!(matches!(
        Exceptional::<i32>::empty().into_result(),
        Err(ExtractError::Absent)
    ));
    assert!(matches!(
        Exceptional::<i32>::empty().try_into_option(),
        Ok(None)
    ));
}

#[test]
fn flat_map_pipeline_transitions_states() -> Result<(), InvalidStateError> {
    let value = Exceptional::of("100")
        .flat_map(|raw| Exceptional::attempt(|| raw.parse::<i32>()))
        .map_option(|value| if value > 1000 { Some(value) } else { None })
        .flat_map_if_empty(|| Exceptional::of(1000))
        .get_value()?;

    assert_eq!(value, 1000);
    Ok(())
}

#[test]
fn stream_bridge_yields_zero_or_one_elements() {
    let present: Vec<i32> = Exceptional::of(5).into_iter().collect();
    let absent: Vec<i32> = Exceptional::from_option(None).into_iter().collect();

    assert_eq!(present, vec![5]);
    assert!(absent.is_empty());
}
