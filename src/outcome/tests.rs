use std::cell::Cell;

use crate::error::{Error, ErrorCode};
use crate::outcome::Outcome;
use crate::result::Result;

#[test]
fn outcome_success_state() {
    let outcome = Outcome::<i32>::success(42);
    assert!(outcome.is_ok());
    assert!(!outcome.is_error());
    assert_eq!(outcome.get(), (42, true));
    assert_eq!(outcome.value(), Some(&42));
    assert!(outcome.get_error().is_none());
    assert!(outcome.error().is_none());
}

#[test]
fn outcome_failure_state() {
    let err = Error::from("boom");
    let outcome = Outcome::<String>::failure(err.clone());
    assert!(!outcome.is_ok());
    assert!(outcome.is_error());
    assert_eq!(outcome.get(), (String::new(), false));
    assert_eq!(outcome.value(), None);
    assert_eq!(outcome.get_error(), Some(&err));
}

#[test]
fn outcome_from_outcome_error_wins() {
    let ok: Outcome<u64> = Outcome::from_outcome(7, None);
    assert_eq!(ok, Outcome::success(7));

    let err = Error::from("lost");
    let failed: Outcome<u64> = Outcome::from_outcome(7, Some(err.clone()));
    assert_eq!(failed, Outcome::failure(err));
}

#[test]
fn outcome_from_reference() {
    let value = vec![1u8, 2, 3];
    let outcome = Outcome::<Vec<u8>>::from_reference(&value, None);
    assert_eq!(outcome.get(), (value.clone(), true));

    let outcome = Outcome::<Vec<u8>>::from_reference(&value, Some("nope".into()));
    assert!(outcome.is_error());
}

#[test]
fn outcome_nullable_reference() -> Result<()> {
    let value = 5i32;
    let outcome = Outcome::<i32>::try_from_reference(Some(&value), None)?;
    assert_eq!(outcome.get(), (5, true));

    let outcome = Outcome::<i32>::try_from_reference(None, Some("gone".into()))?;
    assert_eq!(outcome.get_error().map(|e| e.message()), Some("gone".to_string()));

    let missing = Outcome::<i32>::try_from_reference(None, None);
    let err = missing.unwrap_err();
    assert_eq!(err.code(), Some(ErrorCode::MissingOutcome));
    Ok(())
}

#[test]
fn outcome_from_parts() -> Result<()> {
    let outcome = Outcome::<&str>::try_from_parts(Some("v"), Some("e".into()))?;
    assert!(outcome.is_error());

    let outcome = Outcome::<&str>::try_from_parts(Some("v"), None)?;
    assert_eq!(outcome.or_else("fallback"), "v");

    assert!(Outcome::<&str>::try_from_parts(None, None).is_err());
    Ok(())
}

#[test]
fn outcome_failure_message() {
    let outcome = Outcome::<u8>::failure_message("bad input");
    let err = outcome.get_error().cloned().unwrap_or_default();
    assert_eq!(err.message(), "bad input");
    assert_eq!(err.code(), Some(ErrorCode::ErrorMessage));
}

#[test]
fn outcome_or_else() {
    assert_eq!(Outcome::<i32>::success(1).or_else(9), 1);
    assert_eq!(Outcome::<i32>::failure("x".into()).or_else(9), 9);
}

#[test]
fn outcome_or_else_get_is_lazy() {
    let calls = Cell::new(0);
    let supplier = || {
        calls.set(calls.get() + 1);
        10
    };

    assert_eq!(Outcome::<i32>::success(3).or_else_get(supplier), 3);
    assert_eq!(calls.get(), 0);

    assert_eq!(Outcome::<i32>::failure("x".into()).or_else_get(supplier), 10);
    assert_eq!(calls.get(), 1);
}

#[test]
fn outcome_if_ok_if_error() {
    let ok_calls = Cell::new(0);
    let err_calls = Cell::new(0);

    let ok = Outcome::<i32>::success(4);
    ok.if_ok(|v| {
        assert_eq!(*v, 4);
        ok_calls.set(ok_calls.get() + 1);
    });
    ok.if_error(|_| err_calls.set(err_calls.get() + 1));
    assert_eq!((ok_calls.get(), err_calls.get()), (1, 0));

    let failed = Outcome::<i32>::failure("boom".into());
    failed.if_ok(|_| ok_calls.set(ok_calls.get() + 1));
    failed.if_error(|e| {
        assert_eq!(e.message(), "boom");
        err_calls.set(err_calls.get() + 1);
    });
    assert_eq!((ok_calls.get(), err_calls.get()), (1, 1));
}

#[test]
fn outcome_display() {
    assert_eq!(Outcome::<i32>::success(42).to_string(), "42");
    assert_eq!(Outcome::<i32>::failure(Error::from("boom")).to_string(), "boom");
}

#[test]
fn outcome_std_result_conversion() {
    let parsed: Outcome<u32, Error> = "12".parse::<u32>().map_err(Error::from).into();
    assert_eq!(parsed.get(), (12, true));

    let parsed: Outcome<u32, Error> = "z".parse::<u32>().map_err(Error::from).into();
    let result = parsed.into_result();
    assert_eq!(result.unwrap_err().code(), Some(ErrorCode::ParseError));
}

#[test]
fn outcome_map_and_as_ref() {
    let outcome = Outcome::<i32>::success(2).map(|v| v * 10);
    assert_eq!(outcome.as_ref().value(), Some(&&20));

    let outcome: Outcome<i32, String> = Outcome::<i32>::failure("e".into()).map_err(String::from);
    assert_eq!(outcome.get_error().map(String::as_str), Some("e"));
}

#[test]
fn outcome_attempt_method() {
    let seen = Cell::new(0);
    let disposition = Outcome::<i32>::success(8).attempt(|v| seen.set(*v), &[]);
    assert_eq!(disposition, crate::attempt::Disposition::Succeeded);
    assert_eq!(seen.get(), 8);

    let disposition = Outcome::<i32>::failure("x".into())
        .attempt(|_| seen.set(-1), &[&|_: &Error| false, &|_: &Error| true]);
    assert_eq!(disposition, crate::attempt::Disposition::Handled(1));
    assert_eq!(seen.get(), 8);
}

#[cfg(feature = "serde")]
#[test]
fn outcome_json() -> Result<()> {
    let json = Outcome::<i32>::success(42).to_json()?;
    assert_eq!(json, r#"{"Success":42}"#);

    let failed = Outcome::<i32>::failure(Error::from("boom"));
    let decoded = Outcome::<i32>::try_from_json(&failed.to_json()?)?;
    assert_eq!(decoded, failed);

    let err = Outcome::<i32>::try_from_json("{").unwrap_err();
    assert_eq!(err.code(), Some(ErrorCode::JsonError));
    Ok(())
}

#[cfg(feature = "borsh")]
#[test]
fn outcome_borsh() -> Result<()> {
    use borsh::{BorshDeserialize, BorshSerialize};

    let failed = Outcome::<u32>::failure(crate::error!("code {}", 3));
    let bytes = failed.try_to_vec()?;
    let decoded = Outcome::<u32>::try_from_slice(&bytes)?;
    assert_eq!(decoded.to_string(), "code 3");
    Ok(())
}
