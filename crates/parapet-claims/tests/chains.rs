//! End-to-end chain scenarios across validator families.

use parapet_claims::prelude::*;
use uuid::Uuid;

/// A bounds check written the way callers do: 0 <= i <= 2.
fn within_bounds(i: i32) -> Result<(), CheckError> {
    check(i, "i").not().is_less_than(&0)?.not().is_greater_than(&2)?;
    Ok(())
}

#[test]
fn bounds_chain_accepts_in_range() {
    assert!(within_bounds(0).is_ok());
    assert!(within_bounds(1).is_ok());
    assert!(within_bounds(2).is_ok());
}

#[test]
fn bounds_chain_rejects_and_names_the_parameter() {
    let err = within_bounds(3).unwrap_err();
    assert_eq!(err.kind(), FailureKind::OutOfRange);
    assert_eq!(err.parameter(), "i");

    let err = within_bounds(-1).unwrap_err();
    assert_eq!(err.kind(), FailureKind::OutOfRange);
}

#[test]
fn negation_is_single_shot_across_a_chain() {
    // The toggle applies to the first call only; the second call is
    // evaluated non-negated.
    let result = check(5, "n")
        .not()
        .is_less_than(&3)
        .and_then(|c| c.is_less_than(&10));
    assert!(result.is_ok());

    let err = check(5, "n")
        .not()
        .is_less_than(&3)
        .and_then(|c| c.is_less_than(&4))
        .unwrap_err();
    assert_eq!(err.kind(), FailureKind::OutOfRange);
}

#[test]
fn first_violation_stops_the_chain() {
    fn run(trace: &mut Vec<&'static str>) -> Result<(), CheckError> {
        let claim = check(1, "n");
        trace.push("first");
        let claim = claim.is_greater_than(&5)?;
        trace.push("second");
        claim.is_less_than(&0)?;
        Ok(())
    }

    let mut trace = Vec::new();
    assert!(run(&mut trace).is_err());
    assert_eq!(trace, vec!["first"]);
}

#[test]
fn identifier_scenario() {
    let err = check(Uuid::nil(), "id").is_not_nil().unwrap_err();
    assert_eq!(err.kind(), FailureKind::InvalidArgument);
    assert_eq!(err.parameter(), "id");

    assert!(check(Uuid::new_v4(), "id").is_not_nil().is_ok());
}

#[test]
fn collection_scenario() {
    let items = vec![0, 1, 2];
    let err = check(items.clone(), "items").contains(&4).unwrap_err();
    assert_eq!(err.kind(), FailureKind::InvalidArgument);
    assert_eq!(err.parameter(), "items");

    assert!(check(items, "items").not().contains(&4).is_ok());
}

#[test]
fn two_parameters_in_one_statement() {
    fn configure(retries: u32, host: &str) -> Result<(), CheckError> {
        check(retries, "retries")
            .is_at_most(&10)?
            .and(host, "host")
            .not()
            .is_empty()?;
        Ok(())
    }

    assert!(configure(3, "example.org").is_ok());

    let err = configure(3, "").unwrap_err();
    assert_eq!(err.parameter(), "host");

    let err = configure(11, "example.org").unwrap_err();
    assert_eq!(err.parameter(), "retries");
}

#[test]
fn optional_value_unwraps_into_further_checks() {
    fn deadline_ms(deadline: Option<u64>) -> Result<(), CheckError> {
        check(deadline, "deadline").some()?.is_greater_than(&0)?;
        Ok(())
    }

    assert!(deadline_ms(Some(50)).is_ok());

    let err = deadline_ms(None).unwrap_err();
    assert_eq!(err.kind(), FailureKind::InvalidState);

    let err = deadline_ms(Some(0)).unwrap_err();
    assert_eq!(err.kind(), FailureKind::OutOfRange);
}

#[test]
fn caller_message_surfaces_verbatim() {
    let err = check("", "name")
        .or_explain("a display name is required")
        .not()
        .is_empty()
        .unwrap_err();
    assert_eq!(err.message(), Some("a display name is required"));
    assert_eq!(
        err.to_string(),
        "argument `name` violates its contract: a display name is required"
    );
}

#[test]
fn failure_reports_serialize_for_export() {
    let err = check(3, "i").is_less_than(&0).unwrap_err();
    let json = serde_json::to_value(err.report()).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "kind": "out_of_range",
            "parameter": "i",
            "value": "3",
        })
    );
}
