use super::*;
use serde_json::json;

fn lifecycle() -> RequestLifecycle<String> {
    RequestLifecycle::new()
}

fn raw(value: serde_json::Value) -> ApiResponse {
    ApiResponse::RawJson(value)
}

#[test]
fn starts_idle() {
    let lc = lifecycle();
    assert!(matches!(lc.state(), RequestState::Idle));
    assert!(!lc.is_in_flight());
}

#[test]
fn begin_enters_in_flight_before_any_completion() {
    let mut lc = lifecycle();
    let seq = lc.begin();
    assert!(lc.is_in_flight());
    assert!(matches!(lc.state(), RequestState::InFlight { seq: s } if *s == seq));
}

#[test]
fn completion_with_matching_seq_is_applied() {
    let mut lc = lifecycle();
    let seq = lc.begin();
    assert!(lc.complete(seq, Ok(raw(json!({"keywords": []})))));
    match lc.state() {
        RequestState::Succeeded { response, .. } => {
            assert_eq!(response, &raw(json!({"keywords": []})));
        }
        other => panic!("expected Succeeded, got {other:?}"),
    }
}

#[test]
fn failure_is_a_distinct_state() {
    let mut lc = lifecycle();
    let seq = lc.begin();
    assert!(lc.complete(seq, Err("connection refused".to_string())));
    assert!(matches!(
        lc.state(),
        RequestState::Failed { error, .. } if error == "connection refused"
    ));
}

#[test]
fn resubmit_discards_previous_result_immediately() {
    let mut lc = lifecycle();
    let first = lc.begin();
    lc.complete(first, Ok(raw(json!(1))));
    lc.begin();
    // Old success is gone the moment the new submission starts.
    assert!(lc.is_in_flight());
}

#[test]
fn stale_completion_never_clobbers_a_newer_submission() {
    let mut lc = lifecycle();
    let first = lc.begin();
    let second = lc.begin();

    // Later submission resolves first, then the superseded one arrives late.
    assert!(lc.complete(second, Ok(raw(json!("new")))));
    assert!(!lc.complete(first, Ok(raw(json!("old")))));

    match lc.state() {
        RequestState::Succeeded { seq, response } => {
            assert_eq!(*seq, second);
            assert_eq!(response, &raw(json!("new")));
        }
        other => panic!("expected Succeeded, got {other:?}"),
    }
}

#[test]
fn stale_completion_is_dropped_while_newer_request_is_outstanding() {
    let mut lc = lifecycle();
    let first = lc.begin();
    lc.begin();
    assert!(!lc.complete(first, Err("timed out".to_string())));
    // The newer submission is still awaiting its own completion.
    assert!(lc.is_in_flight());
}

#[test]
fn sequence_numbers_increase_monotonically() {
    let mut lc = lifecycle();
    let a = lc.begin();
    let b = lc.begin();
    let c = lc.begin();
    assert!(a < b && b < c);
}

#[test]
fn dismiss_clears_result_but_not_in_flight() {
    let mut lc = lifecycle();
    let seq = lc.begin();
    lc.complete(seq, Err("boom".to_string()));
    lc.dismiss();
    assert!(matches!(lc.state(), RequestState::Idle));

    lc.begin();
    lc.dismiss();
    assert!(lc.is_in_flight());
}
