#![allow(clippy::unwrap_used, clippy::expect_used)]

use structeq_core::logging_facility::test_capture::init_test_capture;
use structeq_core::schema::{EVENT_END, EVENT_END_ERROR, EVENT_START};
use structeq_core::{log_op_end, log_op_error, log_op_start};

#[test]
fn test_log_op_start_macro() {
    let capture = init_test_capture();
    let op_name = "test_log_op_start_unique_1";

    log_op_start!(op_name);

    let events = capture.events();
    let start_events: Vec<_> = events
        .iter()
        .filter(|e| e.op.as_deref() == Some(op_name) && e.event.as_deref() == Some(EVENT_START))
        .collect();

    assert!(
        !start_events.is_empty(),
        "Should have captured at least one start event"
    );
}

#[test]
fn test_log_op_end_macro() {
    let capture = init_test_capture();
    let op_name = "test_log_op_end_unique_2";

    log_op_end!(op_name, duration_ms = 42);

    let events = capture.events();
    let end_events: Vec<_> = events
        .iter()
        .filter(|e| e.op.as_deref() == Some(op_name) && e.event.as_deref() == Some(EVENT_END))
        .collect();

    assert_eq!(end_events.len(), 1, "Should have exactly one end event");

    let end_event = end_events[0];
    assert_eq!(end_event.fields.get("duration_ms"), Some(&"42".to_string()));
}

#[test]
fn test_log_op_error_includes_message() {
    let capture = init_test_capture();
    let op_name = "test_log_op_error_unique_3";

    let err = "actual document is not valid YAML";
    log_op_error!(op_name, err, duration_ms = 10);

    let events = capture.events();
    let error_events: Vec<_> = events
        .iter()
        .filter(|e| e.op.as_deref() == Some(op_name) && e.event.as_deref() == Some(EVENT_END_ERROR))
        .collect();

    assert_eq!(error_events.len(), 1, "Should have exactly one error event");

    let error_event = error_events[0];
    assert_eq!(
        error_event.fields.get("err"),
        Some(&"actual document is not valid YAML".to_string())
    );
}

#[test]
fn test_boundary_ownership_single_start_end() {
    let capture = init_test_capture();
    let op_name = "test_boundary_ownership_unique_4";

    log_op_start!(op_name, matched = true);
    log_op_end!(op_name, duration_ms = 42);

    let events = capture.events();
    let op_events: Vec<_> = events
        .iter()
        .filter(|e| e.op.as_deref() == Some(op_name))
        .collect();

    assert_eq!(
        op_events.len(),
        2,
        "One start and one end event, nothing else"
    );
}

#[test]
fn test_capture_count_events() {
    let capture = init_test_capture();
    let op_name = "test_capture_count_unique_5";

    log_op_start!(op_name);
    log_op_end!(op_name, duration_ms = 1);

    let count = capture.count_events(|e| e.op.as_deref() == Some(op_name));
    assert_eq!(count, 2);
}
