//! Serialized field names of the outward-facing result records are part of
//! the contract — callers and downstream test suites key on them.

mod common;

use assignment_engine::conflict::{ConflictEngine, ConflictKind};
use assignment_engine::records::AssignmentStatus;
use assignment_engine::validate::AssignmentRequest;

use common::{assignment, game, referee, MockStore};

#[test]
fn conflict_kinds_serialize_as_snake_case_tags() {
    assert_eq!(
        serde_json::to_value(ConflictKind::RefereeDoubleBooking).unwrap(),
        "referee_double_booking"
    );
    assert_eq!(
        serde_json::to_value(ConflictKind::TravelTimeConflict).unwrap(),
        "travel_time_conflict"
    );
    assert_eq!(
        serde_json::to_value(ConflictKind::VenueConflict).unwrap(),
        "venue_conflict"
    );
}

#[test]
fn validation_result_field_names_are_stable() {
    let store = MockStore {
        games: vec![game("g-1", "18:00", "20:00", "Main Arena")],
        referees: vec![referee("ref-1")],
        positions: vec!["pos-1".to_string()],
        ..Default::default()
    };
    let engine = ConflictEngine::new(store);

    let result = engine.validate_assignment(&AssignmentRequest::new("g-1", "ref-1", "pos-1"));
    let value = serde_json::to_value(&result).unwrap();

    for key in ["is_valid", "can_assign", "errors", "warnings", "conflicts"] {
        assert!(value.get(key).is_some(), "missing key {key}");
    }
}

#[test]
fn game_status_result_field_names_are_stable() {
    let g = game("g-1", "18:00", "20:00", "Main Arena");
    let store = MockStore {
        assignments: vec![assignment("ref-1", &g, "pos-1", AssignmentStatus::Accepted)],
        games: vec![g],
        referees: vec![referee("ref-1")],
        ..Default::default()
    };
    let engine = ConflictEngine::new(store);

    let status = engine.calculate_game_status("g-1").unwrap();
    let value = serde_json::to_value(&status).unwrap();

    for key in [
        "status",
        "status_reason",
        "health_score",
        "assignment_summary",
        "issues",
        "warnings",
        "last_updated",
    ] {
        assert!(value.get(key).is_some(), "missing key {key}");
    }
    assert_eq!(value["status"], "partially_assigned");
    assert_eq!(value["assignment_summary"]["required"], 2);
}

#[test]
fn bulk_result_summary_field_names_are_stable() {
    let store = MockStore {
        games: vec![game("g-1", "18:00", "20:00", "Main Arena")],
        referees: vec![referee("ref-1")],
        positions: vec!["pos-1".to_string()],
        ..Default::default()
    };
    let engine = ConflictEngine::new(store);

    let result = engine
        .validate_bulk(&[AssignmentRequest::new("g-1", "ref-1", "pos-1")])
        .unwrap();
    let value = serde_json::to_value(&result).unwrap();

    for key in ["valid", "invalid", "warnings", "summary"] {
        assert!(value.get(key).is_some(), "missing key {key}");
    }
    for key in ["total", "valid_count", "invalid_count", "can_assign_count"] {
        assert!(value["summary"].get(key).is_some(), "missing key {key}");
    }
}

#[test]
fn assignment_request_deserializes_with_missing_fields() {
    let request: AssignmentRequest = serde_json::from_str(r#"{"game_id":"g-1"}"#).unwrap();
    assert_eq!(request.game_id.as_deref(), Some("g-1"));
    assert!(request.referee_id.is_none());
    assert!(request.position_id.is_none());
}
