use crate::envelope::{Envelope, ErrorBody, ListPayload};

use serde_json::json;
use tz_core::Team;

fn team_json(uuid: &str, name: &str) -> serde_json::Value {
    json!({
        "uuid": uuid,
        "name": name,
        "lead_id": "1",
        "created_at": "2024-01-15T10:30:00.000000Z",
        "updated_at": "2024-01-15T10:30:00.000000Z"
    })
}

#[test]
fn test_flat_envelope_single_unwrap() {
    let envelope: Envelope<Team> = serde_json::from_value(json!({
        "data": team_json("u-1", "Platform"),
        "message": "ok"
    }))
    .unwrap();

    assert_eq!(envelope.data.name, "Platform");
    assert_eq!(envelope.message.as_deref(), Some("ok"));
    assert!(envelope.errors.is_none());
}

#[test]
fn test_paginated_list_double_unwrap() {
    let envelope: Envelope<ListPayload<Team>> = serde_json::from_value(json!({
        "data": {
            "data": [team_json("u-1", "Platform"), team_json("u-2", "Design")],
            "meta": {
                "current_page": 1,
                "last_page": 1,
                "per_page": 15,
                "total": 2
            }
        }
    }))
    .unwrap();

    let items = envelope.data.into_items();
    assert_eq!(items.len(), 2);
    assert_eq!(items[1].name, "Design");
}

#[test]
fn test_flat_list_single_unwrap() {
    let envelope: Envelope<ListPayload<Team>> = serde_json::from_value(json!({
        "data": [team_json("u-1", "Platform")]
    }))
    .unwrap();

    assert_eq!(envelope.data.into_items().len(), 1);
}

#[test]
fn test_empty_lists_both_shapes() {
    let paginated: Envelope<ListPayload<Team>> = serde_json::from_value(json!({
        "data": { "data": [] }
    }))
    .unwrap();
    assert!(paginated.data.into_items().is_empty());

    let flat: Envelope<ListPayload<Team>> = serde_json::from_value(json!({
        "data": []
    }))
    .unwrap();
    assert!(flat.data.into_items().is_empty());
}

#[test]
fn test_error_body_tolerates_anything() {
    let body: ErrorBody = serde_json::from_value(json!({})).unwrap();
    assert!(body.message.is_none());
    assert!(body.errors.is_none());

    let body: ErrorBody = serde_json::from_value(json!({
        "message": "Validation failed",
        "errors": { "email": ["Invalid email address"] }
    }))
    .unwrap();
    assert_eq!(body.message.as_deref(), Some("Validation failed"));
    assert_eq!(body.errors.unwrap()["email"], vec!["Invalid email address"]);
}
