//! Membership registry endpoint tests (join / leave / check / joined list).

mod common;

use axum::http::StatusCode;
use serde_json::json;

use common::{create_event, join, request, test_app};

#[tokio::test]
async fn join_then_duplicate_join_is_rejected() {
    let app = test_app();
    let event_id = create_event(&app, "Cleanup Day", "host@example.org").await;

    let payload = json!({ "eventId": event_id, "userEmail": "user@example.org" });

    let (status, body) = request(&app, "POST", "/events/join", Some(payload.clone())).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["success"], json!(true));
    assert_eq!(body["data"]["eventId"], json!(event_id));
    assert!(body["data"]["joinedAt"].is_string());

    let (status, body) = request(&app, "POST", "/events/join", Some(payload)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], json!("Already joined."));

    // Exactly one membership survives
    let (_, joined) = request(&app, "GET", "/events/joined/user@example.org", None).await;
    assert_eq!(joined["events"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn join_with_missing_data_is_rejected() {
    let app = test_app();

    for payload in [
        json!({ "userEmail": "user@example.org" }),
        json!({ "eventId": "evt-1" }),
        json!({ "eventId": "", "userEmail": "user@example.org" }),
        json!({}),
    ] {
        let (status, body) = request(&app, "POST", "/events/join", Some(payload)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], json!("Missing data."));
    }
}

#[tokio::test]
async fn join_then_leave_then_check_is_false() {
    let app = test_app();
    let event_id = create_event(&app, "Blood Drive", "host@example.org").await;
    join(&app, &event_id, "user@example.org").await;

    let check_uri = format!("/events/join/check?eventId={event_id}&userEmail=user@example.org");
    let (status, body) = request(&app, "GET", &check_uri, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["joined"], json!(true));

    let (status, body) = request(
        &app,
        "POST",
        "/events/leave",
        Some(json!({ "eventId": event_id, "userEmail": "user@example.org" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], json!("Left event successfully!"));

    let (_, body) = request(&app, "GET", &check_uri, None).await;
    assert_eq!(body["joined"], json!(false));
}

#[tokio::test]
async fn leave_without_join_is_not_found() {
    let app = test_app();

    let (status, body) = request(
        &app,
        "POST",
        "/events/leave",
        Some(json!({ "eventId": "evt-1", "userEmail": "stranger@example.org" })),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], json!("Join record not found."));
}

#[tokio::test]
async fn check_with_missing_query_params_is_rejected() {
    let app = test_app();

    let (status, body) = request(&app, "GET", "/events/join/check?eventId=evt-1", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], json!("Missing data."));
}

#[tokio::test]
async fn joined_list_resolves_events_and_skips_bad_references() {
    let app = test_app();
    let e1 = create_event(&app, "one", "host@example.org").await;
    let e2 = create_event(&app, "two", "host@example.org").await;

    join(&app, &e1, "user@example.org").await;
    join(&app, &e2, "user@example.org").await;
    // Membership keys are opaque strings: a legacy non-identifier joins fine
    // but is skipped on resolution, as is an orphaned well-formed id.
    join(&app, "legacy-reference", "user@example.org").await;
    join(&app, &uuid::Uuid::new_v4().to_string(), "user@example.org").await;

    let (status, body) = request(&app, "GET", "/events/joined/user@example.org", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], json!(true));

    let mut titles: Vec<&str> = body["events"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["title"].as_str().unwrap())
        .collect();
    titles.sort();
    assert_eq!(titles, vec!["one", "two"]);
}

#[tokio::test]
async fn joined_list_is_empty_for_unknown_user() {
    let app = test_app();

    let (status, body) = request(&app, "GET", "/events/joined/nobody@example.org", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["events"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn membership_survives_event_deletion() {
    // Deleting an event does not cascade; the orphaned membership still
    // counts as joined but drops out of the resolved list.
    let app = test_app();
    let event_id = create_event(&app, "Doomed", "host@example.org").await;
    join(&app, &event_id, "user@example.org").await;

    let (status, _) = request(&app, "DELETE", &format!("/events/{event_id}"), None).await;
    assert_eq!(status, StatusCode::OK);

    let check_uri = format!("/events/join/check?eventId={event_id}&userEmail=user@example.org");
    let (_, body) = request(&app, "GET", &check_uri, None).await;
    assert_eq!(body["joined"], json!(true));

    let (_, body) = request(&app, "GET", "/events/joined/user@example.org", None).await;
    assert_eq!(body["events"].as_array().unwrap().len(), 0);
}
