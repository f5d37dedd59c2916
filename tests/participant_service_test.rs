//! Participant (RSVP) service integration tests

mod helpers;

use serde_json::json;

use helpers::*;
use yallanow_client::models::{EventAttendee, ParticipantStatus};
use yallanow_client::ApiError;

#[tokio::test]
async fn test_add_participant_sends_rsvp_body() {
    let ctx = TestContext::new().await;
    ctx.backend
        .mock_authenticated(
            "POST",
            "/events/12/participants",
            MockResponseConfig::json(
                201,
                json!({"participantID": 3, "userId": TEST_USER_ID, "participantStatus": "Attending"}),
            ),
        )
        .await;

    let participant = ctx
        .services
        .participant_service
        .add_event_participant(TEST_USER_ID, 12, ParticipantStatus::Attending)
        .await
        .unwrap();
    assert_eq!(participant.participant_id, Some(3));
    assert_eq!(participant.participant_status, Some(ParticipantStatus::Attending));

    let body = ctx.backend.last_body("/events/12/participants").await.unwrap();
    assert_eq!(
        body,
        json!({"userId": TEST_USER_ID, "eventId": 12, "participantStatus": "Attending"})
    );
}

#[tokio::test]
async fn test_add_participant_twice_is_conflict() {
    let ctx = TestContext::new().await;
    ctx.backend
        .mock_authenticated(
            "POST",
            "/events/12/participants",
            MockResponseConfig::text(409, "User is already attending"),
        )
        .await;

    let result = ctx
        .services
        .participant_service
        .add_event_participant(TEST_USER_ID, 12, ParticipantStatus::Attending)
        .await;
    assert_eq!(result.unwrap_err(), ApiError::Conflict("Conflict with current state.".to_string()));
}

#[tokio::test]
async fn test_participant_status_plain_text() {
    let ctx = TestContext::new().await;
    ctx.backend
        .mock_authenticated("GET", "/events/12/participants/status", MockResponseConfig::text(200, "Attending"))
        .await;
    ctx.backend
        .mock_authenticated("GET", "/events/13/participants/status", MockResponseConfig::text(200, "NotAttending"))
        .await;

    let service = &ctx.services.participant_service;
    assert_eq!(
        service.get_event_participant_status(TEST_USER_ID, 12).await,
        Ok(ParticipantStatus::Attending)
    );
    assert_eq!(
        service.get_event_participant_status(TEST_USER_ID, 13).await,
        Ok(ParticipantStatus::NotAttending)
    );
}

#[tokio::test]
async fn test_event_participants_listing_keeps_order() {
    let ctx = TestContext::new().await;
    ctx.backend
        .mock_authenticated(
            "GET",
            "/events/events/12/participants",
            MockResponseConfig::json(200, json!([{"uid-b": "Attending"}, {"uid-a": "Attending"}])),
        )
        .await;

    let attendees = ctx.services.participant_service.get_event_participants(12).await.unwrap();
    assert_eq!(
        attendees,
        vec![
            EventAttendee {
                user_id: "uid-b".to_string(),
                status: ParticipantStatus::Attending
            },
            EventAttendee {
                user_id: "uid-a".to_string(),
                status: ParticipantStatus::Attending
            },
        ]
    );
}

#[tokio::test]
async fn test_update_and_delete_participant() {
    let ctx = TestContext::new().await;
    ctx.backend
        .mock_authenticated(
            "PUT",
            "/events/12/participants",
            MockResponseConfig::json(200, json!({"userId": TEST_USER_ID, "participantStatus": "NotAttending"})),
        )
        .await;
    ctx.backend
        .mock_authenticated("DELETE", "/events/12/participants", MockResponseConfig::status(204))
        .await;

    let service = &ctx.services.participant_service;
    let updated = service
        .update_event_participant(TEST_USER_ID, 12, ParticipantStatus::NotAttending)
        .await
        .unwrap();
    assert_eq!(updated.participant_status, Some(ParticipantStatus::NotAttending));

    assert_eq!(service.delete_event_participant(TEST_USER_ID, 12).await, Ok(()));
}
