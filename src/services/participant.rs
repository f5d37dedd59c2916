//! Participant (RSVP) service
//!
//! RSVP endpoints live under the events backend. The acting user is derived
//! from the token server-side; `user_id` is only echoed in request bodies.

use std::sync::Arc;

use serde_json::{Map, Value};
use tracing::{debug, info};

use crate::models::participant::{EventAttendee, Participant, ParticipantRequest, ParticipantStatus};
use crate::services::auth::TokenProvider;
use crate::services::client::{to_body, ResourceClient};
use crate::services::response::decode;
use crate::services::transport::{HttpMethod, HttpTransport};
use crate::utils::errors::{ApiError, ApiResult};

#[derive(Clone)]
pub struct ParticipantService {
    client: ResourceClient,
}

impl ParticipantService {
    pub fn new(
        base_url: impl Into<String>,
        tokens: Arc<dyn TokenProvider>,
        transport: Arc<dyn HttpTransport>,
    ) -> Self {
        Self {
            client: ResourceClient::new("participants", base_url, tokens, transport),
        }
    }

    /// RSVP the user to an event
    pub async fn add_event_participant(
        &self,
        user_id: &str,
        event_id: i64,
        status: ParticipantStatus,
    ) -> ApiResult<Participant> {
        info!(user_id = user_id, event_id = event_id, status = %status, "Adding event participant");
        let body = participant_body(user_id, event_id, status)?;
        let url = self.client.url(&[&event_id.to_string(), "participants"]);
        let payload = self
            .client
            .send("add_event_participant", HttpMethod::Post, url, Some(body))
            .await?;
        decode(payload)
    }

    /// Attendees of an event in backend order
    pub async fn get_event_participants(&self, event_id: i64) -> ApiResult<Vec<EventAttendee>> {
        debug!(event_id = event_id, "Fetching event participants");
        let url = self.client.url(&["events", &event_id.to_string(), "participants"]);
        let payload = self
            .client
            .send("get_event_participants", HttpMethod::Get, url, None)
            .await?;

        // Each entry is a single-key object: {"<userId>": "<status>"}
        let entries: Vec<Map<String, Value>> = decode(payload)?;
        entries
            .into_iter()
            .flat_map(|entry| entry.into_iter())
            .map(|(user_id, status)| match status.as_str() {
                Some(status) => Ok(EventAttendee {
                    user_id,
                    status: ParticipantStatus::from_wire(status),
                }),
                None => Err(ApiError::InvalidPayload(format!(
                    "participant status for {} is not a string",
                    user_id
                ))),
            })
            .collect()
    }

    /// RSVP state of the current user; a missing record reads as not attending
    pub async fn get_event_participant_status(&self, user_id: &str, event_id: i64) -> ApiResult<ParticipantStatus> {
        debug!(user_id = user_id, event_id = event_id, "Fetching participant status");
        let url = self.client.url(&[&event_id.to_string(), "participants", "status"]);
        let payload = self
            .client
            .send("get_event_participant_status", HttpMethod::Get, url, None)
            .await?;

        Ok(payload
            .as_str()
            .map(ParticipantStatus::from_wire)
            .unwrap_or(ParticipantStatus::NotAttending))
    }

    pub async fn update_event_participant(
        &self,
        user_id: &str,
        event_id: i64,
        status: ParticipantStatus,
    ) -> ApiResult<Participant> {
        info!(user_id = user_id, event_id = event_id, status = %status, "Updating event participant");
        let body = participant_body(user_id, event_id, status)?;
        let url = self.client.url(&[&event_id.to_string(), "participants"]);
        let payload = self
            .client
            .send("update_event_participant", HttpMethod::Put, url, Some(body))
            .await?;
        decode(payload)
    }

    /// Un-RSVP the current user
    pub async fn delete_event_participant(&self, user_id: &str, event_id: i64) -> ApiResult<()> {
        info!(user_id = user_id, event_id = event_id, "Deleting event participant");
        let url = self.client.url(&[&event_id.to_string(), "participants"]);
        self.client
            .send("delete_event_participant", HttpMethod::Delete, url, None)
            .await?;
        Ok(())
    }
}

fn participant_body(user_id: &str, event_id: i64, status: ParticipantStatus) -> ApiResult<Value> {
    to_body(&ParticipantRequest {
        user_id: user_id.to_string(),
        event_id,
        participant_status: status,
    })
}
