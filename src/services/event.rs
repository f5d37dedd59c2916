//! Event service
//!
//! Events backend façade. Every result is converted to the domain shape
//! through [`event_mapper`](crate::services::event_mapper).

use std::sync::Arc;

use tracing::{debug, info};

use crate::models::event::{Event, WireEvent};
use crate::services::auth::TokenProvider;
use crate::services::client::{to_body, ResourceClient};
use crate::services::event_mapper::{from_wire, to_wire};
use crate::services::response::decode;
use crate::services::transport::{HttpMethod, HttpTransport};
use crate::utils::errors::ApiResult;

#[derive(Clone)]
pub struct EventService {
    client: ResourceClient,
}

impl EventService {
    pub fn new(
        base_url: impl Into<String>,
        tokens: Arc<dyn TokenProvider>,
        transport: Arc<dyn HttpTransport>,
    ) -> Self {
        Self {
            client: ResourceClient::new("events", base_url, tokens, transport),
        }
    }

    pub async fn get_event(&self, event_id: i64) -> ApiResult<Event> {
        debug!(event_id = event_id, "Fetching event");
        let url = self.client.url(&[&event_id.to_string()]);
        let payload = self.client.send("get_event", HttpMethod::Get, url, None).await?;
        self.map_event("get_event", payload)
    }

    pub async fn create_event(&self, event: &Event) -> ApiResult<Event> {
        info!(group_id = event.group_id, title = %event.event_title, "Creating event");
        let body = to_body(&to_wire(event))?;
        let payload = self
            .client
            .send("create_event", HttpMethod::Post, self.client.url(&[]), Some(body))
            .await?;
        self.map_event("create_event", payload)
    }

    pub async fn update_event(&self, event: &Event) -> ApiResult<Event> {
        info!(event_id = ?event.event_id, title = %event.event_title, "Updating event");
        let body = to_body(&to_wire(event))?;
        let payload = self
            .client
            .send("update_event", HttpMethod::Put, self.client.url(&[]), Some(body))
            .await?;
        self.map_event("update_event", payload)
    }

    pub async fn delete_event(&self, event_id: i64) -> ApiResult<()> {
        info!(event_id = event_id, "Deleting event");
        let url = self.client.url(&[&event_id.to_string()]);
        self.client.send("delete_event", HttpMethod::Delete, url, None).await?;
        Ok(())
    }

    pub async fn get_events_for_group(&self, group_id: i64) -> ApiResult<Vec<Event>> {
        debug!(group_id = group_id, "Fetching events for group");
        let url = self.client.url(&["group", &group_id.to_string()]);
        let payload = self
            .client
            .send("get_events_for_group", HttpMethod::Get, url, None)
            .await?;
        self.map_events("get_events_for_group", payload)
    }

    /// Events the user has RSVP'd to
    pub async fn get_events_for_participant(&self, user_id: &str) -> ApiResult<Vec<Event>> {
        debug!(user_id = user_id, "Fetching events for participant");
        let url = self.client.url(&["participants", user_id]);
        let payload = self
            .client
            .send("get_events_for_participant", HttpMethod::Get, url, None)
            .await?;
        self.map_events("get_events_for_participant", payload)
    }

    fn map_event(&self, operation: &str, payload: serde_json::Value) -> ApiResult<Event> {
        decode::<WireEvent>(payload)
            .and_then(from_wire)
            .inspect_err(|e| self.client.log_failure(operation, e))
    }

    /// Maps in backend order; the first bad element fails the whole list
    fn map_events(&self, operation: &str, payload: serde_json::Value) -> ApiResult<Vec<Event>> {
        decode::<Vec<WireEvent>>(payload)
            .and_then(|events| events.into_iter().map(from_wire).collect())
            .inspect_err(|e| self.client.log_failure(operation, e))
    }
}
