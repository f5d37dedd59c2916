//! Event details and RSVP flow
//!
//! The view → convert half of the recommendation pipeline: opening an event
//! reported as a detail view and RSVPing reported as a purchase, both keyed
//! by the `recommId` the event was recommended under. Events reached without
//! a recommendation report nothing.

use std::sync::Arc;

use tracing::info;

use crate::models::event::Event;
use crate::models::participant::ParticipantStatus;
use crate::models::recommendation::RecommId;
use crate::services::event::EventService;
use crate::services::interactions::InteractionReporter;
use crate::services::participant::ParticipantService;
use crate::utils::errors::ApiResult;

#[derive(Clone)]
pub struct RsvpService {
    events: EventService,
    participants: ParticipantService,
    reporter: Arc<dyn InteractionReporter>,
}

impl RsvpService {
    pub fn new(events: EventService, participants: ParticipantService, reporter: Arc<dyn InteractionReporter>) -> Self {
        Self {
            events,
            participants,
            reporter,
        }
    }

    /// Load an event with the user's RSVP state
    pub async fn open_event(
        &self,
        user_id: &str,
        event_id: i64,
        recomm_id: Option<&RecommId>,
    ) -> ApiResult<(Event, ParticipantStatus)> {
        let event = self.events.get_event(event_id).await?;
        let status = self.participants.get_event_participant_status(user_id, event_id).await?;

        if let Some(recomm_id) = recomm_id {
            self.reporter
                .report_detail_view(user_id, &event_id.to_string(), recomm_id);
        }

        Ok((event, status))
    }

    /// Flip the user's RSVP and return the new state
    pub async fn toggle_rsvp(
        &self,
        user_id: &str,
        event_id: i64,
        current: ParticipantStatus,
        recomm_id: Option<&RecommId>,
    ) -> ApiResult<ParticipantStatus> {
        if current.is_attending() {
            self.participants.delete_event_participant(user_id, event_id).await?;
            info!(user_id = user_id, event_id = event_id, "Un-RSVP'd from event");
            return Ok(ParticipantStatus::NotAttending);
        }

        self.participants
            .add_event_participant(user_id, event_id, ParticipantStatus::Attending)
            .await?;
        info!(user_id = user_id, event_id = event_id, "RSVP'd to event");

        if let Some(recomm_id) = recomm_id {
            self.reporter
                .report_purchase(user_id, &event_id.to_string(), recomm_id);
        }

        Ok(ParticipantStatus::Attending)
    }
}
