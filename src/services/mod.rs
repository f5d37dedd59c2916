//! Services module
//!
//! This module contains the backend façades and the plumbing they share

pub mod auth;
pub mod client;
pub mod event;
pub mod event_mapper;
pub mod feed;
pub mod group;
pub mod group_member;
pub mod interactions;
pub mod participant;
pub mod response;
pub mod rsvp;
pub mod transport;

// Re-export commonly used services
pub use auth::{SessionTokenProvider, StaticTokenProvider, TokenProvider};
pub use event::EventService;
pub use feed::FeedService;
pub use group::GroupService;
pub use group_member::GroupMemberService;
pub use interactions::{HttpInteractionReporter, Interaction, InteractionReporter};
pub use participant::ParticipantService;
pub use response::classify;
pub use rsvp::RsvpService;
pub use transport::{HttpMethod, HttpRequest, HttpResponse, HttpTransport, ReqwestTransport, TransportOutcome};

use std::sync::Arc;

use crate::config::settings::Settings;
use crate::utils::errors::Result;

/// Service factory for creating and managing all services
#[derive(Clone)]
pub struct ServiceFactory {
    pub event_service: EventService,
    pub group_service: GroupService,
    pub group_member_service: GroupMemberService,
    pub participant_service: ParticipantService,
    pub feed_service: FeedService,
    pub rsvp_service: RsvpService,
    pub interaction_reporter: Arc<dyn InteractionReporter>,
}

impl ServiceFactory {
    /// Create a new ServiceFactory over a reqwest transport built from settings
    pub fn new(settings: &Settings, tokens: Arc<dyn TokenProvider>) -> Result<Self> {
        let transport: Arc<dyn HttpTransport> = Arc::new(ReqwestTransport::new(&settings.api)?);
        Ok(Self::with_transport(settings, tokens, transport))
    }

    /// Create a new ServiceFactory over the given transport
    pub fn with_transport(settings: &Settings, tokens: Arc<dyn TokenProvider>, transport: Arc<dyn HttpTransport>) -> Self {
        let api = &settings.api;
        let reporter: Arc<dyn InteractionReporter> = Arc::new(HttpInteractionReporter::new(
            api.interactions_base_url.clone(),
            transport.clone(),
        ));
        Self::with_reporter(settings, tokens, transport, reporter)
    }

    /// Create a new ServiceFactory with an explicit interaction reporter
    pub fn with_reporter(
        settings: &Settings,
        tokens: Arc<dyn TokenProvider>,
        transport: Arc<dyn HttpTransport>,
        reporter: Arc<dyn InteractionReporter>,
    ) -> Self {
        let api = &settings.api;

        let event_service = EventService::new(api.events_base_url.clone(), tokens.clone(), transport.clone());
        let participant_service =
            ParticipantService::new(api.events_base_url.clone(), tokens.clone(), transport.clone());
        let group_service = GroupService::new(api.groups_base_url.clone(), tokens.clone(), transport.clone());
        let group_member_service = GroupMemberService::new(api.groups_base_url.clone(), tokens, transport.clone());
        let feed_service = FeedService::new(api.feed_base_url.clone(), transport);
        let rsvp_service = RsvpService::new(event_service.clone(), participant_service.clone(), reporter.clone());

        Self {
            event_service,
            group_service,
            group_member_service,
            participant_service,
            feed_service,
            rsvp_service,
            interaction_reporter: reporter,
        }
    }
}
