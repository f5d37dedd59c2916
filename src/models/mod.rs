//! Data models module
//!
//! This module contains the domain and wire shapes exchanged with the backends

pub mod event;
pub mod group;
pub mod participant;
pub mod recommendation;

// Re-export commonly used models
pub use event::{Event, EventRequest, WireAddress, WireEvent};
pub use group::{Group, GroupEvent, GroupMember, GroupMemberRequest, GroupRequest, GroupRole};
pub use participant::{EventAttendee, Participant, ParticipantRequest, ParticipantStatus};
pub use recommendation::{
    RecommId, RecommendationPage, RecommendationRequest, RecommendationType, RecommendedEvent, Scenario,
};
