//! Participant (RSVP) model

use serde::{Deserialize, Serialize};

/// RSVP state of a user for an event.
///
/// The backend only stores attending participants; a missing record reads
/// as `NotAttending`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ParticipantStatus {
    Attending,
    NotAttending,
}

impl ParticipantStatus {
    /// Map a backend status string; anything but `Attending` is not attending
    pub fn from_wire(status: &str) -> Self {
        if status.trim() == "Attending" {
            ParticipantStatus::Attending
        } else {
            ParticipantStatus::NotAttending
        }
    }

    pub fn is_attending(&self) -> bool {
        matches!(self, ParticipantStatus::Attending)
    }
}

impl std::fmt::Display for ParticipantStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParticipantStatus::Attending => write!(f, "Attending"),
            ParticipantStatus::NotAttending => write!(f, "NotAttending"),
        }
    }
}

/// Body of the RSVP create/update calls
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParticipantRequest {
    pub user_id: String,
    pub event_id: i64,
    pub participant_status: ParticipantStatus,
}

/// Participant record echoed back by the events backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Participant {
    #[serde(rename = "participantID", alias = "participantId", default)]
    pub participant_id: Option<i64>,
    #[serde(default)]
    pub user_id: String,
    #[serde(default)]
    pub participant_status: Option<ParticipantStatus>,
}

/// One entry of an event's attendee listing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventAttendee {
    pub user_id: String,
    pub status: ParticipantStatus,
}
