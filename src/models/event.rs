//! Event model
//!
//! `Event` is the shape handed to the UI. `WireEvent` is what the events
//! backend returns and `EventRequest` is what it accepts on create/update.

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub event_id: Option<i64>,
    pub group_id: i64,
    pub event_title: String,
    pub event_description: String,
    pub event_location_street: String,
    pub event_location_city: String,
    pub event_location_province: String,
    pub event_location_country: String,
    pub event_location_postal_code: String,
    pub event_start_time: DateTime<Local>,
    pub event_end_time: DateTime<Local>,
    pub event_status: String,
    pub event_capacity: u32,
    pub event_attendee_count: u32,
    pub event_image_url: Option<String>,
}

/// Nested address as exchanged with the events backend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WireAddress {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address_id: Option<i64>,
    pub street: String,
    pub city: String,
    pub province: String,
    pub country: String,
    #[serde(default)]
    pub postal_code: String,
}

/// Event as returned by the events backend.
///
/// Timestamps arrive as `[year, month, day, hour, minute]`, sometimes with a
/// trailing seconds element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WireEvent {
    pub event_id: i64,
    pub group_id: i64,
    pub event_title: String,
    pub event_description: String,
    pub address: WireAddress,
    pub event_start_time: Vec<i32>,
    pub event_end_time: Vec<i32>,
    pub status: String,
    #[serde(default)]
    pub count: u32,
    pub capacity: u32,
    #[serde(default)]
    pub image_url: Option<String>,
}

/// Create/update payload sent to the events backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_id: Option<i64>,
    pub group_id: i64,
    pub event_title: String,
    pub event_description: String,
    pub location: WireAddress,
    #[serde(with = "local_wall_clock")]
    pub event_start_time: DateTime<Local>,
    #[serde(with = "local_wall_clock")]
    pub event_end_time: DateTime<Local>,
    pub status: String,
    pub capacity: u32,
    pub count: u32,
    pub image_url: Option<String>,
}

/// Write-side timestamps: local wall-clock time without an offset
/// (`2024-06-15T18:00:00`), the form the events backend parses.
pub mod local_wall_clock {
    use chrono::{DateTime, Local, NaiveDateTime, TimeZone};
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub const FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

    pub fn serialize<S: Serializer>(instant: &DateTime<Local>, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&instant.naive_local().format(FORMAT))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<DateTime<Local>, D::Error> {
        let text = String::deserialize(deserializer)?;
        let naive = NaiveDateTime::parse_from_str(&text, FORMAT).map_err(de::Error::custom)?;
        Local
            .from_local_datetime(&naive)
            .earliest()
            .ok_or_else(|| de::Error::custom(format!("nonexistent local time {}", text)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_wire_event_deserialization() {
        let json = r#"{
            "eventId": 7,
            "groupId": 3,
            "eventTitle": "Board games",
            "eventDescription": "Bring snacks",
            "address": {
                "addressId": 11,
                "street": "1 Main St",
                "city": "Calgary",
                "province": "AB",
                "country": "Canada",
                "postalCode": "T2N 1N4"
            },
            "eventStartTime": [2024, 6, 15, 14, 30],
            "eventEndTime": [2024, 6, 15, 17, 0, 5],
            "status": "Scheduled",
            "count": 4,
            "capacity": 20,
            "imageUrl": null
        }"#;

        let wire: WireEvent = serde_json::from_str(json).unwrap();
        assert_eq!(wire.event_id, 7);
        assert_eq!(wire.address.address_id, Some(11));
        assert_eq!(wire.address.postal_code, "T2N 1N4");
        assert_eq!(wire.event_end_time.len(), 6);
        assert!(wire.image_url.is_none());
    }

    #[test]
    fn test_event_request_omits_missing_id() {
        let request = EventRequest {
            event_id: None,
            group_id: 3,
            event_title: "Hike".to_string(),
            event_description: "Nose Hill".to_string(),
            location: WireAddress {
                address_id: None,
                street: "Nose Hill Dr".to_string(),
                city: "Calgary".to_string(),
                province: "AB".to_string(),
                country: "Canada".to_string(),
                postal_code: "T3A".to_string(),
            },
            event_start_time: Local::now(),
            event_end_time: Local::now(),
            status: "Scheduled".to_string(),
            capacity: 1,
            count: 1,
            image_url: None,
        };

        let value = serde_json::to_value(&request).unwrap();
        assert!(value.get("eventId").is_none());
        assert!(value["location"].get("addressId").is_none());
        assert_eq!(value["location"]["postalCode"], "T3A");
    }

    #[test]
    fn test_event_request_times_have_no_offset() {
        let start = Local.with_ymd_and_hms(2024, 6, 15, 18, 0, 0).unwrap();
        let request = EventRequest {
            event_id: Some(4),
            group_id: 3,
            event_title: "Hike".to_string(),
            event_description: "Nose Hill".to_string(),
            location: WireAddress {
                address_id: None,
                street: "Nose Hill Dr".to_string(),
                city: "Calgary".to_string(),
                province: "AB".to_string(),
                country: "Canada".to_string(),
                postal_code: "T3A".to_string(),
            },
            event_start_time: start,
            event_end_time: start + chrono::Duration::minutes(90),
            status: "Scheduled".to_string(),
            capacity: 1,
            count: 1,
            image_url: None,
        };

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["eventStartTime"], "2024-06-15T18:00:00");
        assert_eq!(value["eventEndTime"], "2024-06-15T19:30:00");

        let back: EventRequest = serde_json::from_value(value).unwrap();
        assert_eq!(back.event_start_time, start);
    }
}
