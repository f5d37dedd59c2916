//! Test data helpers for creating test objects
//!
//! This module provides wire payloads and domain objects shared by the
//! integration tests.

use chrono::{Local, TimeZone};
use serde_json::{json, Value};

use yallanow_client::models::Event;

pub const TEST_TOKEN: &str = "firebase-id-token-abc";
pub const TEST_USER_ID: &str = "uid-123";

/// Event as the events backend returns it
pub fn wire_event_json(event_id: i64, title: &str) -> Value {
    json!({
        "eventId": event_id,
        "groupId": 3,
        "eventTitle": title,
        "eventDescription": format!("{} description", title),
        "address": {
            "addressId": event_id * 10,
            "street": "2500 University Dr NW",
            "city": "Calgary",
            "province": "AB",
            "country": "Canada",
            "postalCode": "T2N 1N4"
        },
        "eventStartTime": [2024, 6, 15, 14, 30],
        "eventEndTime": [2024, 6, 15, 17, 0],
        "status": "Scheduled",
        "count": 12,
        "capacity": 40,
        "imageUrl": "https://img.example.com/e.png"
    })
}

/// Domain event as the UI would build it
pub fn sample_event(event_id: Option<i64>) -> Event {
    Event {
        event_id,
        group_id: 3,
        event_title: "Board game night".to_string(),
        event_description: "Bring your favourite game".to_string(),
        event_location_street: "2500 University Dr NW".to_string(),
        event_location_city: "Calgary".to_string(),
        event_location_province: "AB".to_string(),
        event_location_country: "Canada".to_string(),
        event_location_postal_code: "T2N 1N4".to_string(),
        event_start_time: Local.with_ymd_and_hms(2024, 6, 15, 18, 0, 0).unwrap(),
        event_end_time: Local.with_ymd_and_hms(2024, 6, 15, 22, 0, 0).unwrap(),
        event_status: "Scheduled".to_string(),
        event_capacity: 25,
        event_attendee_count: 7,
        event_image_url: Some("https://img.example.com/board.png".to_string()),
    }
}

/// Recommendation envelope with items in the given order
pub fn recommendations_json(recomm_id: &str, ids: &[&str]) -> Value {
    let items: Vec<Value> = ids
        .iter()
        .enumerate()
        .map(|(i, id)| {
            json!({
                "id": id,
                "properties": {
                    "eventTitle": format!("Event {}", id),
                    "groupId": "3",
                    "eventStartTime": 1700000000 + (i as i64) * 3600,
                    "eventEndTime": 1700007200 + (i as i64) * 3600,
                    "eventStatus": "scheduled"
                }
            })
        })
        .collect();

    json!({ "recommId": recomm_id, "recommendations": items })
}
