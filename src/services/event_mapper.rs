//! Event shape conversion
//!
//! Reading and writing are separate functions on purpose: reads decode the
//! backend's `[year, month, day, hour, minute]` timestamps, writes forward the
//! domain instants as-is and never produce that tuple.

use chrono::{DateTime, Duration, LocalResult, NaiveDate, TimeZone, Local};

use crate::models::event::{Event, EventRequest, WireAddress, WireEvent};
use crate::utils::errors::{ApiError, ApiResult};

/// Value always written to the legacy `capacity` and `count` fields.
// TODO: send `event.event_capacity` once the events backend stops relying on the fixed value.
pub const LEGACY_WIRE_CAPACITY: u32 = 1;

/// Domain event to create/update payload
pub fn to_wire(event: &Event) -> EventRequest {
    EventRequest {
        event_id: event.event_id,
        group_id: event.group_id,
        event_title: event.event_title.clone(),
        event_description: event.event_description.clone(),
        location: WireAddress {
            address_id: None,
            street: event.event_location_street.clone(),
            city: event.event_location_city.clone(),
            province: event.event_location_province.clone(),
            country: event.event_location_country.clone(),
            postal_code: event.event_location_postal_code.clone(),
        },
        event_start_time: event.event_start_time,
        event_end_time: event.event_end_time,
        status: event.event_status.clone(),
        capacity: LEGACY_WIRE_CAPACITY,
        count: LEGACY_WIRE_CAPACITY,
        image_url: event.event_image_url.clone(),
    }
}

/// Backend event to domain event
pub fn from_wire(wire: WireEvent) -> ApiResult<Event> {
    let event_start_time = decode_date_time(&wire.event_start_time)?;
    let event_end_time = decode_date_time(&wire.event_end_time)?;

    Ok(Event {
        event_id: Some(wire.event_id),
        group_id: wire.group_id,
        event_title: wire.event_title,
        event_description: wire.event_description,
        event_location_street: wire.address.street,
        event_location_city: wire.address.city,
        event_location_province: wire.address.province,
        event_location_country: wire.address.country,
        event_location_postal_code: wire.address.postal_code,
        event_start_time,
        event_end_time,
        event_status: wire.status,
        event_capacity: wire.capacity,
        event_attendee_count: wire.count,
        event_image_url: wire.image_url,
    })
}

/// Decode `[year, month (1-based), day, hour, minute, ..]` in the process's
/// local time zone. Elements past the minute are ignored.
pub fn decode_date_time(parts: &[i32]) -> ApiResult<DateTime<Local>> {
    let [year, month, day, hour, minute] = match parts {
        [year, month, day, hour, minute, ..] => [*year, *month, *day, *hour, *minute],
        _ => {
            return Err(ApiError::InvalidPayload(format!(
                "expected [year, month, day, hour, minute], got {:?}",
                parts
            )))
        }
    };

    let naive = u32::try_from(month)
        .ok()
        .zip(u32::try_from(day).ok())
        .and_then(|(month, day)| NaiveDate::from_ymd_opt(year, month, day))
        .zip(u32::try_from(hour).ok().zip(u32::try_from(minute).ok()))
        .and_then(|(date, (hour, minute))| date.and_hms_opt(hour, minute, 0))
        .ok_or_else(|| ApiError::InvalidPayload(format!("invalid date time {:?}", parts)))?;

    match Local.from_local_datetime(&naive) {
        LocalResult::Single(instant) => Ok(instant),
        LocalResult::Ambiguous(earliest, _) => Ok(earliest),
        // Wall-clock time skipped by a DST transition
        LocalResult::None => Local
            .from_local_datetime(&(naive + Duration::hours(1)))
            .earliest()
            .ok_or_else(|| ApiError::InvalidPayload(format!("nonexistent local time {:?}", parts))),
    }
}
