//! Location label table for booking pages.
//!
//! Maps the location type keys stored on event types to display labels.
//! Stands in for the frontend translation layer; the page loader ships the
//! whole table so the renderer can label any location an event carries.

use std::collections::BTreeMap;

/// Location type keys and their display labels.
const LOCATION_LABELS: &[(&str, &str)] = &[
    ("inPerson", "In-person meeting"),
    ("attendeeInPerson", "Attendee's place"),
    ("link", "Custom link"),
    ("phone", "Phone call"),
    ("userPhone", "Organizer's phone"),
    ("integrations:daily", "Cal Video"),
    ("integrations:zoom", "Zoom Video"),
    ("integrations:google:meet", "Google Meet"),
    ("integrations:office365_video", "MS Teams"),
    ("integrations:jitsi", "Jitsi Meet"),
    ("integrations:huddle01", "Huddle01 Video"),
    ("integrations:tandem", "Tandem Video"),
];

/// The full location-type → label map.
pub fn location_labels() -> BTreeMap<&'static str, &'static str> {
    LOCATION_LABELS.iter().copied().collect()
}
