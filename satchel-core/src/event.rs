//! The event record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::participant::Participant;

/// A scheduled occurrence on a calendar.
///
/// `start` and `end` stay `None` when the source document omitted them
/// or carried values that could not be read; decoding never fails on a
/// single bad field.
///
/// For all-day events both instants fall on midnight UTC and `end` is
/// exclusive, the day after the last included day. Whether an event is
/// all-day is carried by the `all_day` flag, never inferred from the
/// clock time.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub uid: String,
    pub summary: String,
    pub description: Option<String>,
    pub location: Option<String>,
    pub start: Option<DateTime<Utc>>,
    pub end: Option<DateTime<Utc>>,
    pub all_day: bool,
    pub organizer: Option<Participant>,
    pub attendees: Vec<Participant>,
    /// Free-text status as carried by the document (e.g. CONFIRMED).
    pub status: Option<String>,
    pub url: Option<String>,
    /// Opaque version token from the storage server; never interpreted.
    pub etag: Option<String>,
}
