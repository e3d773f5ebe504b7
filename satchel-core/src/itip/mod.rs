//! iTIP scheduling messages: invitations, replies and cancellations.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::participant::Participant;

mod generate;
mod parse;

pub use generate::{generate_cancellation, generate_invitation, generate_reply};
pub use parse::parse_invite;

/// The scheduling method of an iTIP message.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Method {
    Request,
    Reply,
    Cancel,
    Counter,
    Refresh,
    /// No METHOD property was present. This is decode-side state and
    /// is never emitted.
    #[default]
    Unspecified,
}

impl Method {
    pub fn as_ics_str(&self) -> &'static str {
        match self {
            Method::Request => "REQUEST",
            Method::Reply => "REPLY",
            Method::Cancel => "CANCEL",
            Method::Counter => "COUNTER",
            Method::Refresh => "REFRESH",
            Method::Unspecified => "",
        }
    }

    pub fn from_ics_str(value: &str) -> Option<Self> {
        match value.to_ascii_uppercase().as_str() {
            "REQUEST" => Some(Method::Request),
            "REPLY" => Some(Method::Reply),
            "CANCEL" => Some(Method::Cancel),
            "COUNTER" => Some(Method::Counter),
            "REFRESH" => Some(Method::Refresh),
            _ => None,
        }
    }
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Method::Request => "request",
            Method::Reply => "reply",
            Method::Cancel => "cancel",
            Method::Counter => "counter",
            Method::Refresh => "refresh",
            Method::Unspecified => "unspecified",
        };
        write!(f, "{name}")
    }
}

/// A scheduling invitation, the payload of a REQUEST (or COUNTER).
///
/// Compared to a plain [`crate::Event`] this carries the scheduling
/// fields: the method, a revision sequence and creation timestamps.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Invite {
    #[serde(default)]
    pub method: Method,
    pub uid: String,
    pub summary: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end: Option<DateTime<Utc>>,
    #[serde(default)]
    pub organizer: Participant,
    #[serde(default)]
    pub attendees: Vec<Participant>,
    /// Revision counter. A rescheduled invitation carries a higher
    /// sequence than the one it replaces.
    #[serde(default)]
    pub sequence: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_modified: Option<DateTime<Utc>>,
}

/// One attendee's answer to an invitation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Response {
    pub uid: String,
    /// The replying attendee, carrying their participation status.
    pub attendee: Participant,
    #[serde(default)]
    pub organizer: Participant,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    /// Sequence of the invitation being answered.
    #[serde(default)]
    pub sequence: i64,
}
