//! Participants on events and scheduling messages.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One organizer or attendee on an event or scheduling message.
///
/// The email address is stored bare; the `mailto:` transport prefix is
/// stripped when parsing and re-added when generating, so addresses
/// round-trip unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Participant {
    pub email: String,
    pub name: Option<String>,
    #[serde(default)]
    pub status: ParticipationStatus,
    #[serde(default)]
    pub rsvp: bool,
}

impl Participant {
    pub fn new(email: impl Into<String>) -> Self {
        Participant {
            email: email.into(),
            ..Default::default()
        }
    }
}

/// Participation status of an attendee (PARTSTAT).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ParticipationStatus {
    #[default]
    NeedsAction,
    Accepted,
    Declined,
    Tentative,
}

impl ParticipationStatus {
    pub fn as_ics_str(&self) -> &'static str {
        match self {
            ParticipationStatus::NeedsAction => "NEEDS-ACTION",
            ParticipationStatus::Accepted => "ACCEPTED",
            ParticipationStatus::Declined => "DECLINED",
            ParticipationStatus::Tentative => "TENTATIVE",
        }
    }

    pub fn from_ics_str(s: &str) -> Option<Self> {
        match s.to_ascii_uppercase().as_str() {
            "NEEDS-ACTION" => Some(ParticipationStatus::NeedsAction),
            "ACCEPTED" => Some(ParticipationStatus::Accepted),
            "DECLINED" => Some(ParticipationStatus::Declined),
            "TENTATIVE" => Some(ParticipationStatus::Tentative),
            _ => None,
        }
    }
}

impl fmt::Display for ParticipationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ParticipationStatus::NeedsAction => "needs-action",
            ParticipationStatus::Accepted => "accepted",
            ParticipationStatus::Declined => "declined",
            ParticipationStatus::Tentative => "tentative",
        })
    }
}

/// Strip the `mailto:` transport prefix, case-insensitively.
pub(crate) fn strip_mailto(value: &str) -> &str {
    match value.get(..7) {
        Some(prefix) if prefix.eq_ignore_ascii_case("mailto:") => &value[7..],
        _ => value,
    }
}

/// Prefix a bare address with the lowercase `mailto:` transport prefix.
pub(crate) fn mailto(email: &str) -> String {
    format!("mailto:{email}")
}
