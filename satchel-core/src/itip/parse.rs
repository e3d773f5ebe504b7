//! Decoding of inbound scheduling messages.

use icalendar::parser::{read_calendar, unfold};

use crate::error::{SatchelError, SatchelResult};
use crate::ics::parse::{first_component, parse_participant, prop_datetime, prop_text};
use crate::ics::property;
use crate::itip::{Invite, Method};

/// Parse a scheduling message into an Invite.
///
/// A document without a METHOD property decodes to
/// [`Method::Unspecified`] so callers can treat it as untrusted input
/// instead of assuming an invitation. A METHOD outside the known set
/// is fatal: the whole point of the message is its method, and
/// guessing here would misfile it. Everything below the method follows
/// the record-mapper rules, so a malformed field is dropped rather
/// than failing the decode.
pub fn parse_invite(content: &str) -> SatchelResult<Invite> {
    let unfolded = unfold(content);
    let calendar = read_calendar(&unfolded).map_err(|e| SatchelError::IcsParse(e.to_string()))?;

    let method = match calendar.properties.iter().find(|p| p.name == "METHOD") {
        Some(prop) => property::decode_enum(prop, "METHOD", Method::from_ics_str)?,
        None => Method::Unspecified,
    };

    let vevent = first_component(&calendar, "VEVENT")?;

    let sequence = vevent
        .find_prop("SEQUENCE")
        .and_then(|p| p.val.as_ref().parse().ok())
        .unwrap_or(0);

    let organizer = vevent
        .find_prop("ORGANIZER")
        .map(parse_participant)
        .unwrap_or_default();

    let attendees = vevent
        .properties
        .iter()
        .filter(|p| p.name == "ATTENDEE")
        .map(parse_participant)
        .collect();

    Ok(Invite {
        method,
        uid: prop_text(vevent, "UID").unwrap_or_default(),
        summary: prop_text(vevent, "SUMMARY").unwrap_or_default(),
        description: prop_text(vevent, "DESCRIPTION"),
        location: prop_text(vevent, "LOCATION"),
        start: prop_datetime(vevent, "DTSTART"),
        end: prop_datetime(vevent, "DTEND"),
        organizer,
        attendees,
        sequence,
        created: prop_datetime(vevent, "CREATED"),
        last_modified: prop_datetime(vevent, "LAST-MODIFIED"),
    })
}
