//! ICS document parsing into event and task records.

use chrono::{DateTime, Utc};
use icalendar::parser::{self, read_calendar, unfold};

use crate::error::{SatchelError, SatchelResult};
use crate::event::Event;
use crate::ics::property;
use crate::participant::{Participant, ParticipationStatus, strip_mailto};
use crate::task::{Task, TaskStatus};

/// Parse ICS content into an Event.
///
/// Only the first VEVENT in the document is read; additional
/// components are ignored rather than merged. Malformed field values
/// are dropped per field, so a single bad property never hides the
/// record; only a document with no VEVENT at all fails.
pub fn parse_event(content: &str) -> SatchelResult<Event> {
    let unfolded = unfold(content);
    let calendar = read_calendar(&unfolded).map_err(|e| SatchelError::IcsParse(e.to_string()))?;
    let vevent = first_component(&calendar, "VEVENT")?;

    let (start, all_day) = vevent
        .find_prop("DTSTART")
        .and_then(|p| property::decode_datetime(p).ok())
        .map_or((None, false), |(instant, all_day)| (Some(instant), all_day));

    // An explicit DTEND wins; DURATION only fills in when DTEND is
    // absent, and only relative to a start that decoded.
    let end = match vevent.find_prop("DTEND") {
        Some(p) => property::decode_datetime(p).ok().map(|(instant, _)| instant),
        None => vevent
            .find_prop("DURATION")
            .and_then(property::decode_duration)
            .and_then(|duration| start.map(|s| s + duration)),
    };

    let organizer = vevent.find_prop("ORGANIZER").map(parse_participant);
    let attendees = vevent
        .properties
        .iter()
        .filter(|p| p.name == "ATTENDEE")
        .map(parse_participant)
        .collect();

    Ok(Event {
        uid: prop_text(vevent, "UID").unwrap_or_default(),
        summary: prop_text(vevent, "SUMMARY").unwrap_or_default(),
        description: prop_text(vevent, "DESCRIPTION"),
        location: prop_text(vevent, "LOCATION"),
        start,
        end,
        all_day,
        organizer,
        attendees,
        status: prop_text(vevent, "STATUS"),
        url: prop_text(vevent, "URL"),
        etag: None,
    })
}

/// Parse ICS content into a Task.
///
/// Mirrors [`parse_event`]: first VTODO only, malformed values dropped
/// per field.
pub fn parse_task(content: &str) -> SatchelResult<Task> {
    let unfolded = unfold(content);
    let calendar = read_calendar(&unfolded).map_err(|e| SatchelError::IcsParse(e.to_string()))?;
    let vtodo = first_component(&calendar, "VTODO")?;

    // An unknown STATUS is not an error here; the record keeps the
    // default so a third-party extension value cannot block a listing.
    let status = vtodo
        .find_prop("STATUS")
        .and_then(|p| TaskStatus::from_ics_str(p.val.as_ref()))
        .unwrap_or_default();

    let priority = vtodo
        .find_prop("PRIORITY")
        .and_then(|p| p.val.as_ref().parse().ok())
        .unwrap_or(0);

    let percent = vtodo
        .find_prop("PERCENT-COMPLETE")
        .and_then(|p| p.val.as_ref().parse().ok())
        .unwrap_or(0);

    let categories = vtodo
        .properties
        .iter()
        .filter(|p| p.name == "CATEGORIES")
        .flat_map(|p| p.val.as_ref().split(','))
        .map(|c| c.trim().to_string())
        .filter(|c| !c.is_empty())
        .collect();

    Ok(Task {
        uid: prop_text(vtodo, "UID").unwrap_or_default(),
        summary: prop_text(vtodo, "SUMMARY").unwrap_or_default(),
        description: prop_text(vtodo, "DESCRIPTION"),
        status,
        priority,
        percent,
        due: prop_datetime(vtodo, "DUE"),
        start: prop_datetime(vtodo, "DTSTART"),
        completed_at: prop_datetime(vtodo, "COMPLETED"),
        categories,
        etag: None,
    })
}

/// Find the first top-level component of the wanted kind.
pub(crate) fn first_component<'a>(
    calendar: &'a parser::Calendar<'a>,
    kind: &'static str,
) -> SatchelResult<&'a parser::Component<'a>> {
    calendar
        .components
        .iter()
        .find(|c| c.name == kind)
        .ok_or(SatchelError::NoMatchingComponent(kind))
}

/// Parse an ATTENDEE or ORGANIZER property into a Participant.
///
/// The transport prefix is stripped case-insensitively. An
/// unrecognized PARTSTAT falls back to the default instead of failing:
/// attendee lists are decoded in bulk and one odd value must not
/// abort the rest.
pub(crate) fn parse_participant(prop: &parser::Property<'_>) -> Participant {
    let email = strip_mailto(prop.val.as_ref()).to_string();

    let name = prop
        .params
        .iter()
        .find(|p| p.key == "CN")
        .and_then(|p| p.val.as_ref().map(|v| v.to_string()));

    let status = prop
        .params
        .iter()
        .find(|p| p.key == "PARTSTAT")
        .and_then(|p| p.val.as_ref())
        .and_then(|v| ParticipationStatus::from_ics_str(v.as_ref()))
        .unwrap_or_default();

    let rsvp = prop
        .params
        .iter()
        .find(|p| p.key == "RSVP")
        .and_then(|p| p.val.as_ref())
        .is_some_and(|v| v.as_ref().eq_ignore_ascii_case("TRUE"));

    Participant {
        email,
        name,
        status,
        rsvp,
    }
}

pub(crate) fn prop_text(component: &parser::Component<'_>, name: &str) -> Option<String> {
    component.find_prop(name).map(|p| p.val.to_string())
}

pub(crate) fn prop_datetime(
    component: &parser::Component<'_>,
    name: &str,
) -> Option<DateTime<Utc>> {
    component
        .find_prop(name)
        .and_then(|p| property::decode_datetime(p).ok())
        .map(|(instant, _)| instant)
}
