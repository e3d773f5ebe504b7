//! ICS document generation from event and task records.

use chrono::Utc;
use icalendar::{Calendar, Component, EventLike, Property, Todo};

use crate::error::SatchelResult;
use crate::event::Event;
use crate::ics::{property, tidy_output};
use crate::participant::{Participant, mailto};
use crate::task::{Task, TaskStatus};

/// Generate a VCALENDAR document containing a single VEVENT.
pub fn generate_event(event: &Event) -> SatchelResult<String> {
    let mut cal = Calendar::new();
    cal.push(event_component(event));
    let cal = cal.done();

    Ok(tidy_output(&cal.to_string()))
}

/// Build the VEVENT component for an event record.
///
/// Shared with the scheduling encoder, which wraps the same component
/// in a METHOD-tagged document.
pub(crate) fn event_component(event: &Event) -> icalendar::Event {
    let mut vevent = icalendar::Event::new();
    vevent.uid(&event.uid);
    vevent.summary(&event.summary);

    // DTSTAMP is required by RFC 5545 and always reflects encode time
    vevent.append_property(property::datetime_utc("DTSTAMP", Utc::now()));

    if let Some(start) = event.start {
        vevent.append_property(property::date_or_datetime("DTSTART", start, event.all_day));
    }
    if let Some(end) = event.end {
        vevent.append_property(property::date_or_datetime("DTEND", end, event.all_day));
    }

    // Optional fields
    if let Some(ref desc) = event.description {
        vevent.description(desc);
    }
    if let Some(ref loc) = event.location {
        vevent.location(loc);
    }
    if let Some(prop) = event.status.as_deref().and_then(|s| property::text("STATUS", s)) {
        vevent.append_property(prop);
    }
    if let Some(prop) = event.url.as_deref().and_then(|u| property::text("URL", u)) {
        vevent.append_property(prop);
    }

    // ORGANIZER
    if let Some(ref org) = event.organizer {
        if !org.email.is_empty() {
            vevent.append_property(organizer_property(org));
        }
    }

    // ATTENDEE (multi-property - can appear multiple times)
    for attendee in &event.attendees {
        vevent.append_multi_property(attendee_property(attendee));
    }

    vevent.done()
}

/// ORGANIZER property with the transport prefix and display name.
pub(crate) fn organizer_property(organizer: &Participant) -> Property {
    let mut prop = Property::new("ORGANIZER", mailto(&organizer.email));
    if let Some(ref name) = organizer.name {
        prop.add_parameter("CN", name);
    }
    prop
}

/// ATTENDEE property carrying display name, participation status and
/// the RSVP flag when requested.
pub(crate) fn attendee_property(attendee: &Participant) -> Property {
    let mut prop = Property::new("ATTENDEE", mailto(&attendee.email));
    if let Some(ref name) = attendee.name {
        prop.add_parameter("CN", name);
    }
    prop.add_parameter("PARTSTAT", attendee.status.as_ics_str());
    if attendee.rsvp {
        prop.add_parameter("RSVP", "TRUE");
    }
    prop
}

/// Generate a VCALENDAR document containing a single VTODO.
pub fn generate_task(task: &Task) -> SatchelResult<String> {
    let mut todo = Todo::new();
    todo.uid(&task.uid);
    todo.summary(&task.summary);

    todo.append_property(property::datetime_utc("DTSTAMP", Utc::now()));

    if let Some(ref desc) = task.description {
        todo.description(desc);
    }

    // STATUS - only emit when not NEEDS-ACTION (the implied default)
    if task.status != TaskStatus::NeedsAction {
        todo.add_property("STATUS", task.status.as_ics_str());
    }

    if let Some(prop) = property::integer("PRIORITY", i64::from(task.priority)) {
        todo.append_property(prop);
    }
    if let Some(prop) = property::integer("PERCENT-COMPLETE", i64::from(task.percent)) {
        todo.append_property(prop);
    }

    // The task record carries no all-day flag, so DUE and DTSTART are
    // always emitted in date-time form
    if let Some(due) = task.due {
        todo.append_property(property::date_or_datetime("DUE", due, false));
    }
    if let Some(start) = task.start {
        todo.append_property(property::date_or_datetime("DTSTART", start, false));
    }
    if let Some(completed) = task.completed_at {
        todo.append_property(property::datetime_utc("COMPLETED", completed));
    }

    for category in &task.categories {
        if let Some(prop) = property::text("CATEGORIES", category) {
            todo.append_multi_property(prop);
        }
    }

    let mut cal = Calendar::new();
    cal.push(todo.done());
    let cal = cal.done();

    Ok(tidy_output(&cal.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::participant::ParticipationStatus;
    use chrono::{TimeZone, Utc};

    fn make_test_event() -> Event {
        Event {
            uid: "meeting-1@example.com".to_string(),
            summary: "Planning".to_string(),
            start: Some(Utc.with_ymd_and_hms(2026, 3, 20, 15, 0, 0).unwrap()),
            end: Some(Utc.with_ymd_and_hms(2026, 3, 20, 16, 0, 0).unwrap()),
            ..Default::default()
        }
    }

    #[test]
    fn test_generate_event_stamps_prodid_and_version() {
        let ics = generate_event(&make_test_event()).unwrap();

        assert!(ics.contains("VERSION:2.0"), "ICS:\n{ics}");
        assert!(ics.contains("PRODID:-//satchel//satchel-cli//EN"), "ICS:\n{ics}");
        assert!(!ics.contains("CALSCALE"), "ICS:\n{ics}");
    }

    #[test]
    fn test_generate_event_multiple_attendees() {
        let mut event = make_test_event();
        event.attendees = vec![
            Participant {
                email: "alice@x.co".to_string(),
                name: Some("Alice".to_string()),
                status: ParticipationStatus::Accepted,
                rsvp: false,
            },
            Participant::new("bob@x.co"),
        ];

        let ics = generate_event(&event).unwrap();

        let attendee_count = ics.lines().filter(|l| l.starts_with("ATTENDEE")).count();
        assert_eq!(attendee_count, 2, "ICS:\n{ics}");
        assert!(ics.contains("PARTSTAT=ACCEPTED"), "ICS:\n{ics}");
        assert!(ics.contains("PARTSTAT=NEEDS-ACTION"), "ICS:\n{ics}");
    }

    #[test]
    fn test_generate_event_all_day_uses_value_date() {
        let mut event = make_test_event();
        event.all_day = true;
        event.start = Some(Utc.with_ymd_and_hms(2026, 3, 20, 0, 0, 0).unwrap());
        event.end = Some(Utc.with_ymd_and_hms(2026, 3, 21, 0, 0, 0).unwrap());

        let ics = generate_event(&event).unwrap();

        assert!(ics.contains("DTSTART;VALUE=DATE:20260320"), "ICS:\n{ics}");
        assert!(ics.contains("DTEND;VALUE=DATE:20260321"), "ICS:\n{ics}");
    }

    #[test]
    fn test_generate_event_midnight_datetime_keeps_time_form() {
        let mut event = make_test_event();
        event.start = Some(Utc.with_ymd_and_hms(2026, 3, 20, 0, 0, 0).unwrap());
        event.end = Some(Utc.with_ymd_and_hms(2026, 3, 21, 0, 0, 0).unwrap());

        let ics = generate_event(&event).unwrap();

        assert!(ics.contains("DTSTART:20260320T000000Z"), "ICS:\n{ics}");
        assert!(!ics.contains("VALUE=DATE"), "ICS:\n{ics}");
    }

    #[test]
    fn test_generate_event_omits_empty_optionals() {
        let ics = generate_event(&make_test_event()).unwrap();

        assert!(!ics.contains("DESCRIPTION"), "ICS:\n{ics}");
        assert!(!ics.contains("LOCATION"), "ICS:\n{ics}");
        assert!(!ics.contains("URL"), "ICS:\n{ics}");
        assert!(!ics.contains("ORGANIZER"), "ICS:\n{ics}");
    }

    #[test]
    fn test_generate_event_organizer_has_cn_parameter() {
        let mut event = make_test_event();
        event.organizer = Some(Participant {
            email: "boss@x.co".to_string(),
            name: Some("Boss".to_string()),
            ..Default::default()
        });

        let ics = generate_event(&event).unwrap();

        let organizer_line = ics
            .lines()
            .find(|l| l.starts_with("ORGANIZER"))
            .expect("Should have ORGANIZER line");
        assert!(organizer_line.contains(";CN=Boss"), "Got: {organizer_line}");
        assert!(organizer_line.contains("mailto:boss@x.co"), "Got: {organizer_line}");
    }

    #[test]
    fn test_generate_event_rsvp_parameter_when_requested() {
        let mut event = make_test_event();
        event.attendees = vec![Participant {
            email: "a@x.co".to_string(),
            rsvp: true,
            ..Default::default()
        }];

        let ics = generate_event(&event).unwrap();
        assert!(ics.contains("RSVP=TRUE"), "ICS:\n{ics}");
    }

    #[test]
    fn test_generate_task_omits_zero_integers_and_default_status() {
        let task = Task {
            uid: "task-1@example.com".to_string(),
            summary: "Buy stamps".to_string(),
            ..Default::default()
        };

        let ics = generate_task(&task).unwrap();

        assert!(ics.contains("BEGIN:VTODO"), "ICS:\n{ics}");
        assert!(!ics.contains("PRIORITY"), "ICS:\n{ics}");
        assert!(!ics.contains("PERCENT-COMPLETE"), "ICS:\n{ics}");
        assert!(!ics.contains("STATUS"), "ICS:\n{ics}");
    }

    #[test]
    fn test_generate_task_full_fields() {
        let task = Task {
            uid: "task-2@example.com".to_string(),
            summary: "Quarterly filing".to_string(),
            description: Some("Collect receipts first".to_string()),
            status: TaskStatus::InProcess,
            priority: 1,
            percent: 40,
            due: Some(Utc.with_ymd_and_hms(2026, 4, 1, 12, 0, 0).unwrap()),
            categories: vec!["finance".to_string(), "office".to_string()],
            ..Default::default()
        };

        let ics = generate_task(&task).unwrap();

        assert!(ics.contains("STATUS:IN-PROCESS"), "ICS:\n{ics}");
        assert!(ics.contains("PRIORITY:1"), "ICS:\n{ics}");
        assert!(ics.contains("PERCENT-COMPLETE:40"), "ICS:\n{ics}");
        assert!(ics.contains("DUE:20260401T120000Z"), "ICS:\n{ics}");
        let categories = ics.lines().filter(|l| l.starts_with("CATEGORIES")).count();
        assert_eq!(categories, 2, "ICS:\n{ics}");
    }
}
