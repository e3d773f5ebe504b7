//! Encoding of outbound scheduling messages.

use chrono::Utc;
use icalendar::{Calendar, Component, Property};

use crate::error::SatchelResult;
use crate::event::Event;
use crate::ics::generate::{attendee_property, event_component, organizer_property};
use crate::ics::{property, tidy_output};
use crate::itip::{Invite, Method, Response};
use crate::participant::{Participant, ParticipationStatus, mailto};

/// Encode an invitation as a METHOD:REQUEST document.
///
/// Every attendee's participation status is forced back to
/// needs-action: a freshly issued invitation never carries answers
/// from an earlier round.
pub fn generate_invitation(invite: &Invite) -> SatchelResult<String> {
    let event = Event {
        uid: invite.uid.clone(),
        summary: invite.summary.clone(),
        description: invite.description.clone(),
        location: invite.location.clone(),
        start: invite.start,
        end: invite.end,
        organizer: (!invite.organizer.email.is_empty()).then(|| invite.organizer.clone()),
        attendees: invite
            .attendees
            .iter()
            .cloned()
            .map(|mut attendee| {
                attendee.status = ParticipationStatus::NeedsAction;
                attendee
            })
            .collect(),
        ..Default::default()
    };

    let mut vevent = event_component(&event);
    vevent.add_property("SEQUENCE", invite.sequence.to_string());
    if let Some(created) = invite.created {
        vevent.append_property(property::datetime_utc("CREATED", created));
    }
    if let Some(modified) = invite.last_modified {
        vevent.append_property(property::datetime_utc("LAST-MODIFIED", modified));
    }

    Ok(scheduling_document(Method::Request, vevent))
}

/// Encode an attendee's answer as a METHOD:REPLY document.
///
/// The event component carries only the identifying fields (UID,
/// SEQUENCE, DTSTAMP); a reply does not restate the meeting content.
pub fn generate_reply(response: &Response) -> SatchelResult<String> {
    let mut vevent = icalendar::Event::new();
    vevent.uid(&response.uid);
    vevent.append_property(property::datetime_utc("DTSTAMP", Utc::now()));
    vevent.add_property("SEQUENCE", response.sequence.to_string());

    if !response.organizer.email.is_empty() {
        vevent.append_property(organizer_property(&response.organizer));
    }
    vevent.append_multi_property(attendee_property(&response.attendee));

    if let Some(prop) = response.comment.as_deref().and_then(|c| property::text("COMMENT", c)) {
        vevent.append_property(prop);
    }

    Ok(scheduling_document(Method::Reply, vevent))
}

/// Encode a cancellation as a METHOD:CANCEL document.
///
/// The sequence is emitted as given; callers increment it past the
/// last issued invitation. Attendees are listed without a
/// participation status since a cancellation carries no response
/// state.
pub fn generate_cancellation(
    uid: &str,
    organizer: &Participant,
    attendees: &[Participant],
    sequence: i64,
) -> SatchelResult<String> {
    let mut vevent = icalendar::Event::new();
    vevent.uid(uid);
    vevent.append_property(property::datetime_utc("DTSTAMP", Utc::now()));
    vevent.add_property("SEQUENCE", sequence.to_string());
    vevent.add_property("STATUS", "CANCELLED");

    if !organizer.email.is_empty() {
        vevent.append_property(organizer_property(organizer));
    }
    for attendee in attendees {
        let mut prop = Property::new("ATTENDEE", mailto(&attendee.email));
        if let Some(ref name) = attendee.name {
            prop.add_parameter("CN", name);
        }
        vevent.append_multi_property(prop);
    }

    Ok(scheduling_document(Method::Cancel, vevent))
}

/// Wrap a finished VEVENT in a calendar tagged with the method.
fn scheduling_document(method: Method, mut vevent: icalendar::Event) -> String {
    let mut cal = Calendar::new();
    cal.append_property(Property::new("METHOD", method.as_ics_str()));
    cal.push(vevent.done());
    let cal = cal.done();

    tidy_output(&cal.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn make_test_invite() -> Invite {
        Invite {
            uid: "sync-1@example.com".to_string(),
            summary: "Weekly sync".to_string(),
            start: Some(Utc.with_ymd_and_hms(2026, 3, 20, 15, 0, 0).unwrap()),
            end: Some(Utc.with_ymd_and_hms(2026, 3, 20, 16, 0, 0).unwrap()),
            organizer: Participant {
                email: "boss@x.co".to_string(),
                name: Some("Boss".to_string()),
                ..Default::default()
            },
            attendees: vec![Participant {
                email: "a@x.co".to_string(),
                rsvp: true,
                ..Default::default()
            }],
            ..Default::default()
        }
    }

    #[test]
    fn test_generate_invitation_tags_method_request() {
        let ics = generate_invitation(&make_test_invite()).unwrap();

        assert!(ics.contains("METHOD:REQUEST"), "ICS:\n{ics}");
        assert!(ics.contains("BEGIN:VEVENT"), "ICS:\n{ics}");
        assert!(ics.contains("SEQUENCE:0"), "ICS:\n{ics}");
        assert!(ics.contains("SUMMARY:Weekly sync"), "ICS:\n{ics}");
    }

    #[test]
    fn test_generate_invitation_resets_participation_status() {
        let mut invite = make_test_invite();
        invite.attendees = vec![
            Participant {
                email: "a@x.co".to_string(),
                status: ParticipationStatus::Accepted,
                ..Default::default()
            },
            Participant {
                email: "b@x.co".to_string(),
                status: ParticipationStatus::Declined,
                ..Default::default()
            },
        ];

        let ics = generate_invitation(&invite).unwrap();

        assert!(!ics.contains("PARTSTAT=ACCEPTED"), "ICS:\n{ics}");
        assert!(!ics.contains("PARTSTAT=DECLINED"), "ICS:\n{ics}");
        let reset = ics.matches("PARTSTAT=NEEDS-ACTION").count();
        assert_eq!(reset, 2, "ICS:\n{ics}");
    }

    #[test]
    fn test_generate_invitation_keeps_rsvp_flag() {
        let ics = generate_invitation(&make_test_invite()).unwrap();
        assert!(ics.contains("RSVP=TRUE"), "ICS:\n{ics}");
    }

    #[test]
    fn test_generate_invitation_emits_revision_timestamps() {
        let mut invite = make_test_invite();
        invite.sequence = 2;
        invite.created = Some(Utc.with_ymd_and_hms(2026, 3, 1, 10, 0, 0).unwrap());
        invite.last_modified = Some(Utc.with_ymd_and_hms(2026, 3, 10, 11, 30, 0).unwrap());

        let ics = generate_invitation(&invite).unwrap();

        assert!(ics.contains("SEQUENCE:2"), "ICS:\n{ics}");
        assert!(ics.contains("CREATED:20260301T100000Z"), "ICS:\n{ics}");
        assert!(ics.contains("LAST-MODIFIED:20260310T113000Z"), "ICS:\n{ics}");
    }

    #[test]
    fn test_generate_reply_omits_meeting_content() {
        let response = Response {
            uid: "sync-1@example.com".to_string(),
            attendee: Participant {
                email: "a@x.co".to_string(),
                name: Some("Ann".to_string()),
                status: ParticipationStatus::Declined,
                ..Default::default()
            },
            organizer: Participant {
                email: "boss@x.co".to_string(),
                ..Default::default()
            },
            comment: None,
            sequence: 1,
        };

        let ics = generate_reply(&response).unwrap();

        assert!(ics.contains("METHOD:REPLY"), "ICS:\n{ics}");
        assert!(ics.contains("UID:sync-1@example.com"), "ICS:\n{ics}");
        assert!(ics.contains("SEQUENCE:1"), "ICS:\n{ics}");
        assert!(ics.contains("PARTSTAT=DECLINED"), "ICS:\n{ics}");
        assert!(!ics.contains("SUMMARY"), "ICS:\n{ics}");
        assert!(!ics.contains("DTSTART"), "ICS:\n{ics}");
        assert!(!ics.contains("DTEND"), "ICS:\n{ics}");
        assert!(!ics.contains("COMMENT"), "ICS:\n{ics}");
        let attendee_count = ics.lines().filter(|l| l.starts_with("ATTENDEE")).count();
        assert_eq!(attendee_count, 1, "ICS:\n{ics}");
    }

    #[test]
    fn test_generate_reply_carries_comment() {
        let response = Response {
            uid: "sync-1@example.com".to_string(),
            attendee: Participant {
                email: "a@x.co".to_string(),
                status: ParticipationStatus::Tentative,
                ..Default::default()
            },
            comment: Some("May run late".to_string()),
            ..Default::default()
        };

        let ics = generate_reply(&response).unwrap();
        assert!(ics.contains("COMMENT:May run late"), "ICS:\n{ics}");
    }

    #[test]
    fn test_generate_cancellation_forces_cancelled_status() {
        let organizer = Participant {
            email: "boss@x.co".to_string(),
            name: Some("Boss".to_string()),
            ..Default::default()
        };
        let attendees = vec![
            Participant {
                email: "a@x.co".to_string(),
                status: ParticipationStatus::Accepted,
                ..Default::default()
            },
            Participant::new("b@x.co"),
        ];

        let ics = generate_cancellation("sync-1@example.com", &organizer, &attendees, 3).unwrap();

        assert!(ics.contains("METHOD:CANCEL"), "ICS:\n{ics}");
        assert!(ics.contains("STATUS:CANCELLED"), "ICS:\n{ics}");
        assert!(ics.contains("SEQUENCE:3"), "ICS:\n{ics}");
        let attendee_count = ics.lines().filter(|l| l.starts_with("ATTENDEE")).count();
        assert_eq!(attendee_count, 2, "ICS:\n{ics}");
        assert!(!ics.contains("PARTSTAT"), "ICS:\n{ics}");
    }
}
