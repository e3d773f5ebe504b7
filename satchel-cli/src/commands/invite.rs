use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Duration, NaiveDateTime, Utc};
use satchel_core::{
    Invite, Method, Participant, ParticipationStatus, Response, generate_cancellation,
    generate_invitation, generate_reply, new_uid, parse_invite,
};

use super::write_output;
use crate::config::SatchelConfig;
use crate::render::Render;

/// Create a new invitation and write it as an iTIP REQUEST.
#[allow(clippy::too_many_arguments)]
pub fn run_new(
    summary: String,
    start: &str,
    end: Option<&str>,
    duration: Option<&str>,
    attendee_args: &[String],
    from: Option<String>,
    location: Option<String>,
    description: Option<String>,
    out: Option<&Path>,
) -> Result<()> {
    let config = SatchelConfig::load()?;

    let organizer_email = from.or_else(|| config.from.clone()).context(
        "No organizer address. Pass --from or set one with: satchel config set from you@example.com",
    )?;

    let attendees: Vec<Participant> = attendee_args
        .iter()
        .map(|arg| parse_attendee(arg))
        .collect::<Result<_>>()?;
    if attendees.is_empty() {
        anyhow::bail!("An invitation needs at least one --attendee");
    }

    let start_time = parse_datetime(start)?;
    let end_time = resolve_end(start_time, end, duration)?;

    let now = Utc::now();
    let invite = Invite {
        method: Method::Request,
        uid: new_uid(mail_domain(&organizer_email)),
        summary,
        description,
        location,
        start: Some(start_time),
        end: Some(end_time),
        organizer: Participant {
            email: organizer_email,
            name: config.organizer_name.clone(),
            ..Default::default()
        },
        attendees,
        sequence: 0,
        created: Some(now),
        last_modified: Some(now),
    };

    let ics = generate_invitation(&invite)?;
    write_output(&ics, out)
}

/// Read an invitation file and show its details.
pub fn run_parse(file: &Path, json: bool) -> Result<()> {
    let invite = load_invite(file)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&invite)?);
    } else {
        println!("{}", invite.render());
    }
    Ok(())
}

/// Answer an invitation with an iTIP REPLY.
pub fn run_reply(
    file: &Path,
    response: &str,
    as_email: Option<String>,
    comment: Option<String>,
    out: Option<&Path>,
) -> Result<()> {
    let invite = load_invite(file)?;

    let status = match response {
        "accept" | "accepted" | "yes" => ParticipationStatus::Accepted,
        "decline" | "declined" | "no" => ParticipationStatus::Declined,
        "tentative" | "maybe" => ParticipationStatus::Tentative,
        other => {
            anyhow::bail!("Unknown response \"{other}\", expected accept, decline or tentative")
        }
    };

    let email = match as_email {
        Some(email) => email,
        None => SatchelConfig::load()?.from.context(
            "No attendee address. Pass --as or set one with: satchel config set from you@example.com",
        )?,
    };

    // Carry the display name over when the organizer listed us with one
    let name = invite
        .attendees
        .iter()
        .find(|a| a.email.eq_ignore_ascii_case(&email))
        .and_then(|a| a.name.clone());

    if invite.organizer.email.is_empty() {
        log::warn!("Invitation has no organizer; the reply names no recipient");
    }

    let reply = Response {
        uid: invite.uid,
        attendee: Participant {
            email,
            name,
            status,
            rsvp: false,
        },
        organizer: invite.organizer,
        comment,
        sequence: invite.sequence,
    };

    let ics = generate_reply(&reply)?;
    write_output(&ics, out)
}

/// Call a meeting off with an iTIP CANCEL.
pub fn run_cancel(file: &Path, out: Option<&Path>) -> Result<()> {
    let invite = load_invite(file)?;

    if invite.uid.is_empty() {
        anyhow::bail!("Invitation has no UID; cannot build a cancellation for it");
    }

    // The cancellation must sort after the invitation it retracts
    let ics = generate_cancellation(
        &invite.uid,
        &invite.organizer,
        &invite.attendees,
        invite.sequence + 1,
    )?;
    write_output(&ics, out)
}

fn load_invite(file: &Path) -> Result<Invite> {
    let content = std::fs::read_to_string(file)
        .with_context(|| format!("Could not read {}", file.display()))?;
    parse_invite(&content).with_context(|| format!("Could not parse {}", file.display()))
}

/// Parse an --attendee argument of the form EMAIL or EMAIL:NAME.
fn parse_attendee(arg: &str) -> Result<Participant> {
    let (email, name) = match arg.split_once(':') {
        Some((email, name)) => (email.trim(), Some(name.trim().to_string())),
        None => (arg.trim(), None),
    };
    if email.is_empty() || !email.contains('@') {
        anyhow::bail!("Invalid attendee \"{arg}\", expected EMAIL or EMAIL:NAME");
    }

    Ok(Participant {
        email: email.to_string(),
        name: name.filter(|n| !n.is_empty()),
        status: ParticipationStatus::NeedsAction,
        rsvp: true,
    })
}

/// Parse a date/time given as "2026-03-20T15:00", "2026-03-20 15:00"
/// or natural language like "tomorrow 3pm". The wall-clock value is
/// taken as UTC.
fn parse_datetime(input: &str) -> Result<DateTime<Utc>> {
    for format in ["%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(input, format) {
            return Ok(naive.and_utc());
        }
    }

    let naive = fuzzydate::parse(input)
        .map_err(|_| anyhow::anyhow!("Could not parse date/time: \"{input}\""))?;
    Ok(naive.and_utc())
}

/// End from an explicit value, a duration, or the 1 hour default.
fn resolve_end(
    start: DateTime<Utc>,
    end: Option<&str>,
    duration: Option<&str>,
) -> Result<DateTime<Utc>> {
    if let Some(end) = end {
        return parse_datetime(end);
    }
    if let Some(duration) = duration {
        let std_dur = humantime::parse_duration(duration)
            .with_context(|| format!("Could not parse duration: \"{duration}\""))?;
        let chrono_dur = Duration::from_std(std_dur).context("Duration too large")?;
        return Ok(start + chrono_dur);
    }
    Ok(start + Duration::hours(1))
}

/// Domain part of an email, for generated UIDs.
fn mail_domain(email: &str) -> &str {
    match email.rsplit_once('@') {
        Some((_, domain)) if !domain.is_empty() => domain,
        _ => "satchel.local",
    }
}
