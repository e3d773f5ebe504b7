//! Terminal rendering for satchel-core types.
//!
//! Extension traits that add colored terminal output to the core
//! records using owo_colors.

use chrono::{DateTime, Utc};
use owo_colors::OwoColorize;
use satchel_core::{Event, Invite, Method, Participant, ParticipationStatus, Task, TaskStatus};

/// Extension trait for colored terminal rendering.
pub trait Render {
    fn render(&self) -> String;
}

/// One `   Label:    value` line with a dimmed, padded label.
fn field(label: &str, value: &str) -> String {
    let label = format!("{:<11}", format!("{label}:"));
    format!("   {} {}", label.dimmed(), value)
}

fn format_instant(instant: &DateTime<Utc>, all_day: bool) -> String {
    if all_day {
        instant.format("%Y-%m-%d").to_string()
    } else {
        instant.format("%Y-%m-%d %H:%M UTC").to_string()
    }
}

fn format_range(
    start: Option<DateTime<Utc>>,
    end: Option<DateTime<Utc>>,
    all_day: bool,
) -> Option<String> {
    let start = start?;
    Some(match end {
        Some(end) => format!(
            "{} → {}",
            format_instant(&start, all_day),
            format_instant(&end, all_day)
        ),
        None => format_instant(&start, all_day),
    })
}

impl Render for Participant {
    fn render(&self) -> String {
        let who = match self.name {
            Some(ref name) => format!("{name} <{}>", self.email),
            None => self.email.clone(),
        };
        let status = match self.status {
            ParticipationStatus::Accepted => "accepted".green().to_string(),
            ParticipationStatus::Declined => "declined".red().to_string(),
            ParticipationStatus::Tentative => "tentative".yellow().to_string(),
            ParticipationStatus::NeedsAction => "awaiting reply".dimmed().to_string(),
        };
        format!("{who} ({status})")
    }
}

impl Render for Event {
    fn render(&self) -> String {
        let mut lines = vec![format!("📅 {}", self.summary.bold())];

        if let Some(when) = format_range(self.start, self.end, self.all_day) {
            lines.push(field("When", &when));
        }
        if let Some(ref location) = self.location {
            lines.push(field("Where", location));
        }
        if let Some(ref description) = self.description {
            lines.push(field("Notes", description));
        }
        if let Some(ref status) = self.status {
            lines.push(field("Status", status));
        }
        if let Some(ref url) = self.url {
            lines.push(field("Url", url));
        }
        if let Some(ref organizer) = self.organizer {
            lines.push(field("Organizer", &organizer.render()));
        }
        for attendee in &self.attendees {
            lines.push(field("Attendee", &attendee.render()));
        }

        lines.join("\n")
    }
}

impl Render for Task {
    fn render(&self) -> String {
        let done = match self.status {
            TaskStatus::Completed => "✓".green().to_string(),
            TaskStatus::Cancelled => "✗".red().to_string(),
            _ => "·".dimmed().to_string(),
        };
        let mut lines = vec![format!("{done} {}", self.summary.bold())];

        lines.push(field("Status", &self.status.to_string()));
        if let Some(due) = self.due {
            lines.push(field("Due", &format_instant(&due, false)));
        }
        if self.priority > 0 {
            lines.push(field("Priority", &self.priority.to_string()));
        }
        if self.percent > 0 {
            lines.push(field("Progress", &format!("{}%", self.percent)));
        }
        if let Some(ref description) = self.description {
            lines.push(field("Notes", description));
        }
        if !self.categories.is_empty() {
            lines.push(field("Tags", &self.categories.join(", ")));
        }

        lines.join("\n")
    }
}

impl Render for Invite {
    fn render(&self) -> String {
        let tag = match self.method {
            Method::Cancel => "cancelled".red().to_string(),
            Method::Reply => "reply".yellow().to_string(),
            Method::Unspecified => "no method".dimmed().to_string(),
            other => other.to_string().green().to_string(),
        };
        let mut lines = vec![format!("✉ {} ({tag})", self.summary.bold())];

        if let Some(when) = format_range(self.start, self.end, false) {
            lines.push(field("When", &when));
        }
        if let Some(ref location) = self.location {
            lines.push(field("Where", location));
        }
        if let Some(ref description) = self.description {
            lines.push(field("Notes", description));
        }
        if !self.organizer.email.is_empty() {
            lines.push(field("Organizer", &self.organizer.render()));
        }
        for attendee in &self.attendees {
            lines.push(field("Attendee", &attendee.render()));
        }
        lines.push(field("Sequence", &self.sequence.to_string()));

        lines.join("\n")
    }
}
