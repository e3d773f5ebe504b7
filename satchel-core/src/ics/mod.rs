//! Calendar interchange (RFC 5545) mapping between records and documents.

pub(crate) mod generate;
pub(crate) mod parse;
pub(crate) mod property;

pub use generate::{generate_event, generate_task};
pub use parse::{parse_event, parse_task};

/// Product identifier stamped into every generated document.
pub(crate) const PRODID: &str = "-//satchel//satchel-cli//EN";

/// Clean up VCALENDAR output from the icalendar crate.
/// - Replace the crate's PRODID with ours
/// - Drop CALSCALE:GREGORIAN (it's the default)
pub(crate) fn tidy_output(ics: &str) -> String {
    let mut result = String::with_capacity(ics.len());

    for line in ics.lines() {
        if line.starts_with("PRODID:") {
            result.push_str("PRODID:");
            result.push_str(PRODID);
            result.push_str("\r\n");
            continue;
        }

        if line == "CALSCALE:GREGORIAN" {
            continue;
        }

        result.push_str(line);
        result.push_str("\r\n");
    }

    result
}
