//! Single-property conversions between typed values and interchange
//! properties.
//!
//! Everything here is a pure transformation; the record mapper and the
//! scheduling codec compose these per field.

use chrono::{DateTime, NaiveTime, Utc};
use icalendar::parser;
use icalendar::{CalendarDateTime, DatePerhapsTime, Property, ValueType};

use crate::error::{SatchelError, SatchelResult};

/// Build a text property, omitting empty values entirely.
///
/// An empty string encodes as nothing rather than as an empty
/// property, so absent and empty never diverge downstream.
pub(crate) fn text(name: &str, value: &str) -> Option<Property> {
    if value.is_empty() {
        None
    } else {
        Some(Property::new(name, value))
    }
}

/// Build an integer property, omitting zero.
pub(crate) fn integer(name: &str, value: i64) -> Option<Property> {
    if value == 0 {
        None
    } else {
        Some(Property::new(name, value.to_string()))
    }
}

/// Build a date or date-time property.
///
/// All-day values take the date-only form with a VALUE=DATE parameter;
/// everything else is a UTC date-time. Paired start/end properties
/// must be built with the same `all_day` flag.
pub(crate) fn date_or_datetime(name: &str, instant: DateTime<Utc>, all_day: bool) -> Property {
    if all_day {
        let mut prop = Property::new(name, instant.format("%Y%m%d").to_string());
        prop.append_parameter(ValueType::Date);
        prop
    } else {
        datetime_utc(name, instant)
    }
}

/// Build a UTC date-time property (DTSTAMP, CREATED, COMPLETED).
pub(crate) fn datetime_utc(name: &str, instant: DateTime<Utc>) -> Property {
    Property::new(name, instant.format("%Y%m%dT%H%M%SZ").to_string())
}

/// Decode a date or date-time property into a UTC instant.
///
/// The returned flag is true only for date-only values, detected from
/// the VALUE=DATE parameter; a date-time that happens to fall at
/// midnight is not all-day. Date-only values map to midnight UTC of
/// that day. Floating and zoned date-times are read at face value as
/// UTC.
pub(crate) fn decode_datetime(prop: &parser::Property<'_>) -> SatchelResult<(DateTime<Utc>, bool)> {
    match DatePerhapsTime::try_from(prop) {
        Ok(DatePerhapsTime::Date(d)) => Ok((d.and_time(NaiveTime::MIN).and_utc(), true)),
        Ok(DatePerhapsTime::DateTime(dt)) => {
            let instant = match dt {
                CalendarDateTime::Utc(dt) => dt,
                CalendarDateTime::Floating(naive) => naive.and_utc(),
                CalendarDateTime::WithTimezone { date_time, .. } => date_time.and_utc(),
            };
            Ok((instant, false))
        }
        Err(_) => Err(SatchelError::IcsParse(format!(
            "unreadable date/time value '{}' in {}",
            prop.val.as_ref(),
            prop.name.as_ref()
        ))),
    }
}

/// Decode an ISO 8601 duration value (PT1H30M, -P1D).
pub(crate) fn decode_duration(prop: &parser::Property<'_>) -> Option<chrono::Duration> {
    let raw = prop.val.as_ref();
    let negative = raw.starts_with('-');
    let trimmed = raw.trim_start_matches(['-', '+']);

    let parsed = iso8601::duration(trimmed).ok()?;
    let std_duration: std::time::Duration = parsed.into();
    let duration = chrono::Duration::from_std(std_duration).ok()?;

    Some(if negative { -duration } else { duration })
}

/// Decode an enumerated property value.
///
/// `parse` maps the raw value into the enum's known set; anything
/// outside it fails with `UnrecognizedEnumValue` naming the field, and
/// the caller decides between aborting and defaulting.
pub(crate) fn decode_enum<T>(
    prop: &parser::Property<'_>,
    field: &'static str,
    parse: impl Fn(&str) -> Option<T>,
) -> SatchelResult<T> {
    let raw = prop.val.as_ref();
    parse(raw).ok_or_else(|| SatchelError::UnrecognizedEnumValue {
        field,
        value: raw.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use icalendar::parser::{read_calendar, unfold};

    fn wrap(props: &str) -> String {
        format!(
            "BEGIN:VCALENDAR\r\nVERSION:2.0\r\nPRODID:TEST\r\nBEGIN:VEVENT\r\n{props}\r\nEND:VEVENT\r\nEND:VCALENDAR\r\n"
        )
    }

    fn decode_prop<T>(props: &str, name: &str, f: impl Fn(&parser::Property<'_>) -> T) -> T {
        let content = wrap(props);
        let unfolded = unfold(&content);
        let calendar = read_calendar(&unfolded).unwrap();
        let prop = calendar.components[0].find_prop(name).unwrap();
        f(prop)
    }

    #[test]
    fn test_decode_datetime_value_date_is_all_day() {
        let (instant, all_day) =
            decode_prop("DTSTART;VALUE=DATE:20260120", "DTSTART", |p| {
                decode_datetime(p).unwrap()
            });

        assert!(all_day);
        assert_eq!(instant, Utc.with_ymd_and_hms(2026, 1, 20, 0, 0, 0).unwrap());
    }

    #[test]
    fn test_decode_datetime_midnight_is_not_all_day() {
        let (instant, all_day) =
            decode_prop("DTSTART:20260120T000000Z", "DTSTART", |p| {
                decode_datetime(p).unwrap()
            });

        assert!(!all_day, "a date-time at midnight is still a date-time");
        assert_eq!(instant, Utc.with_ymd_and_hms(2026, 1, 20, 0, 0, 0).unwrap());
    }

    #[test]
    fn test_decode_datetime_rejects_garbage() {
        let result = decode_prop("DTSTART:not-a-date", "DTSTART", decode_datetime);
        assert!(matches!(result, Err(SatchelError::IcsParse(_))));
    }

    #[test]
    fn test_decode_duration_handles_sign() {
        let forward = decode_prop("DURATION:PT1H30M", "DURATION", decode_duration).unwrap();
        assert_eq!(forward, chrono::Duration::minutes(90));

        let backward = decode_prop("DURATION:-PT15M", "DURATION", decode_duration).unwrap();
        assert_eq!(backward, chrono::Duration::minutes(-15));
    }

    #[test]
    fn test_decode_duration_rejects_garbage() {
        assert!(decode_prop("DURATION:soon", "DURATION", decode_duration).is_none());
    }

    #[test]
    fn test_decode_enum_names_the_field() {
        let result = decode_prop("STATUS:MAYBE", "STATUS", |p| {
            decode_enum(p, "STATUS", crate::task::TaskStatus::from_ics_str)
        });

        match result {
            Err(SatchelError::UnrecognizedEnumValue { field, value }) => {
                assert_eq!(field, "STATUS");
                assert_eq!(value, "MAYBE");
            }
            other => panic!("Expected UnrecognizedEnumValue, got {other:?}"),
        }
    }

    #[test]
    fn test_text_omits_empty_values() {
        assert!(text("DESCRIPTION", "").is_none());
        assert!(text("DESCRIPTION", "x").is_some());
    }

    #[test]
    fn test_integer_omits_zero() {
        assert!(integer("PRIORITY", 0).is_none());
        assert!(integer("PRIORITY", 5).is_some());
    }
}
