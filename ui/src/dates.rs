//! Locale-aware date cells.

use chrono::{DateTime, FixedOffset, Local, Locale, NaiveDateTime, Utc};
use log::warn;

/// Shown when a timestamp cannot be parsed, matching what a browser prints for `new Date("junk")`.
pub const INVALID_DATE: &str = "Invalid Date";

/// Formats backend timestamps as dates (no time of day) for a locale.
#[derive(Debug, Clone, Copy)]
pub struct DateFormatter {
    locale: Locale,
    /// `None` means the host's local time zone.
    offset: Option<FixedOffset>,
}

impl Default for DateFormatter {
    fn default() -> Self {
        Self::local(Locale::en_US)
    }
}

impl DateFormatter {
    /// Dates in the host's time zone.
    pub fn local(locale: Locale) -> Self {
        Self {
            locale,
            offset: None,
        }
    }

    /// Dates at a fixed UTC offset.
    pub fn with_offset(locale: Locale, offset: FixedOffset) -> Self {
        Self {
            locale,
            offset: Some(offset),
        }
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// Locale date representation of `raw`, or [`INVALID_DATE`].
    pub fn format(&self, raw: &str) -> String {
        let Some(instant) = parse_timestamp(raw) else {
            warn!("Unparseable timestamp {raw:?}");
            return INVALID_DATE.to_owned();
        };

        match self.offset {
            Some(offset) => instant
                .with_timezone(&offset)
                .format_localized("%x", self.locale)
                .to_string(),
            None => instant
                .with_timezone(&Local)
                .format_localized("%x", self.locale)
                .to_string(),
        }
    }
}

/// Parses RFC 3339, falling back to offset-less `YYYY-MM-DD[ T]HH:MM:SS[.f]` read as UTC.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Some(ts.with_timezone(&Utc));
    }

    ["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S%.f"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .map(|naive| naive.and_utc())
}

/// Parses a locale name such as `en_US` or `de_DE`.
pub fn parse_locale(name: &str) -> Option<Locale> {
    Locale::try_from(name).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn utc() -> FixedOffset {
        FixedOffset::east_opt(0).unwrap()
    }

    #[test]
    fn parses_supabase_timestamps() {
        let ts = parse_timestamp("2024-03-01T10:15:30.123456Z").unwrap();
        assert_eq!(ts.to_rfc3339(), "2024-03-01T10:15:30.123456+00:00");

        let ts = parse_timestamp("2024-03-01T10:15:30+02:00").unwrap();
        assert_eq!(ts.to_rfc3339(), "2024-03-01T08:15:30+00:00");
    }

    #[test]
    fn parses_naive_timestamps_as_utc() {
        let ts = parse_timestamp("2024-03-01 10:15:30").unwrap();
        assert_eq!(ts.to_rfc3339(), "2024-03-01T10:15:30+00:00");

        let ts = parse_timestamp("2024-03-01T10:15:30.5").unwrap();
        assert_eq!(ts.timestamp_subsec_millis(), 500);
    }

    #[test]
    fn rejects_garbage() {
        assert!(parse_timestamp("yesterday").is_none());
        assert!(parse_timestamp("").is_none());
    }

    #[test]
    fn formats_date_only_for_locale() {
        let us = DateFormatter::with_offset(Locale::en_US, utc());
        assert_eq!(us.format("2024-03-01T10:15:30Z"), "03/01/2024");

        let de = DateFormatter::with_offset(Locale::de_DE, utc());
        assert_eq!(de.format("2024-03-01T10:15:30Z"), "01.03.2024");
    }

    #[test]
    fn offset_can_move_the_calendar_day() {
        let tokyo = DateFormatter::with_offset(Locale::en_US, FixedOffset::east_opt(9 * 3600).unwrap());
        assert_eq!(tokyo.format("2024-03-01T20:00:00Z"), "03/02/2024");
    }

    #[test]
    fn invalid_timestamp_formats_as_invalid_date() {
        let fmt = DateFormatter::default();
        assert_eq!(fmt.format("not a date"), INVALID_DATE);
    }

    #[test]
    fn local_formatting_contains_year() {
        let fmt = DateFormatter::local(Locale::en_US);
        assert!(fmt.format("2024-06-15T12:00:00Z").contains("2024"));
    }

    #[test]
    fn locale_names_parse() {
        assert!(parse_locale("en_US").is_some());
        assert!(parse_locale("de_DE").is_some());
        assert!(parse_locale("xx_NOPE").is_none());
    }
}
