//! Date Formatting
//!
//! Renders API dates the way an `id-ID` browser locale does:
//! long dates like `Jumat, 16 Oktober 2026`, timestamps like
//! `16/10/2026, 14.05.09`.
//!
//! Inputs may be RFC 3339 timestamps, plain `YYYY-MM-DD` dates, naive
//! `YYYY-MM-DDTHH:MM:SS` timestamps or epoch milliseconds. Anything else is
//! returned verbatim.

use chrono::{DateTime, Datelike, Local, NaiveDate, NaiveDateTime, TimeZone};

/// Indexed by `num_days_from_monday`
const WEEKDAYS: [&str; 7] = ["Senin", "Selasa", "Rabu", "Kamis", "Jumat", "Sabtu", "Minggu"];

const MONTHS: [&str; 12] = [
    "Januari", "Februari", "Maret", "April", "Mei", "Juni",
    "Juli", "Agustus", "September", "Oktober", "November", "Desember",
];

const NAIVE_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// Weekday, day, month name, year in local time
pub fn format_long_date(raw: &str) -> String {
    format_long_date_in(raw, &Local)
}

/// Date and time in local time
pub fn format_date_time(raw: &str) -> String {
    format_date_time_in(raw, &Local)
}

/// Time of day in local time
pub fn format_time(raw: &str) -> String {
    format_time_in(raw, &Local)
}

pub(crate) fn format_long_date_in<Tz: TimeZone>(raw: &str, tz: &Tz) -> String {
    match resolve(raw, tz) {
        Some(dt) => format!(
            "{}, {} {} {}",
            WEEKDAYS[dt.weekday().num_days_from_monday() as usize],
            dt.day(),
            MONTHS[dt.month0() as usize],
            dt.year()
        ),
        None => raw.to_string(),
    }
}

pub(crate) fn format_date_time_in<Tz: TimeZone>(raw: &str, tz: &Tz) -> String {
    match resolve(raw, tz) {
        Some(dt) => dt.format("%d/%m/%Y, %H.%M.%S").to_string(),
        None => raw.to_string(),
    }
}

pub(crate) fn format_time_in<Tz: TimeZone>(raw: &str, tz: &Tz) -> String {
    match resolve(raw, tz) {
        Some(dt) => dt.format("%H.%M.%S").to_string(),
        None => raw.to_string(),
    }
}

/// Wall-clock time in `tz`. Zoned and epoch inputs are converted; plain
/// dates and naive timestamps are taken as already local.
fn resolve<Tz: TimeZone>(raw: &str, tz: &Tz) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(tz).naive_local());
    }

    if raw.bytes().all(|b| b.is_ascii_digit()) {
        let millis: i64 = raw.parse().ok()?;
        return DateTime::from_timestamp_millis(millis).map(|dt| dt.with_timezone(tz).naive_local());
    }

    if let Some(naive) = NAIVE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
    {
        return Some(naive);
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
}
