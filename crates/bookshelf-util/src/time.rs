//! Time utilities for bookshelf
//!
//! # Mock Time for Development
//!
//! In debug builds, the `BOOKSHELF_MOCK_TIME` environment variable can be set
//! to override the system time. This is useful for exercising the
//! publication-year bound and `added_date` stamping around a year boundary.
//!
//! Format: `YYYY-MM-DD HH:MM:SS` (e.g., `2025-12-31 23:59:30`)

use chrono::{DateTime, Datelike, Local, NaiveDateTime, TimeZone, Timelike};
use std::sync::OnceLock;

/// Environment variable name for mock time (debug builds only)
pub const MOCK_TIME_ENV_VAR: &str = "BOOKSHELF_MOCK_TIME";

/// Text format of `added_date` in the library file
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Cached offset between mock time and real time at process start.
/// This allows mock time to advance naturally.
static MOCK_TIME_OFFSET: OnceLock<Option<chrono::Duration>> = OnceLock::new();

fn get_mock_time_offset() -> Option<chrono::Duration> {
    *MOCK_TIME_OFFSET.get_or_init(|| {
        #[cfg(debug_assertions)]
        {
            if let Ok(mock_time_str) = std::env::var(MOCK_TIME_ENV_VAR) {
                match NaiveDateTime::parse_from_str(&mock_time_str, TIMESTAMP_FORMAT) {
                    Ok(naive_dt) => {
                        if let Some(mock_dt) = Local.from_local_datetime(&naive_dt).single() {
                            let offset = mock_dt.signed_duration_since(Local::now());
                            tracing::info!(
                                mock_time = %mock_time_str,
                                offset_secs = offset.num_seconds(),
                                "Mock time enabled"
                            );
                            return Some(offset);
                        }
                        tracing::warn!(
                            mock_time = %mock_time_str,
                            "Failed to convert mock time to local timezone"
                        );
                    }
                    Err(_) => {
                        tracing::warn!(
                            mock_time = %mock_time_str,
                            expected_format = TIMESTAMP_FORMAT,
                            "Invalid mock time format"
                        );
                    }
                }
            }
            None
        }
        #[cfg(not(debug_assertions))]
        {
            None
        }
    })
}

/// Returns whether mock time is currently active.
pub fn is_mock_time_active() -> bool {
    get_mock_time_offset().is_some()
}

/// Get the current local time, respecting mock time settings in debug builds.
pub fn now() -> DateTime<Local> {
    let real_now = Local::now();

    if let Some(offset) = get_mock_time_offset() {
        real_now + offset
    } else {
        real_now
    }
}

/// Current calendar year, the upper bound for publication years.
pub fn current_year() -> i32 {
    now().year()
}

/// Current local time with sub-second precision dropped.
///
/// `added_date` is persisted with whole-second precision, so stamping
/// records with this keeps a save/load round trip exact.
pub fn timestamp_now() -> NaiveDateTime {
    let naive = now().naive_local();
    naive.with_nanosecond(0).unwrap_or(naive)
}

/// Format a timestamp the way it is written to the library file.
pub fn format_timestamp(dt: &NaiveDateTime) -> String {
    dt.format(TIMESTAMP_FORMAT).to_string()
}

/// Parse a persisted timestamp.
///
/// Accepts the canonical `YYYY-MM-DD HH:MM:SS` form and, for files edited by
/// hand, the ISO-8601 `T`-separated form with optional fractional seconds.
pub fn parse_timestamp(s: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(s, TIMESTAMP_FORMAT)
        .or_else(|_| NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f"))
        .ok()
}

/// Serde adapter for `NaiveDateTime` fields stored as `YYYY-MM-DD HH:MM:SS`.
pub mod timestamp_format {
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(dt: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&super::format_timestamp(dt))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        super::parse_timestamp(&s)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid timestamp: {s}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn timestamp_now_has_no_subsecond_part() {
        let ts = timestamp_now();
        assert_eq!(ts.nanosecond(), 0);
    }

    #[test]
    fn format_and_parse_timestamp() {
        let dt = NaiveDate::from_ymd_opt(2024, 3, 9)
            .unwrap()
            .and_hms_opt(7, 5, 30)
            .unwrap();

        let text = format_timestamp(&dt);
        assert_eq!(text, "2024-03-09 07:05:30");
        assert_eq!(parse_timestamp(&text), Some(dt));
    }

    #[test]
    fn parse_accepts_iso_form() {
        let parsed = parse_timestamp("2024-03-09T07:05:30").unwrap();
        assert_eq!(format_timestamp(&parsed), "2024-03-09 07:05:30");
        assert!(parse_timestamp("yesterday").is_none());
    }

    #[test]
    fn current_year_is_plausible() {
        assert!(current_year() >= 2024);
    }
}
