//! Date helpers. All calendar math is done in the device-local timezone,
//! always starting from an explicit instant handed in by the caller.

use chrono::{DateTime, Local, NaiveDate, NaiveTime, TimeZone};

pub const DAY_MS: i64 = 24 * 3600 * 1000;

/// Epoch millis → local date-time. Out-of-range values clamp to the epoch.
pub fn to_local(ts_ms: i64) -> DateTime<Local> {
    DateTime::from_timestamp_millis(ts_ms)
        .unwrap_or(DateTime::UNIX_EPOCH)
        .with_timezone(&Local)
}

/// Epoch millis of a local wall-clock reading.
///
/// A reading that falls into a DST gap does not exist locally; it is then
/// interpreted as UTC.
pub fn local_ms(date: NaiveDate, time: NaiveTime) -> i64 {
    let naive = date.and_time(time);
    Local
        .from_local_datetime(&naive)
        .earliest()
        .map(|dt| dt.timestamp_millis())
        .unwrap_or_else(|| naive.and_utc().timestamp_millis())
}

/// Half-open `[start, end)` millis range covering one local calendar date.
pub fn day_bounds_ms(date: NaiveDate) -> (i64, i64) {
    let start = local_ms(date, NaiveTime::MIN);
    let end = match date.succ_opt() {
        Some(next) => local_ms(next, NaiveTime::MIN),
        None => start + DAY_MS,
    };
    (start, end)
}

/// `yyyy-MM-dd HH:mm:ss`
pub fn format_iso(ts_ms: i64) -> String {
    to_local(ts_ms).format("%Y-%m-%d %H:%M:%S").to_string()
}

/// `yyyy-MM-dd HH:mm`, used by the list views.
pub fn format_short(ts_ms: i64) -> String {
    to_local(ts_ms).format("%Y-%m-%d %H:%M").to_string()
}

/// `yyyyMMdd_HHmmss`, used to stamp export file names.
pub fn file_stamp(now: &DateTime<Local>) -> String {
    now.format("%Y%m%d_%H%M%S").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(y: i32, m: u32, d: u32, hh: u32, mm: u32, ss: u32) -> DateTime<Local> {
        Local.with_ymd_and_hms(y, m, d, hh, mm, ss).unwrap()
    }

    #[test]
    fn iso_round_trips_local_time() {
        let dt = at(2025, 3, 14, 9, 5, 7);
        assert_eq!(format_iso(dt.timestamp_millis()), "2025-03-14 09:05:07");
    }

    #[test]
    fn file_stamp_has_no_separators() {
        assert_eq!(file_stamp(&at(2025, 1, 2, 3, 4, 5)), "20250102_030405");
    }

    #[test]
    fn day_bounds_cover_whole_date() {
        let date = NaiveDate::from_ymd_opt(2025, 6, 10).unwrap();
        let (start, end) = day_bounds_ms(date);
        assert_eq!(start, at(2025, 6, 10, 0, 0, 0).timestamp_millis());
        assert_eq!(end, at(2025, 6, 11, 0, 0, 0).timestamp_millis());
    }
}
