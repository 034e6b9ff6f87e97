use crate::models::settings::Settings;
use crate::utils::date::local_ms;
use chrono::NaiveDate;

/// Latest on-time instant: shift start on `reference_day` plus the grace period.
pub fn late_threshold_ms(settings: &Settings, reference_day: NaiveDate) -> i64 {
    local_ms(reference_day, settings.shift_start) + i64::from(settings.grace_minutes) * 60_000
}

/// A sign-in is late when it is strictly after the threshold.
///
/// The threshold is anchored on `reference_day`, which callers take from the
/// evaluator's current time, not from the sign-in timestamp.
pub fn is_late(sign_in_ms: i64, settings: &Settings, reference_day: NaiveDate) -> bool {
    sign_in_ms > late_threshold_ms(settings, reference_day)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Local, NaiveTime, TimeZone};

    fn settings(start: (u32, u32), grace: u32) -> Settings {
        Settings {
            shift_start: NaiveTime::from_hms_opt(start.0, start.1, 0).unwrap(),
            grace_minutes: grace,
            ..Settings::default()
        }
    }

    fn ms(h: u32, m: u32, s: u32, milli: i64) -> i64 {
        Local
            .with_ymd_and_hms(2025, 5, 12, h, m, s)
            .unwrap()
            .timestamp_millis()
            + milli
    }

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 5, 12).unwrap()
    }

    #[test]
    fn boundary_is_on_time() {
        let s = settings((9, 0), 5);
        assert!(!is_late(ms(9, 5, 0, 0), &s, day()));
        assert!(is_late(ms(9, 5, 0, 1), &s, day()));
    }

    #[test]
    fn before_start_is_on_time() {
        assert!(!is_late(ms(8, 30, 0, 0), &settings((9, 0), 0), day()));
    }

    #[test]
    fn zero_grace_means_any_millisecond_after_start_is_late() {
        let s = settings((9, 0), 0);
        assert!(!is_late(ms(9, 0, 0, 0), &s, day()));
        assert!(is_late(ms(9, 0, 0, 1), &s, day()));
    }

    #[test]
    fn ten_past_with_five_minutes_grace_is_late() {
        assert!(is_late(ms(9, 10, 0, 0), &settings((9, 0), 5), day()));
    }

    #[test]
    fn threshold_follows_reference_day_not_sign_in_day() {
        let s = settings((9, 0), 5);
        let next_day = day().succ_opt().unwrap();
        // 23:00 on the 12th is before 09:05 on the 13th
        assert!(!is_late(ms(23, 0, 0, 0), &s, next_day));
    }
}
