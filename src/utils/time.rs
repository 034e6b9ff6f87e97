//! Time-of-day utilities: strict HH:MM parsing and formatting.

use crate::errors::{AppError, AppResult};
use chrono::NaiveTime;
use regex::Regex;
use std::sync::OnceLock;

fn hhmm_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^([01]\d|2[0-3]):([0-5]\d)$").expect("static regex"))
}

/// Parse a zero-padded 24h `HH:MM` string. Anything else (`9:5`, `24:00`,
/// `09:00:00`) is rejected.
pub fn parse_hhmm(t: &str) -> AppResult<NaiveTime> {
    let t = t.trim();
    let caps = hhmm_re()
        .captures(t)
        .ok_or_else(|| AppError::InvalidTime(t.to_string()))?;

    let h: u32 = caps[1]
        .parse()
        .map_err(|_| AppError::InvalidTime(t.to_string()))?;
    let m: u32 = caps[2]
        .parse()
        .map_err(|_| AppError::InvalidTime(t.to_string()))?;

    NaiveTime::from_hms_opt(h, m, 0).ok_or_else(|| AppError::InvalidTime(t.to_string()))
}

pub fn parse_optional_hhmm(input: Option<&String>) -> AppResult<Option<NaiveTime>> {
    input.map(|s| parse_hhmm(s)).transpose()
}

pub fn format_hhmm(t: NaiveTime) -> String {
    t.format("%H:%M").to_string()
}
