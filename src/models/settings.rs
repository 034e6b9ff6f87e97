use super::shift_template::ShiftTemplate;
use crate::utils::time::format_hhmm;
use chrono::NaiveTime;
use serde::Serialize;

/// The single live shift configuration.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Settings {
    pub shift_start: NaiveTime,
    pub shift_end: NaiveTime,
    pub grace_minutes: u32,
    pub selfie_required: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            shift_start: NaiveTime::from_hms_opt(9, 0, 0).unwrap_or(NaiveTime::MIN),
            shift_end: NaiveTime::from_hms_opt(17, 0, 0).unwrap_or(NaiveTime::MIN),
            grace_minutes: 5,
            selfie_required: true,
        }
    }
}

impl Settings {
    /// Copy start/end/grace from a template, keeping the selfie flag.
    pub fn with_template(&self, t: &ShiftTemplate) -> Self {
        Self {
            shift_start: t.start,
            shift_end: t.end,
            grace_minutes: t.grace,
            selfie_required: self.selfie_required,
        }
    }

    pub fn describe(&self) -> String {
        format!(
            "Shift: {} - {} | Grace: {}m | Selfie required: {}",
            format_hhmm(self.shift_start),
            format_hhmm(self.shift_end),
            self.grace_minutes,
            if self.selfie_required { "yes" } else { "no" }
        )
    }
}
