use crate::utils::time::format_hhmm;
use chrono::NaiveTime;
use serde::Serialize;

/// Named, reusable shift configuration.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ShiftTemplate {
    pub id: i64,
    pub name: String,
    pub start: NaiveTime,
    pub end: NaiveTime,
    pub grace: u32,
}

impl ShiftTemplate {
    pub fn describe(&self) -> String {
        format!(
            "{}: {}-{} • Grace {}m",
            self.name,
            format_hhmm(self.start),
            format_hhmm(self.end),
            self.grace
        )
    }
}
