use chrono::{Local, NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

/// Departure timestamp. Renders as time of day only, e.g. `1:26 PM`.
#[derive(Debug, Clone, Copy, Ord, Eq, PartialEq, Serialize, Deserialize, PartialOrd)]
#[serde(transparent)]
pub struct Time(pub NaiveDateTime);

impl Time {
    const SHORT_TIME: &'static str = "%-I:%M %p";

    pub fn now() -> Time {
        Time(Local::now().naive_local())
    }

    pub fn on(date: NaiveDate, hour: u32, minute: u32) -> Option<Time> {
        date.and_hms_opt(hour, minute, 0).map(Time)
    }

    /// Same day as `self`, moved to `hh:mm`.
    pub fn with_clock(&self, clock: &str) -> Option<Time> {
        let t = NaiveTime::parse_from_str(clock, "%H:%M").ok()?;
        Time::on(self.0.date(), t.hour(), t.minute())
    }
}

impl std::fmt::Display for Time {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.format(Self::SHORT_TIME))
    }
}
