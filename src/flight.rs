use crate::airport::Airport;
use crate::error::BoardError;
use crate::time::Time;
use colored::{ColoredString, Colorize};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const TBD: &str = "TBD";

/// Renders a value that may not be known yet, falling back to `TBD`.
pub fn or_tbd<T: fmt::Display>(value: Option<T>) -> String {
    value.map(|v| v.to_string()).unwrap_or_else(|| TBD.to_string())
}

#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlightStatus {
    EnRoute,
    Scheduled,
    Canceled,
    Delayed,
    Boarding,
}

impl FlightStatus {
    pub const ALL: [FlightStatus; 5] = [
        FlightStatus::EnRoute,
        FlightStatus::Scheduled,
        FlightStatus::Canceled,
        FlightStatus::Delayed,
        FlightStatus::Boarding,
    ];

    pub fn raw_value(&self) -> &'static str {
        match self {
            FlightStatus::EnRoute => "enroute",
            FlightStatus::Scheduled => "scheduled",
            FlightStatus::Canceled => "canceled",
            FlightStatus::Delayed => "delayed",
            FlightStatus::Boarding => "boarding",
        }
    }

    pub fn colorize(&self) -> ColoredString {
        let raw = self.raw_value();
        match self {
            FlightStatus::EnRoute => raw.green(),
            FlightStatus::Scheduled => raw.normal(),
            FlightStatus::Canceled => raw.red().bold(),
            FlightStatus::Delayed => raw.yellow(),
            FlightStatus::Boarding => raw.cyan().bold(),
        }
    }
}

impl fmt::Display for FlightStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.raw_value())
    }
}

impl FromStr for FlightStatus {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FlightStatus::ALL
            .into_iter()
            .find(|status| status.raw_value().eq_ignore_ascii_case(s))
            .ok_or_else(|| BoardError::UnknownStatus(s.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Flight {
    pub destination: Airport,
    pub departure_time: Option<Time>,
    pub terminal: Option<String>,
    pub airline: String,
    pub flight_number: String,
    pub status: FlightStatus,
}

impl Flight {
    pub fn departure_display(&self) -> String {
        or_tbd(self.departure_time.as_ref())
    }

    pub fn terminal_display(&self) -> String {
        or_tbd(self.terminal.as_deref())
    }
}
