use crate::airport::Airport;
use crate::error::BoardError;
use crate::flight::FlightStatus::{Boarding, Canceled, Delayed, EnRoute, Scheduled};
use crate::flight::{Flight, TBD};
use crate::time::Time;
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::path::Path;


#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DepartureBoard {
    pub current_airport: Airport,
    pub flights: Vec<Flight>,
}

impl DepartureBoard {
    pub fn new(current_airport: Airport, flights: Vec<Flight>) -> DepartureBoard {
        info!("Departure board for {} with {} flights", current_airport, flights.len());
        DepartureBoard {
            current_airport,
            flights,
        }
    }

    pub fn load_from_file(path: &Path) -> Result<Self, BoardError> {
        let data = std::fs::read_to_string(path).map_err(|source| BoardError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let raw: DepartureBoard = serde_json::from_str(&data).map_err(|source| BoardError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        debug!("Parsed {} flights from {}", raw.flights.len(), path.display());
        Ok(DepartureBoard::new(raw.current_airport, raw.flights))
    }

    /// Three sample departures from Mexico, leaving now.
    pub fn demo() -> DepartureBoard {
        let now = Time::now();
        let mut board = DepartureBoard::new(Airport::new("Mexico"), vec![]);
        board.add_flight(Flight {
            destination: Airport::new("Mexico"),
            departure_time: Some(now),
            terminal: None,
            airline: "AeroMexico".to_string(),
            flight_number: "AA2291".to_string(),
            status: Scheduled,
        });
        board.add_flight(Flight {
            destination: Airport::new("France"),
            departure_time: Some(now),
            terminal: Some("B".to_string()),
            airline: "AirFrance".to_string(),
            flight_number: "VS4".to_string(),
            status: Canceled,
        });
        board.add_flight(Flight {
            destination: Airport::new("United States"),
            departure_time: None,
            terminal: Some("A".to_string()),
            airline: "DeltaAir".to_string(),
            flight_number: "UA9717".to_string(),
            status: Delayed,
        });
        board
    }

    pub fn add_flight(&mut self, flight: Flight) {
        debug!("Adding flight {} to {}", flight.flight_number, flight.destination);
        self.flights.push(flight);
    }

    /// One passenger message per flight, in board order.
    pub fn alerts(&self) -> Vec<String> {
        self.flights.iter().map(alert_for).collect()
    }

    pub fn alert_passengers(&self) {
        for line in self.alerts() {
            println!("{}", line);
        }
    }
}

fn alert_for(flight: &Flight) -> String {
    let city = &flight.destination;
    match flight.status {
        Canceled => format!(
            "We're sorry but your flight to {} has been canceled, here is a $500 voucher.",
            city
        ),
        EnRoute => format!("Your flight to {} is on time.", city),
        Scheduled => format!(
            "Your flight to {} is scheduled to depart at {}.",
            city,
            flight.departure_display()
        ),
        Delayed => format!("Your flight to {} is on route but delayed.", city),
        Boarding => match &flight.terminal {
            Some(terminal) => format!(
                "Your flight is boarding, please head to terminal: {} immediately. The doors are closing soon.",
                terminal
            ),
            None => format!(
                "Your flight is boarding, but the terminal is {}. Please see the nearest information desk for more details.",
                TBD
            ),
        },
    }
}
