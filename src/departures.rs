use crate::board::DepartureBoard;
use crate::flight::Flight;
use tabled::settings::{Alignment, Style};
use tabled::{Table, Tabled};

#[derive(Tabled)]
struct DepartureRow {
    #[tabled(rename = "Flight")]
    flight_number: String,
    #[tabled(rename = "Destination")]
    destination: String,
    #[tabled(rename = "Airline")]
    airline: String,
    #[tabled(rename = "Departs")]
    departure: String,
    #[tabled(rename = "Terminal")]
    terminal: String,
    #[tabled(rename = "Status")]
    status: String,
}

impl From<&Flight> for DepartureRow {
    fn from(flight: &Flight) -> Self {
        DepartureRow {
            flight_number: flight.flight_number.clone(),
            destination: flight.destination.to_string(),
            airline: flight.airline.clone(),
            departure: flight.departure_display(),
            terminal: flight.terminal_display(),
            status: flight.status.colorize().to_string(),
        }
    }
}

/// Two lines per flight: number and destination, then the raw status.
pub fn departures(board: &DepartureBoard) -> Vec<String> {
    board
        .flights
        .iter()
        .flat_map(|f| {
            [
                format!("Flight {} to {}", f.flight_number, f.destination),
                format!("\tStatus: {}", f.status.raw_value()),
            ]
        })
        .collect()
}

pub fn print_departures(board: &DepartureBoard) {
    for line in departures(board) {
        println!("{}", line);
    }
}

pub fn departures_detailed(board: &DepartureBoard) -> Vec<String> {
    board
        .flights
        .iter()
        .map(|f| {
            format!(
                "Destination: {}\t Airline: {}\t Flight Number: {}\t Departure Time: {}\t Terminal: {}\t Status: {}",
                f.destination,
                f.airline,
                f.flight_number,
                f.departure_display(),
                f.terminal_display(),
                f.status.raw_value()
            )
        })
        .collect()
}

pub fn print_departures2(board: &DepartureBoard) {
    for line in departures_detailed(board) {
        println!("{}", line);
    }
}

pub fn departures_table(board: &DepartureBoard) -> String {
    let rows: Vec<DepartureRow> = board.flights.iter().map(DepartureRow::from).collect();
    let mut table = Table::new(rows);
    table.with(Style::rounded());
    table.with(Alignment::left());
    table.to_string()
}
