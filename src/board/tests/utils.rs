use crate::airport::Airport;
use crate::board::DepartureBoard;
use crate::flight::{Flight, FlightStatus};
use crate::time::Time;
use chrono::NaiveDate;
use proptest::option;
use proptest::prelude::Strategy;
use proptest::prop_oneof;
use proptest::strategy::Just;

pub fn at(hour: u32, minute: u32) -> Time {
    Time::on(NaiveDate::from_ymd_opt(2019, 5, 30).unwrap(), hour, minute).unwrap()
}

pub fn add_flight(
    board: &mut DepartureBoard,
    destination: &str,
    departure_time: Option<Time>,
    terminal: Option<&str>,
    flight_number: &str,
    status: FlightStatus,
) {
    board.add_flight(Flight {
        destination: Airport::new(destination),
        departure_time,
        terminal: terminal.map(|t| t.to_string()),
        airline: "KLM".to_string(),
        flight_number: flight_number.to_string(),
        status,
    });
}

pub fn empty_board() -> DepartureBoard {
    DepartureBoard::new(Airport::new("JFK"), vec![])
}

pub fn arb_status() -> impl Strategy<Value = FlightStatus> {
    prop_oneof![
        Just(FlightStatus::EnRoute),
        Just(FlightStatus::Scheduled),
        Just(FlightStatus::Canceled),
        Just(FlightStatus::Delayed),
        Just(FlightStatus::Boarding),
    ]
}

pub fn arb_flight() -> impl Strategy<Value = Flight> {
    (
        "[A-Z][a-z]{2,10}",
        option::of((0..24u32, 0..60u32)),
        option::of("[A-D][0-9]?"),
        "[A-Z]{2} [0-9]{1,4}",
        arb_status(),
    )
        .prop_map(|(dest, clock, terminal, number, status)| Flight {
            destination: Airport::new(&dest),
            departure_time: clock.map(|(h, m)| at(h, m)),
            terminal,
            airline: "Delta Air Lines".to_string(),
            flight_number: number,
            status,
        })
}
