use crate::board::DepartureBoard;
use crate::board::tests::utils::at;
use crate::error::BoardError;
use crate::flight::FlightStatus::{Boarding, Canceled, Delayed, EnRoute, Scheduled};
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

#[test]
fn test_load_default_scenario() {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("data/default.json");
    let board = DepartureBoard::load_from_file(&path).unwrap();

    assert_eq!("JFK", board.current_airport.to_string());
    assert_eq!(5, board.flights.len());
    assert_eq!(
        vec![Canceled, Scheduled, Scheduled, Boarding, EnRoute],
        board.flights.iter().map(|f| f.status).collect::<Vec<_>>()
    );
    assert_eq!(None, board.flights[0].departure_time);
    assert_eq!(Some(at(13, 26)), board.flights[1].departure_time);
    assert_eq!(None, board.flights[1].terminal);
}

#[test]
fn test_load_missing_file() {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("data/does-not-exist.json");
    let result = DepartureBoard::load_from_file(&path);
    assert!(matches!(result, Err(BoardError::Io { .. })));
}

#[test]
fn test_load_rejects_unknown_status() {
    let mut file = NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{"current_airport": {{"name": "JFK"}}, "flights": [{{
            "destination": {{"name": "Boston"}},
            "departure_time": null,
            "terminal": null,
            "airline": "KLM",
            "flight_number": "KL 6966",
            "status": "landed"
        }}]}}"#
    )
    .unwrap();

    let result = DepartureBoard::load_from_file(file.path());
    assert!(matches!(result, Err(BoardError::Parse { .. })));
}

#[test]
fn test_demo_board() {
    let board = DepartureBoard::demo();
    assert_eq!("Mexico", board.current_airport.to_string());
    assert_eq!(
        vec![Scheduled, Canceled, Delayed],
        board.flights.iter().map(|f| f.status).collect::<Vec<_>>()
    );
    assert_eq!(None, board.flights[0].terminal);
    assert_eq!(None, board.flights[2].departure_time);
}
