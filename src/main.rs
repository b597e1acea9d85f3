use crate::airfare::{calculate_airfare, format_usd};
use crate::airport::Airport;
use crate::board::DepartureBoard;
use crate::departures::{departures_table, print_departures, print_departures2};
use crate::flight::{Flight, FlightStatus};
use crate::time::Time;
use clap::Parser;
use log::{info, warn};
use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::{Context, Editor, Helper, Highlighter, Hinter, Validator};
use std::path::PathBuf;

mod airfare;
mod airport;
mod board;
mod departures;
mod error;
mod flight;
mod time;

#[derive(Parser)]
struct Args {
    /// Path to a JSON departure board; the built-in demo board is used when omitted
    #[arg(short, long, value_name = "FILE")]
    scenario: Option<PathBuf>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(short, long, default_value = "warn")]
    log_level: String,
}

#[derive(Helper, Hinter, Highlighter, Validator)]
pub struct CompleteHelper {
    pub commands: Vec<String>,
}

impl Completer for CompleteHelper {
    type Candidate = Pair;

    fn complete(&self, line: &str, _pos: usize, _ctx: &Context<'_>) -> rustyline::Result<(usize, Vec<Pair>)> {
        let mut candidates = Vec::new();

        for cmd in &self.commands {
            if cmd.starts_with(line) {
                candidates.push(Pair {
                    display: cmd.clone(),
                    replacement: format!("{} ", cmd),
                });
            }
        }

        Ok((0, candidates))
    }
}

/// Underscores stand in for spaces, since arguments are split on whitespace.
fn words(arg: &str) -> String {
    arg.replace('_', " ")
}

fn optional<'a>(arg: Option<&&'a str>) -> Option<&'a str> {
    arg.copied().filter(|s| *s != "-")
}

fn parse_flight(parts: &[&str]) -> Result<Flight, String> {
    let [dest, airline, number, status, rest @ ..] = parts else {
        return Err("Usage: add <dest> <airline> <number> <status> [HH:MM|-] [terminal|-]".to_string());
    };
    let status = status.parse::<FlightStatus>().map_err(|e| e.to_string())?;
    let departure_time = match optional(rest.first()) {
        Some(clock) => Some(
            Time::now()
                .with_clock(clock)
                .ok_or_else(|| format!("Invalid departure time: {} (expected HH:MM)", clock))?,
        ),
        None => None,
    };
    Ok(Flight {
        destination: Airport::new(&words(dest)),
        departure_time,
        terminal: optional(rest.get(1)).map(words),
        airline: words(airline),
        flight_number: words(number),
        status,
    })
}

fn parse_fare(parts: &[&str]) -> Option<(u32, u32, u32)> {
    let [bags, miles, travelers] = parts else {
        return None;
    };
    Some((bags.parse().ok()?, miles.parse().ok()?, travelers.parse().ok()?))
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&args.log_level)).init();

    let mut board = match &args.scenario {
        Some(path) => {
            let board = DepartureBoard::load_from_file(path)?;
            info!("Loaded departures from {}", path.display());
            board
        }
        None => DepartureBoard::demo(),
    };
    println!(
        "Departures board online at {}. {} flights listed.",
        board.current_airport,
        board.flights.len()
    );

    let config = rustyline::Config::builder()
        .history_ignore_space(true)
        .completion_type(rustyline::CompletionType::List)
        .build();

    let helper = CompleteHelper {
        commands: vec![
            "ls".to_string(),
            "departures".to_string(),
            "details".to_string(),
            "alert".to_string(),
            "fare".to_string(),
            "add".to_string(),
            "help".to_string(),
            "exit".to_string(),
        ],
    };

    let mut rl = Editor::with_config(config)?;
    rl.set_helper(Some(helper));

    loop {
        let readline = rl.readline(">> ");
        match readline {
            Ok(line) => {
                let trimmed = line.trim();
                if trimmed.is_empty() { continue; }

                rl.add_history_entry(trimmed)?;

                let parts: Vec<&str> = trimmed.split_whitespace().collect();
                match parts[0] {
                    "ls" => {
                        if board.flights.is_empty() {
                            println!("No departures listed.")
                        } else {
                            println!("{}", departures_table(&board));
                        }
                    },
                    "departures" => print_departures(&board),
                    "details" => print_departures2(&board),
                    "alert" => board.alert_passengers(),
                    "fare" => {
                        if let Some((bags, miles, travelers)) = parse_fare(&parts[1..]) {
                            let fare = calculate_airfare(bags, miles, travelers);
                            println!("Total airfare: {}", format_usd(fare));
                        } else {
                            warn!("Rejected fare arguments: {:?}", &parts[1..]);
                            println!("Usage: fare <bags> <miles> <travelers>");
                        }
                    },
                    "add" => match parse_flight(&parts[1..]) {
                        Ok(flight) => {
                            println!("Added flight {} to {}.", flight.flight_number, flight.destination);
                            board.add_flight(flight);
                        },
                        Err(msg) => {
                            warn!("Rejected flight: {}", msg);
                            println!("{}", msg);
                        },
                    },
                    "help" | "?" => {
                        println!("\nAvailable Commands:");
                        println!("  ls                  - List all departures in a table");
                        println!("  departures          - Print flight number, destination and status");
                        println!("  details             - Print one detailed line per departure");
                        println!("  alert               - Send a status alert to every passenger");
                        println!("  fare <b> <m> <t>    - Airfare for <b> checked bags, <m> miles and <t> travelers");
                        println!("  add <dest> <airline> <number> <status> [HH:MM|-] [terminal|-]");
                        println!("                      - Append a departure; use _ for spaces, - for unknown");
                        println!("  help / ?            - Show this help menu");
                        println!("  exit / quit         - Close the board\n");
                    },
                    "exit" | "quit" => break,
                    _ => println!("Unknown command: {}", parts[0]),
                }
            },
            Err(ReadlineError::Interrupted) => {
                println!("CTRL-C");
                break;
            },
            Err(ReadlineError::Eof) => {
                println!("CTRL-D");
                break;
            },
            Err(err) => {
                println!("Error: {:?}", err);
                break;
            }
        }
    }
    Ok(())
}
