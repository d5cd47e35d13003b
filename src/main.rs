//! `smoot` — check airline labor-disruption risk for a trip.
//!
//! # Flow
//! 1. Parse CLI arguments ([`cli`]).
//! 2. Load config ([`smoot::config::load_config`]) and reference data
//!    ([`smoot::data::load_or_empty`]).
//! 3. Evaluate the requested airlines or location ([`smoot::TripAnalyzer`]).
//! 4. Render the requested report ([`report`]).
//! 5. Exit `0` (clean), `1` (verdict is JEOPARDY) or `2` (error or data unavailable).

mod cli;
mod report;

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use serde::Serialize;

use cli::{Cli, Command, ListTarget, ReportFormat, TripDates};
use smoot::config::load_config;
use smoot::data::load_or_empty;
use smoot::{AirlineAssessment, TripAnalyzer, TripReport, TripWindow, Verdict};

const EXIT_JEOPARDY: u8 = 1;
const EXIT_ERROR: u8 = 2;

/// Machine-readable report for `--report json`.
#[derive(Serialize)]
struct JsonReport<'a> {
    subject: &'a str,
    window: Option<TripWindow>,
    verdict: Verdict,
    verdict_message: &'static str,
    results: Vec<&'a AirlineAssessment>,
    #[serde(skip_serializing_if = "Option::is_none")]
    alternatives: Option<&'a [String]>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .init();

    match run(cli) {
        Ok(code) => ExitCode::from(code),
        Err(err) => {
            eprintln!("{} {:#}", "error:".red().bold(), err);
            ExitCode::from(EXIT_ERROR)
        }
    }
}

fn run(cli: Cli) -> Result<u8> {
    let cwd = std::env::current_dir()?;
    let mut config = load_config(&cwd, cli.config.as_deref())?;
    if let Some(path) = cli.airlines_db {
        config.data.airlines = path;
    }
    if let Some(path) = cli.routes_db {
        config.data.routes = path;
    }

    let (data, load_error) = load_or_empty(&config.data);
    if let Some(err) = &load_error {
        eprintln!("{} {}", "data unavailable:".red().bold(), err);
    }

    let analyzer = TripAnalyzer::new(&data, &config.policy);

    let code = match cli.command {
        Command::Airline { airlines, dates } => {
            let window = trip_window(&dates)?;
            // Unknown names fall through as codes and come back GREY
            let codes: Vec<String> = airlines
                .iter()
                .map(|q| analyzer.resolve_airline(q).unwrap_or_else(|_| q.clone()))
                .collect();
            let trip = analyzer.evaluate_trip_by_airlines(&codes, &window)?;
            let subject = airlines.join(", ");
            emit(&trip, &subject, None, cli.report, cli.quiet)?;
            exit_code(&trip)
        }
        Command::Location {
            location,
            dates,
            chosen,
        } => {
            let window = trip_window(&dates)?;
            let trip = analyzer.evaluate_trip_by_location(&location, &window)?;

            let alternatives = match chosen {
                Some(query) => {
                    let code = analyzer.resolve_airline(&query)?;
                    let alts = analyzer.find_alternatives(&code, &location, &window)?;
                    // The chosen airline normally serves the location and is
                    // already in the trip; an empty list only means something
                    // when it is at risk there.
                    let chosen_entry = trip.by_code(&code);
                    let at_risk = chosen_entry.is_some_and(|a| a.result.level.is_at_risk());
                    let name = chosen_entry
                        .map(|a| a.name.clone())
                        .or_else(|| data.airline(&code).map(|r| r.name.clone()))
                        .unwrap_or(code);
                    (at_risk || !alts.is_empty()).then_some((name, alts))
                }
                None => None,
            };

            emit(
                &trip,
                &location,
                alternatives.as_ref().map(|(name, alts)| (name.as_str(), alts.as_slice())),
                cli.report,
                cli.quiet,
            )?;
            exit_code(&trip)
        }
        Command::List { what } => {
            match (what, cli.report) {
                (ListTarget::Airlines, ReportFormat::Terminal) => {
                    report::terminal::render_airlines(&data)
                }
                (ListTarget::Locations, ReportFormat::Terminal) => {
                    report::terminal::render_locations(&data)
                }
                (ListTarget::Airlines, ReportFormat::Json) => {
                    let names: Vec<(&String, &String)> =
                        data.airlines.iter().map(|(c, r)| (c, &r.name)).collect();
                    println!("{}", serde_json::to_string_pretty(&names)?);
                }
                (ListTarget::Locations, ReportFormat::Json) => {
                    println!("{}", serde_json::to_string_pretty(&data.routes)?);
                }
            }
            0
        }
    };

    if load_error.is_some() {
        return Ok(EXIT_ERROR);
    }
    Ok(code)
}

fn trip_window(dates: &TripDates) -> Result<TripWindow> {
    let end = dates.to.unwrap_or(dates.from);
    Ok(TripWindow::new(dates.from, end)?)
}

fn emit(
    trip: &TripReport,
    subject: &str,
    alternatives: Option<(&str, &[String])>,
    format: ReportFormat,
    quiet: bool,
) -> Result<()> {
    match format {
        ReportFormat::Terminal => {
            report::terminal::render(trip, subject, quiet);
            if let Some((chosen, alts)) = alternatives {
                report::terminal::render_alternatives(chosen, alts, quiet);
            }
        }
        ReportFormat::Json => {
            let verdict = trip.verdict();
            let json = JsonReport {
                subject,
                window: trip.window,
                verdict,
                verdict_message: verdict.message(),
                results: trip.sorted(),
                alternatives: alternatives.map(|(_, alts)| alts),
            };
            println!("{}", serde_json::to_string_pretty(&json)?);
        }
    }
    Ok(())
}

fn exit_code(trip: &TripReport) -> u8 {
    if trip.verdict() == Verdict::Jeopardy {
        EXIT_JEOPARDY
    } else {
        0
    }
}
