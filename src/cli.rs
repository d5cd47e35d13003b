use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "smoot",
    about = "Don't get stranded: check airline strike risk for your travel dates",
    version
)]
pub struct Cli {
    /// Config file [default: ./.smoot/config.toml, fallback ~/.config/smoot/config.toml]
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Airline database (overrides config)
    #[arg(long = "airlines-db", global = true, value_name = "FILE")]
    pub airlines_db: Option<PathBuf>,

    /// Route registry (overrides config)
    #[arg(long = "routes-db", global = true, value_name = "FILE")]
    pub routes_db: Option<PathBuf>,

    /// Report format
    #[arg(long, global = true, default_value = "terminal", value_name = "FORMAT")]
    pub report: ReportFormat,

    /// Enable debug logging (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Only print the verdict line
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Check one or more airlines by code or name
    Airline {
        /// Airline codes or display names
        #[arg(required = true, value_name = "AIRLINE")]
        airlines: Vec<String>,

        #[command(flatten)]
        dates: TripDates,
    },
    /// Check every airline serving a city or airport
    Location {
        location: String,

        #[command(flatten)]
        dates: TripDates,

        /// Airline you intend to fly; suggests GREEN substitutes if it is at risk
        #[arg(long, value_name = "AIRLINE")]
        chosen: Option<String>,
    },
    /// List known airlines or locations
    List {
        #[arg(default_value = "airlines")]
        what: ListTarget,
    },
}

#[derive(clap::Args, Debug)]
pub struct TripDates {
    /// Departure date (YYYY-MM-DD)
    #[arg(long, value_parser = parse_date)]
    pub from: NaiveDate,

    /// Return date (YYYY-MM-DD) [default: same as --from]
    #[arg(long, value_parser = parse_date)]
    pub to: Option<NaiveDate>,
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum ReportFormat {
    Terminal,
    Json,
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum ListTarget {
    Airlines,
    Locations,
}

fn parse_date(s: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|e| format!("expected YYYY-MM-DD: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_database_flags_do_not_clash_with_airline_queries() {
        let cli = Cli::try_parse_from([
            "smoot",
            "--airlines-db",
            "db.json",
            "airline",
            "AC",
            "--from",
            "2025-06-01",
        ])
        .unwrap();
        assert_eq!(cli.airlines_db, Some(PathBuf::from("db.json")));
        match cli.command {
            Command::Airline { airlines, .. } => assert_eq!(airlines, ["AC"]),
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_airline_command() {
        let cli = Cli::try_parse_from([
            "smoot", "airline", "AC", "WestJet", "--from", "2025-06-01", "--to", "2025-06-10",
        ])
        .unwrap();
        match cli.command {
            Command::Airline { airlines, dates } => {
                assert_eq!(airlines, ["AC", "WestJet"]);
                assert_eq!(dates.to, NaiveDate::from_ymd_opt(2025, 6, 10));
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_bad_date_rejected() {
        assert!(Cli::try_parse_from(["smoot", "airline", "AC", "--from", "06/01/2025"]).is_err());
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "smoot", "location", "YYZ", "--from", "2025-06-01", "--report", "json", "-q",
        ])
        .unwrap();
        assert!(matches!(cli.report, ReportFormat::Json));
        assert!(cli.quiet);
    }
}
