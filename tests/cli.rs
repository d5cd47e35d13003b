mod common;

use std::path::Path;

use common::{fixture, smoot, smoot_with};
use predicates::str::contains;
use serde_json::Value;

fn json_output(args: &[&str]) -> (Value, Option<i32>) {
    let output = smoot().args(["--report", "json"]).args(args).output().unwrap();
    let value = serde_json::from_slice(&output.stdout).unwrap();
    (value, output.status.code())
}

fn result_names(report: &Value) -> Vec<String> {
    report["results"]
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["name"].as_str().unwrap().to_string())
        .collect()
}

#[test]
fn airline_green_trip_exits_clean() {
    smoot()
        .args(["airline", "PD", "F8", "--from", "2026-07-01", "--to", "2026-07-10"])
        .assert()
        .success()
        .stdout(contains("GOOD TO GO"));
}

#[test]
fn airline_by_display_name() {
    let (report, code) = json_output(&["airline", "Porter Airlines", "--from", "2026-07-01"]);
    assert_eq!(code, Some(0));
    assert_eq!(report["results"][0]["code"], "PD");
    assert_eq!(report["results"][0]["level"], "GREEN");
}

#[test]
fn strike_makes_jeopardy_and_exit_one() {
    smoot()
        .args(["airline", "AC", "--from", "2026-07-01", "--to", "2026-07-10"])
        .assert()
        .code(1)
        .stdout(contains("JEOPARDY DETECTED"));
}

#[test]
fn results_sorted_by_severity() {
    let (report, code) = json_output(&[
        "airline", "PD", "ZZ", "WS", "AC", "--from", "2026-07-01", "--to", "2026-07-10",
    ]);
    assert_eq!(code, Some(1));
    assert_eq!(report["verdict"], "jeopardy");
    assert_eq!(
        result_names(&report),
        ["Air Canada", "WestJet", "Porter Airlines", "ZZ"]
    );
    assert_eq!(report["results"][3]["level"], "GREY");
    assert_eq!(
        report["results"][0]["reasons"][0]["message"],
        "Flight Attendants: Strike Vote"
    );
}

#[test]
fn negotiating_is_caution() {
    let (report, code) = json_output(&["airline", "WS", "--from", "2026-07-01"]);
    assert_eq!(code, Some(0));
    assert_eq!(report["verdict"], "caution");
    assert_eq!(report["results"][0]["reasons"][0]["tag"], "WARNING");
}

#[test]
fn location_with_alternatives() {
    let (report, _) = json_output(&[
        "location", "YYZ", "--from", "2026-07-01", "--to", "2026-07-10", "--chosen", "AC",
    ]);
    assert_eq!(report["alternatives"], serde_json::json!(["Porter Airlines", "Flair Airlines"]));
}

#[test]
fn location_without_safe_alternative() {
    smoot()
        .args(["location", "YUL", "--from", "2026-07-01", "--chosen", "AC"])
        .assert()
        .code(1)
        .stdout(contains("No safe alternative"));
}

#[test]
fn location_unknown_airline_is_grey() {
    let (report, _) = json_output(&["location", "YVR", "--from", "2026-07-01"]);
    let last = report["results"].as_array().unwrap().last().unwrap().clone();
    assert_eq!(last["code"], "TS");
    assert_eq!(last["level"], "GREY");
}

#[test]
fn unknown_location_is_an_error() {
    smoot()
        .args(["location", "LHR", "--from", "2026-07-01"])
        .assert()
        .code(2)
        .stderr(contains("unknown location 'LHR'"));
}

#[test]
fn reversed_dates_rejected() {
    smoot()
        .args(["airline", "AC", "--from", "2026-07-10", "--to", "2026-07-01"])
        .assert()
        .code(2)
        .stderr(contains("invalid trip window"));
}

#[test]
fn malformed_expiry_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let airlines = dir.path().join("airlines.json");
    std::fs::write(
        &airlines,
        r#"{"XX": {"name": "Broken Air", "unions": {"pilots": {"status": "Active", "expiration_date": "next year"}}}}"#,
    )
    .unwrap();

    smoot_with(&airlines)
        .args(["airline", "XX", "--from", "2026-07-01"])
        .assert()
        .code(2)
        .stderr(contains("malformed expiration date 'next year'"));
}

#[test]
fn missing_database_reports_unavailable() {
    smoot_with(Path::new("/no/such/airlines_db.json"))
        .args(["airline", "AC", "--from", "2026-07-01"])
        .assert()
        .code(2)
        .stderr(contains("data unavailable"))
        .stdout(contains("NO DATA"));
}

#[test]
fn list_locations() {
    smoot()
        .args(["list", "locations"])
        .assert()
        .success()
        .stdout(contains("YYZ"))
        .stdout(contains("YVR"));
}

#[test]
fn config_file_sets_caution_window() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("config.toml");
    std::fs::write(
        &config,
        format!(
            "[data]\nairlines = {:?}\n\n[policy]\ncaution_days = 200\n",
            fixture("airlines_db.json")
        ),
    )
    .unwrap();

    // PD pilots expire 2030-06-30; with a 200-day caution window a trip
    // ending 2030-01-01 is flagged.
    let output = smoot()
        .arg("--config")
        .arg(&config)
        .args(["--report", "json", "airline", "PD", "--from", "2030-01-01"])
        .output()
        .unwrap();
    let report: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["results"][0]["level"], "YELLOW");
    assert_eq!(report["results"][0]["reasons"][0]["tag"], "CAUTION");
}

#[test]
fn airline_returns_full_json_report() {
    let (report, code) = json_output(&[
        "airline", "AC", "PD", "--from", "2026-07-01", "--to", "2026-07-10",
    ]);
    assert_eq!(code, Some(1));
    assert_eq!(report["subject"], "AC, PD");
    assert_eq!(report["window"]["start"], "2026-07-01");
    assert_eq!(report["window"]["end"], "2026-07-10");
    assert_eq!(report["verdict"], "jeopardy");
    assert!(report["verdict_message"]
        .as_str()
        .unwrap()
        .starts_with("JEOPARDY DETECTED"));
    assert!(report.get("alternatives").is_none());

    let results = report["results"].as_array().unwrap();
    assert_eq!(results.len(), 2);
    assert_eq!(results[0]["code"], "AC");
    assert_eq!(results[0]["level"], "RED");
    assert_eq!(results[1]["code"], "PD");
    assert_eq!(results[1]["level"], "GREEN");
    assert_eq!(
        results[1]["reasons"],
        serde_json::json!([{
            "tag": "OK",
            "message": "All contracts active through the travel dates."
        }])
    );
}

#[test]
fn no_expiry_stays_clear_in_any_year() {
    let dir = tempfile::tempdir().unwrap();
    let airlines = dir.path().join("airlines.json");
    std::fs::write(
        &airlines,
        r#"{"OP": {"name": "Open Air", "unions": {"pilots": {"status": "Active", "expiration_date": "N/A"}}}}"#,
    )
    .unwrap();

    for (from, to) in [("2099-12-01", "2099-12-30"), ("2100-01-01", "2100-01-05")] {
        let output = smoot_with(&airlines)
            .args(["--report", "json", "airline", "OP", "--from", from, "--to", to])
            .output()
            .unwrap();
        let report: Value = serde_json::from_slice(&output.stdout).unwrap();
        assert_eq!(report["results"][0]["level"], "GREEN", "trip {from}..{to}");
        assert_eq!(report["results"][0]["reasons"][0]["tag"], "OK");
    }
}
