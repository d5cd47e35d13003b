use colored::*;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use smoot::models::{ReasonTag, RiskLevel};
use smoot::{ReferenceData, TripReport, Verdict};

/// Render a trip report: summary box, severity-sorted table, verdict.
pub fn render(report: &TripReport, subject: &str, quiet: bool) {
    let verdict = report.verdict();

    if quiet {
        println!(
            "{}  Red: {}  Yellow: {}  Green: {}  No data: {}",
            verdict_label(verdict),
            report.count(RiskLevel::Red).to_string().red(),
            report.count(RiskLevel::Yellow).to_string().yellow(),
            report.count(RiskLevel::Green).to_string().green(),
            report.count(RiskLevel::Grey).to_string().dimmed(),
        );
        return;
    }

    println!("\n {} v{}", "smoot".bold(), env!("CARGO_PKG_VERSION"));
    println!(" Checking: {}", subject);
    if let Some(window) = &report.window {
        println!(" Travel:   {}\n", window);
    }

    println!(" ┌────────────────────────────────────────────────────┐");
    println!(" │  {:<48} │", "SUMMARY".bold());
    println!(" │  {:<48} │", format!("Airlines checked : {}", report.len()));
    println!(
        " │  {:<48} │",
        format!("{}  High risk     : {:>4}", "✗".red(), report.count(RiskLevel::Red))
    );
    println!(
        " │  {:<48} │",
        format!("{}  Medium risk   : {:>4}", "⚠".yellow(), report.count(RiskLevel::Yellow))
    );
    println!(
        " │  {:<48} │",
        format!("{}  Low risk      : {:>4}", "✓".green(), report.count(RiskLevel::Green))
    );
    println!(
        " │  {:<48} │",
        format!("{}  No data       : {:>4}", "?".dimmed(), report.count(RiskLevel::Grey))
    );
    println!(" └────────────────────────────────────────────────────┘\n");

    if !report.is_empty() {
        render_table(report);
        println!();
    }

    println!(" {}", "VERDICT".bold());
    println!(" {}\n", colorize_verdict(verdict));
}

fn render_table(report: &TripReport) {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            Cell::new("Airline").add_attribute(Attribute::Bold),
            Cell::new("Code").add_attribute(Attribute::Bold),
            Cell::new("Risk").add_attribute(Attribute::Bold),
            Cell::new("Reasons").add_attribute(Attribute::Bold),
        ]);

    for assessment in report.sorted() {
        let (label, color) = level_style(assessment.result.level);
        let reasons: Vec<String> = assessment
            .result
            .reasons
            .iter()
            .map(|r| r.to_string())
            .collect();

        table.add_row(vec![
            Cell::new(&assessment.name),
            Cell::new(&assessment.code),
            Cell::new(label).fg(color).set_alignment(CellAlignment::Center),
            Cell::new(reasons.join("\n")).fg(reason_color(assessment)),
        ]);
    }

    println!("{}", table);
}

/// Print substitute suggestions for an at-risk chosen airline.
pub fn render_alternatives(chosen: &str, alternatives: &[String], quiet: bool) {
    if alternatives.is_empty() {
        println!(
            " {} No safe alternative to {} serves this location.",
            "[ALTERNATIVES]".yellow().bold(),
            chosen
        );
        return;
    }

    if quiet {
        println!("Alternatives: {}", alternatives.join(", "));
        return;
    }

    println!(
        " {} Lower-risk airlines instead of {}:",
        "[ALTERNATIVES]".green().bold(),
        chosen
    );
    for name in alternatives {
        println!("   {} {}", "✓".green(), name);
    }
    println!();
}

pub fn render_airlines(data: &ReferenceData) {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            Cell::new("Code").add_attribute(Attribute::Bold),
            Cell::new("Name").add_attribute(Attribute::Bold),
            Cell::new("Bargaining groups").add_attribute(Attribute::Bold),
        ]);

    for (code, record) in &data.airlines {
        let groups: Vec<&str> = record.unions.iter().map(|g| g.label.as_str()).collect();
        table.add_row(vec![
            Cell::new(code),
            Cell::new(&record.name),
            Cell::new(groups.join(", ")),
        ]);
    }

    println!("{}", table);
}

pub fn render_locations(data: &ReferenceData) {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            Cell::new("Location").add_attribute(Attribute::Bold),
            Cell::new("Airlines").add_attribute(Attribute::Bold),
        ]);

    for (location, codes) in &data.routes {
        table.add_row(vec![Cell::new(location), Cell::new(codes.join(", "))]);
    }

    println!("{}", table);
}

fn level_style(level: RiskLevel) -> (&'static str, Color) {
    match level {
        RiskLevel::Red => ("✗ high", Color::Red),
        RiskLevel::Yellow => ("⚠ medium", Color::Yellow),
        RiskLevel::Green => ("✓ low", Color::Green),
        RiskLevel::Grey => ("? no data", Color::DarkGrey),
    }
}

fn reason_color(assessment: &smoot::AirlineAssessment) -> Color {
    let critical = assessment
        .result
        .reasons
        .iter()
        .any(|r| r.tag == ReasonTag::Critical);
    if critical {
        Color::Red
    } else {
        Color::Reset
    }
}

fn verdict_label(verdict: Verdict) -> ColoredString {
    let label = verdict.to_string();
    match verdict {
        Verdict::Jeopardy => label.red().bold(),
        Verdict::Caution => label.yellow().bold(),
        Verdict::GoodToGo => label.green().bold(),
        Verdict::NoData => label.dimmed(),
    }
}

fn colorize_verdict(verdict: Verdict) -> ColoredString {
    match verdict {
        Verdict::Jeopardy => verdict.message().red(),
        Verdict::Caution => verdict.message().yellow(),
        Verdict::GoodToGo => verdict.message().green(),
        Verdict::NoData => verdict.message().dimmed(),
    }
}
