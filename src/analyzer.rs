//! Trip-level analysis built on the per-airline evaluator.

use std::fmt;

use log::debug;
use serde::Serialize;

use crate::data::ReferenceData;
use crate::error::{Result, RiskError};
use crate::models::{RiskLevel, RiskResult, TripWindow};
use crate::risk::evaluator::{evaluate, RiskPolicy};

/// Evaluator result for one airline, with its code and display name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AirlineAssessment {
    pub code: String,
    /// Display name, or the code itself when the airline is unknown.
    pub name: String,
    #[serde(flatten)]
    pub result: RiskResult,
}

/// Overall verdict for a trip: the worst level among its airlines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    GoodToGo,
    Caution,
    Jeopardy,
    /// Nothing risk-bearing was evaluated (empty, or every airline GREY).
    NoData,
}

impl Verdict {
    pub fn message(self) -> &'static str {
        match self {
            Verdict::Jeopardy => {
                "JEOPARDY DETECTED: At least one of your flights has a high risk of strike action. Check refund policies."
            }
            Verdict::Caution => {
                "CAUTION: Labor disputes are active. Disruption is unlikely but possible. Monitor news."
            }
            Verdict::GoodToGo => "GOOD TO GO: No active labor disputes found for your dates.",
            Verdict::NoData => "NO DATA: None of the selected airlines are in the database.",
        }
    }

    fn from_level(level: RiskLevel) -> Self {
        match level {
            RiskLevel::Red => Verdict::Jeopardy,
            RiskLevel::Yellow => Verdict::Caution,
            RiskLevel::Green => Verdict::GoodToGo,
            RiskLevel::Grey => Verdict::NoData,
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::GoodToGo => write!(f, "GOOD TO GO"),
            Verdict::Caution => write!(f, "CAUTION"),
            Verdict::Jeopardy => write!(f, "JEOPARDY"),
            Verdict::NoData => write!(f, "NO DATA"),
        }
    }
}

/// Assessments for every airline of a trip, in evaluation order.
#[derive(Debug, Clone, Default, Serialize)]
pub struct TripReport {
    pub window: Option<TripWindow>,
    pub assessments: Vec<AirlineAssessment>,
}

impl TripReport {
    /// First assessment carrying this display name.
    pub fn get(&self, name: &str) -> Option<&RiskResult> {
        self.assessments
            .iter()
            .find(|a| a.name == name)
            .map(|a| &a.result)
    }

    /// First assessment for this airline code.
    pub fn by_code(&self, code: &str) -> Option<&AirlineAssessment> {
        self.assessments.iter().find(|a| a.code == code)
    }

    pub fn len(&self) -> usize {
        self.assessments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assessments.is_empty()
    }

    /// Worst level across the trip, ignoring GREY results.
    pub fn verdict(&self) -> Verdict {
        let worst = self
            .assessments
            .iter()
            .map(|a| a.result.level)
            .filter(|l| l.severity().is_some())
            .max_by_key(|l| l.severity());
        Verdict::from_level(worst.unwrap_or(RiskLevel::Grey))
    }

    /// Assessments ordered RED, YELLOW, GREEN, GREY. Ties keep evaluation order.
    pub fn sorted(&self) -> Vec<&AirlineAssessment> {
        let mut sorted: Vec<&AirlineAssessment> = self.assessments.iter().collect();
        sorted.sort_by_key(|a| a.result.level.display_rank());
        sorted
    }

    pub fn count(&self, level: RiskLevel) -> usize {
        self.assessments
            .iter()
            .filter(|a| a.result.level == level)
            .count()
    }
}

/// Runs the evaluator over sets of airlines drawn from one [`ReferenceData`].
///
/// Holds only shared references, so one analyzer can serve many callers.
pub struct TripAnalyzer<'a> {
    data: &'a ReferenceData,
    policy: &'a RiskPolicy,
}

impl<'a> TripAnalyzer<'a> {
    pub fn new(data: &'a ReferenceData, policy: &'a RiskPolicy) -> Self {
        Self { data, policy }
    }

    /// Accept an airline code or display name and return the code.
    pub fn resolve_airline(&self, query: &str) -> Result<String> {
        if self.data.airline(query).is_some() {
            return Ok(query.to_string());
        }
        if let Some(code) = self.data.code_for_name(query) {
            return Ok(code.to_string());
        }
        let upper = query.to_ascii_uppercase();
        if self.data.airline(&upper).is_some() {
            return Ok(upper);
        }
        Err(RiskError::UnknownAirline {
            query: query.to_string(),
        })
    }

    pub fn evaluate_airline(&self, code: &str, window: &TripWindow) -> Result<AirlineAssessment> {
        let record = self.data.airline(code);
        let result = evaluate(record, window, self.policy)?;
        debug!("{code} over {window}: {}", result.level);
        Ok(AirlineAssessment {
            code: code.to_string(),
            name: record.map_or_else(|| code.to_string(), |r| r.name.clone()),
            result,
        })
    }

    /// Evaluate each code in turn. Duplicates are evaluated again, not merged.
    pub fn evaluate_trip_by_airlines<S: AsRef<str>>(
        &self,
        codes: &[S],
        window: &TripWindow,
    ) -> Result<TripReport> {
        let assessments = codes
            .iter()
            .map(|code| self.evaluate_airline(code.as_ref(), window))
            .collect::<Result<Vec<_>>>()?;
        Ok(TripReport {
            window: Some(*window),
            assessments,
        })
    }

    pub fn evaluate_trip_by_location(
        &self,
        location: &str,
        window: &TripWindow,
    ) -> Result<TripReport> {
        let codes = self.serving(location)?;
        debug!("{location} served by {}", codes.join(", "));
        self.evaluate_trip_by_airlines(codes, window)
    }

    /// GREEN airlines serving `location` other than `chosen`, in registry order.
    ///
    /// Empty when the chosen airline needs no substitute (GREEN or GREY) or
    /// when no other airline is GREEN.
    pub fn find_alternatives(
        &self,
        chosen: &str,
        location: &str,
        window: &TripWindow,
    ) -> Result<Vec<String>> {
        let codes = self.serving(location)?;

        if !self.evaluate_airline(chosen, window)?.result.level.is_at_risk() {
            return Ok(Vec::new());
        }

        let mut alternatives = Vec::new();
        for code in codes.iter().filter(|c| c.as_str() != chosen) {
            let assessment = self.evaluate_airline(code, window)?;
            if assessment.result.level == RiskLevel::Green {
                alternatives.push(assessment.name);
            }
        }
        Ok(alternatives)
    }

    fn serving(&self, location: &str) -> Result<&'a [String]> {
        self.data
            .serving(location)
            .ok_or_else(|| RiskError::UnknownLocation {
                location: location.to_string(),
            })
    }
}
