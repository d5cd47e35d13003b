use std::fmt;

use chrono::NaiveDate;
use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{Result, RiskError};

/// Disruption risk for one airline over one trip window.
///
/// `Green < Yellow < Red` is the severity order. `Grey` means "no data" and
/// sits outside that order: it never contributes to a trip verdict and is
/// listed after everything else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RiskLevel {
    Green,
    Yellow,
    Red,
    Grey,
}

impl RiskLevel {
    /// Severity rank, `None` for `Grey`.
    pub fn severity(self) -> Option<u8> {
        match self {
            RiskLevel::Green => Some(0),
            RiskLevel::Yellow => Some(1),
            RiskLevel::Red => Some(2),
            RiskLevel::Grey => None,
        }
    }

    /// RED or YELLOW: worth looking for a substitute.
    pub fn is_at_risk(self) -> bool {
        matches!(self, RiskLevel::Red | RiskLevel::Yellow)
    }

    /// Position when listing results: RED, YELLOW, GREEN, then GREY.
    pub fn display_rank(self) -> u8 {
        match self {
            RiskLevel::Red => 0,
            RiskLevel::Yellow => 1,
            RiskLevel::Green => 2,
            RiskLevel::Grey => 3,
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RiskLevel::Green => write!(f, "GREEN"),
            RiskLevel::Yellow => write!(f, "YELLOW"),
            RiskLevel::Red => write!(f, "RED"),
            RiskLevel::Grey => write!(f, "GREY"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReasonTag {
    Critical,
    Warning,
    Caution,
    Ok,
    NoData,
}

impl fmt::Display for ReasonTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReasonTag::Critical => write!(f, "CRITICAL"),
            ReasonTag::Warning => write!(f, "WARNING"),
            ReasonTag::Caution => write!(f, "CAUTION"),
            ReasonTag::Ok => write!(f, "OK"),
            ReasonTag::NoData => write!(f, "NO DATA"),
        }
    }
}

/// One human-readable justification attached to a [`RiskResult`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reason {
    pub tag: ReasonTag,
    pub message: String,
}

impl Reason {
    pub fn new(tag: ReasonTag, message: impl Into<String>) -> Self {
        Self {
            tag,
            message: message.into(),
        }
    }
}

impl fmt::Display for Reason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.tag, self.message)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskResult {
    pub level: RiskLevel,
    /// In generation order, never re-sorted.
    pub reasons: Vec<Reason>,
}

/// Labor-negotiation state of one bargaining group at one airline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContractStatus {
    pub status: String,
    /// `"N/A"` or `YYYY-MM-DD`. Parsed lazily by the evaluator so a bad
    /// date is reported against the airline and group it belongs to.
    pub expiration_date: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BargainingGroup {
    pub label: String,
    pub contract: ContractStatus,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AirlineRecord {
    pub name: String,
    /// Bargaining groups in the order the data source lists them.
    #[serde(deserialize_with = "ordered_groups")]
    pub unions: Vec<BargainingGroup>,
}

/// Deserialize a `{ "pilots": {...}, ... }` object into a list, keeping
/// document order.
fn ordered_groups<'de, D>(deserializer: D) -> std::result::Result<Vec<BargainingGroup>, D::Error>
where
    D: Deserializer<'de>,
{
    struct GroupsVisitor;

    impl<'de> Visitor<'de> for GroupsVisitor {
        type Value = Vec<BargainingGroup>;

        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            f.write_str("a map of bargaining group to contract status")
        }

        fn visit_map<A>(self, mut map: A) -> std::result::Result<Self::Value, A::Error>
        where
            A: MapAccess<'de>,
        {
            let mut groups = Vec::with_capacity(map.size_hint().unwrap_or(0));
            while let Some((label, contract)) = map.next_entry::<String, ContractStatus>()? {
                if contract.status.trim().is_empty() {
                    return Err(serde::de::Error::custom(format!(
                        "empty status for group '{label}'"
                    )));
                }
                groups.push(BargainingGroup { label, contract });
            }
            Ok(groups)
        }
    }

    deserializer.deserialize_map(GroupsVisitor)
}

/// Departure-to-return date range, inclusive on both ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TripWindow {
    start: NaiveDate,
    end: NaiveDate,
}

impl TripWindow {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self> {
        if end < start {
            return Err(RiskError::InvalidTripWindow { start, end });
        }
        Ok(Self { start, end })
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }
}

impl fmt::Display for TripWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.start == self.end {
            write!(f, "{}", self.start)
        } else {
            write!(f, "{} → {}", self.start, self.end)
        }
    }
}
