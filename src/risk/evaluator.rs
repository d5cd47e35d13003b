use log::trace;
use serde::Deserialize;

use crate::error::{Result, RiskError};
use crate::models::{
    AirlineRecord, BargainingGroup, Reason, ReasonTag, RiskLevel, RiskResult, TripWindow,
};
use crate::risk::classifier::{classify_status, StatusClass};
use crate::risk::expiry::{position, resolve_expiry, ExpiryPosition};

/// Tunables for the evaluator.
#[derive(Debug, Clone, Deserialize)]
pub struct RiskPolicy {
    /// A contract ending fewer than this many days after return is flagged.
    #[serde(default = "default_caution_days")]
    pub caution_days: i64,
}

fn default_caution_days() -> i64 {
    30
}

impl Default for RiskPolicy {
    fn default() -> Self {
        Self {
            caution_days: default_caution_days(),
        }
    }
}

/// Evaluate one airline against a trip window.
///
/// `None` stands for a code missing from the database and yields a GREY
/// result. Otherwise the bargaining groups are folded in stored order; the
/// level only ever moves up, and once RED no date checks run for the
/// remaining groups.
pub fn evaluate(
    record: Option<&AirlineRecord>,
    window: &TripWindow,
    policy: &RiskPolicy,
) -> Result<RiskResult> {
    let Some(record) = record else {
        return Ok(RiskResult {
            level: RiskLevel::Grey,
            reasons: vec![Reason::new(ReasonTag::NoData, "No data available.")],
        });
    };

    let init = RiskResult {
        level: RiskLevel::Green,
        reasons: Vec::new(),
    };

    let mut result = record.unions.iter().try_fold(init, |acc, group| {
        apply_group(acc, record, group, window, policy)
    })?;

    if result.level == RiskLevel::Green {
        result.reasons.push(Reason::new(
            ReasonTag::Ok,
            "All contracts active through the travel dates.",
        ));
    }

    Ok(result)
}

fn apply_group(
    mut acc: RiskResult,
    record: &AirlineRecord,
    group: &BargainingGroup,
    window: &TripWindow,
    policy: &RiskPolicy,
) -> Result<RiskResult> {
    let contract = &group.contract;
    let expiry = resolve_expiry(&contract.expiration_date).ok_or_else(|| {
        RiskError::MalformedExpirationDate {
            airline: record.name.clone(),
            group: group.label.clone(),
            value: contract.expiration_date.clone(),
        }
    })?;

    let class = classify_status(&contract.status);
    trace!(
        "{} / {}: status {:?} classified {:?}, expiry {}",
        record.name,
        group.label,
        contract.status,
        class,
        expiry
    );

    let label = title_case(&group.label);

    match class {
        StatusClass::Exempt => return Ok(acc),
        StatusClass::Critical => {
            acc.level = RiskLevel::Red;
            acc.reasons.push(Reason::new(
                ReasonTag::Critical,
                format!("{}: {}", label, contract.status),
            ));
            return Ok(acc);
        }
        StatusClass::Negotiating | StatusClass::Other => {}
    }

    if acc.level == RiskLevel::Red {
        return Ok(acc);
    }

    let date = &contract.expiration_date;
    let flagged = match position(expiry, window, policy.caution_days) {
        ExpiryPosition::BeforeTrip => Some(Reason::new(
            ReasonTag::Warning,
            format!("{label}: Contract expires BEFORE the trip ({date})"),
        )),
        ExpiryPosition::DuringTrip => Some(Reason::new(
            ReasonTag::Warning,
            format!("{label}: Contract expires DURING the trip ({date})"),
        )),
        ExpiryPosition::ShortlyAfter => Some(Reason::new(
            ReasonTag::Caution,
            format!("{label}: Contract expires shortly after return ({date})"),
        )),
        ExpiryPosition::Clear => None,
    };

    if let Some(reason) = flagged {
        acc.level = RiskLevel::Yellow;
        acc.reasons.push(reason);
    }

    if class == StatusClass::Negotiating && acc.level == RiskLevel::Green {
        acc.level = RiskLevel::Yellow;
        acc.reasons.push(Reason::new(
            ReasonTag::Warning,
            format!("{label}: Currently negotiating."),
        ));
    }

    Ok(acc)
}

/// Capitalize the first letter of every word, lowercase the rest.
/// A word starts after any non-alphabetic character.
fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut at_word_start = true;
    for c in s.chars() {
        if c.is_alphabetic() {
            if at_word_start {
                out.extend(c.to_uppercase());
            } else {
                out.extend(c.to_lowercase());
            }
            at_word_start = false;
        } else {
            out.push(c);
            at_word_start = true;
        }
    }
    out
}
