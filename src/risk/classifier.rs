/// How a contract status string affects risk, independent of dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusClass {
    /// No disruption possible (`Non-Union`, `Binding Arbitration`).
    Exempt,
    /// Strike action or an imminent legal path to one.
    Critical,
    /// Contract talks are under way.
    Negotiating,
    /// Anything else; judged on expiry date alone.
    Other,
}

const EXEMPT_STATUSES: &[&str] = &["Non-Union", "Binding Arbitration"];

const CRITICAL_MARKERS: &[&str] = &["Strike", "Impasse", "Cooling-off"];

/// Classify a raw contract status.
///
/// Exempt statuses match exactly. Critical markers match as case-sensitive
/// substrings, so `"Strike Vote"` and `"Strike Authorized"` are both critical
/// while `"strike"` is not.
pub fn classify_status(status: &str) -> StatusClass {
    if EXEMPT_STATUSES.contains(&status) {
        return StatusClass::Exempt;
    }

    if CRITICAL_MARKERS.iter().any(|m| status.contains(m)) {
        return StatusClass::Critical;
    }

    if status == "Negotiating" {
        return StatusClass::Negotiating;
    }

    StatusClass::Other
}
