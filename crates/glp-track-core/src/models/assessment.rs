//! Derived assessment types: red flags, titration advice, proximity warnings.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Risk level derived from a visit's red-flag assessment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Ok,
    Warn,
    Danger,
}

impl RiskLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            RiskLevel::Ok => "ok",
            RiskLevel::Warn => "warn",
            RiskLevel::Danger => "danger",
        }
    }
}

/// Red-flag assessment attached to a visit.
///
/// `flags` holds the human-readable descriptions of every rule that
/// matched, in rule order; each rule contributes at most one entry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RedFlags {
    pub level: RiskLevel,
    pub flags: Vec<String>,
}

impl RedFlags {
    /// Check whether the assessment requires urgent handling.
    pub fn is_danger(&self) -> bool {
        self.level == RiskLevel::Danger
    }
}

/// Outcome of a titration request.
///
/// `ok: false` is an ordinary advisory outcome (blocked escalation,
/// unrecognized drug, no visit on file), never an error. Exactly one
/// message is produced per call.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TitrationAdvice {
    pub ok: bool,
    pub message: String,
}

impl TitrationAdvice {
    pub(crate) fn proceed(message: impl Into<String>) -> Self {
        Self {
            ok: true,
            message: message.into(),
        }
    }

    pub(crate) fn blocked(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            message: message.into(),
        }
    }
}

/// Advisory raised when a candidate visit date falls within 7 days of an
/// existing visit. Never blocks submission.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProximityWarning {
    /// Date of the existing visit that triggered the warning
    pub conflicting_date: NaiveDate,
    pub message: String,
}
