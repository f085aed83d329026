//! Task report — the outcome returned for a classified submission.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::intent::IntentRule;

/// Completion status attached to every report.
///
/// There is only one value: a submission that passes validation always
/// completes, there is no downstream dependency that can fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportStatus {
    #[default]
    Completed,
}

impl fmt::Display for ReportStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Completed => f.write_str("completed"),
        }
    }
}

/// Cosmetic confidence score in `[0.82, 0.97]`, rounded to two decimals.
///
/// Not a calibrated probability — a presentation affordance attached to
/// every report.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Confidence(f64);

impl Confidence {
    /// Inclusive lower bound of the score range.
    pub const FLOOR: f64 = 0.82;
    /// Width of the score range above [`FLOOR`](Self::FLOOR).
    pub const SPAN: f64 = 0.15;

    /// Map a unit sample from `[0, 1)` into the score range.
    ///
    /// Samples outside the unit interval are clamped before mapping, so the
    /// result always lands in `[0.82, 0.97]` after rounding.
    #[must_use]
    pub fn from_unit(unit: f64) -> Self {
        let raw = Self::SPAN.mul_add(unit.clamp(0.0, 1.0), Self::FLOOR);
        Self((raw * 100.0).round() / 100.0)
    }

    /// The rounded score.
    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }
}

impl fmt::Display for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

/// Outcome of a classified task submission — the wire response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskReport {
    pub status: ReportStatus,
    pub summary: String,
    pub detected_intent: String,
    pub suggested_actions: Vec<String>,
    pub confidence: Confidence,
}

impl TaskReport {
    /// Assemble a report from the winning rule and a sampled confidence.
    #[must_use]
    pub fn new(rule: &IntentRule, confidence: Confidence) -> Self {
        Self {
            status: ReportStatus::Completed,
            summary: rule.summary.clone(),
            detected_intent: rule.intent.clone(),
            suggested_actions: rule.actions.clone(),
            confidence,
        }
    }
}
