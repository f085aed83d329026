//! Intent rules — the fixed keyword table and the resolution algorithm.

use crate::error::{AutomataError, ValidationError};
use crate::task::TaskDescription;

/// One keyword → intent mapping with its canned response content.
///
/// The fallback rule carries an empty keyword; it is returned when no table
/// rule matches and its keyword is never tested against input.
#[derive(Debug, Clone)]
pub struct IntentRule {
    /// Lowercase ASCII token matched as a substring of the lowered input.
    pub keyword: String,
    /// Intent label reported when this rule wins (e.g. `data_analysis`).
    pub intent: String,
    /// Suggested follow-up actions, in presentation order.
    pub actions: Vec<String>,
    /// Canned summary line.
    pub summary: String,
}

impl IntentRule {
    fn new(keyword: &str, intent: &str, actions: [&str; 3], summary: &str) -> Self {
        Self {
            keyword: keyword.to_string(),
            intent: intent.to_string(),
            actions: actions.iter().map(ToString::to_string).collect(),
            summary: summary.to_string(),
        }
    }

    /// Check rule invariants.
    ///
    /// # Errors
    ///
    /// Returns [`AutomataError::Validation`] when the keyword is empty or
    /// contains anything but lowercase ASCII letters.
    pub fn validate(&self) -> Result<(), AutomataError> {
        if self.keyword.is_empty() || !self.keyword.bytes().all(|b| b.is_ascii_lowercase()) {
            return Err(ValidationError::InvalidKeyword.into());
        }
        Ok(())
    }
}

/// The ordered rule table plus the fallback rule.
///
/// Declaration order is match precedence: the first rule whose keyword
/// occurs in the lowered input wins, even when later keywords also occur.
/// Built once at startup and shared read-only afterwards.
#[derive(Debug, Clone)]
pub struct IntentCatalog {
    rules: Vec<IntentRule>,
    fallback: IntentRule,
}

impl IntentCatalog {
    /// The built-in table: five keyword rules plus the fallback.
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            rules: vec![
                IntentRule::new(
                    "data",
                    "data_analysis",
                    [
                        "validate input sources",
                        "generate semantic model",
                        "prepare downstream pipeline",
                    ],
                    "Data analysis pipeline initialized. Sources validated and schema mapped.",
                ),
                IntentRule::new(
                    "deploy",
                    "deployment_orchestration",
                    [
                        "run pre-deploy checks",
                        "build production artifacts",
                        "execute staged rollout",
                    ],
                    "Deployment sequence prepared. All pre-flight checks passed.",
                ),
                IntentRule::new(
                    "test",
                    "quality_assurance",
                    [
                        "generate test matrix",
                        "execute regression suite",
                        "compile coverage report",
                    ],
                    "QA pipeline configured. Test matrix generated across target environments.",
                ),
                IntentRule::new(
                    "monitor",
                    "observability_setup",
                    [
                        "instrument service endpoints",
                        "configure alert thresholds",
                        "initialize dashboard views",
                    ],
                    "Observability layer activated. Metrics and alerting channels established.",
                ),
                IntentRule::new(
                    "security",
                    "security_audit",
                    [
                        "scan dependency graph",
                        "evaluate access policies",
                        "generate compliance report",
                    ],
                    "Security audit initiated. Dependency and policy analysis in progress.",
                ),
            ],
            fallback: IntentRule::new(
                "",
                "general_automation",
                [
                    "parse task description",
                    "classify automation intent",
                    "generate execution plan",
                ],
                "Automation pipeline executed successfully. Task classified and routed.",
            ),
        }
    }

    /// Resolve a task against the table, first match wins.
    #[must_use]
    pub fn resolve(&self, task: &TaskDescription) -> &IntentRule {
        let lowered = task.as_str().to_lowercase();
        self.rules
            .iter()
            .find(|rule| lowered.contains(rule.keyword.as_str()))
            .unwrap_or(&self.fallback)
    }
}
