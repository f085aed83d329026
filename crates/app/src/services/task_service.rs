//! Task service — the submit-and-classify use-case.

use automata_domain::intent::IntentCatalog;
use automata_domain::report::{Confidence, TaskReport};
use automata_domain::task::TaskDescription;

use crate::ports::{ConfidenceSampler, ProcessingDelay};

/// Application service for task submissions.
///
/// Owns the immutable intent catalog and the two injected effect ports.
/// The catalog is built once at startup and never mutated, so sharing the
/// service behind an `Arc` needs no locking.
pub struct TaskService<S, D> {
    catalog: IntentCatalog,
    sampler: S,
    delay: D,
}

impl<S: ConfidenceSampler, D: ProcessingDelay> TaskService<S, D> {
    /// Create a new service around the given catalog and ports.
    pub fn new(catalog: IntentCatalog, sampler: S, delay: D) -> Self {
        Self {
            catalog,
            sampler,
            delay,
        }
    }

    /// Classify a validated task and assemble its report.
    ///
    /// Waits out the artificial processing pause, resolves the intent with
    /// first-match-wins precedence, and attaches a freshly sampled
    /// confidence score. Infallible: validation happens when the
    /// [`TaskDescription`] is constructed, and nothing downstream can fail.
    pub async fn submit_task(&self, task: &TaskDescription) -> TaskReport {
        self.delay.pause().await;

        let rule = self.catalog.resolve(task);
        let confidence = Confidence::from_unit(self.sampler.sample_unit());
        tracing::debug!(intent = %rule.intent, %confidence, "task classified");

        TaskReport::new(rule, confidence)
    }
}
