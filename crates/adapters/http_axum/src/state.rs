//! Shared application state for axum handlers.

use std::sync::Arc;

use automata_app::ports::{ConfidenceSampler, ProcessingDelay};
use automata_app::services::task_service::TaskService;

/// Application state shared across all axum handlers.
///
/// Generic over the sampler and delay ports to avoid dynamic dispatch.
/// `Clone` is implemented manually so the port types themselves do not
/// need to be `Clone` — only the `Arc` wrapper is cloned.
pub struct AppState<S, D> {
    /// Task submission service.
    pub task_service: Arc<TaskService<S, D>>,
}

impl<S, D> Clone for AppState<S, D> {
    fn clone(&self) -> Self {
        Self {
            task_service: Arc::clone(&self.task_service),
        }
    }
}

impl<S, D> AppState<S, D>
where
    S: ConfidenceSampler + Send + Sync + 'static,
    D: ProcessingDelay + Send + Sync + 'static,
{
    /// Create a new application state from the service instance.
    pub fn new(task_service: TaskService<S, D>) -> Self {
        Self {
            task_service: Arc::new(task_service),
        }
    }
}
