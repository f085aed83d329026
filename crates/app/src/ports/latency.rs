//! Latency port — the artificial processing pause before classification.

use std::future::Future;

/// Suspends the current request's task for a simulated processing interval.
///
/// The pause is a UX affordance, not a computation cost. Implementations
/// must only suspend their own future, never block the runtime.
pub trait ProcessingDelay {
    /// Wait out one simulated processing interval.
    fn pause(&self) -> impl Future<Output = ()> + Send;
}
