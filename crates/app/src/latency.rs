//! In-process delay implementations backed by the tokio timer.

use std::future::Future;
use std::time::Duration;

use rand::Rng;

use crate::ports::ProcessingDelay;

/// Simulated processing pause, uniform over `[min_ms, max_ms)` milliseconds.
///
/// The sleep is a plain `tokio::time::sleep`, so only the submitting
/// request's future is suspended.
#[derive(Debug, Clone, Copy)]
pub struct SimulatedDelay {
    min_ms: u64,
    max_ms: u64,
}

impl SimulatedDelay {
    /// Lower bound of the default pause interval, in milliseconds.
    pub const DEFAULT_MIN_MS: u64 = 600;
    /// Exclusive upper bound of the default pause interval, in milliseconds.
    pub const DEFAULT_MAX_MS: u64 = 1000;

    /// Pause uniformly within `[min_ms, max_ms)` milliseconds.
    ///
    /// A degenerate range (`min_ms >= max_ms`) always pauses `min_ms`.
    #[must_use]
    pub fn from_millis(min_ms: u64, max_ms: u64) -> Self {
        Self { min_ms, max_ms }
    }
}

impl Default for SimulatedDelay {
    fn default() -> Self {
        Self::from_millis(Self::DEFAULT_MIN_MS, Self::DEFAULT_MAX_MS)
    }
}

impl ProcessingDelay for SimulatedDelay {
    fn pause(&self) -> impl Future<Output = ()> + Send {
        let millis = if self.min_ms < self.max_ms {
            rand::thread_rng().gen_range(self.min_ms..self.max_ms)
        } else {
            self.min_ms
        };
        tokio::time::sleep(Duration::from_millis(millis))
    }
}

/// No-op delay for tests and for deployments with the pause disabled.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoDelay;

impl ProcessingDelay for NoDelay {
    fn pause(&self) -> impl Future<Output = ()> + Send {
        std::future::ready(())
    }
}
