//! Port definitions — traits that adapters implement.
//!
//! Ports are the boundaries between the application core and the outside
//! world. Randomness and time live behind them so that tests can inject
//! deterministic values.

pub mod chance;
pub mod latency;

pub use chance::ConfidenceSampler;
pub use latency::ProcessingDelay;
