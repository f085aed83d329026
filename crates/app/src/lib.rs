//! # automata-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** for the two injectable effects:
//!   - `ConfidenceSampler` — uniform unit sampling for the cosmetic score
//!   - `ProcessingDelay` — the artificial pause before classification
//! - Provide **in-process implementations** of those ports that don't need
//!   external IO (thread RNG, tokio sleep, no-op)
//! - Define the single use-case: `TaskService` — pause, resolve, score,
//!   report
//!
//! ## Dependency rule
//! Depends on `automata-domain` only (plus `tokio::time` and `rand` for the
//! in-process port implementations). Never imports adapter crates. Adapters
//! depend on *this* crate, not the reverse.

pub mod chance;
pub mod latency;
pub mod ports;
pub mod services;
