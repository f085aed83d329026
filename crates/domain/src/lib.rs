//! # automata-domain
//!
//! Pure domain model for the automata console.
//!
//! ## Responsibilities
//! - Define **intent rules** (keyword → canned classification content) and
//!   the resolution algorithm over the fixed catalog
//! - Define **task text** (trimmed, validated non-empty)
//! - Define **report values** (status, bounded confidence score, and the
//!   wire-shaped task report)
//! - Contain all invariant enforcement and domain logic
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod intent;
pub mod report;
pub mod task;
