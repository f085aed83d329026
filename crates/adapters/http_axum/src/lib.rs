//! # automata-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve the **JSON API** (`/api/automata`) for programmatic access
//! - Serve a **server-side-rendered HTML console** that works with zero
//!   JavaScript — a plain form POST that re-renders the page
//! - Map HTTP requests into application service calls (driving adapter)
//! - Map application results into HTTP responses (JSON or HTML)
//!
//! ## Dependency rule
//! Depends on `automata-app` (for port traits and services) and
//! `automata-domain` (for domain types used in request/response mapping).
//! Never leaks axum types into the domain.

pub mod api;
pub mod console;
pub mod error;
pub mod router;
pub mod state;
