//! JSON REST API handler modules.

#[allow(clippy::missing_errors_doc)]
pub mod automata;

use axum::Router;
use axum::routing::post;

use automata_app::ports::{ConfidenceSampler, ProcessingDelay};

use crate::state::AppState;

/// Build the `/api` sub-router.
pub fn routes<S, D>() -> Router<AppState<S, D>>
where
    S: ConfidenceSampler + Send + Sync + 'static,
    D: ProcessingDelay + Send + Sync + 'static,
{
    Router::new().route("/automata", post(automata::submit::<S, D>))
}
