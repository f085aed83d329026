//! JSON handler for task submissions.

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::response::{IntoResponse, Response};
use serde::Deserialize;

use automata_app::ports::{ConfidenceSampler, ProcessingDelay};
use automata_domain::report::TaskReport;
use automata_domain::task::TaskDescription;

use crate::error::ApiError;
use crate::state::AppState;

/// Request body for submitting a task.
///
/// `task` is accepted as any JSON value so that a present-but-non-string
/// field yields the field-specific validation message instead of a generic
/// parse failure.
#[derive(Deserialize)]
pub struct SubmitTaskRequest {
    #[serde(default)]
    pub task: Option<serde_json::Value>,
}

/// Possible responses from the submit endpoint.
pub enum SubmitResponse {
    Completed(Json<TaskReport>),
}

impl IntoResponse for SubmitResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Completed(json) => json.into_response(),
        }
    }
}

/// `POST /api/automata`
pub async fn submit<S, D>(
    State(state): State<AppState<S, D>>,
    payload: Result<Json<SubmitTaskRequest>, JsonRejection>,
) -> Result<SubmitResponse, ApiError>
where
    S: ConfidenceSampler + Send + Sync + 'static,
    D: ProcessingDelay + Send + Sync + 'static,
{
    let Json(req) = payload?;
    let raw = req
        .task
        .as_ref()
        .and_then(serde_json::Value::as_str)
        .unwrap_or_default();
    let task = TaskDescription::new(raw)?;

    let report = state.task_service.submit_task(&task).await;
    Ok(SubmitResponse::Completed(Json(report)))
}
