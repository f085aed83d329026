//! Server-rendered console page (no JavaScript).
//!
//! The page is a plain HTML form that POSTs back to `/` and re-renders
//! with the report or the validation error inline. Nothing persists, so
//! re-rendering after POST is safe.

use askama::Template;
use axum::Router;
use axum::extract::{Form, State};
use axum::response::{Html, IntoResponse, Response};
use axum::routing::get;
use serde::Deserialize;

use automata_app::ports::{ConfidenceSampler, ProcessingDelay};
use automata_domain::report::TaskReport;
use automata_domain::task::TaskDescription;

use crate::state::AppState;

/// Console page template — submission form plus optional report or error.
#[derive(Template)]
#[template(path = "console.html")]
pub struct ConsoleTemplate {
    task: String,
    report: Option<TaskReport>,
    error: Option<String>,
}

impl IntoResponse for ConsoleTemplate {
    fn into_response(self) -> Response {
        Html(self.to_string()).into_response()
    }
}

/// Build the console sub-router for SSR HTML pages.
pub fn routes<S, D>() -> Router<AppState<S, D>>
where
    S: ConfidenceSampler + Send + Sync + 'static,
    D: ProcessingDelay + Send + Sync + 'static,
{
    Router::new().route("/", get(index).post(submit::<S, D>))
}

/// `GET /` — empty submission form.
pub async fn index() -> ConsoleTemplate {
    ConsoleTemplate {
        task: String::new(),
        report: None,
        error: None,
    }
}

/// Form data for a console submission.
#[derive(Deserialize)]
pub struct ConsoleForm {
    #[serde(default)]
    pub task: String,
}

/// `POST /` — classify the submitted task and re-render the page.
pub async fn submit<S, D>(
    State(state): State<AppState<S, D>>,
    Form(form): Form<ConsoleForm>,
) -> ConsoleTemplate
where
    S: ConfidenceSampler + Send + Sync + 'static,
    D: ProcessingDelay + Send + Sync + 'static,
{
    match TaskDescription::new(&form.task) {
        Ok(task) => {
            let report = state.task_service.submit_task(&task).await;
            ConsoleTemplate {
                task: form.task,
                report: Some(report),
                error: None,
            }
        }
        Err(err) => ConsoleTemplate {
            task: form.task,
            report: None,
            error: Some(err.to_string()),
        },
    }
}
