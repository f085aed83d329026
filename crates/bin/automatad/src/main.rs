//! # automatad — automata console daemon
//!
//! Composition root that wires the adapters together and starts the server.
//!
//! ## Responsibilities
//! - Parse configuration (TOML file, env var overrides)
//! - Initialize the tracing subscriber
//! - Build the immutable intent catalog
//! - Construct the port implementations (thread RNG sampler, tokio delay)
//! - Construct the task service, injecting ports
//! - Build the axum router, injecting the service
//! - Bind to a TCP port and serve until SIGINT
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no domain logic belongs here.

mod config;

use automata_adapter_http_axum::router;
use automata_adapter_http_axum::state::AppState;
use automata_app::chance::ThreadRngSampler;
use automata_app::latency::{NoDelay, SimulatedDelay};
use automata_app::services::task_service::TaskService;
use automata_domain::intent::IntentCatalog;

use crate::config::Config;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(config.logging.filter.as_str())
        .init();

    let catalog = IntentCatalog::builtin();

    // The two arms differ only in the delay port type.
    let app = if config.simulation.delay_enabled {
        let delay = SimulatedDelay::from_millis(
            config.simulation.delay_min_ms,
            config.simulation.delay_max_ms,
        );
        router::build(AppState::new(TaskService::new(
            catalog,
            ThreadRngSampler,
            delay,
        )))
    } else {
        router::build(AppState::new(TaskService::new(
            catalog,
            ThreadRngSampler,
            NoDelay,
        )))
    };

    let bind_addr = config.bind_addr();
    tracing::info!(%bind_addr, "automatad listening");

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
}
