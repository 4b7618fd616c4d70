mod config;
mod counter;
mod handlers;
mod metrics;
mod persist;
mod state;

use std::sync::Arc;

use axum::{
    Router,
    routing::{any, get},
};
use clap::Parser;

use config::Args;
use counter::RequestCounter;
use handlers::{count_handler, health_handler, metrics_handler};
use persist::EventLog;
use state::AppState;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    // parse cli arguments
    let args = Args::parse();

    // replay the log before the listener exists, so recovered state is
    // visible to the very first request
    let log = EventLog::new(&args.persist_file);
    let counter = RequestCounter::recover(log, args.window);

    // creating shared state
    let state = Arc::new(AppState { counter });

    // every method on the root path records a hit
    let app = Router::new()
        .route("/", any(count_handler))
        .route("/health", get(health_handler))
        .route("/metrics", get(metrics_handler))
        .with_state(state);

    let addr = format!("0.0.0.0:{}", args.port);
    let listener = tokio::net::TcpListener::bind(&addr).await.unwrap();

    tracing::info!("counter running on http://localhost:{}", args.port);
    tracing::info!(
        "window: {} seconds, persisting to {}",
        args.window,
        args.persist_file.display()
    );

    axum::serve(listener, app).await.unwrap();
}
