//! Toggleable stand-in for the protected endpoint.
//!
//! `GET /swagger/doc.json` answers 200 while up and 503 while down.
//! `POST /toggle` flips between the two.

use std::net::SocketAddr;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use clap::Parser;
use serde_json::json;

#[derive(Parser)]
#[command(name = "flaky-backend")]
#[command(about = "Local endpoint that can be switched up and down", long_about = None)]
struct Cli {
    #[arg(short, long, default_value = "127.0.0.1:8080")]
    bind: SocketAddr,

    /// Start in the failing mode.
    #[arg(long)]
    down: bool,
}

async fn doc(State(up): State<Arc<AtomicBool>>) -> Response {
    if up.load(Ordering::Relaxed) {
        Json(json!({ "swagger": "2.0", "info": { "title": "flaky-backend" } })).into_response()
    } else {
        (StatusCode::SERVICE_UNAVAILABLE, "backend is down").into_response()
    }
}

async fn toggle(State(up): State<Arc<AtomicBool>>) -> &'static str {
    // fetch_xor returns the previous value.
    if up.fetch_xor(true, Ordering::Relaxed) {
        tracing::info!("Backend switched down");
        "down"
    } else {
        tracing::info!("Backend switched up");
        "up"
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "flaky_backend=info".into()),
        )
        .init();

    let cli = Cli::parse();
    let up = Arc::new(AtomicBool::new(!cli.down));

    let app = Router::new()
        .route("/swagger/doc.json", get(doc))
        .route("/toggle", post(toggle))
        .with_state(up);

    let listener = tokio::net::TcpListener::bind(cli.bind).await?;
    tracing::info!(address = %listener.local_addr()?, up = !cli.down, "Flaky backend listening");
    axum::serve(listener, app).await?;
    Ok(())
}
