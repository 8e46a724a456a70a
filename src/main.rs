//! Course catalog HTTP service.
//!
//! A minimal CRUD service over one in-memory collection of course records,
//! built with Tokio and Axum.
//!
//! # Architecture Overview
//!
//! ```text
//!                  ┌──────────────────────────────────────────────┐
//!                  │                COURSE SERVICE                 │
//!                  │                                               │
//!   Client ───────▶│  http::server (axum router + middleware)      │
//!                  │        │                                      │
//!                  │        ▼                                      │
//!                  │  courses::handlers (boundary validation)      │
//!                  │        │                                      │
//!                  │        ▼                                      │
//!                  │  courses::store (mutex-guarded Vec<Course>)   │
//!                  │                                               │
//!                  │  Cross-cutting: config, observability,        │
//!                  │                 lifecycle (signals/shutdown)  │
//!                  └──────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;

use course_api::config::{load_config, ServiceConfig};
use course_api::http::HttpServer;
use course_api::lifecycle::{signals, Shutdown};
use course_api::observability::logging;

#[derive(Debug, Parser)]
#[command(name = "course-api", version, about = "In-memory course catalog HTTP service")]
struct Args {
    /// Path to a TOML configuration file; defaults apply when omitted.
    #[arg(long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => load_config(path)?,
        None => ServiceConfig::default(),
    };

    logging::init_logging(&config.observability);

    tracing::info!("course-api v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        bind_address = %config.listener.bind_address,
        request_timeout_secs = config.timeouts.request_secs,
        max_body_bytes = config.limits.max_body_bytes,
        "Configuration loaded"
    );

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    let local_addr = listener.local_addr()?;

    tracing::info!(
        address = %local_addr,
        "Listening for connections"
    );

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();

    tokio::spawn(async move {
        signals::wait_for_signal().await;
        tracing::info!("Termination signal received, shutting down");
        shutdown.trigger();
    });

    let server = HttpServer::new(config);
    server.run(listener, server_shutdown).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
