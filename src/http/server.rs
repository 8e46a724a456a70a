//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create the Axum router with all course routes
//! - Wire up middleware (tracing, timeout, body limit, request ID)
//! - Serve on a bound listener until shutdown fires

use std::sync::Arc;
use std::time::Duration;

use axum::routing::{delete, get};
use axum::Router;
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::config::ServiceConfig;
use crate::courses::handlers;
use crate::courses::CourseStore;

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<CourseStore>,
}

/// HTTP server for the course catalog.
pub struct HttpServer {
    router: Router,
}

impl HttpServer {
    /// Create a new server with the seed catalog.
    pub fn new(config: ServiceConfig) -> Self {
        Self::with_store(config, Arc::new(CourseStore::seeded()))
    }

    /// Create a server around an existing store. Tests inject a store with
    /// deterministic ids here.
    pub fn with_store(config: ServiceConfig, store: Arc<CourseStore>) -> Self {
        let state = AppState { store };
        let router = Self::build_router(&config, state);
        Self { router }
    }

    /// Build the Axum router with all middleware layers.
    fn build_router(config: &ServiceConfig, state: AppState) -> Router {
        Router::new()
            .route("/", get(handlers::root))
            .route(
                "/courses",
                get(handlers::list_courses).post(handlers::create_course),
            )
            .route(
                "/courses/{id}",
                get(handlers::get_course)
                    .put(handlers::update_course)
                    .delete(handlers::delete_course),
            )
            .route("/__test__/data", delete(handlers::reset_data))
            .with_state(state)
            .layer(TimeoutLayer::new(Duration::from_secs(
                config.timeouts.request_secs,
            )))
            .layer(RequestBodyLimitLayer::new(config.limits.max_body_bytes))
            .layer(PropagateRequestIdLayer::x_request_id())
            .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
            .layer(TraceLayer::new_for_http())
    }

    /// Run the server, accepting connections on the given listener until the
    /// shutdown signal fires, then drain in-flight requests.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}
