//! Shared utilities for end-to-end API tests.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use course_api::config::ServiceConfig;
use course_api::courses::ids::SequentialIds;
use course_api::courses::store::{seed_courses, CourseStore};
use course_api::http::HttpServer;
use course_api::lifecycle::Shutdown;

/// Start a service instance on the given address with the seed catalog and
/// deterministic ids starting at 1000. Returns the shutdown handle.
pub async fn start_service(addr: SocketAddr) -> Shutdown {
    let store = Arc::new(CourseStore::with_records(
        seed_courses(),
        Box::new(SequentialIds::starting_at(1_000)),
    ));

    let mut config = ServiceConfig::default();
    config.listener.bind_address = addr.to_string();

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    let server = HttpServer::with_store(config, store);
    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();

    tokio::spawn(async move {
        let _ = server.run(listener, server_shutdown).await;
    });

    tokio::time::sleep(Duration::from_millis(200)).await;
    shutdown
}

/// Non-pooled client so each test gets fresh connections.
pub fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .pool_max_idle_per_host(0)
        .no_proxy()
        .build()
        .unwrap()
}
