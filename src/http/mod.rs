//! HTTP transport subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware: request ID, timeout, body limit)
//!     → courses::handlers (validate, one store operation, respond)
//! ```

pub mod server;

pub use server::{AppState, HttpServer};
