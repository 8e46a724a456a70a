//! Observability subsystem.
//!
//! # Design Decisions
//! - Structured logging via tracing; the request-id middleware tags every
//!   request with a UUID that flows through the trace layer
//! - Failures are reported to clients by status code only; the trace layer
//!   is the sole place they are logged

pub mod logging;
