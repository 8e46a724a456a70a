//! Course catalog HTTP service library.

pub mod config;
pub mod courses;
pub mod http;
pub mod lifecycle;
pub mod observability;

pub use config::ServiceConfig;
pub use courses::CourseStore;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
