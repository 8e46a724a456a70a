//! Course catalog subsystem.
//!
//! # Data Flow
//! ```text
//! HTTP request
//!     → handlers.rs (extract, validate title at the boundary)
//!     → store.rs (one mutex-guarded operation on the collection)
//!     → types.rs (CourseView projection back to the client)
//!
//! Errors:
//!     error.rs maps the two-valued taxonomy to 400/404, empty bodies
//! ```
//!
//! # Design Decisions
//! - State and behavior are separated: the store is an owned object handed
//!   to handlers through `AppState`, never a free-floating global
//! - Id generation (ids.rs) is injected so tests run deterministically

pub mod error;
pub mod handlers;
pub mod ids;
pub mod store;
pub mod types;

pub use store::CourseStore;
pub use types::{Course, CourseView};
