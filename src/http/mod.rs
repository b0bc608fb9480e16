//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware stack)
//!     → request.rs (request ID generated or propagated)
//!     → middleware/ (access log, request metrics)
//!     → handlers.rs (validate, call RiotService)
//!     → response.rs (errors as JSON)
//!     → Send to client
//! ```
//!
//! # Design Decisions
//! - Handlers depend on the `RiotService` trait, not on the HTTP client
//! - Request timeout and body limit come from config

pub mod handlers;
pub mod middleware;
pub mod request;
pub mod response;
pub mod server;

pub use request::{UuidRequestId, X_REQUEST_ID};
pub use response::ApiError;
pub use server::{AppState, HttpServer};
