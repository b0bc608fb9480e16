//! Request middleware.

pub mod logging;

pub use logging::access_log;
