//! Riot Games API data service.
//!
//! Resolves players by Riot ID, fetches match history and serves normalized
//! records over a small JSON API.

pub mod config;
pub mod http;
pub mod lifecycle;
pub mod models;
pub mod observability;
pub mod riot;
pub mod routing;

pub use config::ServiceConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
pub use riot::{RiotApi, RiotClient, RiotError, RiotService};
