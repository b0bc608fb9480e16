//! Riot API data aggregation subsystem.
//!
//! # Data Flow
//! ```text
//! Riot ID lookup:
//!     region → continental host → account-v1 by-riot-id → PUUID
//!     region → platform host    → summoner-v4 by-puuid  → Summoner
//!
//! Match history:
//!     region → continental host → match-v5 ids (start=0, count=N)
//!     for each id, in order     → match-v5 detail → normalize.rs → Match
//!                                 (failed ids dropped)
//! ```
//!
//! # Design Decisions
//! - client.rs owns transport, auth header, timeout and error mapping
//! - service.rs owns composition and the partial-failure policy
//! - normalize.rs owns the payload → record mapping

pub mod client;
pub mod normalize;
pub mod service;
pub mod types;

pub use client::{RiotClient, RiotClientBuilder};
pub use service::{RiotApi, RiotService};
pub use types::{RiotError, RiotResult};
