//! Regional routing subsystem.
//!
//! # Data Flow
//! ```text
//! Region code ("euw", "kr", "", ...)
//!     → region.rs (table lookup, `na` fallback)
//!     → platform host   (summoner-scoped endpoints)
//!     → continental host (account and match endpoints)
//! ```
//!
//! # Design Decisions
//! - Tables are fixed at compile time, immutable at runtime
//! - Deterministic: same code always resolves to the same host
//! - Unknown codes resolve silently to `na` / `americas`

pub mod region;

pub use region::{continental_host, platform_host, Continent, Region};
