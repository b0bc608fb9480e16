//! Normalized domain records returned to callers.
//!
//! These are the stable internal schema; the provider's raw payload shapes
//! live in `riot::types` and are converted by `riot::normalize`.

pub mod game;
pub mod summoner;

pub use game::{Match, Participant};
pub use summoner::Summoner;
