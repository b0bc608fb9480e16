//! Provider payload shapes and error definitions.

use serde::{Deserialize, Deserializer};
use thiserror::Error;

/// Errors that can occur while talking to the Riot API.
#[derive(Debug, Error)]
pub enum RiotError {
    /// No response was obtained: connection refused, DNS failure, timeout.
    #[error("transport error: {0}")]
    Transport(#[source] reqwest::Error),

    /// The API answered with a non-2xx status.
    #[error("API request failed with status {status}: {body}")]
    Upstream { status: u16, body: String },

    /// The response body did not match the expected shape.
    #[error("failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    /// The request URL could not be built from the configured base.
    #[error("invalid request URL: {0}")]
    InvalidUrl(String),
}

impl RiotError {
    /// Upstream HTTP status, if the API produced a response.
    pub fn status(&self) -> Option<u16> {
        match self {
            RiotError::Upstream { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Response body returned alongside a non-2xx status.
    pub fn body(&self) -> Option<&str> {
        match self {
            RiotError::Upstream { body, .. } => Some(body),
            _ => None,
        }
    }

    pub fn is_timeout(&self) -> bool {
        matches!(self, RiotError::Transport(e) if e.is_timeout())
    }

    /// Short label used for metrics and logs.
    pub fn kind(&self) -> &'static str {
        match self {
            RiotError::Transport(_) => "transport",
            RiotError::Upstream { .. } => "upstream",
            RiotError::Decode(_) => "decode",
            RiotError::InvalidUrl(_) => "invalid_url",
        }
    }
}

/// Result type for Riot API operations.
pub type RiotResult<T> = Result<T, RiotError>;

/// Decode JSON `null` as the type's zero value, like a missing key.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// account-v1 by-riot-id response.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawAccount {
    #[serde(deserialize_with = "null_as_default")]
    pub puuid: String,
    #[serde(deserialize_with = "null_as_default")]
    pub game_name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub tag_line: String,
}

/// match-v5 match detail response. Only the fields we normalize are decoded.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawMatch {
    #[serde(deserialize_with = "null_as_default")]
    pub metadata: RawMatchMetadata,
    #[serde(deserialize_with = "null_as_default")]
    pub info: RawMatchInfo,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawMatchMetadata {
    #[serde(deserialize_with = "null_as_default")]
    pub match_id: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawMatchInfo {
    /// Milliseconds since the Unix epoch.
    #[serde(deserialize_with = "null_as_default")]
    pub game_creation: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub game_duration: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub game_mode: String,
    #[serde(deserialize_with = "null_as_default")]
    pub game_type: String,
    #[serde(deserialize_with = "null_as_default")]
    pub participants: Vec<RawParticipant>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawParticipant {
    #[serde(deserialize_with = "null_as_default")]
    pub puuid: String,
    #[serde(deserialize_with = "null_as_default")]
    pub summoner_name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub champion_id: i32,
    #[serde(deserialize_with = "null_as_default")]
    pub champion_name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub kills: i32,
    #[serde(deserialize_with = "null_as_default")]
    pub deaths: i32,
    #[serde(deserialize_with = "null_as_default")]
    pub assists: i32,
    #[serde(deserialize_with = "null_as_default")]
    pub gold_earned: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub total_damage_dealt_to_champions: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub total_damage_taken: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub vision_score: i32,
    #[serde(deserialize_with = "null_as_default")]
    pub total_minions_killed: i32,
    #[serde(deserialize_with = "null_as_default")]
    pub win: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub team_position: String,
}
