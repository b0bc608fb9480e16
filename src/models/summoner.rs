use serde::{Deserialize, Serialize};

use crate::riot::types::null_as_default;

/// A League of Legends player account on one platform.
///
/// Decoded straight from the summoner-v4 payload. Fields the provider omits
/// or sends as `null` take their zero value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Summoner {
    /// Encrypted summoner ID.
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    /// Encrypted account ID.
    #[serde(deserialize_with = "null_as_default")]
    pub account_id: String,
    /// Player Universally Unique IDentifier, stable across regions and renames.
    #[serde(deserialize_with = "null_as_default")]
    pub puuid: String,
    /// Summoner name visible in game.
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub profile_icon_id: i32,
    #[serde(deserialize_with = "null_as_default")]
    pub summoner_level: i64,
}
