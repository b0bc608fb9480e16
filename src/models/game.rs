use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single completed match.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Match {
    /// Provider-wide unique match identifier (e.g. `NA1_4812345678`).
    pub match_id: String,
    /// When the game lobby was created.
    pub game_creation: DateTime<Utc>,
    /// Length of the game in seconds.
    pub game_duration: i64,
    /// e.g. `CLASSIC`, `ARAM`.
    pub game_mode: String,
    /// e.g. `MATCHED_GAME`.
    pub game_type: String,
    /// Players in provider order (grouped by team and position).
    pub participants: Vec<Participant>,
}

/// One player's performance within a `Match`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Participant {
    pub puuid: String,
    /// Summoner name at the time of the match.
    pub summoner_name: String,
    pub champion_id: i32,
    pub champion_name: String,
    pub kills: i32,
    pub deaths: i32,
    pub assists: i32,
    pub gold_earned: i64,
    pub total_damage_dealt_to_champions: i64,
    pub total_damage_taken: i64,
    pub vision_score: i32,
    /// Creep score.
    pub total_minions_killed: i32,
    pub win: bool,
    /// TOP, JUNGLE, MIDDLE, BOTTOM, UTILITY, or empty for modes without lanes.
    pub team_position: String,
}
