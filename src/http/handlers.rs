//! Endpoint handlers.
//!
//! # Responsibilities
//! - Validate request bodies and path parameters
//! - Delegate to the `RiotService`
//! - Serialize records as JSON
//!
//! # Design Decisions
//! - Bodies are parsed as JSON regardless of `content-type`
//! - The path-parameter GET routes are kept for older callers and share the
//!   same service calls as the POST routes

use axum::{
    body::Bytes,
    extract::{Path, Query, State},
    Json,
};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::http::response::ApiError;
use crate::http::server::AppState;
use crate::models::{Match, Summoner};

pub const SERVICE_NAME: &str = "opgl-data";
pub const DEFAULT_MATCH_COUNT: u32 = 20;

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SummonerRequest {
    pub region: String,
    pub game_name: String,
    pub tag_line: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MatchesRequest {
    pub region: String,
    pub puuid: Option<String>,
    pub game_name: Option<String>,
    pub tag_line: Option<String>,
    pub count: Option<i64>,
}

#[derive(Debug, Default, Deserialize)]
pub struct CountQuery {
    pub count: Option<String>,
}

/// Absent, zero or negative counts mean the default.
pub fn effective_count(count: Option<i64>) -> u32 {
    match count {
        Some(n) if n > 0 => u32::try_from(n).unwrap_or(u32::MAX),
        _ => DEFAULT_MATCH_COUNT,
    }
}

fn parse_body<T: DeserializeOwned>(body: &Bytes) -> Result<T, ApiError> {
    serde_json::from_slice(body).map_err(|e| ApiError::bad_request(format!("Invalid request body: {e}")))
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        service: SERVICE_NAME.to_string(),
    })
}

pub async fn summoner(State(state): State<AppState>, body: Bytes) -> Result<Json<Summoner>, ApiError> {
    let request: SummonerRequest = parse_body(&body)?;

    if request.region.is_empty() || request.game_name.is_empty() || request.tag_line.is_empty() {
        return Err(ApiError::bad_request("region, gameName, and tagLine are required"));
    }

    let summoner = state
        .service
        .summoner_by_riot_id(&request.region, &request.game_name, &request.tag_line)
        .await?;

    Ok(Json(summoner))
}

pub async fn matches(State(state): State<AppState>, body: Bytes) -> Result<Json<Vec<Match>>, ApiError> {
    let request: MatchesRequest = parse_body(&body)?;

    if request.region.is_empty() {
        return Err(ApiError::bad_request("region is required"));
    }

    let count = effective_count(request.count);

    let puuid = match (
        non_empty(request.puuid),
        non_empty(request.game_name),
        non_empty(request.tag_line),
    ) {
        (Some(puuid), _, _) => puuid,
        (None, Some(game_name), Some(tag_line)) => {
            state
                .service
                .summoner_by_riot_id(&request.region, &game_name, &tag_line)
                .await?
                .puuid
        }
        _ => return Err(ApiError::bad_request("either puuid or gameName and tagLine are required")),
    };

    let matches = state.service.match_history(&request.region, &puuid, count).await?;
    Ok(Json(matches))
}

/// `GET /api/v1/summoner/{region}/{gameName}/{tagLine}`
pub async fn summoner_by_path(
    State(state): State<AppState>,
    Path((region, game_name, tag_line)): Path<(String, String, String)>,
) -> Result<Json<Summoner>, ApiError> {
    let summoner = state
        .service
        .summoner_by_riot_id(&region, &game_name, &tag_line)
        .await?;
    Ok(Json(summoner))
}

/// `GET /api/v1/matches/{region}/{puuid}?count=N`
///
/// An unparsable `count` is treated as absent.
pub async fn matches_by_path(
    State(state): State<AppState>,
    Path((region, puuid)): Path<(String, String)>,
    Query(query): Query<CountQuery>,
) -> Result<Json<Vec<Match>>, ApiError> {
    let count = effective_count(query.count.and_then(|c| c.parse().ok()));
    let matches = state.service.match_history(&region, &puuid, count).await?;
    Ok(Json(matches))
}
