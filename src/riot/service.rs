//! Composed lookups over the Riot API.
//!
//! # Responsibilities
//! - Riot ID → account PUUID → summoner record
//! - PUUID → match-ID list → per-match detail fan-out
//!
//! # Design Decisions
//! - Every step runs sequentially; step N's output keys step N+1
//! - Identity resolution aborts on the first failing step, error unchanged
//! - Match fan-out is best effort: a failed detail fetch drops that match,
//!   survivors keep listing order
//! - Empty IDs in the listing are skipped without a detail call

use async_trait::async_trait;

use crate::models::{Match, Summoner};
use crate::observability::metrics;
use crate::riot::client::RiotClient;
use crate::riot::normalize::normalize_match;
use crate::riot::types::{RawAccount, RawMatch, RiotResult};
use crate::routing::Region;

/// Read operations the HTTP layer depends on.
#[async_trait]
pub trait RiotService: Send + Sync {
    /// Resolve a Riot ID (`gameName#tagLine`) to the player's summoner record.
    async fn summoner_by_riot_id(&self, region: &str, game_name: &str, tag_line: &str) -> RiotResult<Summoner>;

    async fn summoner_by_puuid(&self, region: &str, puuid: &str) -> RiotResult<Summoner>;

    /// Up to `count` most recent matches, newest first. Matches whose details
    /// fail to load are omitted.
    async fn match_history(&self, region: &str, puuid: &str, count: u32) -> RiotResult<Vec<Match>>;

    async fn match_details(&self, region: &str, match_id: &str) -> RiotResult<Match>;
}

/// `RiotService` backed by the live API through a `RiotClient`.
#[derive(Clone)]
pub struct RiotApi {
    client: RiotClient,
}

impl RiotApi {
    pub fn new(client: RiotClient) -> Self {
        Self { client }
    }

    async fn account_by_riot_id(&self, region: Region, game_name: &str, tag_line: &str) -> RiotResult<RawAccount> {
        let url = self.client.endpoint(
            region.continental_host(),
            &["riot", "account", "v1", "accounts", "by-riot-id", game_name, tag_line],
        )?;
        self.client.fetch_json("account_by_riot_id", url).await
    }

    async fn match_ids(&self, region: Region, puuid: &str, count: u32) -> RiotResult<Vec<String>> {
        let mut url = self.client.endpoint(
            region.continental_host(),
            &["lol", "match", "v5", "matches", "by-puuid", puuid, "ids"],
        )?;
        url.query_pairs_mut()
            .append_pair("start", "0")
            .append_pair("count", &count.to_string());

        self.client.fetch_json("match_ids_by_puuid", url).await
    }
}

#[async_trait]
impl RiotService for RiotApi {
    async fn summoner_by_riot_id(&self, region: &str, game_name: &str, tag_line: &str) -> RiotResult<Summoner> {
        let region = Region::from_code(region);

        let account = self
            .account_by_riot_id(region, game_name, tag_line)
            .await
            .inspect_err(|e| {
                tracing::warn!(%region, game_name, tag_line, error = %e, "Account lookup failed");
            })?;

        tracing::debug!(%region, puuid = %account.puuid, "Resolved Riot ID");

        self.summoner_by_puuid(region.code(), &account.puuid).await
    }

    async fn summoner_by_puuid(&self, region: &str, puuid: &str) -> RiotResult<Summoner> {
        let region = Region::from_code(region);
        let url = self.client.endpoint(
            region.platform_host(),
            &["lol", "summoner", "v4", "summoners", "by-puuid", puuid],
        )?;

        self.client
            .fetch_json("summoner_by_puuid", url)
            .await
            .inspect_err(|e| {
                tracing::warn!(%region, puuid, error = %e, "Summoner lookup failed");
            })
    }

    async fn match_history(&self, region: &str, puuid: &str, count: u32) -> RiotResult<Vec<Match>> {
        let region = Region::from_code(region);

        let ids = self.match_ids(region, puuid, count).await.inspect_err(|e| {
            tracing::warn!(%region, puuid, error = %e, "Match list lookup failed");
        })?;

        let mut matches = Vec::with_capacity(ids.len());
        for match_id in ids.iter().filter(|id| !id.is_empty()) {
            match self.match_details(region.code(), match_id).await {
                Ok(m) => matches.push(m),
                Err(e) => {
                    tracing::warn!(%region, match_id = %match_id, error = %e, "Dropping match with failed details");
                    metrics::record_match_dropped(e.kind());
                }
            }
        }

        tracing::debug!(%region, requested = ids.len(), returned = matches.len(), "Match history assembled");
        Ok(matches)
    }

    async fn match_details(&self, region: &str, match_id: &str) -> RiotResult<Match> {
        let region = Region::from_code(region);
        let url = self.client.endpoint(
            region.continental_host(),
            &["lol", "match", "v5", "matches", match_id],
        )?;

        let raw: RawMatch = self.client.fetch_json("match_details", url).await?;
        let mut normalized = normalize_match(raw);

        // The listing key identifies the match even when metadata omits it.
        if normalized.match_id.is_empty() {
            normalized.match_id = match_id.to_string();
        }

        Ok(normalized)
    }
}
