//! Shared utilities for integration tests.

use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use opgl_data::riot::RiotClient;
use serde_json::{json, Value};
use tokio::net::TcpListener;

#[allow(dead_code)]
pub const API_KEY: &str = "RGAPI-test-key";

/// Serve `router` on an ephemeral local port and return its base URL.
pub async fn start_stub(router: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr: SocketAddr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    format!("http://{addr}")
}

/// Base URL of a local port with nothing listening.
#[allow(dead_code)]
pub async fn closed_port_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}")
}

pub fn client_for(base_url: &str) -> RiotClient {
    client_with_timeout(base_url, Duration::from_secs(10))
}

pub fn client_with_timeout(base_url: &str, timeout: Duration) -> RiotClient {
    RiotClient::builder(API_KEY)
        .base_url(base_url)
        .timeout(timeout)
        .build()
        .unwrap()
}

/// Shared request counter for stub handlers.
#[allow(dead_code)]
#[derive(Clone, Default)]
pub struct Hits(Arc<AtomicUsize>);

#[allow(dead_code)]
impl Hits {
    pub fn hit(&self) {
        self.0.fetch_add(1, Ordering::SeqCst);
    }

    pub fn count(&self) -> usize {
        self.0.load(Ordering::SeqCst)
    }
}

pub fn account_json(puuid: &str, game_name: &str, tag_line: &str) -> Value {
    json!({ "puuid": puuid, "gameName": game_name, "tagLine": tag_line })
}

pub fn summoner_json(puuid: &str) -> Value {
    json!({
        "id": "summoner-id",
        "accountId": "account-id",
        "puuid": puuid,
        "name": "",
        "profileIconId": 4568,
        "revisionDate": 1700000000000i64,
        "summonerLevel": 512
    })
}

pub fn match_json(match_id: &str, game_creation: i64) -> Value {
    json!({
        "metadata": { "dataVersion": "2", "matchId": match_id, "participants": ["p1"] },
        "info": {
            "gameCreation": game_creation,
            "gameDuration": 1820,
            "gameMode": "CLASSIC",
            "gameType": "MATCHED_GAME",
            "participants": [{
                "puuid": "p1",
                "summonerName": "Faker",
                "championId": 7,
                "championName": "Leblanc",
                "kills": 10,
                "deaths": 2,
                "assists": 8,
                "goldEarned": 14000,
                "totalDamageDealtToChampions": 32000,
                "totalDamageTaken": 18000,
                "visionScore": 25,
                "totalMinionsKilled": 240,
                "win": true,
                "teamPosition": "MIDDLE",
                "item0": 3089
            }]
        }
    })
}
