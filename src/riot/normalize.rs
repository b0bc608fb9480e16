//! Raw provider payload → domain records.
//!
//! Field values are copied by name without reinterpretation. Absent fields
//! already hold their zero value after decoding; nothing is validated here.

use chrono::{DateTime, Utc};

use crate::models::{Match, Participant};
use crate::riot::types::{RawMatch, RawParticipant};

/// Flatten a match-v5 payload into a `Match`.
pub fn normalize_match(raw: RawMatch) -> Match {
    let RawMatch { metadata, info } = raw;

    Match {
        match_id: metadata.match_id,
        game_creation: from_epoch_millis(info.game_creation),
        game_duration: info.game_duration,
        game_mode: info.game_mode,
        game_type: info.game_type,
        participants: info
            .participants
            .into_iter()
            .map(normalize_participant)
            .collect(),
    }
}

pub fn normalize_participant(raw: RawParticipant) -> Participant {
    Participant {
        puuid: raw.puuid,
        summoner_name: raw.summoner_name,
        champion_id: raw.champion_id,
        champion_name: raw.champion_name,
        kills: raw.kills,
        deaths: raw.deaths,
        assists: raw.assists,
        gold_earned: raw.gold_earned,
        total_damage_dealt_to_champions: raw.total_damage_dealt_to_champions,
        total_damage_taken: raw.total_damage_taken,
        vision_score: raw.vision_score,
        total_minions_killed: raw.total_minions_killed,
        win: raw.win,
        team_position: raw.team_position,
    }
}

/// Millisecond epoch → absolute instant. Out-of-range values map to the epoch.
pub fn from_epoch_millis(millis: i64) -> DateTime<Utc> {
    DateTime::from_timestamp_millis(millis).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn decode(json: &str) -> RawMatch {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_game_creation_is_absolute_instant() {
        let raw = decode(
            r#"{"metadata":{"matchId":"NA1_1"},"info":{"gameCreation":1700000000000,"participants":[]}}"#,
        );
        let m = normalize_match(raw);

        assert_eq!(m.game_creation, Utc.timestamp_opt(1_700_000_000, 0).unwrap());
        assert_eq!(m.game_creation.to_rfc3339(), "2023-11-14T22:13:20+00:00");
    }

    #[test]
    fn test_zero_participants_is_empty_not_absent() {
        let with_empty = normalize_match(decode(r#"{"metadata":{"matchId":"NA1_1"},"info":{"participants":[]}}"#));
        assert!(with_empty.participants.is_empty());

        let without_key = normalize_match(decode(r#"{"metadata":{"matchId":"NA1_1"},"info":{}}"#));
        assert!(without_key.participants.is_empty());

        let json = serde_json::to_value(&without_key).unwrap();
        assert_eq!(json["participants"], serde_json::json!([]));
    }

    #[test]
    fn test_participant_fields_copied_in_order() {
        let raw = decode(
            r#"{
                "metadata": {"matchId": "EUW1_42", "participants": ["a", "b"]},
                "info": {
                    "gameCreation": 1700000000000,
                    "gameDuration": 1834,
                    "gameMode": "CLASSIC",
                    "gameType": "MATCHED_GAME",
                    "queueId": 420,
                    "participants": [
                        {
                            "puuid": "a", "summonerName": "Alpha", "championId": 157,
                            "championName": "Yasuo", "kills": 10, "deaths": 2, "assists": 7,
                            "goldEarned": 14500, "totalDamageDealtToChampions": 32000,
                            "totalDamageTaken": 21000, "visionScore": 18,
                            "totalMinionsKilled": 230, "win": true, "teamPosition": "MIDDLE",
                            "item0": 3031
                        },
                        {"puuid": "b", "summonerName": "Bravo", "win": false}
                    ]
                }
            }"#,
        );
        let m = normalize_match(raw);

        assert_eq!(m.match_id, "EUW1_42");
        assert_eq!(m.game_duration, 1834);
        assert_eq!(m.game_mode, "CLASSIC");
        assert_eq!(m.game_type, "MATCHED_GAME");
        assert_eq!(m.participants.len(), 2);

        let first = &m.participants[0];
        assert_eq!(first.puuid, "a");
        assert_eq!(first.summoner_name, "Alpha");
        assert_eq!(first.champion_id, 157);
        assert_eq!(first.champion_name, "Yasuo");
        assert_eq!((first.kills, first.deaths, first.assists), (10, 2, 7));
        assert_eq!(first.gold_earned, 14500);
        assert_eq!(first.total_damage_dealt_to_champions, 32000);
        assert_eq!(first.total_damage_taken, 21000);
        assert_eq!(first.vision_score, 18);
        assert_eq!(first.total_minions_killed, 230);
        assert!(first.win);
        assert_eq!(first.team_position, "MIDDLE");

        // Absent fields take zero values.
        let second = &m.participants[1];
        assert_eq!(second.puuid, "b");
        assert_eq!(second.champion_name, "");
        assert_eq!(second.kills, 0);
        assert!(!second.win);
    }

    #[test]
    fn test_missing_info_defaults_to_zero_values() {
        let m = normalize_match(decode(r#"{"metadata":{"matchId":"KR_9"}}"#));

        assert_eq!(m.match_id, "KR_9");
        assert_eq!(m.game_creation, DateTime::<Utc>::UNIX_EPOCH);
        assert_eq!(m.game_duration, 0);
        assert_eq!(m.game_mode, "");
    }

    #[test]
    fn test_null_fields_take_zero_values() {
        let m = normalize_match(decode(
            r#"{"metadata":{"matchId":"NA1_1"},"info":{"gameCreation":1,"gameMode":null,"participants":[
                {"puuid":"a","summonerName":null,"championId":null,"kills":3,"win":null,"teamPosition":null}
            ]}}"#,
        ));

        assert_eq!(m.match_id, "NA1_1");
        assert_eq!(m.game_mode, "");
        assert_eq!(m.participants.len(), 1);

        let p = &m.participants[0];
        assert_eq!(p.puuid, "a");
        assert_eq!(p.summoner_name, "");
        assert_eq!(p.champion_id, 0);
        assert_eq!(p.kills, 3);
        assert!(!p.win);
        assert_eq!(p.team_position, "");
    }

    #[test]
    fn test_null_info_and_participants() {
        let m = normalize_match(decode(r#"{"metadata":{"matchId":"NA1_2"},"info":null}"#));
        assert_eq!(m.match_id, "NA1_2");
        assert_eq!(m.game_creation, DateTime::<Utc>::UNIX_EPOCH);
        assert!(m.participants.is_empty());

        let m = normalize_match(decode(r#"{"metadata":null,"info":{"participants":null}}"#));
        assert_eq!(m.match_id, "");
        assert!(m.participants.is_empty());
    }

    #[test]
    fn test_out_of_range_millis_maps_to_epoch() {
        assert_eq!(from_epoch_millis(i64::MAX), DateTime::<Utc>::UNIX_EPOCH);
    }
}
