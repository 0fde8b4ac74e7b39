//! Test fixtures for the HTTP API

use serde_json::{json, Value};
use shared::{PlayerId, PlayerRecord};

pub struct TestFixtures;

impl TestFixtures {
    pub fn record(id: &str, team: &str, salary: i64, projection: f64) -> PlayerRecord {
        PlayerRecord {
            id: Some(PlayerId::new(id)),
            name: format!("Player {id}"),
            position: "G".to_string(),
            team: Some(team.to_string()),
            opponent: Some(if team == "NYK" { "IND" } else { "NYK" }.to_string()),
            salary: Some(salary),
            projection: Some(projection),
        }
    }

    /// Ten affordable players split across two teams
    pub fn knicks_pacers_slate() -> Vec<PlayerRecord> {
        (0..10)
            .map(|i| {
                let team = if i % 2 == 0 { "NYK" } else { "IND" };
                Self::record(&format!("p{i}"), team, 6000 + 500 * i, 40.0 - 2.0 * i as f64)
            })
            .collect()
    }

    /// Exactly six players, so only one distinct roster exists
    pub fn six_player_slate() -> Vec<PlayerRecord> {
        Self::knicks_pacers_slate().into_iter().take(6).collect()
    }

    /// Nobody fits under the cap together
    pub fn over_cap_slate() -> Vec<PlayerRecord> {
        (0..7).map(|i| Self::record(&format!("m{i}"), "NYK", 15000, 30.0)).collect()
    }

    /// Body the browser sends for a build request
    pub fn build_body(num_lineups: u32, locked_mvp: Option<&PlayerRecord>) -> Value {
        json!({
            "numLineups": num_lineups,
            "fieldSize": 100,
            "lockedMVP": locked_mvp,
            "lockedUTILs": []
        })
    }
}
