//! In-memory `ResourceSource` for exercising the pipeline without a network.

use std::cell::Cell;
use std::collections::HashMap;

use anyhow::{anyhow, Result};
use serde_json::{json, Value};

use crate::api::ResourceSource;

#[derive(Default)]
pub struct FakeSource {
    indexes: HashMap<i32, Vec<Value>>,
    events: HashMap<String, Value>,
    teams: HashMap<String, Value>,
    matches: HashMap<String, Value>,
    calls: Cell<usize>,
}

impl FakeSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of fetches served so far
    pub fn calls(&self) -> usize {
        self.calls.get()
    }

    fn hit(&self) {
        self.calls.set(self.calls.get() + 1);
    }

    /// Add an event to the season index and register its detail record.
    pub fn with_event(
        mut self,
        year: i32,
        key: &str,
        name: &str,
        official: bool,
        teams: &[u32],
        matches: &[&str],
    ) -> Self {
        let roster: Vec<String> = teams.iter().map(|n| format!("frc{}", n)).collect();
        let summary = json!({
            "key": key,
            "name": name,
            "short_name": null,
            "start_date": format!("{}-03-01", year),
            "official": official,
        });
        let mut detail = summary.clone();
        detail["teams"] = json!(roster);
        detail["matches"] = json!(matches);

        self.indexes.entry(year).or_default().push(summary);
        self.events.insert(key.to_string(), detail);
        self
    }

    pub fn with_team(mut self, number: u32, nickname: &str) -> Self {
        self.teams.insert(
            format!("frc{}", number),
            json!({
                "team_number": number,
                "nickname": nickname,
                "website": format!("http://team{}.example", number),
                "location": "San Jose, CA, USA",
            }),
        );
        self
    }

    pub fn with_match(
        mut self,
        key: &str,
        level: &str,
        red: (i64, &[u32]),
        blue: (i64, &[u32]),
    ) -> Self {
        let keys = |teams: &[u32]| -> Vec<String> {
            teams.iter().map(|n| format!("frc{}", n)).collect()
        };
        self.matches.insert(
            key.to_string(),
            json!([{
                "key": key,
                "competition_level": level,
                "alliances": {
                    "red": {"score": red.0, "teams": keys(red.1)},
                    "blue": {"score": blue.0, "teams": keys(blue.1)},
                },
            }]),
        );
        self
    }
}

impl ResourceSource for FakeSource {
    async fn event_index(&self, year: i32) -> Result<String> {
        self.hit();
        let index = self.indexes.get(&year).cloned().unwrap_or_default();
        Ok(Value::Array(index).to_string())
    }

    async fn event_detail(&self, event_key: &str) -> Result<String> {
        self.hit();
        self.events
            .get(event_key)
            .map(Value::to_string)
            .ok_or_else(|| anyhow!("Resource not found: event {}", event_key))
    }

    async fn team_details(&self, team_keys: &[String]) -> Result<String> {
        self.hit();
        let records: Vec<Value> = team_keys
            .iter()
            .filter_map(|k| self.teams.get(k).cloned())
            .collect();
        Ok(Value::Array(records).to_string())
    }

    async fn match_detail(&self, match_key: &str) -> Result<String> {
        self.hit();
        self.matches
            .get(match_key)
            .map(Value::to_string)
            .ok_or_else(|| anyhow!("Resource not found: match {}", match_key))
    }
}
