use serde::{Deserialize, Deserializer, Serialize};

use super::CompetitionLevel;

/// Team detail record as returned by the teams endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeamRecord {
    #[serde(deserialize_with = "team_number")]
    pub team_number: u32,
    #[serde(default)]
    pub nickname: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrText {
    Number(u32),
    Text(String),
}

// The endpoint has served team numbers both as integers and as strings.
fn team_number<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u32, D::Error> {
    match NumberOrText::deserialize(deserializer)? {
        NumberOrText::Number(n) => Ok(n),
        NumberOrText::Text(s) => s.trim().parse().map_err(serde::de::Error::custom),
    }
}

/// Running score total for one competition phase.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PhaseStats {
    pub total: i64,
    pub count: u32,
}

impl PhaseStats {
    pub fn record(&mut self, score: i64) {
        self.total += score;
        self.count += 1;
    }

    pub fn average(&self) -> f64 {
        if self.count > 0 {
            self.total as f64 / self.count as f64
        } else {
            0.0
        }
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
}

/// A team discovered at one of the attended events, with its accumulated
/// results from the research season.
#[derive(Debug, Clone, PartialEq)]
pub struct Team {
    pub number: u32,
    pub name: Option<String>,
    pub website: Option<String>,
    pub location: Option<String>,
    /// Names of the events the team is registered for, in discovery order.
    pub events: Vec<String>,
    pub quals: PhaseStats,
    pub elims: PhaseStats,
}

impl Team {
    pub fn from_record(record: TeamRecord, first_event: &str) -> Self {
        Self {
            number: record.team_number,
            name: record.nickname,
            website: record.website,
            location: record.location,
            events: vec![first_event.to_string()],
            quals: PhaseStats::default(),
            elims: PhaseStats::default(),
        }
    }

    /// Roster key for this team, e.g. `frc254`
    pub fn key(&self, prefix: &str) -> String {
        format!("{}{}", prefix, self.number)
    }

    /// Credit one alliance score to the phase it was earned in
    pub fn record_result(&mut self, level: CompetitionLevel, score: i64) {
        match level {
            CompetitionLevel::Qualification => self.quals.record(score),
            CompetitionLevel::Elimination => self.elims.record(score),
        }
    }

    pub fn qualification_average(&self) -> f64 {
        self.quals.average()
    }

    pub fn elimination_average(&self) -> f64 {
        self.elims.average()
    }

    /// Average over every scored match. A team with elimination results but
    /// no qualification results reports 0, like a team that did not play.
    pub fn overall_average(&self) -> f64 {
        match (self.quals.is_empty(), self.elims.is_empty()) {
            (false, true) => self.qualification_average(),
            (false, false) => {
                let total = self.quals.total + self.elims.total;
                let count = self.quals.count + self.elims.count;
                total as f64 / count as f64
            }
            _ => 0.0,
        }
    }
}
