use serde::{Deserialize, Serialize};

use crate::utils::contains_ignore_case;

/// A single competition.
///
/// The season index only carries the identity fields; `teams` and `matches`
/// are filled in by the event detail record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub key: String,
    pub name: String,
    #[serde(default)]
    pub short_name: Option<String>,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub official: bool,
    /// Team keys on the roster, e.g. `frc254`.
    #[serde(default)]
    pub teams: Vec<String>,
    /// Match keys in play order.
    #[serde(default)]
    pub matches: Vec<String>,
}

impl Event {
    /// Short name when the event has a usable one, full name otherwise
    pub fn display_name(&self) -> &str {
        match self.short_name.as_deref() {
            Some(short) if !short.is_empty() => short,
            _ => &self.name,
        }
    }

    pub fn formatted_date(&self) -> &str {
        self.start_date.as_deref().unwrap_or("TBD")
    }

    pub fn has_team(&self, team_key: &str) -> bool {
        self.teams.iter().any(|t| t == team_key)
    }

    /// Case-insensitive search over the short name and the full name
    pub fn matches_search(&self, query: &str) -> bool {
        let short_hit = self
            .short_name
            .as_deref()
            .is_some_and(|short| !short.is_empty() && contains_ignore_case(short, query));
        short_hit || contains_ignore_case(&self.name, query)
    }
}
