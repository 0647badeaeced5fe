use serde::{Deserialize, Serialize};

/// Label the API uses for qualification matches.
const QUALIFICATION_LABEL: &str = "Quals";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompetitionLevel {
    Qualification,
    Elimination,
}

impl CompetitionLevel {
    /// Anything other than the qualification label counts as elimination play.
    pub fn from_label(label: &str) -> Self {
        if label == QUALIFICATION_LABEL {
            CompetitionLevel::Qualification
        } else {
            CompetitionLevel::Elimination
        }
    }
}

impl std::fmt::Display for CompetitionLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CompetitionLevel::Qualification => write!(f, "Qualification"),
            CompetitionLevel::Elimination => write!(f, "Elimination"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Alliance {
    pub score: i64,
    #[serde(default)]
    pub teams: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Alliances {
    pub red: Alliance,
    pub blue: Alliance,
}

/// One played match. Consumed straight into team totals and then dropped.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Match {
    #[serde(default)]
    pub key: Option<String>,
    pub competition_level: String,
    pub alliances: Alliances,
}

impl Match {
    pub fn level(&self) -> CompetitionLevel {
        CompetitionLevel::from_label(&self.competition_level)
    }

    /// Every (team key, alliance score) appearance in the match.
    ///
    /// Red and blue slots are walked together, so a longer alliance list is
    /// cut down to the length of the shorter one.
    pub fn appearances(&self) -> Vec<(&str, i64)> {
        let red = &self.alliances.red;
        let blue = &self.alliances.blue;
        red.teams
            .iter()
            .zip(blue.teams.iter())
            .flat_map(|(r, b)| [(r.as_str(), red.score), (b.as_str(), blue.score)])
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> Match {
        serde_json::from_str(json).expect("Failed to parse match test JSON")
    }

    #[test]
    fn test_level_from_label() {
        assert_eq!(CompetitionLevel::from_label("Quals"), CompetitionLevel::Qualification);
        assert_eq!(CompetitionLevel::from_label("Finals"), CompetitionLevel::Elimination);
        assert_eq!(CompetitionLevel::from_label("Quarters"), CompetitionLevel::Elimination);
        assert_eq!(CompetitionLevel::from_label("quals"), CompetitionLevel::Elimination);
        assert_eq!(CompetitionLevel::Qualification.to_string(), "Qualification");
        assert_eq!(CompetitionLevel::Elimination.to_string(), "Elimination");
    }

    #[test]
    fn test_appearances_pair_slots_positionally() {
        let m = parse(
            r#"{"key": "2014casj_qm1", "competition_level": "Quals", "alliances": {"red": {"score": 50, "teams": ["frc1", "frc2", "frc3"]}, "blue": {"score": 30, "teams": ["frc4", "frc5", "frc6"]}}}"#,
        );
        assert_eq!(m.level(), CompetitionLevel::Qualification);
        assert_eq!(
            m.appearances(),
            vec![
                ("frc1", 50),
                ("frc4", 30),
                ("frc2", 50),
                ("frc5", 30),
                ("frc3", 50),
                ("frc6", 30),
            ]
        );
    }

    #[test]
    fn test_uneven_alliances_are_truncated() {
        let m = parse(
            r#"{"competition_level": "Semis", "alliances": {"red": {"score": 90, "teams": ["frc1", "frc2", "frc3"]}, "blue": {"score": 10, "teams": ["frc4"]}}}"#,
        );
        assert_eq!(m.level(), CompetitionLevel::Elimination);
        assert_eq!(m.appearances(), vec![("frc1", 90), ("frc4", 10)]);
    }
}
