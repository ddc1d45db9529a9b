use crate::config::LeagueConfig;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    pub id: u32,
    pub name: String,
    pub division_id: u32,
    pub conference_id: u32,
}

impl Team {
    /// Division and conference follow from the id's position in the natural
    /// team ordering, which is the layout the generators assume.
    pub fn new(id: u32, name: String, config: &LeagueConfig) -> Self {
        Team {
            id,
            name,
            division_id: (id - 1) / config.teams_per_division + 1,
            conference_id: (id - 1) / config.teams_per_conference + 1,
        }
    }

    pub fn shares_division(&self, other: &Team) -> bool {
        self.division_id == other.division_id
    }

    pub fn shares_conference(&self, other: &Team) -> bool {
        self.conference_id == other.conference_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partition_from_id() {
        let config = LeagueConfig::default();

        let first = Team::new(1, String::from("Oslo"), &config);
        let fifth = Team::new(5, String::from("Bergen"), &config);
        let sixth = Team::new(6, String::from("Turku"), &config);
        let eleventh = Team::new(11, String::from("Riga"), &config);

        assert_eq!((first.division_id, first.conference_id), (1, 1));
        assert!(first.shares_division(&fifth));
        assert!(!fifth.shares_division(&sixth));
        assert!(fifth.shares_conference(&sixth));
        assert_eq!((eleventh.division_id, eleventh.conference_id), (3, 2));
        assert!(!first.shares_conference(&eleventh));
    }
}
