use itertools::Itertools;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SeasonPhase {
    Exhibition,
    Division,
    Conference,
    OutOfConference,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Matchup {
    pub home_team_id: u32,
    pub away_team_id: u32,
}

impl Matchup {
    pub fn new(home_team_id: u32, away_team_id: u32) -> Self {
        Matchup {
            home_team_id,
            away_team_id,
        }
    }

    /// Road team visits home team, or the other way round when `invert` is set.
    pub fn oriented(home_team_id: u32, road_team_id: u32, invert: bool) -> Self {
        if invert {
            Matchup::new(road_team_id, home_team_id)
        } else {
            Matchup::new(home_team_id, road_team_id)
        }
    }

    /// Pair key that ignores home/away.
    pub fn unordered(&self) -> (u32, u32) {
        if self.home_team_id < self.away_team_id {
            (self.home_team_id, self.away_team_id)
        } else {
            (self.away_team_id, self.home_team_id)
        }
    }

    pub fn involves(&self, team_id: u32) -> bool {
        self.home_team_id == team_id || self.away_team_id == team_id
    }
}

/// One generated day of games. `ordinal` is the generation order and survives
/// any later shuffling of the day list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameDaySchedule {
    pub ordinal: u32,
    pub phase: SeasonPhase,
    pub matches: Vec<Matchup>,
}

impl GameDaySchedule {
    pub fn new(ordinal: u32, phase: SeasonPhase, matches: Vec<Matchup>) -> Self {
        GameDaySchedule {
            ordinal,
            phase,
            matches,
        }
    }

    pub fn game_count(&self) -> usize {
        self.matches.len()
    }

    pub fn team_ids(&self) -> impl Iterator<Item = u32> + '_ {
        self.matches
            .iter()
            .flat_map(|m| [m.home_team_id, m.away_team_id])
    }

    /// A team is booked twice on this day, or plays itself.
    pub fn has_conflict(&self) -> bool {
        self.team_ids().duplicates().next().is_some()
    }
}

/// Persisted form of a matchup, keyed by the schedule entry it belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduledGame {
    pub year: i32,
    pub sequence: u32,
    pub home_team_id: u32,
    pub away_team_id: u32,
}

impl ScheduledGame {
    pub fn new(year: i32, sequence: u32, matchup: &Matchup) -> Self {
        ScheduledGame {
            year,
            sequence,
            home_team_id: matchup.home_team_id,
            away_team_id: matchup.away_team_id,
        }
    }
}
