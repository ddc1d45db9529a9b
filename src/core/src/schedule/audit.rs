use crate::schedule::{GameDaySchedule, SeasonPhase};
use itertools::Itertools;
use std::collections::HashMap;

/// Pairing and home/away statistics over a set of generated days.
#[derive(Debug, Default)]
pub struct ScheduleAudit {
    pub pair_counts: HashMap<(u32, u32), usize>,
    pub home_games: HashMap<u32, usize>,
    pub away_games: HashMap<u32, usize>,
    pub conflicting_days: Vec<u32>,
    pub days: usize,
}

impl ScheduleAudit {
    pub fn from_days<'a>(days: impl IntoIterator<Item = &'a GameDaySchedule>) -> Self {
        let days: Vec<&GameDaySchedule> = days.into_iter().collect();
        let matches = || days.iter().copied().flat_map(|day| day.matches.iter());

        ScheduleAudit {
            pair_counts: matches().map(|m| m.unordered()).counts(),
            home_games: matches().map(|m| m.home_team_id).counts(),
            away_games: matches().map(|m| m.away_team_id).counts(),
            conflicting_days: days
                .iter()
                .filter(|day| day.has_conflict())
                .map(|day| day.ordinal)
                .collect(),
            days: days.len(),
        }
    }

    pub fn for_phase(days: &[GameDaySchedule], phase: SeasonPhase) -> Self {
        Self::from_days(days.iter().filter(|day| day.phase == phase))
    }

    pub fn pair_count(&self, first: u32, second: u32) -> usize {
        let key = if first < second {
            (first, second)
        } else {
            (second, first)
        };

        self.pair_counts.get(&key).copied().unwrap_or(0)
    }

    /// Pairings that occur more than once, sorted.
    pub fn repeated_pairs(&self) -> Vec<(u32, u32)> {
        self.pair_counts
            .iter()
            .filter(|(_, count)| **count > 1)
            .map(|(pair, _)| *pair)
            .sorted()
            .collect()
    }

    pub fn appearances(&self, team_id: u32) -> usize {
        self.home_games.get(&team_id).copied().unwrap_or(0)
            + self.away_games.get(&team_id).copied().unwrap_or(0)
    }

    /// Home games minus away games.
    pub fn home_balance(&self, team_id: u32) -> i64 {
        self.home_games.get(&team_id).copied().unwrap_or(0) as i64
            - self.away_games.get(&team_id).copied().unwrap_or(0) as i64
    }

    /// Largest absolute home/away imbalance over all teams.
    pub fn max_home_imbalance(&self) -> u64 {
        self.home_games
            .keys()
            .chain(self.away_games.keys())
            .unique()
            .map(|team_id| self.home_balance(*team_id).unsigned_abs())
            .max()
            .unwrap_or(0)
    }

    pub fn is_conflict_free(&self) -> bool {
        self.conflicting_days.is_empty()
    }
}
