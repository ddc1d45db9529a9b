use crate::error::ConfigError;
use log::warn;
use serde::{Deserialize, Serialize};

/// Rounds played inside each division series.
pub const DIVISION_ROUNDS: u32 = 4;

/// Rounds played inside each conference series.
pub const CONFERENCE_ROUNDS: u32 = 3;

/// Season year used when a brand-new league is bootstrapped.
pub const FIRST_YEAR: i32 = 2024;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeagueConfig {
    pub number_of_teams: u32,
    pub teams_per_division: u32,
    pub teams_per_conference: u32,
    pub games_per_day: u32,
    pub out_of_conference_games: u32,
    pub days_in_preseason: u32,
}

impl LeagueConfig {
    pub fn division_count(&self) -> u32 {
        self.number_of_teams / self.teams_per_division
    }

    pub fn conference_count(&self) -> u32 {
        self.number_of_teams / self.teams_per_conference
    }

    /// Game days produced by the regular season generator.
    pub fn regular_season_days(&self) -> u32 {
        self.teams_per_division.saturating_sub(1) * DIVISION_ROUNDS
            + self.teams_per_conference.saturating_sub(1) * CONFERENCE_ROUNDS
            + self.out_of_conference_games
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.number_of_teams == 0 {
            return Err(ConfigError::NoTeams);
        }

        if self.number_of_teams % 2 != 0 {
            return Err(ConfigError::OddTeamCount(self.number_of_teams));
        }

        Self::validate_partition("teams_per_division", self.teams_per_division, self.number_of_teams)?;
        Self::validate_partition("teams_per_conference", self.teams_per_conference, self.number_of_teams)?;

        if self.teams_per_conference % self.teams_per_division != 0 {
            return Err(ConfigError::ConferenceNotMultipleOfDivision {
                conference: self.teams_per_conference,
                division: self.teams_per_division,
            });
        }

        // mirrored out-of-conference pairing only crosses conferences when they come in pairs
        if self.out_of_conference_games > 0 && self.conference_count() % 2 != 0 {
            return Err(ConfigError::OddConferenceCount(self.conference_count()));
        }

        let max_games = self.number_of_teams / 2;
        if self.games_per_day == 0 || self.games_per_day > max_games {
            return Err(ConfigError::GamesPerDay {
                games_per_day: self.games_per_day,
                max: max_games,
            });
        }

        if self.out_of_conference_games > max_games {
            warn!(
                "{} out-of-conference rounds exceed the rotation cycle of {}, pairings will repeat",
                self.out_of_conference_games, max_games
            );
        }

        Ok(())
    }

    fn validate_partition(field: &'static str, size: u32, teams: u32) -> Result<(), ConfigError> {
        if size == 0 || teams % size != 0 {
            return Err(ConfigError::UnevenPartition { field, size, teams });
        }

        Ok(())
    }
}

impl Default for LeagueConfig {
    fn default() -> Self {
        LeagueConfig {
            number_of_teams: 20,
            teams_per_division: 5,
            teams_per_conference: 10,
            games_per_day: 10,
            out_of_conference_games: 9,
            days_in_preseason: 8,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = LeagueConfig::default();

        assert_eq!(config.validate(), Ok(()));
        assert_eq!(config.division_count(), 4);
        assert_eq!(config.conference_count(), 2);
        assert_eq!(config.regular_season_days(), 52);
    }

    #[test]
    fn test_uneven_division_rejected() {
        let config = LeagueConfig {
            teams_per_division: 3,
            ..LeagueConfig::default()
        };

        assert_eq!(
            config.validate(),
            Err(ConfigError::UnevenPartition {
                field: "teams_per_division",
                size: 3,
                teams: 20
            })
        );
    }

    #[test]
    fn test_conference_must_contain_whole_divisions() {
        let config = LeagueConfig {
            number_of_teams: 24,
            teams_per_division: 4,
            teams_per_conference: 6,
            games_per_day: 12,
            ..LeagueConfig::default()
        };

        assert_eq!(
            config.validate(),
            Err(ConfigError::ConferenceNotMultipleOfDivision {
                conference: 6,
                division: 4
            })
        );
    }

    #[test]
    fn test_out_of_conference_games_need_paired_conferences() {
        let three_conferences = LeagueConfig {
            number_of_teams: 30,
            teams_per_division: 5,
            teams_per_conference: 10,
            games_per_day: 15,
            out_of_conference_games: 9,
            days_in_preseason: 8,
        };
        assert_eq!(three_conferences.validate(), Err(ConfigError::OddConferenceCount(3)));

        let single_conference = LeagueConfig {
            teams_per_conference: 20,
            ..LeagueConfig::default()
        };
        assert_eq!(single_conference.validate(), Err(ConfigError::OddConferenceCount(1)));

        let conference_only = LeagueConfig {
            out_of_conference_games: 0,
            ..single_conference
        };
        assert_eq!(conference_only.validate(), Ok(()));
    }

    #[test]
    fn test_too_many_games_per_day_rejected() {
        let config = LeagueConfig {
            games_per_day: 11,
            ..LeagueConfig::default()
        };

        assert_eq!(
            config.validate(),
            Err(ConfigError::GamesPerDay {
                games_per_day: 11,
                max: 10
            })
        );
    }

    #[test]
    fn test_odd_and_empty_leagues_rejected() {
        let empty = LeagueConfig {
            number_of_teams: 0,
            ..LeagueConfig::default()
        };
        assert_eq!(empty.validate(), Err(ConfigError::NoTeams));

        let odd = LeagueConfig {
            number_of_teams: 15,
            teams_per_division: 5,
            teams_per_conference: 15,
            games_per_day: 7,
            ..LeagueConfig::default()
        };
        assert_eq!(odd.validate(), Err(ConfigError::OddTeamCount(15)));
    }
}
