use crate::loaders::LeagueEntity;
use league_core::{FIRST_YEAR, LeagueConfig, LeagueError, LeagueService, Team};
use log::{debug, info};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

/// Builds the league from its definition and carries it across seasons.
pub struct LeagueGenerator {
    definition: LeagueEntity,
    rng: StdRng,
    teams: Vec<Team>,
    season: Option<i32>,
    seasons_completed: u32,
}

impl LeagueGenerator {
    pub fn new(definition: LeagueEntity, seed: u64) -> Self {
        LeagueGenerator {
            definition,
            rng: StdRng::seed_from_u64(seed),
            teams: Vec::new(),
            season: None,
            seasons_completed: 0,
        }
    }

    pub fn config(&self) -> &LeagueConfig {
        &self.definition.config
    }

    pub fn teams(&self) -> &[Team] {
        &self.teams
    }

    pub fn team(&self, id: u32) -> Option<&Team> {
        self.teams.iter().find(|t| t.id == id)
    }

    pub fn season(&self) -> Option<i32> {
        self.season
    }

    pub fn seasons_completed(&self) -> u32 {
        self.seasons_completed
    }
}

impl LeagueService for LeagueGenerator {
    fn generate_new_league(&mut self) -> Result<(), LeagueError> {
        match self.season {
            // a retried bootstrap whose schedule step failed keeps the teams it drew
            Some(FIRST_YEAR) if self.seasons_completed == 0 => {
                debug!("{} already created, keeping its teams", self.definition.name);
                return Ok(());
            }
            Some(_) => return Err(LeagueError::AlreadyExists),
            None => {}
        }

        let config = self.definition.config;
        config.validate()?;

        let required = config.number_of_teams;
        if self.definition.teams.len() < required as usize {
            return Err(LeagueError::TeamCount {
                defined: self.definition.teams.len(),
                required,
            });
        }

        // team slots decide divisions, so draw names into slots at random
        let mut names: Vec<String> = self
            .definition
            .teams
            .iter()
            .map(|team| team.name.clone())
            .collect();
        names.shuffle(&mut self.rng);

        self.teams = names
            .into_iter()
            .take(required as usize)
            .zip(1..=required)
            .map(|(name, id)| Team::new(id, name, &config))
            .collect();

        self.season = Some(FIRST_YEAR);

        info!(
            "🌱 {} created: {} teams, {} divisions, {} conferences",
            self.definition.name,
            self.teams.len(),
            config.division_count(),
            config.conference_count()
        );

        Ok(())
    }

    fn update_league_for_new_season(&mut self, year: i32) -> Result<(), LeagueError> {
        let current = self.season.ok_or(LeagueError::NotCreated)?;

        if year == current {
            debug!("{} is already in season {}", self.definition.name, year);
            return Ok(());
        }

        if year != current + 1 {
            return Err(LeagueError::SeasonOrder {
                current,
                requested: year,
            });
        }

        self.season = Some(year);
        self.seasons_completed += 1;

        info!("🔄 {} moves on to season {}", self.definition.name, year);

        Ok(())
    }
}
