use league_core::LeagueConfig;
use serde::Deserialize;

const STATIC_LEAGUE_JSON: &str = include_str!("../data/league.json");

#[derive(Debug, Clone, Deserialize)]
pub struct LeagueEntity {
    pub name: String,
    pub slug: String,
    pub config: LeagueConfig,
    pub teams: Vec<TeamEntity>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TeamEntity {
    pub name: String,
}

pub struct LeagueLoader;

impl LeagueLoader {
    pub fn load() -> Result<LeagueEntity, serde_json::Error> {
        Self::load_from_str(STATIC_LEAGUE_JSON)
    }

    pub fn load_from_str(json: &str) -> Result<LeagueEntity, serde_json::Error> {
        serde_json::from_str(json)
    }
}
