use crate::schedule::{ScheduleStatus, ScheduleType};
use std::fmt::{Display, Formatter};
use thiserror::Error;

/// Failure raised by a schedule processor; carried through the progression unchanged.
pub type ProcessorError = Box<dyn std::error::Error + Send + Sync>;

/// League configuration invariants.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("league has no teams")]
    NoTeams,
    #[error("league needs an even number of teams (got {0})")]
    OddTeamCount(u32),
    #[error("{field} of {size} does not evenly divide {teams} teams")]
    UnevenPartition {
        field: &'static str,
        size: u32,
        teams: u32,
    },
    #[error("conference size {conference} is not a multiple of division size {division}")]
    ConferenceNotMultipleOfDivision { conference: u32, division: u32 },
    #[error("out-of-conference games need an even number of conferences (got {0})")]
    OddConferenceCount(u32),
    #[error("games per day must be between 1 and {max} (got {games_per_day})")]
    GamesPerDay { games_per_day: u32, max: u32 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandlerKind {
    Generator,
    Processor,
}

impl Display for HandlerKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            HandlerKind::Generator => write!(f, "generator"),
            HandlerKind::Processor => write!(f, "processor"),
        }
    }
}

/// Schedule type could not be resolved to a handler.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ResolveError {
    #[error("no {kind} is mapped to schedule type {schedule_type}")]
    Unmapped {
        kind: HandlerKind,
        schedule_type: ScheduleType,
    },
    #[error("{kind} '{name}' mapped to schedule type {schedule_type} is not registered")]
    NotRegistered {
        kind: HandlerKind,
        schedule_type: ScheduleType,
        name: &'static str,
    },
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ScheduleError {
    #[error("schedule entry {year}/{sequence} cannot move from {from} to {to}")]
    IllegalTransition {
        year: i32,
        sequence: u32,
        from: ScheduleStatus,
        to: ScheduleStatus,
    },
    #[error("schedule entry {year}/{sequence} is already in progress")]
    EntryInProgress { year: i32, sequence: u32 },
    #[error("schedule entry {year}/{sequence} does not exist")]
    UnknownEntry { year: i32, sequence: u32 },
    #[error("schedule for {0} already exists")]
    AlreadyGenerated(i32),
    #[error(transparent)]
    Resolve(#[from] ResolveError),
}

/// League bootstrap and season rollover failures.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LeagueError {
    #[error("invalid league configuration: {0}")]
    InvalidConfig(#[from] ConfigError),
    #[error("league definition lists {defined} teams but the configuration needs {required}")]
    TeamCount { defined: usize, required: u32 },
    #[error("league already exists")]
    AlreadyExists,
    #[error("league has not been created")]
    NotCreated,
    #[error("cannot roll season {current} over to {requested}")]
    SeasonOrder { current: i32, requested: i32 },
}

/// Everything that can stop a call to the season progression.
#[derive(Debug, Error)]
pub enum SeasonError {
    #[error("no schedule entry follows {after}")]
    Processing { after: String },
    #[error("league bootstrap failed: {0}")]
    LeagueBootstrap(#[from] LeagueError),
    #[error(transparent)]
    TypeResolution(ResolveError),
    #[error("schedule update failed: {0}")]
    Schedule(ScheduleError),
    #[error("{schedule_type} processor failed")]
    Processor {
        schedule_type: ScheduleType,
        #[source]
        source: ProcessorError,
    },
}

impl From<ResolveError> for SeasonError {
    fn from(error: ResolveError) -> Self {
        SeasonError::TypeResolution(error)
    }
}

impl From<ScheduleError> for SeasonError {
    fn from(error: ScheduleError) -> Self {
        match error {
            ScheduleError::Resolve(resolve) => SeasonError::TypeResolution(resolve),
            other => SeasonError::Schedule(other),
        }
    }
}
