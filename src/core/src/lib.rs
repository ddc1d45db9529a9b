pub mod config;
pub mod error;
pub mod league;
pub mod schedule;
pub mod season;
pub mod utils;

pub use config::*;
pub use error::*;
pub use league::Team;
pub use schedule::generators::{PreseasonScheduleGenerator, RegularSeasonScheduleGenerator, ScheduleGenerator};
pub use schedule::{
    GameDaySchedule, GeneratorRegistry, IdentityRandom, Matchup, RandomSource, ScheduleAudit, ScheduleEntry,
    ScheduleStatus, ScheduleType, ScheduledGame, SeasonPhase, SeededRandom,
};
pub use season::{
    Clock, FixedClock, LeagueService, ProcessorRegistry, ProgressionOutcome, ProgressionState, ScheduleProcessor,
    ScheduleService, SeasonProgression, SeasonTransition, SystemClock,
};
