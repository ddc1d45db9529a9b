mod preseason;
mod regular_season;

pub use preseason::*;
pub use regular_season::*;

use crate::config::LeagueConfig;
use crate::schedule::{GameDaySchedule, RandomSource};

/// Produces the game days for one schedule phase. Generators hold no state
/// between calls.
pub trait ScheduleGenerator {
    fn generate(&self, config: &LeagueConfig, random: &mut dyn RandomSource) -> Vec<GameDaySchedule>;
}
