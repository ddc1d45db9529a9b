use crate::error::{LeagueError, ScheduleError};
use crate::schedule::{ScheduleEntry, ScheduledGame};

/// Creates the league and carries it from one season to the next.
pub trait LeagueService {
    fn generate_new_league(&mut self) -> Result<(), LeagueError>;

    fn update_league_for_new_season(&mut self, year: i32) -> Result<(), LeagueError>;
}

/// Persistence of the season's schedule log.
pub trait ScheduleService {
    /// The entry currently in progress, if any.
    fn get_current_schedule_entry(&self) -> Option<ScheduleEntry>;

    /// The most recent entry that has left the scheduled state.
    fn get_last_schedule_entry(&self) -> Option<ScheduleEntry>;

    /// The entry following `after` in log order, or the very first entry when
    /// `after` is `None`.
    fn get_next_schedule_entry(&self, after: Option<&ScheduleEntry>) -> Option<ScheduleEntry>;

    /// Generates and stores every entry and game for `year`.
    fn generate_schedule(&mut self, year: i32) -> Result<(), ScheduleError>;

    fn update_schedule_entry(&mut self, entry: &ScheduleEntry) -> Result<(), ScheduleError>;

    fn get_games(&self, entry: &ScheduleEntry) -> Vec<ScheduledGame>;
}
