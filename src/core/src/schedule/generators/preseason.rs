use crate::config::LeagueConfig;
use crate::schedule::generators::ScheduleGenerator;
use crate::schedule::{GameDaySchedule, Matchup, RandomSource, SeasonPhase, shuffle};
use log::debug;

/// Short exhibition schedule. A fixed "static" group of teams meets a rotating
/// "floating" group, alternating home advantage day by day.
pub struct PreseasonScheduleGenerator;

impl ScheduleGenerator for PreseasonScheduleGenerator {
    fn generate(&self, config: &LeagueConfig, random: &mut dyn RandomSource) -> Vec<GameDaySchedule> {
        let mut static_teams: Vec<u32> = (1..=config.number_of_teams).collect();
        shuffle(random, &mut static_teams);

        let split = (config.games_per_day as usize).min(static_teams.len());
        let mut floating_teams = static_teams.split_off(split);

        let mut days = Vec::with_capacity(config.days_in_preseason as usize);

        for day in 0..config.days_in_preseason {
            let static_home = day % 2 == 0;

            let matches = static_teams
                .iter()
                .zip(floating_teams.iter())
                .map(|(&static_team, &floating_team)| {
                    Matchup::oriented(floating_team, static_team, static_home)
                })
                .collect();

            days.push(GameDaySchedule::new(day, SeasonPhase::Exhibition, matches));

            if !floating_teams.is_empty() {
                floating_teams.rotate_right(1);
            }
        }

        shuffle(random, &mut days);

        debug!("generated {} preseason days", days.len());

        days
    }
}
