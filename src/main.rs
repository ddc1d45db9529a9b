use database::{InMemoryScheduleStore, LeagueGenerator, LeagueLoader};
use env_logger::Env;
use league_core::utils::TimeEstimation;
use league_core::{
    Clock, FixedClock, GeneratorRegistry, ProcessorRegistry, ProgressionOutcome, SeasonProgression, SeasonTransition,
    SeededRandom, SystemClock,
};
use log::{info, warn};
use std::env;

const DEFAULT_SIM_DAYS: u64 = 120;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let sim_days = env::var("SIM_DAYS")
        .ok()
        .and_then(|days| days.parse::<u64>().ok())
        .unwrap_or(DEFAULT_SIM_DAYS);

    let seed = env::var("LEAGUE_SEED")
        .ok()
        .and_then(|seed| seed.parse::<u64>().ok())
        .unwrap_or_else(rand::random);

    let (definition, estimated) = TimeEstimation::estimate(LeagueLoader::load);
    let definition = definition?;

    info!("league '{}' loaded: {} ms", definition.name, estimated);

    let config = definition.config;
    let today = SystemClock.today();

    let league = LeagueGenerator::new(definition, seed);
    let schedule = InMemoryScheduleStore::new(
        config,
        GeneratorRegistry::standard(),
        Box::new(SeededRandom::new(seed)),
        today,
    );

    let mut progression =
        SeasonProgression::new(league, schedule, FixedClock::new(today), ProcessorRegistry::standard());

    info!("simulating {} days with seed {}", sim_days, seed);

    for _ in 0..sim_days {
        match progression.process_scheduled_event()? {
            ProgressionOutcome::Processed { transition, entry } => {
                if let SeasonTransition::RolledOver { year } = transition {
                    info!("season {} started", year);
                }
                info!("{}", entry);
            }
            ProgressionOutcome::NotDue { next, .. } => {
                info!("nothing due on {}, next is {}", progression.clock().today(), next);
            }
            ProgressionOutcome::InProgress { entry } => {
                warn!("{} still in progress", entry);
            }
        }

        progression.clock_mut().advance_days(1);
    }

    let games = progression.schedule().games();

    info!(
        "finished in season {}: {} entries, {} games",
        progression.league().season().map_or_else(|| String::from("-"), |year| year.to_string()),
        progression.schedule().entries().len(),
        games.len()
    );

    Ok(())
}
