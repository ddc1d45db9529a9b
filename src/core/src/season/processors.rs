use crate::error::{HandlerKind, ProcessorError};
use crate::schedule::{HandlerRegistry, ScheduleEntry, ScheduleType};
use crate::season::ScheduleService;
use log::{debug, info};

pub const MATCHDAY_PROCESSOR: &str = "matchday";
pub const SEASON_MILESTONE_PROCESSOR: &str = "season_milestone";

/// Handles one due schedule entry. The entry arrives already marked in
/// progress; a processor that succeeds is expected to complete it.
pub trait ScheduleProcessor {
    fn process(&self, entry: &ScheduleEntry, schedule: &mut dyn ScheduleService) -> Result<(), ProcessorError>;
}

pub type ProcessorRegistry = HandlerRegistry<dyn ScheduleProcessor>;

/// Every schedule type has a processor.
pub fn processor_name(schedule_type: ScheduleType) -> Option<&'static str> {
    match schedule_type {
        ScheduleType::Preseason | ScheduleType::RegularSeason => Some(MATCHDAY_PROCESSOR),
        ScheduleType::BeginningOfSeason
        | ScheduleType::EndOfRegularSeason
        | ScheduleType::EndOfSeason => Some(SEASON_MILESTONE_PROCESSOR),
    }
}

impl HandlerRegistry<dyn ScheduleProcessor> {
    pub fn processors() -> Self {
        HandlerRegistry::new(HandlerKind::Processor, processor_name)
    }

    pub fn standard() -> Self {
        Self::processors()
            .register(MATCHDAY_PROCESSOR, Box::new(MatchdayProcessor))
            .register(SEASON_MILESTONE_PROCESSOR, Box::new(SeasonMilestoneProcessor))
    }
}

/// Plays out a preseason or regular season day.
pub struct MatchdayProcessor;

impl ScheduleProcessor for MatchdayProcessor {
    fn process(&self, entry: &ScheduleEntry, schedule: &mut dyn ScheduleService) -> Result<(), ProcessorError> {
        let games = schedule.get_games(entry);

        if games.is_empty() {
            return Err(format!("no games scheduled for {}", entry).into());
        }

        for game in &games {
            debug!("game day {}: {} vs {}", entry.sequence, game.home_team_id, game.away_team_id);
        }

        info!("⚽ {} {} games played on {}", games.len(), entry.schedule_type, entry.scheduled_date);

        complete(entry, schedule)
    }
}

/// Marks season boundaries.
pub struct SeasonMilestoneProcessor;

impl ScheduleProcessor for SeasonMilestoneProcessor {
    fn process(&self, entry: &ScheduleEntry, schedule: &mut dyn ScheduleService) -> Result<(), ProcessorError> {
        match entry.schedule_type {
            ScheduleType::BeginningOfSeason => info!("🏁 Season {} begins", entry.year),
            ScheduleType::EndOfRegularSeason => info!("📋 Regular season {} is over", entry.year),
            ScheduleType::EndOfSeason => info!("🏆 Season {} finished", entry.year),
            other => return Err(format!("{} is not a season milestone", other).into()),
        }

        complete(entry, schedule)
    }
}

fn complete(entry: &ScheduleEntry, schedule: &mut dyn ScheduleService) -> Result<(), ProcessorError> {
    let mut completed = entry.clone();
    completed.complete()?;
    schedule.update_schedule_entry(&completed)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_type_has_a_processor() {
        let registry = ProcessorRegistry::standard();

        for schedule_type in ScheduleType::ALL {
            assert!(registry.handles(schedule_type), "{} has no processor", schedule_type);
        }
    }

    #[test]
    fn test_games_days_share_matchday_processor() {
        assert_eq!(processor_name(ScheduleType::Preseason), Some(MATCHDAY_PROCESSOR));
        assert_eq!(processor_name(ScheduleType::RegularSeason), Some(MATCHDAY_PROCESSOR));
        assert_eq!(processor_name(ScheduleType::EndOfSeason), Some(SEASON_MILESTONE_PROCESSOR));
    }
}
