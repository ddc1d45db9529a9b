use crate::config::FIRST_YEAR;
use crate::error::SeasonError;
use crate::schedule::{ScheduleEntry, ScheduleType};
use crate::season::{Clock, LeagueService, ProcessorRegistry, ScheduleService};
use log::{debug, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgressionState {
    NoLeague,
    SeasonActive,
    AwaitingNextDay,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeasonTransition {
    None,
    LeagueCreated { year: i32 },
    RolledOver { year: i32 },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProgressionOutcome {
    /// Another entry is still being processed; nothing was touched.
    InProgress { entry: ScheduleEntry },
    /// The next entry is in the future.
    NotDue {
        transition: SeasonTransition,
        next: ScheduleEntry,
    },
    Processed {
        transition: SeasonTransition,
        entry: ScheduleEntry,
    },
}

/// Drives the league through its schedule, one entry per call.
///
/// Meant to be triggered once per simulated day. Calls take `&mut self`, so a
/// shared instance has to sit behind a lock, which keeps two triggers from
/// advancing the same entry.
pub struct SeasonProgression<L, S, C> {
    league: L,
    schedule: S,
    clock: C,
    processors: ProcessorRegistry,
}

impl<L: LeagueService, S: ScheduleService, C: Clock> SeasonProgression<L, S, C> {
    pub fn new(league: L, schedule: S, clock: C, processors: ProcessorRegistry) -> Self {
        SeasonProgression {
            league,
            schedule,
            clock,
            processors,
        }
    }

    pub fn league(&self) -> &L {
        &self.league
    }

    pub fn schedule(&self) -> &S {
        &self.schedule
    }

    pub fn schedule_mut(&mut self) -> &mut S {
        &mut self.schedule
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn clock_mut(&mut self) -> &mut C {
        &mut self.clock
    }

    pub fn state(&self) -> ProgressionState {
        if self.schedule.get_current_schedule_entry().is_some() {
            return ProgressionState::AwaitingNextDay;
        }

        let last = self.schedule.get_last_schedule_entry();
        if last.is_none() && self.schedule.get_next_schedule_entry(None).is_none() {
            return ProgressionState::NoLeague;
        }

        ProgressionState::SeasonActive
    }

    pub fn process_scheduled_event(&mut self) -> Result<ProgressionOutcome, SeasonError> {
        if let Some(current) = self.schedule.get_current_schedule_entry() {
            debug!("{} is still in progress", current);
            return Ok(ProgressionOutcome::InProgress { entry: current });
        }

        let last = self.schedule.get_last_schedule_entry();
        let transition = self.prepare_season(last.as_ref())?;

        let next = self
            .schedule
            .get_next_schedule_entry(last.as_ref())
            .ok_or_else(|| SeasonError::Processing {
                after: last
                    .as_ref()
                    .map_or_else(|| String::from("an empty schedule"), |entry| entry.to_string()),
            })?;

        let today = self.clock.today();
        if !next.is_due(today) {
            debug!("next entry {} is not due on {}", next, today);
            return Ok(ProgressionOutcome::NotDue { transition, next });
        }

        let mut entry = next;
        entry.start()?;
        self.schedule.update_schedule_entry(&entry)?;

        info!("📅 Processing {}", entry);

        let processor = self.processors.resolve(entry.schedule_type)?;
        processor
            .process(&entry, &mut self.schedule)
            .map_err(|source| SeasonError::Processor {
                schedule_type: entry.schedule_type,
                source,
            })?;

        Ok(ProgressionOutcome::Processed { transition, entry })
    }

    /// Creates the league or rolls into the next season when the log has
    /// nothing left after `last`.
    fn prepare_season(&mut self, last: Option<&ScheduleEntry>) -> Result<SeasonTransition, SeasonError> {
        if self.schedule.get_next_schedule_entry(last).is_some() {
            return Ok(SeasonTransition::None);
        }

        match last {
            None => {
                info!("🌱 No league found, creating season {}", FIRST_YEAR);

                self.league.generate_new_league()?;
                self.schedule.generate_schedule(FIRST_YEAR)?;

                Ok(SeasonTransition::LeagueCreated { year: FIRST_YEAR })
            }
            Some(entry) if entry.schedule_type == ScheduleType::EndOfSeason => {
                let year = entry.year + 1;

                info!("🔄 Rolling league over to season {}", year);

                self.league.update_league_for_new_season(year)?;
                self.schedule.generate_schedule(year)?;

                Ok(SeasonTransition::RolledOver { year })
            }
            Some(_) => Ok(SeasonTransition::None),
        }
    }
}
