use chrono::{Days, NaiveDate};
use league_core::utils::Logging;
use league_core::{
    GameDaySchedule, GeneratorRegistry, LeagueConfig, RandomSource, ScheduleAudit, ScheduleEntry, ScheduleError,
    ScheduleService, ScheduleStatus, ScheduleType, ScheduledGame,
};
use log::{debug, info, warn};

/// Append-only schedule log kept in memory. Entries are stored in
/// (year, sequence) order, one per consecutive date.
pub struct InMemoryScheduleStore {
    config: LeagueConfig,
    generators: GeneratorRegistry,
    random: Box<dyn RandomSource>,
    first_day: NaiveDate,
    entries: Vec<ScheduleEntry>,
    games: Vec<ScheduledGame>,
}

impl InMemoryScheduleStore {
    pub fn new(
        config: LeagueConfig,
        generators: GeneratorRegistry,
        random: Box<dyn RandomSource>,
        first_day: NaiveDate,
    ) -> Self {
        InMemoryScheduleStore {
            config,
            generators,
            random,
            first_day,
            entries: Vec::new(),
            games: Vec::new(),
        }
    }

    pub fn entries(&self) -> &[ScheduleEntry] {
        &self.entries
    }

    pub fn entries_for(&self, year: i32) -> impl Iterator<Item = &ScheduleEntry> {
        self.entries.iter().filter(move |e| e.year == year)
    }

    pub fn games(&self) -> &[ScheduledGame] {
        &self.games
    }

    fn position_of(&self, entry: &ScheduleEntry) -> Option<usize> {
        self.entries.iter().position(|e| e.is_same_slot(entry))
    }

    fn next_start_date(&self) -> NaiveDate {
        self.entries
            .last()
            .and_then(|e| e.scheduled_date.checked_add_days(Days::new(1)))
            .unwrap_or(self.first_day)
    }

    fn append_day(&mut self, year: i32, schedule_type: ScheduleType, date: NaiveDate, day: Option<&GameDaySchedule>) {
        let sequence = self.entries_for(year).count() as u32;

        if let Some(day) = day {
            self.games
                .extend(day.matches.iter().map(|m| ScheduledGame::new(year, sequence, m)));
        }

        self.entries
            .push(ScheduleEntry::new(year, sequence, schedule_type, date));
    }
}

impl ScheduleService for InMemoryScheduleStore {
    fn get_current_schedule_entry(&self) -> Option<ScheduleEntry> {
        self.entries
            .iter()
            .find(|e| e.status == ScheduleStatus::InProgress)
            .cloned()
    }

    fn get_last_schedule_entry(&self) -> Option<ScheduleEntry> {
        self.entries
            .iter()
            .rev()
            .find(|e| e.status != ScheduleStatus::Scheduled)
            .cloned()
    }

    fn get_next_schedule_entry(&self, after: Option<&ScheduleEntry>) -> Option<ScheduleEntry> {
        let position = match after {
            Some(after) => self.position_of(after)? + 1,
            None => 0,
        };

        self.entries.get(position).cloned()
    }

    fn generate_schedule(&mut self, year: i32) -> Result<(), ScheduleError> {
        if self.entries.iter().any(|e| e.year == year) {
            return Err(ScheduleError::AlreadyGenerated(year));
        }

        let preseason_generator = self.generators.resolve(ScheduleType::Preseason)?;
        let regular_season_generator = self.generators.resolve(ScheduleType::RegularSeason)?;

        let preseason = Logging::estimate_result(
            || preseason_generator.generate(&self.config, self.random.as_mut()),
            "generate preseason schedule",
        );
        let regular_season = Logging::estimate_result(
            || regular_season_generator.generate(&self.config, self.random.as_mut()),
            "generate regular season schedule",
        );

        let audit = ScheduleAudit::from_days(preseason.iter().chain(regular_season.iter()));
        if !audit.is_conflict_free() {
            warn!("generated days with double-booked teams: {:?}", audit.conflicting_days);
        }
        debug!("regular season home/away spread: {}", audit.max_home_imbalance());

        let layout = std::iter::once((ScheduleType::BeginningOfSeason, None))
            .chain(preseason.iter().map(|day| (ScheduleType::Preseason, Some(day))))
            .chain(regular_season.iter().map(|day| (ScheduleType::RegularSeason, Some(day))))
            .chain([(ScheduleType::EndOfRegularSeason, None), (ScheduleType::EndOfSeason, None)]);

        let mut date = self.next_start_date();
        for (schedule_type, day) in layout {
            self.append_day(year, schedule_type, date, day);
            date = date.succ_opt().unwrap_or(date);
        }

        info!(
            "📅 Season {} scheduled: {} days, {} games",
            year,
            self.entries_for(year).count(),
            self.games.iter().filter(|g| g.year == year).count()
        );

        Ok(())
    }

    fn update_schedule_entry(&mut self, entry: &ScheduleEntry) -> Result<(), ScheduleError> {
        let position = self.position_of(entry).ok_or(ScheduleError::UnknownEntry {
            year: entry.year,
            sequence: entry.sequence,
        })?;

        let stored = &self.entries[position];
        if stored.status == entry.status {
            return Ok(());
        }

        if !stored.status.can_transition_to(entry.status) {
            return Err(ScheduleError::IllegalTransition {
                year: entry.year,
                sequence: entry.sequence,
                from: stored.status,
                to: entry.status,
            });
        }

        if entry.status == ScheduleStatus::InProgress {
            if let Some(current) = self.get_current_schedule_entry() {
                return Err(ScheduleError::EntryInProgress {
                    year: current.year,
                    sequence: current.sequence,
                });
            }
        }

        self.entries[position].status = entry.status;

        Ok(())
    }

    fn get_games(&self, entry: &ScheduleEntry) -> Vec<ScheduledGame> {
        self.games
            .iter()
            .filter(|g| g.year == entry.year && g.sequence == entry.sequence)
            .cloned()
            .collect()
    }
}
