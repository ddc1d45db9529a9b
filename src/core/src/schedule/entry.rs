use crate::error::ScheduleError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScheduleType {
    BeginningOfSeason,
    Preseason,
    RegularSeason,
    EndOfRegularSeason,
    EndOfSeason,
}

impl ScheduleType {
    pub const ALL: [ScheduleType; 5] = [
        ScheduleType::BeginningOfSeason,
        ScheduleType::Preseason,
        ScheduleType::RegularSeason,
        ScheduleType::EndOfRegularSeason,
        ScheduleType::EndOfSeason,
    ];

    /// Days of this type carry games.
    pub fn has_games(&self) -> bool {
        matches!(self, ScheduleType::Preseason | ScheduleType::RegularSeason)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ScheduleType::BeginningOfSeason => "BEGINNING_OF_SEASON",
            ScheduleType::Preseason => "PRESEASON",
            ScheduleType::RegularSeason => "REGULAR_SEASON",
            ScheduleType::EndOfRegularSeason => "END_OF_REGULAR_SEASON",
            ScheduleType::EndOfSeason => "END_OF_SEASON",
        }
    }
}

impl Display for ScheduleType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ScheduleType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ScheduleType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| format!("'{}' is not a valid value for ScheduleType", s))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScheduleStatus {
    Scheduled,
    InProgress,
    Complete,
}

impl ScheduleStatus {
    /// Status only ever moves one step forward.
    pub fn can_transition_to(&self, next: ScheduleStatus) -> bool {
        matches!(
            (self, next),
            (ScheduleStatus::Scheduled, ScheduleStatus::InProgress)
                | (ScheduleStatus::InProgress, ScheduleStatus::Complete)
        )
    }
}

impl Display for ScheduleStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ScheduleStatus::Scheduled => write!(f, "SCHEDULED"),
            ScheduleStatus::InProgress => write!(f, "IN_PROGRESS"),
            ScheduleStatus::Complete => write!(f, "COMPLETE"),
        }
    }
}

/// One day of a season's append-only schedule log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleEntry {
    pub year: i32,
    pub sequence: u32,
    pub schedule_type: ScheduleType,
    pub status: ScheduleStatus,
    pub scheduled_date: NaiveDate,
}

impl ScheduleEntry {
    pub fn new(year: i32, sequence: u32, schedule_type: ScheduleType, scheduled_date: NaiveDate) -> Self {
        ScheduleEntry {
            year,
            sequence,
            schedule_type,
            status: ScheduleStatus::Scheduled,
            scheduled_date,
        }
    }

    pub fn start(&mut self) -> Result<(), ScheduleError> {
        self.transition(ScheduleStatus::InProgress)
    }

    pub fn complete(&mut self) -> Result<(), ScheduleError> {
        self.transition(ScheduleStatus::Complete)
    }

    pub fn is_due(&self, today: NaiveDate) -> bool {
        self.scheduled_date <= today
    }

    /// Same slot in the log, regardless of status.
    pub fn is_same_slot(&self, other: &ScheduleEntry) -> bool {
        self.year == other.year && self.sequence == other.sequence
    }

    fn transition(&mut self, next: ScheduleStatus) -> Result<(), ScheduleError> {
        if !self.status.can_transition_to(next) {
            return Err(ScheduleError::IllegalTransition {
                year: self.year,
                sequence: self.sequence,
                from: self.status,
                to: next,
            });
        }

        self.status = next;
        Ok(())
    }
}

impl Display for ScheduleEntry {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}/{} {} on {} [{}]",
            self.year, self.sequence, self.schedule_type, self.scheduled_date, self.status
        )
    }
}
