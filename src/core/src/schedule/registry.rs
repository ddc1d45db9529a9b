use crate::error::{HandlerKind, ResolveError};
use crate::schedule::ScheduleType;
use crate::schedule::generators::{PreseasonScheduleGenerator, RegularSeasonScheduleGenerator, ScheduleGenerator};
use std::collections::HashMap;

pub const PRESEASON_GENERATOR: &str = "preseason";
pub const REGULAR_SEASON_GENERATOR: &str = "regular_season";

/// Static schedule type to handler name mapping plus the named handlers
/// themselves. Lookups fail fast on either a missing mapping or a missing
/// registration.
pub struct HandlerRegistry<H: ?Sized> {
    kind: HandlerKind,
    mapping: fn(ScheduleType) -> Option<&'static str>,
    handlers: HashMap<&'static str, Box<H>>,
}

impl<H: ?Sized> HandlerRegistry<H> {
    pub fn new(kind: HandlerKind, mapping: fn(ScheduleType) -> Option<&'static str>) -> Self {
        HandlerRegistry {
            kind,
            mapping,
            handlers: HashMap::new(),
        }
    }

    pub fn register(mut self, name: &'static str, handler: Box<H>) -> Self {
        self.handlers.insert(name, handler);
        self
    }

    pub fn resolve(&self, schedule_type: ScheduleType) -> Result<&H, ResolveError> {
        let name = (self.mapping)(schedule_type).ok_or(ResolveError::Unmapped {
            kind: self.kind,
            schedule_type,
        })?;

        self.handlers
            .get(name)
            .map(|handler| handler.as_ref())
            .ok_or(ResolveError::NotRegistered {
                kind: self.kind,
                schedule_type,
                name,
            })
    }

    pub fn handles(&self, schedule_type: ScheduleType) -> bool {
        self.resolve(schedule_type).is_ok()
    }
}

pub type GeneratorRegistry = HandlerRegistry<dyn ScheduleGenerator>;

/// Only preseason and regular season days are generated from data.
pub fn generator_name(schedule_type: ScheduleType) -> Option<&'static str> {
    match schedule_type {
        ScheduleType::Preseason => Some(PRESEASON_GENERATOR),
        ScheduleType::RegularSeason => Some(REGULAR_SEASON_GENERATOR),
        _ => None,
    }
}

impl HandlerRegistry<dyn ScheduleGenerator> {
    pub fn generators() -> Self {
        HandlerRegistry::new(HandlerKind::Generator, generator_name)
    }

    pub fn standard() -> Self {
        Self::generators()
            .register(PRESEASON_GENERATOR, Box::new(PreseasonScheduleGenerator))
            .register(REGULAR_SEASON_GENERATOR, Box::new(RegularSeasonScheduleGenerator))
    }
}
