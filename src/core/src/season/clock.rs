use chrono::{Days, Local, NaiveDate};

pub trait Clock {
    fn today(&self) -> NaiveDate;
}

pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Clock that only moves when told to.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    today: NaiveDate,
}

impl FixedClock {
    pub fn new(today: NaiveDate) -> Self {
        FixedClock { today }
    }

    pub fn set(&mut self, today: NaiveDate) {
        self.today = today;
    }

    pub fn advance_days(&mut self, days: u64) {
        if let Some(date) = self.today.checked_add_days(Days::new(days)) {
            self.today = date;
        }
    }
}

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.today
    }
}
