use chrono::{Local, NaiveDate};

/// Source of "today" for relative dates such as `wczoraj`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Clock {
    /// Local calendar date of the host.
    #[default]
    System,
    /// A fixed date, for reproducible runs and tests.
    Fixed(NaiveDate),
}

impl Clock {
    pub fn today(&self) -> NaiveDate {
        match self {
            Clock::System => Local::now().date_naive(),
            Clock::Fixed(date) => *date,
        }
    }
}

/// Options for standardization.
#[derive(Debug, Clone, Default)]
pub struct StandardizeOptions {
    /// Clock used to resolve relative dates.
    pub clock: Clock,
}

impl StandardizeOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.clock = Clock::Fixed(today);
        self
    }
}
