use chrono::NaiveDateTime;

/// Source of "now" for clock-in/out defaults, injected so tests control time.
pub trait Clock {
    fn now(&self) -> NaiveDateTime;
}

/// Local wall-clock time, the production default.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        chrono::Local::now().naive_local()
    }
}

/// Always returns the same instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDateTime);

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}
