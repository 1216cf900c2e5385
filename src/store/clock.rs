use chrono::{DateTime, Local, NaiveDate, TimeZone, Utc};

/// Where the store gets "today" and "now" from.
pub trait Clock: Send {
    /// Calendar date used by the fork rule.
    fn today(&self) -> NaiveDate;
    /// Instant stamped into `createdAt` / `completedAt`.
    fn now(&self) -> DateTime<Utc>;
}

/// Wall clock. "Today" is the local calendar date.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }

    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Pinned clock for tests and the `--today` flag.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    today: NaiveDate,
    now: DateTime<Utc>,
}

impl FixedClock {
    /// Noon UTC on `today`.
    pub fn on(today: NaiveDate) -> Self {
        let noon = today.and_hms_opt(12, 0, 0).unwrap_or_default();
        Self {
            today,
            now: Utc.from_utc_datetime(&noon),
        }
    }

    pub fn at(today: NaiveDate, now: DateTime<Utc>) -> Self {
        Self { today, now }
    }
}

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.today
    }

    fn now(&self) -> DateTime<Utc> {
        self.now
    }
}
