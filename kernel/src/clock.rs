use chrono::{DateTime, Utc};

/// Source of the instant used to classify bookings as current, past or
/// future. Injected so that tests can pin "now" to a known value.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
