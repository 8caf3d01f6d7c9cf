use chrono::{DateTime, Utc};

/// Supplies the current time for audit stamping.
///
/// Injected so tests and replays can pin timestamps.
pub trait AuditClock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Production clock backed by the system time.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl AuditClock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Clock pinned to a single instant, for deterministic sessions and tests.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl AuditClock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}
