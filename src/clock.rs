//! Time source for expiration checks.
//!
//! The core takes `now` as an argument everywhere, so expiry logic is
//! testable without the wall clock. The web layer injects a `Clock`
//! through app data and resolves `now` once per request.

use chrono::{DateTime, Utc};

/// Supplies the current time.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall-clock time. The only implementation used in production.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
