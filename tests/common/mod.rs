//! Shared helpers for integration tests.

use actix_session::storage::CookieSessionStore;
use actix_session::SessionMiddleware;
use actix_web::cookie::Key;
use chrono::{DateTime, Duration, Utc};
use std::sync::Mutex;
use vanishvote::clock::Clock;

/// Session middleware with a fixed test signing key.
pub fn session_middleware() -> SessionMiddleware<CookieSessionStore> {
    SessionMiddleware::builder(CookieSessionStore::default(), Key::from(&[7; 64]))
        .cookie_secure(false)
        .build()
}

/// A clock the test advances by hand.
#[allow(dead_code)]
pub struct ManualClock(Mutex<DateTime<Utc>>);

#[allow(dead_code)]

impl ManualClock {
    pub fn new(start: DateTime<Utc>) -> Self {
        Self(Mutex::new(start))
    }

    pub fn advance(&self, delta: Duration) {
        *self.0.lock().unwrap() += delta;
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        *self.0.lock().unwrap()
    }
}
