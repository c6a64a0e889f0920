//! Derived poll state and the result-visibility policy.
//!
//! Nothing here is cached or stored. State is recomputed from
//! `expires_at` on every read, so a caller that was delayed for an
//! arbitrary time can never act on a stale flag.

use crate::poll::{Poll, ResultVisibility};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Lifecycle state, always derived from `(expires_at, now)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PollState {
    Active,
    Expired,
}

/// Compute the poll's current state. Expired iff `now >= expires_at`.
pub fn state(poll: &Poll, now: DateTime<Utc>) -> PollState {
    if now >= poll.expires_at {
        PollState::Expired
    } else {
        PollState::Active
    }
}

/// Whether tallies may be disclosed to this viewer right now.
///
/// Visible if the poll is expired, or the viewer has voted, or the poll
/// was configured to show results live. A hide-until-expiry poll still
/// reveals results to someone who has committed a vote, and always
/// discloses its outcome once closed.
pub fn tally_visible(poll: &Poll, now: DateTime<Utc>, has_voted: bool) -> bool {
    state(poll, now) == PollState::Expired
        || has_voted
        || poll.result_visibility == ResultVisibility::ShowLive
}
