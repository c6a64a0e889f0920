//! Vote casting.
//!
//! One vote per client token per poll. The whole precondition chain and
//! both mutations run inside a single store `update`, so a retried or
//! concurrently delivered duplicate can never double-count.

use crate::error::PollError;
use crate::lifecycle::{self, PollState};
use crate::store::PollStore;
use chrono::{DateTime, Utc};
use std::collections::HashMap;

/// Apply a vote to a poll.
///
/// Preconditions are checked in order, first failure wins: the poll must
/// exist, must still be active, the option must be one of the poll's
/// options, and the voter must not have voted before. On success the
/// option's tally is incremented and the voter token recorded, then the
/// full updated tally is returned so the caller can refresh its view
/// without a second read.
pub fn cast_vote(
    store: &PollStore,
    poll_id: &str,
    option: &str,
    voter_id: &str,
    now: DateTime<Utc>,
) -> Result<HashMap<String, u64>, PollError> {
    store.update(poll_id, |poll| {
        if lifecycle::state(poll, now) == PollState::Expired {
            return Err(PollError::PollExpired);
        }
        if !poll.votes.contains_key(option) {
            return Err(PollError::InvalidOption(option.to_string()));
        }
        if poll.has_voted(voter_id) {
            return Err(PollError::AlreadyVoted);
        }

        // Key presence checked above; the tally's key set never changes.
        *poll.votes.entry(option.to_string()).or_insert(0) += 1;
        poll.voters.insert(voter_id.to_string());

        log::debug!("poll {}: vote recorded for \"{}\"", poll.id, option);
        Ok(poll.votes.clone())
    })
}
