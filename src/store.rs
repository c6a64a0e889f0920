//! In-memory poll store.
//!
//! Polls are kept in a DashMap keyed by id. `update` runs its closure
//! while holding the entry's write lock, so the check-then-mutate
//! sequence in the voting service commits as one unit and a concurrent
//! reader never observes a half-applied vote (tally incremented, voter
//! set not yet updated). Suitable for single-instance deployments.

use crate::error::PollError;
use crate::poll::Poll;
use dashmap::DashMap;

/// Authoritative poll records, keyed by poll id.
#[derive(Default)]
pub struct PollStore {
    polls: DashMap<String, Poll>,
}

impl PollStore {
    pub fn new() -> Self {
        Self {
            polls: DashMap::new(),
        }
    }

    /// Insert a newly created poll.
    pub fn insert(&self, poll: Poll) {
        self.polls.insert(poll.id.clone(), poll);
    }

    /// Snapshot of a poll for rendering. Blocks only if the record is
    /// mid-mutation, so the copy is always internally consistent.
    pub fn get(&self, id: &str) -> Option<Poll> {
        self.polls.get(id).map(|entry| entry.value().clone())
    }

    /// Run `mutate` against a poll record under its write lock.
    ///
    /// The closure's failure leaves the record untouched only if the
    /// closure itself mutates nothing before erroring; the services in
    /// this crate perform all checks before their first write.
    pub fn update<T>(
        &self,
        id: &str,
        mutate: impl FnOnce(&mut Poll) -> Result<T, PollError>,
    ) -> Result<T, PollError> {
        match self.polls.get_mut(id) {
            Some(mut entry) => mutate(entry.value_mut()),
            None => Err(PollError::NotFound),
        }
    }

    pub fn len(&self) -> usize {
        self.polls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.polls.is_empty()
    }
}
