//! Emoji reactions.
//!
//! Reactions are social, not part of the poll's decision outcome: they
//! stay open after expiration and carry no per-client limit. The only
//! restriction is the configured symbol allow-list.

use crate::error::PollError;
use crate::store::PollStore;
use std::collections::HashMap;

/// Increment a reaction count on a poll, creating the key on first use.
/// Returns the full updated reaction counts.
pub fn add_reaction(
    store: &PollStore,
    poll_id: &str,
    symbol: &str,
    allowed: &[String],
) -> Result<HashMap<String, u64>, PollError> {
    store.update(poll_id, |poll| {
        if !allowed.iter().any(|s| s == symbol) {
            return Err(PollError::InvalidReaction(symbol.to_string()));
        }

        *poll.reactions.entry(symbol.to_string()).or_insert(0) += 1;
        Ok(poll.reactions.clone())
    })
}
