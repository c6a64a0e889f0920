//! Poll records and creation-time validation.

use crate::error::PollError;
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// Expiration windows a creator may choose, in hours.
pub const EXPIRY_CHOICES_HOURS: [i64; 3] = [1, 12, 24];

/// How tallies are disclosed to viewers while the poll is active.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResultVisibility {
    /// Tallies withheld until the poll expires. Voters who have already
    /// cast a vote still see them.
    #[serde(rename = "hide-until-expiry")]
    HideUntilExpiry,
    /// Tallies visible to everyone from creation.
    #[serde(rename = "show-live")]
    ShowLive,
}

/// Poll flavor chosen at creation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PollType {
    #[default]
    MultipleChoice,
    /// Options are fixed to exactly Yes/No; the creator only picks the type.
    YesNo,
}

/// The authoritative poll record.
///
/// Configuration fields (`question`, `options`, `expires_at`,
/// `result_visibility`) are immutable after creation. Lifecycle state
/// (active/expired) is never stored; see [`crate::lifecycle::state`].
#[derive(Clone, Debug)]
pub struct Poll {
    pub id: String,
    pub question: String,
    /// Ordered, distinct option labels. Fixed at creation.
    pub options: Vec<String>,
    /// Tally keyed by option label. The key set is exactly `options` for
    /// the poll's entire life; it never gains or loses keys.
    pub votes: HashMap<String, u64>,
    /// Emoji reaction counts. Keys appear lazily on first use.
    pub reactions: HashMap<String, u64>,
    /// Opaque tokens of clients that have voted. Embedded in the record so
    /// the tally increment and the voter insert commit under one lock.
    pub voters: HashSet<String>,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
    pub result_visibility: ResultVisibility,
}

impl Poll {
    /// Validate creation input and build a new poll.
    ///
    /// For [`PollType::YesNo`] the submitted options are ignored and the
    /// labels are fixed server-side.
    pub fn new(
        question: &str,
        poll_type: PollType,
        options: Vec<String>,
        expires_in_hours: i64,
        result_visibility: ResultVisibility,
        now: DateTime<Utc>,
    ) -> Result<Self, PollError> {
        let question = question.trim();
        if question.is_empty() {
            return Err(PollError::Validation(
                "Please enter a question.".to_string(),
            ));
        }

        let options = match poll_type {
            PollType::YesNo => vec!["Yes".to_string(), "No".to_string()],
            PollType::MultipleChoice => {
                let options: Vec<String> =
                    options.into_iter().map(|o| o.trim().to_string()).collect();

                if options.len() < 2 {
                    return Err(PollError::Validation(
                        "A poll needs at least 2 options.".to_string(),
                    ));
                }
                if options.iter().any(|o| o.is_empty()) {
                    return Err(PollError::Validation(
                        "Options cannot be empty.".to_string(),
                    ));
                }
                let mut seen = HashSet::new();
                if !options.iter().all(|o| seen.insert(o.as_str())) {
                    return Err(PollError::Validation(
                        "Options must be distinct.".to_string(),
                    ));
                }
                options
            }
        };

        if !EXPIRY_CHOICES_HOURS.contains(&expires_in_hours) {
            return Err(PollError::Validation(format!(
                "Expiration must be one of {:?} hours.",
                EXPIRY_CHOICES_HOURS
            )));
        }

        // One zeroed tally key per option, fixed for the poll's life.
        let votes = options.iter().map(|o| (o.clone(), 0)).collect();

        Ok(Self {
            id: uuid::Uuid::new_v4().to_string(),
            question: question.to_string(),
            options,
            votes,
            reactions: HashMap::new(),
            voters: HashSet::new(),
            created_at: now,
            expires_at: now + Duration::hours(expires_in_hours),
            result_visibility,
        })
    }

    /// Whether the given client token has already cast a vote.
    pub fn has_voted(&self, voter_id: &str) -> bool {
        self.voters.contains(voter_id)
    }

    /// Total votes cast across all options.
    pub fn total_votes(&self) -> u64 {
        self.votes.values().sum()
    }
}
