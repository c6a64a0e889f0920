//! Typed error kinds for poll operations.
//!
//! All of these are local, recoverable conditions reported to the caller.
//! The web layer translates them into HTTP responses; the core only
//! classifies and never retries or coerces invalid input.

/// Poll operation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PollError {
    /// No poll exists with the requested id
    NotFound,
    /// Poll has passed its expiration time; votes are no longer accepted
    PollExpired,
    /// Vote names an option the poll does not have
    InvalidOption(String),
    /// This client has already cast a vote on this poll
    AlreadyVoted,
    /// Reaction symbol is not on the allow-list
    InvalidReaction(String),
    /// Malformed creation input
    Validation(String),
}

impl std::fmt::Display for PollError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PollError::NotFound => write!(f, "Poll not found."),
            PollError::PollExpired => {
                write!(f, "This poll has expired. Voting is no longer allowed.")
            }
            PollError::InvalidOption(label) => {
                write!(f, "\"{}\" is not an option on this poll.", label)
            }
            PollError::AlreadyVoted => write!(f, "You have already voted on this poll."),
            PollError::InvalidReaction(symbol) => {
                write!(f, "\"{}\" is not an available reaction.", symbol)
            }
            PollError::Validation(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for PollError {}
