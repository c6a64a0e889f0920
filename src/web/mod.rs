pub mod polls;
pub mod reactions;

use crate::error::PollError;
use actix_web::error;

/// Configures the web app by adding services from each web file.
///
/// @see https://docs.rs/actix-web/4.0.1/actix_web/struct.App.html#method.configure
pub fn configure(conf: &mut actix_web::web::ServiceConfig) {
    polls::configure(conf);
    reactions::configure(conf);
}

/// Map a core error kind onto the HTTP status it is reported with.
pub(crate) fn poll_error(err: PollError) -> actix_web::Error {
    match err {
        PollError::NotFound => error::ErrorNotFound(err),
        PollError::PollExpired => error::ErrorForbidden(err),
        PollError::AlreadyVoted => error::ErrorConflict(err),
        PollError::InvalidOption(_) | PollError::InvalidReaction(_) | PollError::Validation(_) => {
            error::ErrorBadRequest(err)
        }
    }
}
