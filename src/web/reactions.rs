//! Poll reaction endpoints

use crate::reaction;
use crate::store::PollStore;
use actix_web::{post, web, Error, HttpResponse, Responder};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

pub(super) fn configure(conf: &mut actix_web::web::ServiceConfig) {
    conf.service(react_to_poll);
}

#[derive(Deserialize)]
pub struct ReactionForm {
    pub reaction: String,
}

#[derive(Serialize)]
struct ReactionResponse {
    reactions: HashMap<String, u64>,
}

/// Add an emoji reaction to a poll. Reactions have no expiry check and no
/// per-client limit; only the configured allow-list is enforced.
#[post("/api/polls/{poll_id}/react")]
pub async fn react_to_poll(
    store: web::Data<PollStore>,
    path: web::Path<String>,
    form: web::Json<ReactionForm>,
) -> Result<impl Responder, Error> {
    let poll_id = path.into_inner();
    let allowed = crate::app_config::polls().allowed_reactions;

    let reactions = reaction::add_reaction(&store, &poll_id, &form.reaction, &allowed)
        .map_err(super::poll_error)?;

    Ok(HttpResponse::Ok().json(ReactionResponse { reactions }))
}
