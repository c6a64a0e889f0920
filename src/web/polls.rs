//! Poll creation, viewing, and voting endpoints

use crate::clock::Clock;
use crate::error::PollError;
use crate::lifecycle::{self, PollState};
use crate::poll::{Poll, PollType, ResultVisibility};
use crate::store::PollStore;
use crate::voting;
use actix_session::Session;
use actix_web::{error, get, post, web, Error, HttpResponse, Responder};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use validator::Validate;

pub(super) fn configure(conf: &mut actix_web::web::ServiceConfig) {
    conf.service(create_poll)
        .service(view_poll)
        .service(vote_on_poll);
}

/// Session key holding this client's opaque voter token.
const VOTER_TOKEN_KEY: &str = "voter_token";

/// Returns the session's voter token, generating one on first use.
///
/// The token lives in the signed session cookie, so a page reload keeps
/// it and the one-vote-per-voter rule is enforced server-side.
pub(super) fn voter_token(session: &Session) -> Result<String, Error> {
    if let Some(token) = session.get::<String>(VOTER_TOKEN_KEY)? {
        return Ok(token);
    }
    let token = uuid::Uuid::new_v4().to_string();
    session.insert(VOTER_TOKEN_KEY, &token)?;
    Ok(token)
}

#[derive(Debug, Deserialize, Validate)]
pub struct CreatePollForm {
    #[validate(length(min = 1, max = 500, message = "Please enter a question."))]
    pub question: String,
    #[serde(default)]
    pub poll_type: PollType,
    #[serde(default)]
    pub options: Vec<String>,
    pub expires_in: i64,
    pub result_visibility: ResultVisibility,
}

#[derive(Serialize)]
struct CreatePollResponse {
    id: String,
}

#[post("/api/polls")]
pub async fn create_poll(
    store: web::Data<PollStore>,
    clock: web::Data<dyn Clock>,
    form: web::Json<CreatePollForm>,
) -> Result<impl Responder, Error> {
    let form = form.into_inner();
    form.validate().map_err(error::ErrorBadRequest)?;

    let poll = Poll::new(
        &form.question,
        form.poll_type,
        form.options,
        form.expires_in,
        form.result_visibility,
        clock.now(),
    )
    .map_err(super::poll_error)?;

    let id = poll.id.clone();
    store.insert(poll);
    log::info!("created poll {}", id);

    Ok(HttpResponse::Created().json(CreatePollResponse { id }))
}

/// Poll as rendered to one viewer at one moment. `votes` is present only
/// when the visibility policy discloses the tally to this viewer.
#[derive(Serialize)]
struct PollView {
    id: String,
    question: String,
    options: Vec<String>,
    state: PollState,
    #[serde(skip_serializing_if = "Option::is_none")]
    votes: Option<HashMap<String, u64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    total_votes: Option<u64>,
    results_pending: bool,
    reactions: HashMap<String, u64>,
    has_voted: bool,
    result_visibility: ResultVisibility,
    created_at: chrono::DateTime<chrono::Utc>,
    expires_at: chrono::DateTime<chrono::Utc>,
}

#[get("/api/polls/{poll_id}")]
pub async fn view_poll(
    store: web::Data<PollStore>,
    clock: web::Data<dyn Clock>,
    session: Session,
    path: web::Path<String>,
) -> Result<impl Responder, Error> {
    let poll_id = path.into_inner();
    let poll = store
        .get(&poll_id)
        .ok_or_else(|| super::poll_error(PollError::NotFound))?;

    // Issuing the token on first view, not first vote, ties the client to
    // one identity before it ever interacts with the poll.
    let voter = voter_token(&session)?;
    let now = clock.now();
    let has_voted = poll.has_voted(&voter);
    let visible = lifecycle::tally_visible(&poll, now, has_voted);

    Ok(HttpResponse::Ok().json(PollView {
        id: poll.id.clone(),
        question: poll.question.clone(),
        options: poll.options.clone(),
        state: lifecycle::state(&poll, now),
        total_votes: visible.then(|| poll.total_votes()),
        votes: visible.then(|| poll.votes.clone()),
        results_pending: !visible,
        reactions: poll.reactions.clone(),
        has_voted,
        result_visibility: poll.result_visibility,
        created_at: poll.created_at,
        expires_at: poll.expires_at,
    }))
}

#[derive(Deserialize)]
pub struct VoteForm {
    pub option: String,
}

#[derive(Serialize)]
struct VoteResponse {
    votes: HashMap<String, u64>,
}

#[post("/api/polls/{poll_id}/vote")]
pub async fn vote_on_poll(
    store: web::Data<PollStore>,
    clock: web::Data<dyn Clock>,
    session: Session,
    path: web::Path<String>,
    form: web::Json<VoteForm>,
) -> Result<impl Responder, Error> {
    let poll_id = path.into_inner();
    let voter = voter_token(&session)?;

    let votes = voting::cast_vote(&store, &poll_id, &form.option, &voter, clock.now())
        .map_err(super::poll_error)?;

    Ok(HttpResponse::Ok().json(VoteResponse { votes }))
}
