//! Integration tests for poll expiration: votes close, results open,
//! reactions keep working.

mod common;

use actix_web::{test, web, App};
use chrono::{Duration, Utc};
use common::ManualClock;
use serde_json::{json, Value};
use std::sync::Arc;
use vanishvote::clock::Clock;
use vanishvote::store::PollStore;

macro_rules! test_app {
    ($store:expr, $clock:expr) => {
        test::init_service(
            App::new()
                .app_data($store.clone())
                .app_data(web::Data::from($clock.clone()))
                .wrap(common::session_middleware())
                .configure(vanishvote::web::configure),
        )
        .await
    };
}

#[actix_rt::test]
async fn test_expiry_closes_votes_and_opens_results() {
    let store = web::Data::new(PollStore::new());
    let manual = Arc::new(ManualClock::new(Utc::now()));
    let clock: Arc<dyn Clock> = manual.clone();
    let app = test_app!(store, clock);

    let body: Value = test::call_and_read_body_json(
        &app,
        test::TestRequest::post()
            .uri("/api/polls")
            .set_json(json!({
                "question": "Favorite color?",
                "options": ["Red", "Blue"],
                "expires_in": 1,
                "result_visibility": "hide-until-expiry",
            }))
            .to_request(),
    )
    .await;
    let id = body["id"].as_str().unwrap().to_string();

    // One vote lands while the poll is still open.
    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri(&format!("/api/polls/{}/vote", id))
            .set_json(json!({"option": "Red"}))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), 200);

    manual.advance(Duration::minutes(61));

    // Votes are rejected after expiry, from any client.
    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri(&format!("/api/polls/{}/vote", id))
            .set_json(json!({"option": "Blue"}))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), 403);

    // The outcome is disclosed to everyone, voted or not.
    let view: Value = test::call_and_read_body_json(
        &app,
        test::TestRequest::get()
            .uri(&format!("/api/polls/{}", id))
            .to_request(),
    )
    .await;
    assert_eq!(view["state"], "expired");
    assert_eq!(view["has_voted"], false);
    assert_eq!(view["results_pending"], false);
    assert_eq!(view["votes"], json!({"Red": 1, "Blue": 0}));

    // The rejected vote did not change the tally.
    assert_eq!(view["total_votes"], 1);
}

#[actix_rt::test]
async fn test_reactions_survive_expiry() {
    let store = web::Data::new(PollStore::new());
    let manual = Arc::new(ManualClock::new(Utc::now()));
    let clock: Arc<dyn Clock> = manual.clone();
    let app = test_app!(store, clock);

    let body: Value = test::call_and_read_body_json(
        &app,
        test::TestRequest::post()
            .uri("/api/polls")
            .set_json(json!({
                "question": "Q?",
                "poll_type": "yes-no",
                "expires_in": 1,
                "result_visibility": "show-live",
            }))
            .to_request(),
    )
    .await;
    let id = body["id"].as_str().unwrap().to_string();

    manual.advance(Duration::hours(2));

    let counts: Value = test::call_and_read_body_json(
        &app,
        test::TestRequest::post()
            .uri(&format!("/api/polls/{}/react", id))
            .set_json(json!({"reaction": "🔥"}))
            .to_request(),
    )
    .await;
    assert_eq!(counts["reactions"]["🔥"], 1);
}

#[actix_rt::test]
async fn test_state_flips_exactly_at_expires_at() {
    let store = web::Data::new(PollStore::new());
    let start = Utc::now();
    let manual = Arc::new(ManualClock::new(start));
    let clock: Arc<dyn Clock> = manual.clone();
    let app = test_app!(store, clock);

    let body: Value = test::call_and_read_body_json(
        &app,
        test::TestRequest::post()
            .uri("/api/polls")
            .set_json(json!({
                "question": "Q?",
                "options": ["A", "B"],
                "expires_in": 1,
                "result_visibility": "show-live",
            }))
            .to_request(),
    )
    .await;
    let id = body["id"].as_str().unwrap().to_string();

    // Just before the boundary.
    manual.advance(Duration::minutes(60) - Duration::seconds(1));
    let view: Value = test::call_and_read_body_json(
        &app,
        test::TestRequest::get()
            .uri(&format!("/api/polls/{}", id))
            .to_request(),
    )
    .await;
    assert_eq!(view["state"], "active");

    // now == expires_at counts as expired.
    manual.advance(Duration::seconds(1));
    let view: Value = test::call_and_read_body_json(
        &app,
        test::TestRequest::get()
            .uri(&format!("/api/polls/{}", id))
            .to_request(),
    )
    .await;
    assert_eq!(view["state"], "expired");
}
