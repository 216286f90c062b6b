//! Test helpers for inbound HTTP components.

use std::sync::Arc;

use actix_web::dev::{Service, ServiceResponse};
use actix_web::http::StatusCode;
use actix_web::{App, test as actix_test, web};
use serde_json::Value;

use crate::inbound::http::routes;
use crate::middleware::{Trace, cors};
use crate::test_support::{InMemoryTriviaStore, http_state_for, sample_store};

/// Seed used for every quiz generator built by these helpers.
pub const QUIZ_SEED: u64 = 7;

/// Initialise the full route table over the twelve-question sample store.
pub async fn sample_app() -> (
    Arc<InMemoryTriviaStore>,
    impl Service<actix_http::Request, Response = ServiceResponse, Error = actix_web::Error>,
) {
    let store = Arc::new(sample_store());
    let state = http_state_for(store.clone(), QUIZ_SEED);
    let app = actix_test::init_service(
        App::new()
            .app_data(web::Data::new(state))
            .app_data(web::Data::new(crate::inbound::http::health::HealthState::new()))
            .wrap(cors::headers())
            .wrap(Trace)
            .configure(routes::configure)
            .default_service(web::to(routes::unknown_route)),
    )
    .await;
    (store, app)
}

/// Send `request` and decode the JSON body, `Value::Null` when empty.
pub async fn call_json<S>(app: &S, request: actix_test::TestRequest) -> (StatusCode, Value)
where
    S: Service<actix_http::Request, Response = ServiceResponse, Error = actix_web::Error>,
{
    let res = actix_test::call_service(app, request.to_request()).await;
    let status = res.status();
    let bytes = actix_test::read_body(res).await;
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("JSON response body")
    };
    (status, body)
}
