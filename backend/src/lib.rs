//! Trivia question bank and quiz-play HTTP API.
//!
//! `domain` holds entities, ports and services; `inbound::http` exposes them
//! over Actix; `outbound::persistence` stores them in PostgreSQL.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use domain::TraceId;
pub use middleware::Trace;
