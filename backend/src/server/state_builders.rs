//! Builders wiring repositories into HTTP and health state.

use std::sync::Arc;

use actix_web::web;

use trivia::domain::ports::{
    CategoryRepository, FixtureCategoryRepository, FixtureQuestionRepository, QuestionRepository,
};
use trivia::domain::{QuizService, TriviaCatalogueService};
use trivia::inbound::http::health::HealthState;
use trivia::inbound::http::state::{HttpState, HttpStatePorts};
use trivia::outbound::persistence::{DbPool, DieselCategoryRepository, DieselQuestionRepository};

use super::ServerConfig;

/// Wrap one repository pair in the catalogue and quiz services.
fn state_from_repositories<Q, C>(
    questions: Arc<Q>,
    categories: Arc<C>,
    config: &ServerConfig,
) -> HttpState
where
    Q: QuestionRepository + 'static,
    C: CategoryRepository + 'static,
{
    let catalogue = Arc::new(TriviaCatalogueService::new(questions.clone(), categories));
    let quiz = match config.quiz_seed {
        Some(seed) => QuizService::with_seed(questions, seed),
        None => QuizService::new(questions),
    };

    HttpState::new(HttpStatePorts {
        categories: catalogue.clone(),
        questions: catalogue.clone(),
        questions_command: catalogue,
        quiz: Arc::new(quiz),
    })
    .with_questions_per_page(config.questions_per_page)
}

/// Build the shared handler state from the server configuration.
///
/// Uses the Diesel repositories when a pool is configured and the read-only
/// fixtures otherwise.
pub(super) fn build_http_state(config: &ServerConfig) -> web::Data<HttpState> {
    let state = match &config.db_pool {
        Some(pool) => state_from_repositories(
            Arc::new(DieselQuestionRepository::new(pool.clone())),
            Arc::new(DieselCategoryRepository::new(pool.clone())),
            config,
        ),
        None => state_from_repositories(
            Arc::new(FixtureQuestionRepository),
            Arc::new(FixtureCategoryRepository),
            config,
        ),
    };
    web::Data::new(state)
}

/// Health state that also pings the database when one is configured.
pub(crate) fn build_health_state(pool: Option<&DbPool>) -> web::Data<HealthState> {
    let state = HealthState::new();
    let state = match pool {
        Some(pool) => state.with_dependency(Arc::new(pool.clone())),
        None => state,
    };
    web::Data::new(state)
}
