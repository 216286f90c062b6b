//! Route table for the trivia API.
//!
//! Every path is registered as a resource with an explicit method list, so a
//! known path hit with the wrong method answers 405 (or 204 for a CORS
//! preflight) while unknown paths fall through to the application's 404.

use actix_web::http::Method;
use actix_web::{HttpRequest, HttpResponse, web};

use crate::domain::Error;
use crate::inbound::http::ApiResult;
use crate::inbound::http::error::{json_config, path_config, query_config};
use crate::inbound::http::{categories, health, questions, quizzes};

/// Register every endpoint and the extractor error handlers.
///
/// # Examples
/// ```
/// use actix_web::{App, web};
/// use trivia::inbound::http::routes;
///
/// let app = App::new()
///     .configure(routes::configure)
///     .default_service(web::to(routes::unknown_route));
/// ```
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .app_data(query_config())
        .app_data(path_config())
        .service(
            web::resource("/categories")
                .route(web::get().to(categories::list_categories))
                .default_service(web::to(method_fallback)),
        )
        .service(
            web::resource("/categories/{id}/questions")
                .route(web::get().to(categories::category_questions))
                .default_service(web::to(method_fallback)),
        )
        .service(
            web::resource("/questions")
                .route(web::get().to(questions::list_questions))
                .route(web::post().to(questions::post_questions))
                .default_service(web::to(method_fallback)),
        )
        .service(
            web::resource("/questions/search")
                .route(web::post().to(questions::search_questions))
                .default_service(web::to(method_fallback)),
        )
        .service(
            web::resource("/questions/{id}")
                .route(web::delete().to(questions::delete_question))
                .default_service(web::to(method_fallback)),
        )
        .service(
            web::resource("/quizzes")
                .route(web::post().to(quizzes::play_quiz))
                .default_service(web::to(method_fallback)),
        )
        .service(
            web::resource("/health/ready")
                .route(web::get().to(health::ready))
                .default_service(web::to(method_fallback)),
        )
        .service(
            web::resource("/health/live")
                .route(web::get().to(health::live))
                .default_service(web::to(method_fallback)),
        );
}

/// Answer CORS preflights and reject other unsupported methods.
pub async fn method_fallback(req: HttpRequest) -> ApiResult<HttpResponse> {
    if req.method() == Method::OPTIONS {
        return Ok(HttpResponse::NoContent().finish());
    }
    Err(Error::method_not_allowed(format!(
        "{} is not supported on {}",
        req.method(),
        req.path()
    )))
}

/// Fallback for paths no resource matches.
pub async fn unknown_route(req: HttpRequest) -> ApiResult<HttpResponse> {
    Err(Error::not_found(format!("no route for {}", req.path())))
}
