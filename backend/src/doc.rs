//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] collects every trivia endpoint and the wire DTOs they exchange.
//! Swagger UI serves it in debug builds and `openapi-dump` exports it for
//! external tooling.

use utoipa::OpenApi;

use crate::inbound::http::categories::{CategoriesResponse, CategoryQuestionsResponse};
use crate::inbound::http::error::ErrorEnvelope;
use crate::inbound::http::questions::{
    CreatedResponse, DeletedResponse, QuestionListResponse, QuestionsPostRequest, SearchRequest,
    SearchResponse,
};
use crate::inbound::http::quizzes::{QuizCategory, QuizPayload, QuizResponse};
use crate::inbound::http::schemas::QuestionBody;
use crate::inbound::http::validation::LenientInteger;

/// OpenAPI document for the trivia API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Trivia API",
        description = "Question bank management and quiz play over JSON."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::categories::list_categories,
        crate::inbound::http::categories::category_questions,
        crate::inbound::http::questions::list_questions,
        crate::inbound::http::questions::post_questions,
        crate::inbound::http::questions::search_questions,
        crate::inbound::http::questions::delete_question,
        crate::inbound::http::quizzes::play_quiz,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        QuestionBody,
        CategoriesResponse,
        CategoryQuestionsResponse,
        QuestionListResponse,
        QuestionsPostRequest,
        SearchRequest,
        SearchResponse,
        CreatedResponse,
        DeletedResponse,
        QuizCategory,
        QuizPayload,
        QuizResponse,
        LenientInteger,
        ErrorEnvelope,
    )),
    tags(
        (name = "categories", description = "Category listing and per-category questions"),
        (name = "questions", description = "Question bank paging, search and edits"),
        (name = "quizzes", description = "Quiz play"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    //! Structural checks on the generated document.

    use super::*;
    use rstest::rstest;
    use utoipa::openapi::RefOr;
    use utoipa::openapi::schema::Schema;

    fn assert_object_schema_has_field(schema: &RefOr<Schema>, field: &str) {
        match schema {
            RefOr::T(Schema::Object(obj)) => {
                assert!(
                    obj.properties.contains_key(field),
                    "schema should have field '{field}'"
                );
            }
            _ => panic!("expected Object schema"),
        }
    }

    #[rstest]
    #[case("/categories")]
    #[case("/categories/{id}/questions")]
    #[case("/questions")]
    #[case("/questions/search")]
    #[case("/questions/{id}")]
    #[case("/quizzes")]
    #[case("/health/ready")]
    #[case("/health/live")]
    fn every_route_is_documented(#[case] path: &str) {
        let doc = ApiDoc::openapi();
        assert!(doc.paths.paths.contains_key(path), "missing path {path}");
    }

    #[rstest]
    #[case("QuestionBody", &["id", "question", "answer", "difficulty", "category"])]
    #[case("ErrorEnvelope", &["success", "error", "message"])]
    #[case("QuizResponse", &["success", "question"])]
    fn schemas_expose_wire_fields(#[case] name: &str, #[case] fields: &[&str]) {
        let doc = ApiDoc::openapi();
        let schemas = &doc.components.as_ref().expect("components").schemas;
        let schema = schemas.get(name).expect("schema registered");
        for field in fields {
            assert_object_schema_has_field(schema, field);
        }
    }
}
