//! Category HTTP handlers.
//!
//! ```text
//! GET /categories
//! GET /categories/{id}/questions
//! ```

use actix_web::web;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{CategoryId, Error};
use crate::inbound::http::ApiResult;
use crate::inbound::http::error::ErrorEnvelope;
use crate::inbound::http::schemas::{CategoryMap, QuestionBody, category_map, question_bodies};
use crate::inbound::http::state::HttpState;

/// Response body for `GET /categories`.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CategoriesResponse {
    /// Always `true`.
    pub success: bool,
    /// Category labels keyed by identifier.
    #[schema(value_type = Object, example = json!({"1": "Science", "2": "Art"}))]
    pub categories: CategoryMap,
}

/// Response body for `GET /categories/{id}/questions`.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CategoryQuestionsResponse {
    /// Always `true`.
    pub success: bool,
    /// Every question in the category.
    pub questions: Vec<QuestionBody>,
    /// Number of questions in the category.
    pub total_questions: u64,
    /// The requested category identifier.
    pub current_category: i32,
}

/// List every category.
#[utoipa::path(
    get,
    path = "/categories",
    responses(
        (status = 200, description = "Category labels keyed by id", body = CategoriesResponse),
        (status = 404, description = "No categories defined", body = ErrorEnvelope),
        (status = 503, description = "Database unavailable", body = ErrorEnvelope)
    ),
    tags = ["categories"],
    operation_id = "listCategories"
)]
pub async fn list_categories(
    state: web::Data<HttpState>,
) -> ApiResult<web::Json<CategoriesResponse>> {
    let categories = state.categories.list_categories().await?;
    Ok(web::Json(CategoriesResponse {
        success: true,
        categories: category_map(&categories),
    }))
}

/// List the questions in one category.
#[utoipa::path(
    get,
    path = "/categories/{id}/questions",
    params(("id" = i64, Path, description = "Category identifier")),
    responses(
        (status = 200, description = "Questions in the category", body = CategoryQuestionsResponse),
        (status = 400, description = "Malformed category id", body = ErrorEnvelope),
        (status = 404, description = "Unknown category", body = ErrorEnvelope),
        (status = 503, description = "Database unavailable", body = ErrorEnvelope)
    ),
    tags = ["categories"],
    operation_id = "listCategoryQuestions"
)]
pub async fn category_questions(
    state: web::Data<HttpState>,
    path: web::Path<i64>,
) -> ApiResult<web::Json<CategoryQuestionsResponse>> {
    let raw = path.into_inner();
    let category = CategoryId::new(raw)
        .map_err(|_| Error::not_found(format!("category {raw} does not exist")))?;
    let found = state.questions.questions_in_category(category).await?;
    Ok(web::Json(CategoryQuestionsResponse {
        success: true,
        total_questions: found.questions.len() as u64,
        questions: question_bodies(&found.questions),
        current_category: found.category.id().get(),
    }))
}

#[cfg(test)]
mod tests {
    use crate::inbound::http::test_utils::{call_json, sample_app};
    use actix_web::http::StatusCode;
    use actix_web::test as actix_test;
    use rstest::rstest;
    use serde_json::{Value, json};

    #[rstest]
    #[actix_web::test]
    async fn lists_categories_keyed_by_id() {
        let (_, app) = sample_app().await;
        let (status, body) =
            call_json(&app, actix_test::TestRequest::get().uri("/categories")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], Value::Bool(true));
        assert_eq!(body["categories"]["1"], json!("Science"));
        assert_eq!(body["categories"].as_object().map(|m| m.len()), Some(6));
    }

    #[rstest]
    #[actix_web::test]
    async fn lists_questions_of_a_category() {
        let (_, app) = sample_app().await;
        let (status, body) =
            call_json(&app, actix_test::TestRequest::get().uri("/categories/1/questions")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["total_questions"], json!(3));
        assert_eq!(body["current_category"], json!(1));
        let categories: Vec<i64> = body["questions"]
            .as_array()
            .expect("questions array")
            .iter()
            .filter_map(|q| q["category"].as_i64())
            .collect();
        assert_eq!(categories, vec![1, 1, 1]);
    }

    #[rstest]
    #[case("/categories/99/questions", StatusCode::NOT_FOUND)]
    #[case("/categories/0/questions", StatusCode::NOT_FOUND)]
    #[case("/categories/science/questions", StatusCode::BAD_REQUEST)]
    #[actix_web::test]
    async fn rejects_unknown_or_malformed_categories(
        #[case] uri: &str,
        #[case] expected: StatusCode,
    ) {
        let (_, app) = sample_app().await;
        let (status, body) = call_json(&app, actix_test::TestRequest::get().uri(uri)).await;
        assert_eq!(status, expected);
        assert_eq!(body["success"], Value::Bool(false));
        assert_eq!(body["error"], json!(expected.as_u16()));
    }

    #[rstest]
    #[actix_web::test]
    async fn offline_store_is_service_unavailable() {
        let (store, app) = sample_app().await;
        store.set_offline(true);
        let (status, body) =
            call_json(&app, actix_test::TestRequest::get().uri("/categories")).await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body["message"], json!("service unavailable"));
    }
}
