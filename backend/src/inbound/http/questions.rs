//! Question bank HTTP handlers.
//!
//! ```text
//! GET    /questions?page=N
//! POST   /questions           create, or search when `searchTerm` is present
//! POST   /questions/search
//! DELETE /questions/{id}
//! ```

use actix_web::{HttpResponse, web};
use pagination::{PageRequest, PageRequestError};
use serde::{Deserialize, Serialize};
use serde_json::json;
use utoipa::{IntoParams, ToSchema};

use crate::domain::{
    CategoryId, Difficulty, Error, NewQuestion, QuestionId, QuestionValidationError, SearchTerm,
};
use crate::inbound::http::ApiResult;
use crate::inbound::http::error::ErrorEnvelope;
use crate::inbound::http::schemas::{CategoryMap, QuestionBody, category_map, question_bodies};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{
    FieldName, LenientInteger, invalid_field_error, require,
};

const QUESTION: FieldName = FieldName::new("question");
const ANSWER: FieldName = FieldName::new("answer");
const DIFFICULTY: FieldName = FieldName::new("difficulty");
const CATEGORY: FieldName = FieldName::new("category");
const SEARCH_TERM: FieldName = FieldName::new("searchTerm");
const PAGE: FieldName = FieldName::new("page");

/// Query parameters for `GET /questions`.
#[derive(Debug, Deserialize, IntoParams)]
pub struct PageQuery {
    /// One-based page number; defaults to 1.
    #[param(minimum = 1, example = 1)]
    pub page: Option<u32>,
}

/// Body of `POST /questions`.
///
/// A body carrying `searchTerm` is a search; anything else is a creation.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
pub struct QuestionsPostRequest {
    /// Search term; switches the request to a search.
    #[serde(rename = "searchTerm")]
    pub search_term: Option<String>,
    /// Question text.
    pub question: Option<String>,
    /// Expected answer.
    pub answer: Option<String>,
    /// Difficulty from 1 to 5, as a number or numeric string.
    pub difficulty: Option<LenientInteger>,
    /// Category identifier, as a number or numeric string.
    pub category: Option<LenientInteger>,
}

/// Body of `POST /questions/search`.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct SearchRequest {
    /// Case-insensitive substring to find in question text.
    #[serde(rename = "searchTerm")]
    pub search_term: Option<String>,
}

/// Response body for `GET /questions`.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct QuestionListResponse {
    /// Always `true`.
    pub success: bool,
    /// Questions on the requested page.
    pub questions: Vec<QuestionBody>,
    /// Number of questions in the whole bank.
    pub total_questions: u64,
    /// Category labels keyed by identifier.
    #[schema(value_type = Object)]
    pub categories: CategoryMap,
    /// Always `null` for this listing.
    pub current_category: Option<i32>,
}

/// Response body for searches.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SearchResponse {
    /// Always `true`.
    pub success: bool,
    /// Matching questions; empty when nothing matched.
    pub questions: Vec<QuestionBody>,
    /// Number of matches.
    pub total_questions: u64,
    /// Always `null` for searches.
    pub current_category: Option<i32>,
}

/// Response body for a created question.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CreatedResponse {
    /// Always `true`.
    pub success: bool,
    /// Identifier of the new question.
    pub added: i32,
}

/// Response body for a deleted question.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct DeletedResponse {
    /// Always `true`.
    pub success: bool,
    /// Identifier of the removed question.
    pub deleted: i32,
}

fn page_request(query: &PageQuery, per_page: u32) -> Result<PageRequest, Error> {
    let page = query.page.unwrap_or(1);
    PageRequest::new(page, per_page).map_err(|err| match err {
        PageRequestError::ZeroPage => invalid_field_error(PAGE, "pages are numbered from 1"),
        PageRequestError::ZeroPageSize => Error::internal("questions_per_page must be positive"),
    })
}

fn question_field_error(err: QuestionValidationError) -> Error {
    let field = match err {
        QuestionValidationError::EmptyText => QUESTION,
        QuestionValidationError::EmptyAnswer => ANSWER,
        QuestionValidationError::DifficultyOutOfRange { .. } => DIFFICULTY,
        QuestionValidationError::NonPositiveId(_) | QuestionValidationError::IdOutOfRange(_) => {
            FieldName::new("id")
        }
    };
    invalid_field_error(field, err)
}

fn parse_new_question(payload: QuestionsPostRequest) -> Result<NewQuestion, Error> {
    let text = require(payload.question, QUESTION)?;
    let answer = require(payload.answer, ANSWER)?;
    let difficulty = require(payload.difficulty, DIFFICULTY)?.parse(DIFFICULTY)?;
    let category = require(payload.category, CATEGORY)?.parse(CATEGORY)?;

    let difficulty = Difficulty::new(difficulty).map_err(question_field_error)?;
    let category = CategoryId::new(category).map_err(|err| {
        Error::unprocessable(format!("category {category} does not exist"))
            .with_details(json!({ "field": CATEGORY.as_str(), "reason": err.to_string() }))
    })?;
    NewQuestion::new(text, answer, difficulty, category).map_err(question_field_error)
}

fn parse_search_term(raw: Option<String>) -> Result<SearchTerm, Error> {
    let raw = require(raw, SEARCH_TERM)?;
    SearchTerm::new(raw).map_err(|err| invalid_field_error(SEARCH_TERM, err))
}

async fn run_search(state: &HttpState, term: SearchTerm) -> ApiResult<HttpResponse> {
    let found = state.questions.search_questions(term).await?;
    Ok(HttpResponse::Ok().json(SearchResponse {
        success: true,
        total_questions: found.len() as u64,
        questions: question_bodies(&found),
        current_category: None,
    }))
}

/// List one page of questions.
#[utoipa::path(
    get,
    path = "/questions",
    params(PageQuery),
    responses(
        (status = 200, description = "Questions on the page", body = QuestionListResponse),
        (status = 400, description = "Malformed page number", body = ErrorEnvelope),
        (status = 404, description = "Page past the end", body = ErrorEnvelope),
        (status = 503, description = "Database unavailable", body = ErrorEnvelope)
    ),
    tags = ["questions"],
    operation_id = "listQuestions"
)]
pub async fn list_questions(
    state: web::Data<HttpState>,
    query: web::Query<PageQuery>,
) -> ApiResult<web::Json<QuestionListResponse>> {
    let request = page_request(&query, state.questions_per_page)?;
    let listed = state.questions.list_questions(request).await?;
    Ok(web::Json(QuestionListResponse {
        success: true,
        questions: question_bodies(listed.questions.items()),
        total_questions: listed.questions.total(),
        categories: category_map(&listed.categories),
        current_category: None,
    }))
}

/// Create a question, or search when the body carries `searchTerm`.
#[utoipa::path(
    post,
    path = "/questions",
    request_body = QuestionsPostRequest,
    responses(
        (status = 200, description = "Question created", body = CreatedResponse),
        (status = 200, description = "Search results", body = SearchResponse),
        (status = 400, description = "Missing or invalid fields", body = ErrorEnvelope),
        (status = 422, description = "Unknown category", body = ErrorEnvelope),
        (status = 503, description = "Database unavailable", body = ErrorEnvelope)
    ),
    tags = ["questions"],
    operation_id = "createOrSearchQuestions"
)]
pub async fn post_questions(
    state: web::Data<HttpState>,
    payload: web::Json<QuestionsPostRequest>,
) -> ApiResult<HttpResponse> {
    let mut payload = payload.into_inner();
    if let Some(raw) = payload.search_term.take() {
        let term = parse_search_term(Some(raw))?;
        return run_search(&state, term).await;
    }
    let draft = parse_new_question(payload)?;
    let created = state.questions_command.create_question(draft).await?;
    Ok(HttpResponse::Ok().json(CreatedResponse {
        success: true,
        added: created.id().get(),
    }))
}

/// Case-insensitive substring search over question text.
#[utoipa::path(
    post,
    path = "/questions/search",
    request_body = SearchRequest,
    responses(
        (status = 200, description = "Matching questions, possibly none", body = SearchResponse),
        (status = 400, description = "Missing or blank search term", body = ErrorEnvelope),
        (status = 503, description = "Database unavailable", body = ErrorEnvelope)
    ),
    tags = ["questions"],
    operation_id = "searchQuestions"
)]
pub async fn search_questions(
    state: web::Data<HttpState>,
    payload: web::Json<SearchRequest>,
) -> ApiResult<HttpResponse> {
    let term = parse_search_term(payload.into_inner().search_term)?;
    run_search(&state, term).await
}

/// Delete a question.
#[utoipa::path(
    delete,
    path = "/questions/{id}",
    params(("id" = i64, Path, description = "Question identifier")),
    responses(
        (status = 200, description = "Question deleted", body = DeletedResponse),
        (status = 400, description = "Malformed id", body = ErrorEnvelope),
        (status = 422, description = "No such question", body = ErrorEnvelope),
        (status = 503, description = "Database unavailable", body = ErrorEnvelope)
    ),
    tags = ["questions"],
    operation_id = "deleteQuestion"
)]
pub async fn delete_question(
    state: web::Data<HttpState>,
    path: web::Path<i64>,
) -> ApiResult<web::Json<DeletedResponse>> {
    let raw = path.into_inner();
    let id = QuestionId::new(raw)
        .map_err(|_| Error::unprocessable(format!("question {raw} does not exist")))?;
    let deleted = state.questions_command.delete_question(id).await?;
    Ok(web::Json(DeletedResponse {
        success: true,
        deleted: deleted.get(),
    }))
}

#[cfg(test)]
#[path = "questions_tests.rs"]
mod tests;
