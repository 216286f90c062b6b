//! Quiz play HTTP handler.
//!
//! ```text
//! POST /quizzes
//! ```
//!
//! The client holds the session: every call sends the identifiers already
//! shown plus the chosen category, and receives one unseen question or
//! `null` once the quiz is exhausted.

use std::collections::HashSet;

use actix_web::web;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::ports::QuizRequest;
use crate::domain::{CategoryFilter, QuestionId, QuestionValidationError};
use crate::inbound::http::ApiResult;
use crate::inbound::http::error::ErrorEnvelope;
use crate::inbound::http::schemas::QuestionBody;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{FieldName, LenientInteger, invalid_field_error, require};

const PREVIOUS_QUESTIONS: FieldName = FieldName::new("previous_questions");
const QUIZ_CATEGORY: FieldName = FieldName::new("quiz_category");
const QUIZ_CATEGORY_ID: FieldName = FieldName::new("quiz_category.id");

/// Category selected for the quiz.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct QuizCategory {
    /// Category identifier; `0` plays every category.
    pub id: Option<LenientInteger>,
    /// Category label, echoed by clients and ignored by the server.
    #[serde(rename = "type")]
    pub kind: Option<String>,
}

/// Body of `POST /quizzes`.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
pub struct QuizPayload {
    /// Questions already shown in this quiz.
    pub previous_questions: Option<Vec<i64>>,
    /// Category to draw from.
    pub quiz_category: Option<QuizCategory>,
}

/// Response body for `POST /quizzes`.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct QuizResponse {
    /// Always `true`.
    pub success: bool,
    /// Next question, or `null` when the quiz is over.
    pub question: Option<QuestionBody>,
}

/// Ids too large for storage cannot name a question and are skipped.
fn seen_question(raw: i64) -> Result<Option<QuestionId>, QuestionValidationError> {
    match QuestionId::new(raw) {
        Ok(id) => Ok(Some(id)),
        Err(QuestionValidationError::IdOutOfRange(_)) => Ok(None),
        Err(err) => Err(err),
    }
}

fn parse_quiz_payload(payload: QuizPayload) -> ApiResult<QuizRequest> {
    let previous = require(payload.previous_questions, PREVIOUS_QUESTIONS)?;
    let category = require(payload.quiz_category, QUIZ_CATEGORY)?;
    let raw_category = require(category.id, QUIZ_CATEGORY_ID)?.parse(QUIZ_CATEGORY_ID)?;

    let filter = CategoryFilter::from_raw(raw_category)
        .map_err(|err| invalid_field_error(QUIZ_CATEGORY_ID, err))?;
    let previously_seen = previous
        .into_iter()
        .filter_map(|raw| seen_question(raw).transpose())
        .collect::<Result<HashSet<_>, _>>()
        .map_err(|err| invalid_field_error(PREVIOUS_QUESTIONS, err))?;
    Ok(QuizRequest {
        previously_seen,
        filter,
    })
}

/// Draw the next quiz question.
#[utoipa::path(
    post,
    path = "/quizzes",
    request_body = QuizPayload,
    responses(
        (status = 200, description = "Next question, or null when exhausted", body = QuizResponse),
        (status = 400, description = "Missing or malformed session state", body = ErrorEnvelope),
        (status = 503, description = "Database unavailable", body = ErrorEnvelope)
    ),
    tags = ["quizzes"],
    operation_id = "playQuiz"
)]
pub async fn play_quiz(
    state: web::Data<HttpState>,
    payload: web::Json<QuizPayload>,
) -> ApiResult<web::Json<QuizResponse>> {
    let request = parse_quiz_payload(payload.into_inner())?;
    let next = state.quiz.next_question(request).await?;
    Ok(web::Json(QuizResponse {
        success: true,
        question: next.map(QuestionBody::from),
    }))
}
