//! Response payloads shared by the HTTP handlers.
//!
//! Domain types remain framework-agnostic by not deriving `Serialize` or
//! `ToSchema`; these DTOs carry the wire shape and its OpenAPI description.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{Category, Question};

/// A question as exposed to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct QuestionBody {
    /// Question identifier.
    #[schema(example = 5)]
    pub id: i32,
    /// Question text.
    #[schema(example = "Whose autobiography is entitled 'I Know Why the Caged Bird Sings'?")]
    pub question: String,
    /// Expected answer.
    #[schema(example = "Maya Angelou")]
    pub answer: String,
    /// Difficulty from 1 to 5.
    #[schema(example = 2, minimum = 1, maximum = 5)]
    pub difficulty: u8,
    /// Category identifier.
    #[schema(example = 4)]
    pub category: i32,
}

impl From<&Question> for QuestionBody {
    fn from(question: &Question) -> Self {
        Self {
            id: question.id().get(),
            question: question.text().to_owned(),
            answer: question.answer().to_owned(),
            difficulty: question.difficulty().get(),
            category: question.category().get(),
        }
    }
}

impl From<Question> for QuestionBody {
    fn from(question: Question) -> Self {
        Self::from(&question)
    }
}

/// Category labels keyed by identifier, e.g. `{"1": "Science"}`.
pub type CategoryMap = BTreeMap<String, String>;

pub(crate) fn category_map(categories: &[Category]) -> CategoryMap {
    categories
        .iter()
        .map(|category| (category.id().to_string(), category.label().to_owned()))
        .collect()
}

pub(crate) fn question_bodies(questions: &[Question]) -> Vec<QuestionBody> {
    questions.iter().map(QuestionBody::from).collect()
}
