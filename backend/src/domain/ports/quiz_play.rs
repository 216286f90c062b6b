//! Driving port for quiz play.

use std::collections::HashSet;

use async_trait::async_trait;

use crate::domain::{CategoryFilter, Error, Question, QuestionId};

/// One step of a client-held quiz session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizRequest {
    /// Questions the player has already been shown.
    pub previously_seen: HashSet<QuestionId>,
    /// Categories to draw from.
    pub filter: CategoryFilter,
}

/// Domain use-case port for drawing quiz questions.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait QuizPlay: Send + Sync {
    /// Draw the next question, or `None` once the quiz is exhausted.
    async fn next_question(&self, request: QuizRequest) -> Result<Option<Question>, Error>;
}
