//! Driving port for adding and removing questions.

use async_trait::async_trait;

use crate::domain::{Error, NewQuestion, Question, QuestionId};

/// Domain use-case port for question bank mutations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait QuestionsCommand: Send + Sync {
    /// Store a new question.
    ///
    /// A draft referring to a missing category is
    /// [`crate::domain::ErrorCode::Unprocessable`].
    async fn create_question(&self, draft: NewQuestion) -> Result<Question, Error>;

    /// Delete a question and echo its identifier.
    ///
    /// Deleting a question that does not exist is
    /// [`crate::domain::ErrorCode::Unprocessable`].
    async fn delete_question(&self, id: QuestionId) -> Result<QuestionId, Error>;
}
