//! Port for question bank persistence.
//!
//! Questions are listed in identifier order so page boundaries stay stable
//! between requests.

use async_trait::async_trait;
use pagination::PageRequest;

use crate::domain::{CategoryId, NewQuestion, Question, QuestionId, SearchTerm};

use super::define_port_error;
use super::fixture_bank::{SAMPLE_QUESTIONS, sample_questions};

define_port_error! {
    /// Errors raised by question repository adapters.
    pub enum QuestionRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } =>
            "question repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } =>
            "question repository query failed: {message}",
        /// A write violated a storage constraint, e.g. an unknown category.
        ConstraintViolation { message: String } =>
            "question repository constraint violated: {message}",
    }
}

/// Port for reading and mutating the question bank.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait QuestionRepository: Send + Sync {
    /// Number of stored questions.
    async fn count(&self) -> Result<u64, QuestionRepositoryError>;

    /// One page of questions ordered by identifier.
    async fn list_page(&self, page: PageRequest) -> Result<Vec<Question>, QuestionRepositoryError>;

    /// Every stored question ordered by identifier.
    async fn list_all(&self) -> Result<Vec<Question>, QuestionRepositoryError>;

    /// Questions belonging to `category`, ordered by identifier.
    async fn list_by_category(
        &self,
        category: CategoryId,
    ) -> Result<Vec<Question>, QuestionRepositoryError>;

    /// Questions whose text contains `term`, ignoring case.
    async fn search(&self, term: &SearchTerm) -> Result<Vec<Question>, QuestionRepositoryError>;

    /// Store a new question and return it with its assigned identifier.
    async fn insert(&self, draft: &NewQuestion) -> Result<Question, QuestionRepositoryError>;

    /// Remove a question. Returns `false` when no such question exists.
    async fn delete(&self, id: QuestionId) -> Result<bool, QuestionRepositoryError>;
}

/// Read-only repository serving a small built-in question bank.
///
/// Used when the server runs without a database. Writes fail with
/// [`QuestionRepositoryError::Connection`].
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureQuestionRepository;

impl FixtureQuestionRepository {
    fn read_only() -> QuestionRepositoryError {
        QuestionRepositoryError::connection("no database configured")
    }
}

#[async_trait]
impl QuestionRepository for FixtureQuestionRepository {
    async fn count(&self) -> Result<u64, QuestionRepositoryError> {
        Ok(SAMPLE_QUESTIONS.len() as u64)
    }

    async fn list_page(&self, page: PageRequest) -> Result<Vec<Question>, QuestionRepositoryError> {
        Ok(page.slice(&sample_questions()).to_vec())
    }

    async fn list_all(&self) -> Result<Vec<Question>, QuestionRepositoryError> {
        Ok(sample_questions())
    }

    async fn list_by_category(
        &self,
        category: CategoryId,
    ) -> Result<Vec<Question>, QuestionRepositoryError> {
        Ok(sample_questions()
            .into_iter()
            .filter(|question| question.category() == category)
            .collect())
    }

    async fn search(&self, term: &SearchTerm) -> Result<Vec<Question>, QuestionRepositoryError> {
        Ok(sample_questions()
            .into_iter()
            .filter(|question| term.matches(question.text()))
            .collect())
    }

    async fn insert(&self, _draft: &NewQuestion) -> Result<Question, QuestionRepositoryError> {
        Err(Self::read_only())
    }

    async fn delete(&self, _id: QuestionId) -> Result<bool, QuestionRepositoryError> {
        Err(Self::read_only())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Difficulty;
    use rstest::rstest;

    #[tokio::test]
    async fn fixture_pages_follow_identifier_order() {
        let repo = FixtureQuestionRepository;
        let page = PageRequest::new(1, 3).expect("valid page");
        let ids: Vec<i32> = repo
            .list_page(page)
            .await
            .expect("fixture page")
            .iter()
            .map(|q| q.id().get())
            .collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn fixture_count_matches_listing() {
        let repo = FixtureQuestionRepository;
        let count = repo.count().await.expect("count");
        let all = repo.list_all().await.expect("all");
        assert_eq!(count, all.len() as u64);
    }

    #[tokio::test]
    async fn fixture_rejects_writes() {
        let repo = FixtureQuestionRepository;
        let draft = NewQuestion::new(
            "What is the boiling point of water in Celsius?",
            "100",
            Difficulty::new(1).expect("difficulty"),
            CategoryId::new(1).expect("category"),
        )
        .expect("draft");
        let error = repo.insert(&draft).await.expect_err("read only");
        assert!(matches!(error, QuestionRepositoryError::Connection { .. }));
    }

    #[rstest]
    fn constraint_error_formats_message() {
        let error = QuestionRepositoryError::constraint_violation("unknown category 9");
        assert_eq!(
            error.to_string(),
            "question repository constraint violated: unknown category 9"
        );
    }
}
