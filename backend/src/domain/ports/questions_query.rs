//! Driving port for browsing and searching the question bank.
//!
//! Inbound adapters use this port without knowing how questions are stored.

use async_trait::async_trait;
use pagination::{Page, PageRequest};

use crate::domain::{Category, CategoryId, Error, Question, SearchTerm};

/// A page of questions plus the categories needed to label them.
#[derive(Debug, Clone, PartialEq)]
pub struct QuestionsPage {
    /// The requested slice of the bank; `total` counts every question.
    pub questions: Page<Question>,
    /// All categories ordered by label.
    pub categories: Vec<Category>,
}

/// Every question in one category.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryQuestions {
    /// The category that was asked for.
    pub category: Category,
    /// Its questions ordered by identifier.
    pub questions: Vec<Question>,
}

/// Domain use-case port for reading questions.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait QuestionsQuery: Send + Sync {
    /// Fetch one page of questions.
    ///
    /// Pages past the end of the bank are [`crate::domain::ErrorCode::NotFound`].
    async fn list_questions(&self, page: PageRequest) -> Result<QuestionsPage, Error>;

    /// Fetch the questions of a single category.
    ///
    /// Unknown categories are [`crate::domain::ErrorCode::NotFound`].
    async fn questions_in_category(&self, category: CategoryId)
    -> Result<CategoryQuestions, Error>;

    /// Case-insensitive substring search over question text.
    ///
    /// Zero matches is an empty list, not an error.
    async fn search_questions(&self, term: SearchTerm) -> Result<Vec<Question>, Error>;
}
