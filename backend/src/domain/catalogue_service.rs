//! Question bank domain service.
//!
//! Implements the browsing, search and mutation driving ports on top of the
//! question and category repositories.

use std::sync::Arc;

use async_trait::async_trait;
use pagination::{Page, PageRequest};
use serde_json::json;

use crate::domain::ports::{
    CategoriesQuery, CategoryQuestions, CategoryRepository, CategoryRepositoryError,
    QuestionRepository, QuestionRepositoryError, QuestionsCommand, QuestionsPage, QuestionsQuery,
};
use crate::domain::{Category, CategoryId, Error, NewQuestion, Question, QuestionId, SearchTerm};

/// Catalogue service implementing the question and category driving ports.
#[derive(Clone)]
pub struct TriviaCatalogueService<Q, C> {
    questions: Arc<Q>,
    categories: Arc<C>,
}

impl<Q, C> TriviaCatalogueService<Q, C> {
    /// Create a new service with the given repositories.
    pub fn new(questions: Arc<Q>, categories: Arc<C>) -> Self {
        Self {
            questions,
            categories,
        }
    }
}

impl<Q, C> TriviaCatalogueService<Q, C>
where
    Q: QuestionRepository,
    C: CategoryRepository,
{
    fn map_question_error(error: QuestionRepositoryError) -> Error {
        match error {
            QuestionRepositoryError::Connection { message } => {
                Error::service_unavailable(format!("question repository unavailable: {message}"))
            }
            QuestionRepositoryError::Query { message } => {
                Error::internal(format!("question repository error: {message}"))
            }
            QuestionRepositoryError::ConstraintViolation { message } => {
                Error::unprocessable(format!("question rejected by storage: {message}"))
            }
        }
    }

    fn map_category_error(error: CategoryRepositoryError) -> Error {
        match error {
            CategoryRepositoryError::Connection { message } => {
                Error::service_unavailable(format!("category repository unavailable: {message}"))
            }
            CategoryRepositoryError::Query { message } => {
                Error::internal(format!("category repository error: {message}"))
            }
        }
    }

    async fn find_category(&self, id: CategoryId) -> Result<Option<Category>, Error> {
        self.categories
            .find_by_id(id)
            .await
            .map_err(Self::map_category_error)
    }
}

#[async_trait]
impl<Q, C> CategoriesQuery for TriviaCatalogueService<Q, C>
where
    Q: QuestionRepository,
    C: CategoryRepository,
{
    async fn list_categories(&self) -> Result<Vec<Category>, Error> {
        let categories = self
            .categories
            .list()
            .await
            .map_err(Self::map_category_error)?;
        if categories.is_empty() {
            return Err(Error::not_found("no categories have been defined"));
        }
        Ok(categories)
    }
}

#[async_trait]
impl<Q, C> QuestionsQuery for TriviaCatalogueService<Q, C>
where
    Q: QuestionRepository,
    C: CategoryRepository,
{
    async fn list_questions(&self, page: PageRequest) -> Result<QuestionsPage, Error> {
        let total = self
            .questions
            .count()
            .await
            .map_err(Self::map_question_error)?;
        let items = self
            .questions
            .list_page(page)
            .await
            .map_err(Self::map_question_error)?;
        if items.is_empty() {
            return Err(
                Error::not_found(format!("page {} is past the end", page.page())).with_details(
                    json!({ "page": page.page(), "totalQuestions": total }),
                ),
            );
        }
        let categories = self
            .categories
            .list()
            .await
            .map_err(Self::map_category_error)?;
        Ok(QuestionsPage {
            questions: Page::new(items, page, total),
            categories,
        })
    }

    async fn questions_in_category(
        &self,
        category: CategoryId,
    ) -> Result<CategoryQuestions, Error> {
        let Some(found) = self.find_category(category).await? else {
            return Err(Error::not_found(format!(
                "category {category} does not exist"
            )));
        };
        let questions = self
            .questions
            .list_by_category(category)
            .await
            .map_err(Self::map_question_error)?;
        Ok(CategoryQuestions {
            category: found,
            questions,
        })
    }

    async fn search_questions(&self, term: SearchTerm) -> Result<Vec<Question>, Error> {
        self.questions
            .search(&term)
            .await
            .map_err(Self::map_question_error)
    }
}

#[async_trait]
impl<Q, C> QuestionsCommand for TriviaCatalogueService<Q, C>
where
    Q: QuestionRepository,
    C: CategoryRepository,
{
    async fn create_question(&self, draft: NewQuestion) -> Result<Question, Error> {
        let category = draft.category();
        if self.find_category(category).await?.is_none() {
            return Err(
                Error::unprocessable(format!("category {category} does not exist"))
                    .with_details(json!({ "field": "category", "value": category.get() })),
            );
        }
        self.questions
            .insert(&draft)
            .await
            .map_err(Self::map_question_error)
    }

    async fn delete_question(&self, id: QuestionId) -> Result<QuestionId, Error> {
        let deleted = self
            .questions
            .delete(id)
            .await
            .map_err(Self::map_question_error)?;
        if !deleted {
            return Err(Error::unprocessable(format!("question {id} does not exist"))
                .with_details(json!({ "id": id.get() })));
        }
        Ok(id)
    }
}

#[cfg(test)]
#[path = "catalogue_service_tests.rs"]
mod tests;
