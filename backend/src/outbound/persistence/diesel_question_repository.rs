//! PostgreSQL-backed `QuestionRepository` implementation using Diesel ORM.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use pagination::PageRequest;
use tracing::warn;

use crate::domain::ports::{QuestionRepository, QuestionRepositoryError};
use crate::domain::{CategoryId, Difficulty, NewQuestion, Question, QuestionId, SearchTerm};

use super::diesel_error_mapping::{ErrorConstructors, map_diesel_error, map_pool_error};
use super::models::{NewQuestionRow, QuestionRow};
use super::pool::{DbPool, PoolError};
use super::schema::questions;

/// Diesel-backed implementation of the [`QuestionRepository`] port.
#[derive(Clone)]
pub struct DieselQuestionRepository {
    pool: DbPool,
}

impl DieselQuestionRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn pool_error(error: PoolError) -> QuestionRepositoryError {
    map_pool_error(error, QuestionRepositoryError::connection)
}

fn diesel_error(error: diesel::result::Error) -> QuestionRepositoryError {
    map_diesel_error(
        error,
        ErrorConstructors {
            query: QuestionRepositoryError::query,
            connection: QuestionRepositoryError::connection,
            constraint: QuestionRepositoryError::constraint_violation,
        },
    )
}

fn row_to_question(row: QuestionRow) -> Result<Question, QuestionRepositoryError> {
    let id = row.id;
    let difficulty = Difficulty::new(i64::from(row.difficulty));
    let draft = difficulty.and_then(|difficulty| {
        NewQuestion::new(
            &row.question,
            &row.answer,
            difficulty,
            CategoryId::from_row(row.category),
        )
    });
    match draft {
        Ok(draft) => Ok(Question::new(QuestionId::from_row(id), draft)),
        Err(err) => {
            warn!(question_id = id, error = %err, "stored question failed validation");
            Err(QuestionRepositoryError::query(format!(
                "stored question {id} is invalid"
            )))
        }
    }
}

fn rows_to_questions(rows: Vec<QuestionRow>) -> Result<Vec<Question>, QuestionRepositoryError> {
    rows.into_iter().map(row_to_question).collect()
}

fn to_db_count(value: u64) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}

#[async_trait]
impl QuestionRepository for DieselQuestionRepository {
    async fn count(&self) -> Result<u64, QuestionRepositoryError> {
        let mut conn = self.pool.get().await.map_err(pool_error)?;
        let total: i64 = questions::table
            .count()
            .get_result(&mut conn)
            .await
            .map_err(diesel_error)?;
        Ok(u64::try_from(total).unwrap_or_default())
    }

    async fn list_page(&self, page: PageRequest) -> Result<Vec<Question>, QuestionRepositoryError> {
        let mut conn = self.pool.get().await.map_err(pool_error)?;
        let rows = questions::table
            .order(questions::id.asc())
            .offset(to_db_count(page.offset()))
            .limit(to_db_count(page.limit()))
            .select(QuestionRow::as_select())
            .load(&mut conn)
            .await
            .map_err(diesel_error)?;
        rows_to_questions(rows)
    }

    async fn list_all(&self) -> Result<Vec<Question>, QuestionRepositoryError> {
        let mut conn = self.pool.get().await.map_err(pool_error)?;
        let rows = questions::table
            .order(questions::id.asc())
            .select(QuestionRow::as_select())
            .load(&mut conn)
            .await
            .map_err(diesel_error)?;
        rows_to_questions(rows)
    }

    async fn list_by_category(
        &self,
        category: CategoryId,
    ) -> Result<Vec<Question>, QuestionRepositoryError> {
        let mut conn = self.pool.get().await.map_err(pool_error)?;
        let rows = questions::table
            .filter(questions::category.eq(category.get()))
            .order(questions::id.asc())
            .select(QuestionRow::as_select())
            .load(&mut conn)
            .await
            .map_err(diesel_error)?;
        rows_to_questions(rows)
    }

    async fn search(&self, term: &SearchTerm) -> Result<Vec<Question>, QuestionRepositoryError> {
        let mut conn = self.pool.get().await.map_err(pool_error)?;
        let rows = questions::table
            .filter(questions::question.ilike(term.like_pattern()).escape('\\'))
            .order(questions::id.asc())
            .select(QuestionRow::as_select())
            .load(&mut conn)
            .await
            .map_err(diesel_error)?;
        rows_to_questions(rows)
    }

    async fn insert(&self, draft: &NewQuestion) -> Result<Question, QuestionRepositoryError> {
        let mut conn = self.pool.get().await.map_err(pool_error)?;
        let row = NewQuestionRow {
            question: draft.text(),
            answer: draft.answer(),
            difficulty: i32::from(draft.difficulty().get()),
            category: draft.category().get(),
        };
        let stored = diesel::insert_into(questions::table)
            .values(&row)
            .returning(QuestionRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(diesel_error)?;
        row_to_question(stored)
    }

    async fn delete(&self, id: QuestionId) -> Result<bool, QuestionRepositoryError> {
        let mut conn = self.pool.get().await.map_err(pool_error)?;
        let removed = diesel::delete(questions::table.filter(questions::id.eq(id.get())))
            .execute(&mut conn)
            .await
            .map_err(diesel_error)?;
        Ok(removed > 0)
    }
}
