//! PostgreSQL-backed `CategoryRepository` implementation using Diesel ORM.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use tracing::warn;

use crate::domain::ports::{CategoryRepository, CategoryRepositoryError};
use crate::domain::{Category, CategoryId};

use super::diesel_error_mapping::{ErrorConstructors, map_diesel_error, map_pool_error};
use super::models::CategoryRow;
use super::pool::DbPool;
use super::schema::categories;

/// Diesel-backed implementation of the [`CategoryRepository`] port.
#[derive(Clone)]
pub struct DieselCategoryRepository {
    pool: DbPool,
}

impl DieselCategoryRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn diesel_error(error: diesel::result::Error) -> CategoryRepositoryError {
    map_diesel_error(
        error,
        ErrorConstructors {
            query: CategoryRepositoryError::query,
            connection: CategoryRepositoryError::connection,
            constraint: CategoryRepositoryError::query,
        },
    )
}

fn row_to_category(row: CategoryRow) -> Result<Category, CategoryRepositoryError> {
    Category::new(CategoryId::from_row(row.id), row.kind).map_err(|err| {
        warn!(category_id = row.id, error = %err, "stored category failed validation");
        CategoryRepositoryError::query(format!("stored category {} is invalid", row.id))
    })
}

#[async_trait]
impl CategoryRepository for DieselCategoryRepository {
    async fn list(&self) -> Result<Vec<Category>, CategoryRepositoryError> {
        let mut conn = self
            .pool
            .get()
            .await
            .map_err(|err| map_pool_error(err, CategoryRepositoryError::connection))?;
        let rows = categories::table
            .order((categories::kind.asc(), categories::id.asc()))
            .select(CategoryRow::as_select())
            .load(&mut conn)
            .await
            .map_err(diesel_error)?;
        rows.into_iter().map(row_to_category).collect()
    }

    async fn find_by_id(
        &self,
        id: CategoryId,
    ) -> Result<Option<Category>, CategoryRepositoryError> {
        let mut conn = self
            .pool
            .get()
            .await
            .map_err(|err| map_pool_error(err, CategoryRepositoryError::connection))?;
        let row = categories::table
            .filter(categories::id.eq(id.get()))
            .select(CategoryRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(diesel_error)?;
        row.map(row_to_category).transpose()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_stored_label_is_rejected() {
        let err = row_to_category(CategoryRow {
            id: 3,
            kind: " ".to_owned(),
        })
        .expect_err("blank label");
        assert!(matches!(err, CategoryRepositoryError::Query { .. }));
    }

    #[test]
    fn stored_row_converts() {
        let category = row_to_category(CategoryRow {
            id: 3,
            kind: "Geography".to_owned(),
        })
        .expect("valid row");
        assert_eq!(category.label(), "Geography");
        assert_eq!(category.id().get(), 3);
    }
}
