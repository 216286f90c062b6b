//! Port for category lookups.

use async_trait::async_trait;

use crate::domain::{Category, CategoryId};

use super::define_port_error;
use super::fixture_bank::sample_categories;

define_port_error! {
    /// Errors raised by category repository adapters.
    pub enum CategoryRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } =>
            "category repository connection failed: {message}",
        /// Query failed during execution.
        Query { message: String } =>
            "category repository query failed: {message}",
    }
}

/// Port for reading categories.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CategoryRepository: Send + Sync {
    /// Every category ordered by label.
    async fn list(&self) -> Result<Vec<Category>, CategoryRepositoryError>;

    /// Look up a single category.
    async fn find_by_id(&self, id: CategoryId)
    -> Result<Option<Category>, CategoryRepositoryError>;
}

/// Repository serving the built-in category set.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureCategoryRepository;

#[async_trait]
impl CategoryRepository for FixtureCategoryRepository {
    async fn list(&self) -> Result<Vec<Category>, CategoryRepositoryError> {
        let mut categories = sample_categories();
        categories.sort_by(|a, b| a.label().cmp(b.label()));
        Ok(categories)
    }

    async fn find_by_id(
        &self,
        id: CategoryId,
    ) -> Result<Option<Category>, CategoryRepositoryError> {
        Ok(sample_categories()
            .into_iter()
            .find(|category| category.id() == id))
    }
}
