//! Driving port for category listings.

use async_trait::async_trait;

use crate::domain::{Category, Error};

/// Domain use-case port for reading categories.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CategoriesQuery: Send + Sync {
    /// Every category ordered by label.
    ///
    /// An empty catalogue is reported as [`crate::domain::ErrorCode::NotFound`].
    async fn list_categories(&self) -> Result<Vec<Category>, Error>;
}
