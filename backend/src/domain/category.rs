//! Question categories and the quiz category filter.

use std::fmt;

use thiserror::Error;

/// Validation failures for category values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CategoryValidationError {
    /// Category identifiers are positive database keys.
    #[error("category id must be a positive integer, got {0}")]
    NonPositiveId(i64),
    /// Identifier does not fit the storage column.
    #[error("category id {0} is out of range")]
    OutOfRange(i64),
    /// Display labels must contain visible characters.
    #[error("category label must not be empty")]
    EmptyLabel,
}

/// Identifier of a [`Category`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CategoryId(i32);

impl CategoryId {
    /// Validate a raw identifier.
    ///
    /// # Examples
    /// ```
    /// use trivia::domain::CategoryId;
    ///
    /// assert_eq!(CategoryId::new(3).map(CategoryId::get), Ok(3));
    /// assert!(CategoryId::new(0).is_err());
    /// ```
    pub fn new(raw: i64) -> Result<Self, CategoryValidationError> {
        if raw <= 0 {
            return Err(CategoryValidationError::NonPositiveId(raw));
        }
        i32::try_from(raw)
            .map(Self)
            .map_err(|_| CategoryValidationError::OutOfRange(raw))
    }

    /// Wrap a key read back from storage.
    pub(crate) fn from_row(raw: i32) -> Self {
        Self(raw)
    }

    /// The raw integer key.
    pub fn get(self) -> i32 {
        self.0
    }
}

impl fmt::Display for CategoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A question category, e.g. "Science" or "Sports".
///
/// Categories are read-only through the API; the set is seeded by migration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    id: CategoryId,
    label: String,
}

impl Category {
    /// Build a category, rejecting blank labels.
    pub fn new(id: CategoryId, label: impl Into<String>) -> Result<Self, CategoryValidationError> {
        let label = label.into();
        if label.trim().is_empty() {
            return Err(CategoryValidationError::EmptyLabel);
        }
        Ok(Self { id, label })
    }

    /// Category identifier.
    pub fn id(&self) -> CategoryId {
        self.id
    }

    /// Display label (the `type` column).
    pub fn label(&self) -> &str {
        &self.label
    }
}

/// Which categories a quiz draws questions from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryFilter {
    /// Every category.
    All,
    /// A single category.
    Only(CategoryId),
    /// An identifier no stored category can carry; matches nothing.
    Unmatched,
}

impl CategoryFilter {
    /// Raw identifier clients send to mean "all categories".
    pub const ALL_SENTINEL: i64 = 0;

    /// Interpret a client-supplied category id, where `0` selects everything.
    ///
    /// Positive ids too large for storage name no category, so they yield
    /// [`CategoryFilter::Unmatched`] rather than an error.
    ///
    /// # Examples
    /// ```
    /// use trivia::domain::{CategoryFilter, CategoryId};
    ///
    /// assert_eq!(CategoryFilter::from_raw(0), Ok(CategoryFilter::All));
    /// let science = CategoryId::new(1).expect("valid id");
    /// assert_eq!(CategoryFilter::from_raw(1), Ok(CategoryFilter::Only(science)));
    /// assert_eq!(CategoryFilter::from_raw(1 << 32), Ok(CategoryFilter::Unmatched));
    /// assert!(CategoryFilter::from_raw(-4).is_err());
    /// ```
    pub fn from_raw(raw: i64) -> Result<Self, CategoryValidationError> {
        if raw == Self::ALL_SENTINEL {
            return Ok(Self::All);
        }
        match CategoryId::new(raw) {
            Ok(id) => Ok(Self::Only(id)),
            Err(CategoryValidationError::OutOfRange(_)) => Ok(Self::Unmatched),
            Err(err) => Err(err),
        }
    }

    /// True when a question in `category` passes this filter.
    pub fn matches(&self, category: CategoryId) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => *wanted == category,
            Self::Unmatched => false,
        }
    }
}
