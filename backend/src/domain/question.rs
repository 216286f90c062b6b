//! Trivia questions.
//!
//! A question is created through [`NewQuestion`] (validated client input) and
//! only becomes a [`Question`] once storage has assigned its identifier.
//! Questions are never updated in place; they are inserted and deleted.

use std::fmt;

use thiserror::Error;

use super::CategoryId;

/// Validation failures for question values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuestionValidationError {
    /// Question identifiers are positive database keys.
    #[error("question id must be a positive integer, got {0}")]
    NonPositiveId(i64),
    /// Identifier does not fit the storage column.
    #[error("question id {0} is out of range")]
    IdOutOfRange(i64),
    /// The question text is blank.
    #[error("question text must not be empty")]
    EmptyText,
    /// The answer text is blank.
    #[error("answer must not be empty")]
    EmptyAnswer,
    /// Difficulty lies outside the accepted scale.
    #[error("difficulty must be between {min} and {max}, got {value}", min = Difficulty::MIN, max = Difficulty::MAX)]
    DifficultyOutOfRange {
        /// The rejected value.
        value: i64,
    },
}

/// Identifier of a [`Question`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct QuestionId(i32);

impl QuestionId {
    /// Validate a raw identifier.
    pub fn new(raw: i64) -> Result<Self, QuestionValidationError> {
        if raw <= 0 {
            return Err(QuestionValidationError::NonPositiveId(raw));
        }
        i32::try_from(raw)
            .map(Self)
            .map_err(|_| QuestionValidationError::IdOutOfRange(raw))
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

impl fmt::Display for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Difficulty rating on a 1 (easiest) to 5 (hardest) scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Difficulty(u8);

impl Difficulty {
    /// Easiest rating.
    pub const MIN: u8 = 1;
    /// Hardest rating.
    pub const MAX: u8 = 5;

    /// Validate a raw rating.
    ///
    /// # Examples
    /// ```
    /// use trivia::domain::Difficulty;
    ///
    /// assert_eq!(Difficulty::new(3).map(Difficulty::get), Ok(3));
    /// assert!(Difficulty::new(6).is_err());
    /// ```
    pub fn new(raw: i64) -> Result<Self, QuestionValidationError> {
        u8::try_from(raw)
            .ok()
            .filter(|value| (Self::MIN..=Self::MAX).contains(value))
            .map(Self)
            .ok_or(QuestionValidationError::DifficultyOutOfRange { value: raw })
    }

    /// The raw rating.
    pub fn get(self) -> u8 {
        self.0
    }
}

/// Client input for a question that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewQuestion {
    text: String,
    answer: String,
    difficulty: Difficulty,
    category: CategoryId,
}

impl NewQuestion {
    /// Validate and normalise a question draft.
    ///
    /// Surrounding whitespace is trimmed from the text and answer.
    pub fn new(
        text: impl AsRef<str>,
        answer: impl AsRef<str>,
        difficulty: Difficulty,
        category: CategoryId,
    ) -> Result<Self, QuestionValidationError> {
        let text = text.as_ref().trim();
        if text.is_empty() {
            return Err(QuestionValidationError::EmptyText);
        }
        let answer = answer.as_ref().trim();
        if answer.is_empty() {
            return Err(QuestionValidationError::EmptyAnswer);
        }
        Ok(Self {
            text: text.to_owned(),
            answer: answer.to_owned(),
            difficulty,
            category,
        })
    }

    /// Question text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Expected answer.
    pub fn answer(&self) -> &str {
        &self.answer
    }

    /// Difficulty rating.
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Category the question belongs to.
    pub fn category(&self) -> CategoryId {
        self.category
    }
}

/// A stored trivia question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    id: QuestionId,
    text: String,
    answer: String,
    difficulty: Difficulty,
    category: CategoryId,
}

impl Question {
    /// Combine a stored identifier with its validated content.
    pub fn new(id: QuestionId, draft: NewQuestion) -> Self {
        let NewQuestion {
            text,
            answer,
            difficulty,
            category,
        } = draft;
        Self {
            id,
            text,
            answer,
            difficulty,
            category,
        }
    }

    /// Question identifier.
    pub fn id(&self) -> QuestionId {
        self.id
    }

    /// Question text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Expected answer.
    pub fn answer(&self) -> &str {
        &self.answer
    }

    /// Difficulty rating.
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Category the question belongs to.
    pub fn category(&self) -> CategoryId {
        self.category
    }
}
