//! Domain primitives, services and ports.
//!
//! Purpose: define strongly typed trivia entities and the use cases the
//! inbound adapters drive. Nothing here depends on Actix or Diesel.
//!
//! Public surface:
//! - `Question`, `NewQuestion`, `QuestionId`, `Difficulty`: the question bank.
//! - `Category`, `CategoryId`, `CategoryFilter`: categories and quiz filters.
//! - `SearchTerm`: validated free-text search input.
//! - `quiz::select_next`: the quiz question selector.
//! - `TriviaCatalogueService`, `QuizService`: driving port implementations.
//! - `Error`, `ErrorCode`: transport-agnostic failures.
//! - `TraceId`: request correlation identifier.

pub mod catalogue_service;
pub mod category;
pub mod error;
pub mod ports;
pub mod question;
pub mod quiz;
pub mod quiz_service;
pub mod search_term;
pub mod trace_id;

pub use self::catalogue_service::TriviaCatalogueService;
pub use self::category::{Category, CategoryFilter, CategoryId, CategoryValidationError};
pub use self::error::{Error, ErrorCode};
pub use self::question::{Difficulty, NewQuestion, Question, QuestionId, QuestionValidationError};
pub use self::quiz_service::QuizService;
pub use self::search_term::{EmptySearchTerm, SearchTerm};
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
