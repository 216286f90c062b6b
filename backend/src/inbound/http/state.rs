//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports (use-cases) and remain testable without I/O.

use std::sync::Arc;

use pagination::DEFAULT_PAGE_SIZE;

use crate::domain::ports::{CategoriesQuery, QuestionsCommand, QuestionsQuery, QuizPlay};

/// Parameter object bundling all port implementations for HTTP handlers.
#[derive(Clone)]
pub struct HttpStatePorts {
    /// Category listings.
    pub categories: Arc<dyn CategoriesQuery>,
    /// Question browsing and search.
    pub questions: Arc<dyn QuestionsQuery>,
    /// Question creation and deletion.
    pub questions_command: Arc<dyn QuestionsCommand>,
    /// Quiz play.
    pub quiz: Arc<dyn QuizPlay>,
}

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    /// Category listings.
    pub categories: Arc<dyn CategoriesQuery>,
    /// Question browsing and search.
    pub questions: Arc<dyn QuestionsQuery>,
    /// Question creation and deletion.
    pub questions_command: Arc<dyn QuestionsCommand>,
    /// Quiz play.
    pub quiz: Arc<dyn QuizPlay>,
    /// Page size for `GET /questions`.
    pub questions_per_page: u32,
}

impl HttpState {
    /// Build state from ports with the default page size.
    pub fn new(ports: HttpStatePorts) -> Self {
        let HttpStatePorts {
            categories,
            questions,
            questions_command,
            quiz,
        } = ports;
        Self {
            categories,
            questions,
            questions_command,
            quiz,
            questions_per_page: DEFAULT_PAGE_SIZE,
        }
    }

    /// Override the page size. Zero falls back to the default.
    #[must_use]
    pub fn with_questions_per_page(mut self, per_page: u32) -> Self {
        self.questions_per_page = if per_page == 0 {
            DEFAULT_PAGE_SIZE
        } else {
            per_page
        };
        self
    }
}

impl From<HttpStatePorts> for HttpState {
    fn from(ports: HttpStatePorts) -> Self {
        Self::new(ports)
    }
}
