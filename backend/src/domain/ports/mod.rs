//! Domain ports and supporting types for the hexagonal boundary.

mod macros;
pub(crate) use macros::define_port_error;

mod categories_query;
mod category_repository;
mod fixture_bank;
mod question_repository;
mod questions_command;
mod questions_query;
mod quiz_play;
mod readiness_probe;

#[cfg(test)]
pub use categories_query::MockCategoriesQuery;
pub use categories_query::CategoriesQuery;
#[cfg(test)]
pub use category_repository::MockCategoryRepository;
pub use category_repository::{
    CategoryRepository, CategoryRepositoryError, FixtureCategoryRepository,
};
#[cfg(test)]
pub use question_repository::MockQuestionRepository;
pub use question_repository::{
    FixtureQuestionRepository, QuestionRepository, QuestionRepositoryError,
};
#[cfg(test)]
pub use questions_command::MockQuestionsCommand;
pub use questions_command::QuestionsCommand;
#[cfg(test)]
pub use questions_query::MockQuestionsQuery;
pub use questions_query::{CategoryQuestions, QuestionsPage, QuestionsQuery};
#[cfg(test)]
pub use quiz_play::MockQuizPlay;
pub use quiz_play::{QuizPlay, QuizRequest};
#[cfg(test)]
pub use readiness_probe::MockReadinessProbe;
pub use readiness_probe::ReadinessProbe;
