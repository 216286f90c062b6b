//! PostgreSQL persistence adapters using Diesel ORM.
//!
//! Repository implementations only translate between Diesel rows and domain
//! types. Row structs (`models.rs`) and table definitions (`schema.rs`) stay
//! private to this module. Connections come from a `bb8` pool driven by
//! `diesel-async`.
//!
//! # Example
//!
//! ```no_run
//! use trivia::outbound::persistence::{DbPool, DieselQuestionRepository, PoolConfig};
//!
//! # async fn wire() -> Result<(), trivia::outbound::persistence::PoolError> {
//! let pool = DbPool::new(PoolConfig::new("postgres://localhost/trivia")).await?;
//! let questions = DieselQuestionRepository::new(pool);
//! # let _ = questions;
//! # Ok(())
//! # }
//! ```

mod diesel_category_repository;
mod diesel_error_mapping;
mod diesel_question_repository;
mod migrations;
mod models;
mod pool;
mod schema;

pub use diesel_category_repository::DieselCategoryRepository;
pub use diesel_question_repository::DieselQuestionRepository;
pub use migrations::{MigrationError, run_pending_migrations};
pub use pool::{DbPool, PoolConfig, PoolError};
