//! Quiz play domain service.

use std::sync::{Arc, Mutex, PoisonError};

use async_trait::async_trait;
use rand::SeedableRng;
use rand::rngs::SmallRng;

use crate::domain::ports::{QuestionRepository, QuestionRepositoryError, QuizPlay, QuizRequest};
use crate::domain::quiz::select_next;
use crate::domain::{Error, Question};

/// Quiz service implementing [`QuizPlay`].
///
/// Owns the random number generator used by the selector. The generator is
/// locked only while a question is picked, never across an `.await`.
pub struct QuizService<Q> {
    questions: Arc<Q>,
    rng: Mutex<SmallRng>,
}

impl<Q> QuizService<Q> {
    /// Create a service whose generator is seeded from system entropy.
    pub fn new(questions: Arc<Q>) -> Self {
        Self::with_rng(questions, SmallRng::from_entropy())
    }

    /// Create a service with a reproducible pick sequence.
    pub fn with_seed(questions: Arc<Q>, seed: u64) -> Self {
        Self::with_rng(questions, SmallRng::seed_from_u64(seed))
    }

    fn with_rng(questions: Arc<Q>, rng: SmallRng) -> Self {
        Self {
            questions,
            rng: Mutex::new(rng),
        }
    }
}

impl<Q> QuizService<Q>
where
    Q: QuestionRepository,
{
    fn map_question_error(error: QuestionRepositoryError) -> Error {
        match error {
            QuestionRepositoryError::Connection { message } => {
                Error::service_unavailable(format!("question repository unavailable: {message}"))
            }
            QuestionRepositoryError::Query { message }
            | QuestionRepositoryError::ConstraintViolation { message } => {
                Error::internal(format!("question repository error: {message}"))
            }
        }
    }
}

#[async_trait]
impl<Q> QuizPlay for QuizService<Q>
where
    Q: QuestionRepository,
{
    async fn next_question(&self, request: QuizRequest) -> Result<Option<Question>, Error> {
        // The selector applies the category filter itself over the whole bank.
        let candidates = self
            .questions
            .list_all()
            .await
            .map_err(Self::map_question_error)?;
        let picked = {
            let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
            select_next(&candidates, &request.previously_seen, request.filter, &mut *rng).cloned()
        };
        Ok(picked)
    }
}
