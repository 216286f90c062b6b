//! Test utilities for the trivia crate.
//!
//! Provides an in-memory question bank implementing both driven ports, shared
//! by unit tests (in `src/`) and integration tests (in `tests/`). Compiled
//! for tests and behind the `test-support` feature.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;
use pagination::PageRequest;

use crate::domain::ports::{
    CategoryRepository, CategoryRepositoryError, QuestionRepository, QuestionRepositoryError,
};
use crate::domain::{
    Category, CategoryId, NewQuestion, Question, QuestionId, QuizService, SearchTerm,
    TriviaCatalogueService,
};
use crate::inbound::http::state::{HttpState, HttpStatePorts};

#[derive(Debug, Default)]
struct Tables {
    categories: Vec<Category>,
    questions: Vec<Question>,
    next_id: i32,
    offline: bool,
}

/// Mutable in-memory store implementing [`QuestionRepository`] and
/// [`CategoryRepository`].
///
/// Identifiers are assigned sequentially, as a `serial` column would.
///
/// # Examples
/// ```
/// use trivia::test_support::InMemoryTriviaStore;
///
/// let store = InMemoryTriviaStore::new()
///     .with_category(1, "Science")
///     .with_question(1, "Who discovered penicillin?", "Alexander Fleming", 3);
/// assert_eq!(store.question_ids(), vec![1]);
/// ```
#[derive(Debug, Default)]
pub struct InMemoryTriviaStore {
    tables: Mutex<Tables>,
}

impl InMemoryTriviaStore {
    /// An empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn tables(&self) -> MutexGuard<'_, Tables> {
        self.tables.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Add a category.
    ///
    /// # Panics
    /// Panics when `id` is not positive or `label` is blank.
    #[must_use]
    pub fn with_category(self, id: i64, label: &str) -> Self {
        let category_id = CategoryId::new(id).expect("valid category id");
        let category = Category::new(category_id, label).expect("valid category");
        self.tables().categories.push(category);
        self
    }

    /// Add a question in `category` with the next free identifier.
    ///
    /// # Panics
    /// Panics when the inputs would fail domain validation.
    #[must_use]
    pub fn with_question(self, category: i64, text: &str, answer: &str, difficulty: i64) -> Self {
        let draft = NewQuestion::new(
            text,
            answer,
            crate::domain::Difficulty::new(difficulty).expect("valid difficulty"),
            CategoryId::new(category).expect("valid category id"),
        )
        .expect("valid question");
        {
            let mut tables = self.tables();
            tables.next_id += 1;
            let id = QuestionId::from_row(tables.next_id);
            tables.questions.push(Question::new(id, draft));
        }
        self
    }

    /// Make every subsequent call fail as if the database were unreachable.
    pub fn set_offline(&self, offline: bool) {
        self.tables().offline = offline;
    }

    /// Identifiers of the stored questions, in order.
    #[must_use]
    pub fn question_ids(&self) -> Vec<i32> {
        self.tables().questions.iter().map(|q| q.id().get()).collect()
    }

    fn check_online(&self) -> Result<(), QuestionRepositoryError> {
        if self.tables().offline {
            return Err(QuestionRepositoryError::connection("store offline"));
        }
        Ok(())
    }

    fn filtered(
        &self,
        keep: impl Fn(&Question) -> bool,
    ) -> Result<Vec<Question>, QuestionRepositoryError> {
        self.check_online()?;
        Ok(self
            .tables()
            .questions
            .iter()
            .filter(|question| keep(question))
            .cloned()
            .collect())
    }
}

#[async_trait]
impl QuestionRepository for InMemoryTriviaStore {
    async fn count(&self) -> Result<u64, QuestionRepositoryError> {
        self.check_online()?;
        Ok(self.tables().questions.len() as u64)
    }

    async fn list_page(&self, page: PageRequest) -> Result<Vec<Question>, QuestionRepositoryError> {
        self.check_online()?;
        Ok(page.slice(&self.tables().questions).to_vec())
    }

    async fn list_all(&self) -> Result<Vec<Question>, QuestionRepositoryError> {
        self.filtered(|_| true)
    }

    async fn list_by_category(
        &self,
        category: CategoryId,
    ) -> Result<Vec<Question>, QuestionRepositoryError> {
        self.filtered(|question| question.category() == category)
    }

    async fn search(&self, term: &SearchTerm) -> Result<Vec<Question>, QuestionRepositoryError> {
        self.filtered(|question| term.matches(question.text()))
    }

    async fn insert(&self, draft: &NewQuestion) -> Result<Question, QuestionRepositoryError> {
        self.check_online()?;
        let mut tables = self.tables();
        if !tables
            .categories
            .iter()
            .any(|category| category.id() == draft.category())
        {
            return Err(QuestionRepositoryError::constraint_violation(format!(
                "category {} does not exist",
                draft.category()
            )));
        }
        tables.next_id += 1;
        let question = Question::new(QuestionId::from_row(tables.next_id), draft.clone());
        tables.questions.push(question.clone());
        Ok(question)
    }

    async fn delete(&self, id: QuestionId) -> Result<bool, QuestionRepositoryError> {
        self.check_online()?;
        let mut tables = self.tables();
        let before = tables.questions.len();
        tables.questions.retain(|question| question.id() != id);
        Ok(tables.questions.len() != before)
    }
}

#[async_trait]
impl CategoryRepository for InMemoryTriviaStore {
    async fn list(&self) -> Result<Vec<Category>, CategoryRepositoryError> {
        let tables = self.tables();
        if tables.offline {
            return Err(CategoryRepositoryError::connection("store offline"));
        }
        let mut categories = tables.categories.clone();
        categories.sort_by(|a, b| a.label().cmp(b.label()));
        Ok(categories)
    }

    async fn find_by_id(
        &self,
        id: CategoryId,
    ) -> Result<Option<Category>, CategoryRepositoryError> {
        let tables = self.tables();
        if tables.offline {
            return Err(CategoryRepositoryError::connection("store offline"));
        }
        Ok(tables
            .categories
            .iter()
            .find(|category| category.id() == id)
            .cloned())
    }
}

/// A store holding six categories and one to three questions in each.
#[must_use]
#[rustfmt::skip]
pub fn sample_store() -> InMemoryTriviaStore {
    InMemoryTriviaStore::new()
        .with_category(1, "Science")
        .with_category(2, "Art")
        .with_category(3, "Geography")
        .with_category(4, "History")
        .with_category(5, "Entertainment")
        .with_category(6, "Sports")
        .with_question(1, "What is the heaviest organ in the human body?", "The Liver", 4)
        .with_question(1, "Who discovered penicillin?", "Alexander Fleming", 3)
        .with_question(1, "Hematology is a branch of medicine involving the study of what?", "Blood", 4)
        .with_question(2, "La Giaconda is better known as what?", "Mona Lisa", 3)
        .with_question(2, "Which Dutch graphic artist created the lithograph 'Relativity'?", "Escher", 1)
        .with_question(3, "What is the largest lake in Africa?", "Lake Victoria", 2)
        .with_question(4, "Whose autobiography is entitled 'I Know Why the Caged Bird Sings'?", "Maya Angelou", 2)
        .with_question(4, "What boxer's original name is Cassius Clay?", "Muhammad Ali", 1)
        .with_question(5, "What movie earned Tom Hanks his third straight Oscar nomination, in 1996?", "Apollo 13", 4)
        .with_question(5, "What actor did author Anne Rice first denounce, then praise in the role of her beloved Lestat?", "Tom Cruise", 4)
        .with_question(6, "Which country won the first ever soccer World Cup in 1930?", "Uruguay", 4)
        .with_question(6, "Which is the only team to play in every soccer World Cup tournament?", "Brazil", 3)
}

/// HTTP state wiring the real domain services over `store`.
#[must_use]
pub fn http_state_for(store: Arc<InMemoryTriviaStore>, quiz_seed: u64) -> HttpState {
    let catalogue = Arc::new(TriviaCatalogueService::new(store.clone(), store.clone()));
    HttpState::new(HttpStatePorts {
        categories: catalogue.clone(),
        questions: catalogue.clone(),
        questions_command: catalogue,
        quiz: Arc::new(QuizService::with_seed(store, quiz_seed)),
    })
}
