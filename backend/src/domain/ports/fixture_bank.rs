//! Built-in categories and questions served by the fixture repositories.
//!
//! Mirrors the rows seeded by the initial migration.

use crate::domain::{Category, CategoryId, Difficulty, NewQuestion, Question, QuestionId};

pub(super) const SAMPLE_CATEGORIES: [(i32, &str); 6] = [
    (1, "Science"),
    (2, "Art"),
    (3, "Geography"),
    (4, "History"),
    (5, "Entertainment"),
    (6, "Sports"),
];

/// `(id, question, answer, difficulty, category)`
#[rustfmt::skip]
pub(super) const SAMPLE_QUESTIONS: [(i32, &str, &str, u8, i32); 10] = [
    (1, "What is the heaviest organ in the human body?", "The Liver", 4, 1),
    (2, "Who discovered penicillin?", "Alexander Fleming", 3, 1),
    (3, "Hematology is a branch of medicine involving the study of what?", "Blood", 4, 1),
    (4, "Which Dutch graphic artist created the lithograph 'Relativity'?", "Escher", 1, 2),
    (5, "La Giaconda is better known as what?", "Mona Lisa", 3, 2),
    (6, "What is the largest lake in Africa?", "Lake Victoria", 2, 3),
    (7, "In which royal palace would you find the Hall of Mirrors?", "The Palace of Versailles", 3, 3),
    (8, "Whose autobiography is entitled 'I Know Why the Caged Bird Sings'?", "Maya Angelou", 2, 4),
    (9, "What movie earned Tom Hanks his third straight Oscar nomination, in 1996?", "Apollo 13", 4, 5),
    (10, "Which country won the first ever soccer World Cup in 1930?", "Uruguay", 4, 6),
];

pub(super) fn sample_categories() -> Vec<Category> {
    SAMPLE_CATEGORIES
        .iter()
        .filter_map(|(id, label)| Category::new(CategoryId::from_row(*id), *label).ok())
        .collect()
}

pub(super) fn sample_questions() -> Vec<Question> {
    SAMPLE_QUESTIONS
        .iter()
        .filter_map(|(id, text, answer, difficulty, category)| {
            let difficulty = Difficulty::new(i64::from(*difficulty)).ok()?;
            let draft =
                NewQuestion::new(text, answer, difficulty, CategoryId::from_row(*category)).ok()?;
            Some(Question::new(QuestionId::from_row(*id), draft))
        })
        .collect()
}
