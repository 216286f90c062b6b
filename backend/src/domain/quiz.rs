//! Quiz question selection.
//!
//! A quiz session lives entirely on the client: it sends the identifiers it
//! has already been shown plus a category filter, and the server answers with
//! one eligible question chosen at random. The session ends when no eligible
//! question remains.

use std::collections::HashSet;

use rand::Rng;
use rand::seq::SliceRandom;

use super::{CategoryFilter, Question, QuestionId};

/// Pick the next quiz question.
///
/// A question is eligible when it passes `filter` and its identifier is not
/// in `previously_seen`. Returns `None` when nothing is eligible, which marks
/// the quiz as exhausted. Otherwise every eligible question is equally
/// likely to be returned.
///
/// # Examples
/// ```
/// use std::collections::HashSet;
///
/// use rand::SeedableRng;
/// use rand::rngs::SmallRng;
/// use trivia::domain::quiz::select_next;
/// use trivia::domain::{CategoryFilter, CategoryId, Difficulty, NewQuestion, Question, QuestionId};
///
/// let science = CategoryId::new(1).expect("category");
/// let difficulty = Difficulty::new(2).expect("difficulty");
/// let questions: Vec<Question> = (1..=3)
///     .map(|id| {
///         let draft = NewQuestion::new(format!("Question {id}?"), "Answer", difficulty, science)
///             .expect("draft");
///         Question::new(QuestionId::new(id).expect("id"), draft)
///     })
///     .collect();
/// let seen: HashSet<QuestionId> = [1, 2]
///     .into_iter()
///     .map(|id| QuestionId::new(id).expect("id"))
///     .collect();
///
/// let mut rng = SmallRng::seed_from_u64(7);
/// let next = select_next(&questions, &seen, CategoryFilter::Only(science), &mut rng);
/// assert_eq!(next.map(|q| q.id().get()), Some(3));
/// ```
pub fn select_next<'a, R>(
    questions: &'a [Question],
    previously_seen: &HashSet<QuestionId>,
    filter: CategoryFilter,
    rng: &mut R,
) -> Option<&'a Question>
where
    R: Rng + ?Sized,
{
    let eligible: Vec<&Question> = questions
        .iter()
        .filter(|question| filter.matches(question.category()))
        .filter(|question| !previously_seen.contains(&question.id()))
        .collect();
    eligible.choose(rng).copied()
}
