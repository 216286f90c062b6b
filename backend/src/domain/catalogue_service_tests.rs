//! Tests for the catalogue service.

use std::sync::Arc;

use super::*;
use crate::domain::ErrorCode;
use crate::domain::ports::{MockCategoryRepository, MockQuestionRepository};
use crate::domain::{Category, CategoryId, Difficulty, NewQuestion, Question, QuestionId};
use rstest::rstest;

type Service = TriviaCatalogueService<MockQuestionRepository, MockCategoryRepository>;

fn make_service(questions: MockQuestionRepository, categories: MockCategoryRepository) -> Service {
    TriviaCatalogueService::new(Arc::new(questions), Arc::new(categories))
}

fn category(id: i32, label: &str) -> Category {
    Category::new(CategoryId::from_row(id), label).expect("valid category")
}

fn draft(category: i32) -> NewQuestion {
    NewQuestion::new(
        "What is the largest lake in Africa?",
        "Lake Victoria",
        Difficulty::new(2).expect("difficulty"),
        CategoryId::from_row(category),
    )
    .expect("valid draft")
}

fn question(id: i32, category: i32) -> Question {
    Question::new(QuestionId::from_row(id), draft(category))
}

#[tokio::test]
async fn list_categories_returns_repository_rows() {
    let mut categories = MockCategoryRepository::new();
    categories
        .expect_list()
        .times(1)
        .return_once(|| Ok(vec![category(2, "Art"), category(1, "Science")]));

    let service = make_service(MockQuestionRepository::new(), categories);
    let listed = service.list_categories().await.expect("categories listed");
    assert_eq!(listed.len(), 2);
    assert_eq!(listed[0].label(), "Art");
}

#[tokio::test]
async fn list_categories_reports_empty_catalogue_as_not_found() {
    let mut categories = MockCategoryRepository::new();
    categories.expect_list().times(1).return_once(|| Ok(Vec::new()));

    let service = make_service(MockQuestionRepository::new(), categories);
    let error = service.list_categories().await.expect_err("empty catalogue");
    assert_eq!(error.code(), ErrorCode::NotFound);
}

#[tokio::test]
async fn list_questions_combines_page_total_and_categories() {
    let mut questions = MockQuestionRepository::new();
    questions.expect_count().times(1).return_once(|| Ok(12));
    questions
        .expect_list_page()
        .withf(|page| page.page() == 2 && page.per_page() == 10)
        .times(1)
        .return_once(|_| Ok(vec![question(11, 1), question(12, 1)]));
    let mut categories = MockCategoryRepository::new();
    categories
        .expect_list()
        .times(1)
        .return_once(|| Ok(vec![category(1, "Science")]));

    let service = make_service(questions, categories);
    let page = PageRequest::new(2, 10).expect("valid page");
    let listed = service.list_questions(page).await.expect("page listed");
    assert_eq!(listed.questions.total(), 12);
    assert_eq!(listed.questions.items().len(), 2);
    assert_eq!(listed.categories.len(), 1);
}

#[tokio::test]
async fn list_questions_past_the_end_is_not_found() {
    let mut questions = MockQuestionRepository::new();
    questions.expect_count().times(1).return_once(|| Ok(12));
    questions
        .expect_list_page()
        .times(1)
        .return_once(|_| Ok(Vec::new()));
    let mut categories = MockCategoryRepository::new();
    categories.expect_list().times(0);

    let service = make_service(questions, categories);
    let page = PageRequest::new(9, 10).expect("valid page");
    let error = service.list_questions(page).await.expect_err("past the end");
    assert_eq!(error.code(), ErrorCode::NotFound);
}

#[tokio::test]
async fn questions_in_unknown_category_is_not_found() {
    let mut categories = MockCategoryRepository::new();
    categories
        .expect_find_by_id()
        .times(1)
        .return_once(|_| Ok(None));
    let mut questions = MockQuestionRepository::new();
    questions.expect_list_by_category().times(0);

    let service = make_service(questions, categories);
    let error = service
        .questions_in_category(CategoryId::from_row(77))
        .await
        .expect_err("unknown category");
    assert_eq!(error.code(), ErrorCode::NotFound);
}

#[tokio::test]
async fn questions_in_category_returns_category_and_rows() {
    let mut categories = MockCategoryRepository::new();
    categories
        .expect_find_by_id()
        .times(1)
        .return_once(|id| Ok(Some(Category::new(id, "Geography").expect("category"))));
    let mut questions = MockQuestionRepository::new();
    questions
        .expect_list_by_category()
        .withf(|id| id.get() == 3)
        .times(1)
        .return_once(|_| Ok(vec![question(6, 3), question(7, 3)]));

    let service = make_service(questions, categories);
    let found = service
        .questions_in_category(CategoryId::from_row(3))
        .await
        .expect("category questions");
    assert_eq!(found.category.label(), "Geography");
    assert_eq!(found.questions.len(), 2);
}

#[tokio::test]
async fn search_with_no_matches_is_empty() {
    let mut questions = MockQuestionRepository::new();
    questions
        .expect_search()
        .withf(|term| term.as_str() == "zebra")
        .times(1)
        .return_once(|_| Ok(Vec::new()));

    let service = make_service(questions, MockCategoryRepository::new());
    let term = SearchTerm::new("zebra").expect("term");
    let found = service.search_questions(term).await.expect("search runs");
    assert!(found.is_empty());
}

#[tokio::test]
async fn create_rejects_unknown_category() {
    let mut categories = MockCategoryRepository::new();
    categories
        .expect_find_by_id()
        .times(1)
        .return_once(|_| Ok(None));
    let mut questions = MockQuestionRepository::new();
    questions.expect_insert().times(0);

    let service = make_service(questions, categories);
    let error = service
        .create_question(draft(99))
        .await
        .expect_err("unknown category");
    assert_eq!(error.code(), ErrorCode::Unprocessable);
}

#[tokio::test]
async fn create_returns_stored_question() {
    let mut categories = MockCategoryRepository::new();
    categories
        .expect_find_by_id()
        .times(1)
        .return_once(|id| Ok(Some(Category::new(id, "Geography").expect("category"))));
    let mut questions = MockQuestionRepository::new();
    questions
        .expect_insert()
        .times(1)
        .return_once(|draft| Ok(Question::new(QuestionId::from_row(24), draft.clone())));

    let service = make_service(questions, categories);
    let stored = service
        .create_question(draft(3))
        .await
        .expect("question stored");
    assert_eq!(stored.id().get(), 24);
    assert_eq!(stored.answer(), "Lake Victoria");
}

#[tokio::test]
async fn delete_missing_question_is_unprocessable() {
    let mut questions = MockQuestionRepository::new();
    questions.expect_delete().times(1).return_once(|_| Ok(false));

    let service = make_service(questions, MockCategoryRepository::new());
    let error = service
        .delete_question(QuestionId::from_row(1000))
        .await
        .expect_err("missing question");
    assert_eq!(error.code(), ErrorCode::Unprocessable);
}

#[tokio::test]
async fn delete_echoes_identifier() {
    let mut questions = MockQuestionRepository::new();
    questions.expect_delete().times(1).return_once(|_| Ok(true));

    let service = make_service(questions, MockCategoryRepository::new());
    let deleted = service
        .delete_question(QuestionId::from_row(5))
        .await
        .expect("deleted");
    assert_eq!(deleted.get(), 5);
}

#[rstest]
#[case(QuestionRepositoryError::connection("refused"), ErrorCode::ServiceUnavailable)]
#[case(QuestionRepositoryError::query("syntax"), ErrorCode::InternalError)]
#[case(
    QuestionRepositoryError::constraint_violation("fk"),
    ErrorCode::Unprocessable
)]
#[tokio::test]
async fn repository_failures_map_to_error_codes(
    #[case] failure: QuestionRepositoryError,
    #[case] expected: ErrorCode,
) {
    let mut questions = MockQuestionRepository::new();
    questions
        .expect_search()
        .times(1)
        .return_once(move |_| Err(failure));

    let service = make_service(questions, MockCategoryRepository::new());
    let term = SearchTerm::new("lake").expect("term");
    let error = service.search_questions(term).await.expect_err("failure");
    assert_eq!(error.code(), expected);
}

#[tokio::test]
async fn category_connection_failure_is_service_unavailable() {
    let mut categories = MockCategoryRepository::new();
    categories
        .expect_list()
        .times(1)
        .return_once(|| Err(CategoryRepositoryError::connection("pool closed")));

    let service = make_service(MockQuestionRepository::new(), categories);
    let error = service.list_categories().await.expect_err("unavailable");
    assert_eq!(error.code(), ErrorCode::ServiceUnavailable);
}
