//! Internal Diesel row structs.
//!
//! These never leave the persistence layer; repositories convert them into
//! domain types on the way out.

use diesel::prelude::*;

use super::schema::{categories, questions};

/// Row read from the `categories` table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = categories)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct CategoryRow {
    pub id: i32,
    pub kind: String,
}

/// Row read from the `questions` table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = questions)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct QuestionRow {
    pub id: i32,
    pub question: String,
    pub answer: String,
    pub difficulty: i32,
    pub category: i32,
}

/// Insertable question; the id is assigned by the database.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = questions)]
pub(crate) struct NewQuestionRow<'a> {
    pub question: &'a str,
    pub answer: &'a str,
    pub difficulty: i32,
    pub category: i32,
}
