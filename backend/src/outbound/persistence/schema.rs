//! Diesel table definitions for the trivia database.
//!
//! Kept in step with the SQL under `backend/migrations`.

diesel::table! {
    /// Question categories.
    categories (id) {
        /// Serial primary key.
        id -> Int4,
        /// Display label, e.g. "Science".
        #[sql_name = "type"]
        kind -> Varchar,
    }
}

diesel::table! {
    /// The question bank.
    questions (id) {
        /// Serial primary key.
        id -> Int4,
        /// Question text.
        question -> Text,
        /// Expected answer.
        answer -> Text,
        /// Difficulty from 1 to 5.
        difficulty -> Int4,
        /// Owning category.
        category -> Int4,
    }
}

diesel::joinable!(questions -> categories (category));
diesel::allow_tables_to_appear_in_same_query!(categories, questions);
