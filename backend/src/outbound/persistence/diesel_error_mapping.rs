//! Shared Diesel error mapping for the trivia repositories.

use diesel::result::{DatabaseErrorKind, Error as DieselError};
use tracing::debug;

use super::pool::PoolError;

/// Constructors for the repository error a Diesel failure maps onto.
pub(crate) struct ErrorConstructors<Q, C, V> {
    pub query: Q,
    pub connection: C,
    pub constraint: V,
}

/// Map pool errors into a repository-specific connection error.
pub(crate) fn map_pool_error<E, C>(error: PoolError, connection: C) -> E
where
    C: FnOnce(String) -> E,
{
    let message = match error {
        PoolError::Checkout { message } | PoolError::Build { message } => message,
    };
    connection(message)
}

/// Map Diesel errors into query, connection or constraint errors.
///
/// Foreign key and check constraint violations keep the database message so
/// callers can tell the client which value was rejected.
pub(crate) fn map_diesel_error<E, Q, C, V>(
    error: DieselError,
    constructors: ErrorConstructors<Q, C, V>,
) -> E
where
    Q: FnOnce(String) -> E,
    C: FnOnce(String) -> E,
    V: FnOnce(String) -> E,
{
    let ErrorConstructors {
        query,
        connection,
        constraint,
    } = constructors;

    match &error {
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), "diesel operation failed");
        }
        _ => debug!(
            error_type = %std::any::type_name_of_val(&error),
            "diesel operation failed"
        ),
    }

    match error {
        DieselError::NotFound => query("record not found".to_owned()),
        DieselError::QueryBuilderError(_) => query("database query error".to_owned()),
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, _) => {
            connection("database connection error".to_owned())
        }
        DieselError::DatabaseError(
            DatabaseErrorKind::ForeignKeyViolation
            | DatabaseErrorKind::CheckViolation
            | DatabaseErrorKind::NotNullViolation,
            info,
        ) => constraint(info.message().to_owned()),
        _ => query("database error".to_owned()),
    }
}
