use quill_core::error::CoreError;
use quill_core::types::DbId;

/// Failures surfaced by a [`BlogService`](crate::BlogService).
///
/// "Not found" is not an error here: lookups return `Ok(None)`.
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    /// An insert collided with an existing primary key.
    #[error("{entity} with id {id} already exists")]
    DuplicateKey { entity: &'static str, id: DbId },

    /// The store could not be reached or used at all.
    #[error("Storage unavailable: {0}")]
    ConnectionFailure(#[source] sqlx::Error),

    /// Any other query failure.
    #[error("Database error: {0}")]
    Database(#[source] sqlx::Error),

    /// A domain-level error from `quill_core`.
    #[error(transparent)]
    Core(#[from] CoreError),
}

pub type ServiceResult<T> = Result<T, ServiceError>;

impl From<sqlx::Error> for ServiceError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::PoolTimedOut
            | sqlx::Error::PoolClosed
            | sqlx::Error::Io(_)
            | sqlx::Error::Tls(_)
            | sqlx::Error::Configuration(_)
            | sqlx::Error::WorkerCrashed => ServiceError::ConnectionFailure(err),
            other => ServiceError::Database(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn pool_errors_are_connection_failures() {
        assert_matches!(
            ServiceError::from(sqlx::Error::PoolTimedOut),
            ServiceError::ConnectionFailure(_)
        );
        assert_matches!(
            ServiceError::from(sqlx::Error::PoolClosed),
            ServiceError::ConnectionFailure(_)
        );
    }

    #[test]
    fn query_errors_are_database_errors() {
        assert_matches!(
            ServiceError::from(sqlx::Error::RowNotFound),
            ServiceError::Database(_)
        );
    }

    #[test]
    fn duplicate_key_message_names_the_id() {
        let err = ServiceError::DuplicateKey {
            entity: "Article",
            id: 9,
        };
        assert_eq!(err.to_string(), "Article with id 9 already exists");
    }
}
