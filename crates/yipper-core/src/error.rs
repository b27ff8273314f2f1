//! Domain-level error types.

use thiserror::Error;

/// Domain errors - business logic failures.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Entity not found: {entity_type} with id {id}")]
    NotFound { entity_type: &'static str, id: i64 },

    /// The author has never posted, so they may not post.
    #[error("Unknown author: {0}")]
    UnknownAuthor(String),

    #[error(transparent)]
    Repo(#[from] RepoError),
}

/// Repository-level errors.
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Database connection failed: {0}")]
    Connection(String),

    #[error("Query execution failed: {0}")]
    Query(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repo_errors_pass_through_domain_errors() {
        let err: DomainError = RepoError::Query("disk I/O error".to_string()).into();
        assert!(matches!(err, DomainError::Repo(RepoError::Query(_))));
        assert_eq!(err.to_string(), "Query execution failed: disk I/O error");
    }

    #[test]
    fn not_found_names_the_entity() {
        let err = DomainError::NotFound {
            entity_type: "yip",
            id: 42,
        };
        assert_eq!(err.to_string(), "Entity not found: yip with id 42");
    }
}
