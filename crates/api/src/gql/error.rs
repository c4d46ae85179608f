use std::sync::Arc;

/// Error type for GraphQL resolvers.
///
/// async-graphql has a blanket `impl<T: Display + Send + Sync + 'static> From<T> for Error`,
/// so `?` on a `Result<_, GqlError>` converts into a field error.
///
///   - `From<sqlx::Error>` / `From<Arc<sqlx::Error>>`: logs the DB detail, shows a sanitized message
///   - `GqlError::not_found("Post")`: missing row on a write path
#[derive(Debug)]
pub enum GqlError {
    Sqlx(sqlx::Error),
    Loader(Arc<sqlx::Error>),
    NotFound(&'static str),
}

impl GqlError {
    pub fn not_found(entity: &'static str) -> Self {
        GqlError::NotFound(entity)
    }
}

impl std::fmt::Display for GqlError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GqlError::Sqlx(e) => {
                // Log the real error server-side; return a generic message to clients
                tracing::error!("Database error: {e}");
                write!(f, "Internal database error")
            }
            GqlError::Loader(e) => {
                tracing::error!("Database error in batch load: {e}");
                write!(f, "Internal database error")
            }
            GqlError::NotFound(entity) => write!(f, "{entity} not found"),
        }
    }
}

impl std::error::Error for GqlError {}

impl From<sqlx::Error> for GqlError {
    fn from(e: sqlx::Error) -> Self {
        GqlError::Sqlx(e)
    }
}

impl From<Arc<sqlx::Error>> for GqlError {
    fn from(e: Arc<sqlx::Error>) -> Self {
        GqlError::Loader(e)
    }
}

/// Collapse a delete outcome into the boolean the API returns. Failures are
/// logged at debug level and reported as `false`.
pub fn deleted(entity: &'static str, outcome: Result<bool, sqlx::Error>) -> bool {
    match outcome {
        Ok(true) => true,
        Ok(false) => {
            tracing::debug!(entity, "Nothing to delete");
            false
        }
        Err(e) => {
            tracing::debug!(entity, "Delete failed: {e}");
            false
        }
    }
}
