use thiserror::Error;

/// Failures raised by the data access layer.
///
/// `Connectivity` means no connection could be obtained at all; `Statement` means a connection
/// was held and the statement (or its commit) failed. Mutating statements have already been
/// rolled back by the time either surfaces.
#[derive(Debug, Error)]
pub enum DataAccessError {
    #[error("Database connection error: {0}")]
    Connectivity(#[source] sqlx::Error),

    #[error("{0}")]
    Statement(#[source] sqlx::Error),
}

impl DataAccessError {
    pub fn is_connectivity(&self) -> bool {
        matches!(self, DataAccessError::Connectivity(_))
    }
}

/// Errors from `pool.acquire()` are connectivity failures; everything after a connection is
/// held (including `BEGIN` and `COMMIT`) is a statement failure.
pub(crate) fn acquire_failed(e: sqlx::Error) -> DataAccessError {
    DataAccessError::Connectivity(e)
}

pub(crate) fn statement_failed(e: sqlx::Error) -> DataAccessError {
    DataAccessError::Statement(e)
}
