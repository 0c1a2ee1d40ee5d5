use thiserror::Error;

#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Database error: {0}")]
    Database(#[from] database::DbError),
}

impl From<core_types::CoreError> for ServiceError {
    fn from(err: core_types::CoreError) -> Self {
        ServiceError::InvalidArgument(err.to_string())
    }
}
