use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use database::DatabaseError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CodeError {
    #[error("Storage error: {0}")]
    Storage(#[from] DatabaseError),
}

pub type CodeResult<T> = Result<T, CodeError>;

impl From<CodeError> for AppError {
    fn from(err: CodeError) -> Self {
        match err {
            CodeError::Storage(e) => AppError::Storage(e),
        }
    }
}

impl IntoResponse for CodeError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}
