use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use domain_codes::CodeError;
use domain_users::UserError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum InventoryError {
    #[error("User not found: {0}")]
    UserNotFound(String),

    #[error(transparent)]
    Users(#[from] UserError),

    #[error(transparent)]
    Codes(#[from] CodeError),
}

pub type InventoryResult<T> = Result<T, InventoryError>;

impl From<InventoryError> for AppError {
    fn from(err: InventoryError) -> Self {
        match err {
            InventoryError::UserNotFound(_) => AppError::NotFound("User not found".to_string()),
            InventoryError::Users(e) => e.into(),
            InventoryError::Codes(e) => e.into(),
        }
    }
}

impl IntoResponse for InventoryError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}
