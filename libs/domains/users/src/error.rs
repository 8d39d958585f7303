use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use database::DatabaseError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum UserError {
    #[error("User with email '{0}' already exists")]
    DuplicateEmail(String),

    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Password hashing error: {0}")]
    PasswordHash(String),

    #[error("Storage error: {0}")]
    Storage(#[from] DatabaseError),
}

pub type UserResult<T> = Result<T, UserError>;

/// Convert UserError to AppError for standardized error responses
impl From<UserError> for AppError {
    fn from(err: UserError) -> Self {
        match err {
            UserError::DuplicateEmail(_) => {
                AppError::BadRequest("Email already registered".to_string())
            }
            // One message for unknown email and wrong password alike
            UserError::InvalidCredentials => {
                AppError::Unauthorized("Invalid credentials".to_string())
            }
            UserError::PasswordHash(msg) => AppError::InternalServerError(msg),
            UserError::Storage(e) => AppError::Storage(e),
        }
    }
}

impl IntoResponse for UserError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    fn status_of(err: UserError) -> StatusCode {
        err.into_response().status()
    }

    #[test]
    fn test_user_errors_map_to_http_statuses() {
        assert_eq!(
            status_of(UserError::DuplicateEmail("a@x.com".into())),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(status_of(UserError::InvalidCredentials), StatusCode::UNAUTHORIZED);
        assert_eq!(
            status_of(UserError::PasswordHash("salt".into())),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            status_of(UserError::Storage(DatabaseError::Generic("disk".into()))),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
