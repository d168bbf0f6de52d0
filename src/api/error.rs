use crate::application::library::LibraryApplicationError;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use super::types::ErrorResponse;

/// API層のエラー型
///
/// アプリケーション層のエラーをラップし、HTTPレスポンスへのマッピングを提供する。
#[derive(Debug)]
pub enum ApiError {
    Application(LibraryApplicationError),
    /// 書き込み直後の読み戻しで書籍が見つからない
    MissingAfterWrite(String),
}

impl From<LibraryApplicationError> for ApiError {
    fn from(err: LibraryApplicationError) -> Self {
        ApiError::Application(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_type, message) = match self {
            // 400 Bad Request - 入力値の誤り
            ApiError::Application(LibraryApplicationError::InvalidArgument(msg)) => {
                (StatusCode::BAD_REQUEST, "INVALID_ARGUMENT", msg)
            }

            // 403 Forbidden - 無効な会員
            ApiError::Application(LibraryApplicationError::InvalidOperation(msg)) => {
                (StatusCode::FORBIDDEN, "INVALID_MEMBER", msg)
            }

            // 422 Unprocessable Entity - ドメインルール違反
            ApiError::Application(LibraryApplicationError::DomainError(msg)) => {
                (StatusCode::UNPROCESSABLE_ENTITY, "DOMAIN_ERROR", msg)
            }

            // 500 Internal Server Error - システム障害
            // 内部エラーの詳細はログに記録し、クライアントには一般的なメッセージのみを返す
            ApiError::MissingAfterWrite(title) => {
                tracing::error!("Book '{}' missing after save", title);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "REPOSITORY_ERROR",
                    "Failed to access the catalog".to_string(),
                )
            }
            ApiError::Application(LibraryApplicationError::RepositoryError(e)) => {
                tracing::error!("Book repository error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "REPOSITORY_ERROR",
                    "Failed to access the catalog".to_string(),
                )
            }
            ApiError::Application(LibraryApplicationError::MemberValidatorError(e)) => {
                tracing::error!("Member validator error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "MEMBER_VALIDATOR_ERROR",
                    "Member validator error".to_string(),
                )
            }
            ApiError::Application(LibraryApplicationError::NotifierError(e)) => {
                tracing::error!("Notifier error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "NOTIFIER_ERROR",
                    "Failed to send notification".to_string(),
                )
            }
        };

        let body = Json(ErrorResponse::new(error_type, message));
        (status, body).into_response()
    }
}
