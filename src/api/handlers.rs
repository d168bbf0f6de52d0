use crate::application::library::{
    LibraryApplicationError, ServiceDependencies, add_book as execute_add_book,
    borrow_book as execute_borrow_book, find_book as execute_find_book,
    get_available_books as execute_get_available_books, return_book as execute_return_book,
};
use crate::domain::{
    commands::{BorrowBook, ReturnBook},
    value_objects::MemberId,
};
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use std::sync::Arc;

use super::{
    error::ApiError,
    types::{AddBookRequest, BookResponse, LendingResponse, MemberRequest},
};

// ============================================================================
// State
// ============================================================================

/// ハンドラー間で共有されるアプリケーション状態
#[derive(Clone)]
pub struct AppState {
    pub service_deps: ServiceDependencies,
}

// ============================================================================
// Command handlers (POST)
// ============================================================================

/// POST /books - 書籍を追加
///
/// 既存のタイトルであれば冊数を加算する。
/// 追加後の冊数を返す。
pub async fn add_book(
    State(state): State<Arc<AppState>>,
    Json(req): Json<AddBookRequest>,
) -> Result<(StatusCode, Json<BookResponse>), ApiError> {
    let cmd = req.to_command();

    execute_add_book(&state.service_deps, cmd).await?;

    // 追加後の状態を取得して返す
    // 読み戻せない場合は500
    let book = execute_find_book(&state.service_deps, &req.title)
        .await?
        .ok_or_else(|| ApiError::MissingAfterWrite(req.title.clone()))?;

    Ok((StatusCode::CREATED, Json(BookResponse::from(book))))
}

/// POST /books/:title/borrow - 書籍を借りる
///
/// 無効な会員は403。タイトルなし・在庫なしは `success: false` の200。
pub async fn borrow_book(
    State(state): State<Arc<AppState>>,
    Path(title): Path<String>,
    Json(req): Json<MemberRequest>,
) -> Result<Json<LendingResponse>, ApiError> {
    let cmd = BorrowBook {
        member_id: MemberId::new(req.member_id),
        title: title.clone(),
    };

    let success = execute_borrow_book(&state.service_deps, cmd).await?;

    Ok(Json(LendingResponse {
        title,
        member_id: req.member_id,
        success,
    }))
}

/// POST /books/:title/return - 書籍を返却
///
/// タイトルなしは `success: false` の200。
pub async fn return_book(
    State(state): State<Arc<AppState>>,
    Path(title): Path<String>,
    Json(req): Json<MemberRequest>,
) -> Result<Json<LendingResponse>, ApiError> {
    let cmd = ReturnBook {
        member_id: MemberId::new(req.member_id),
        title: title.clone(),
    };

    let success = execute_return_book(&state.service_deps, cmd).await?;

    Ok(Json(LendingResponse {
        title,
        member_id: req.member_id,
        success,
    }))
}

// ============================================================================
// Query handlers (GET)
// ============================================================================

/// GET /books/available - 貸出可能な書籍の一覧
pub async fn list_available_books(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<BookResponse>>, QueryError> {
    let books = execute_get_available_books(&state.service_deps)
        .await
        .map_err(QueryError::from)?;

    Ok(Json(books.into_iter().map(BookResponse::from).collect()))
}

/// GET /books/:title - タイトルで書籍を取得
///
/// 見つからない場合は404を返す。
pub async fn get_book(
    State(state): State<Arc<AppState>>,
    Path(title): Path<String>,
) -> Result<Json<BookResponse>, QueryError> {
    match execute_find_book(&state.service_deps, &title).await {
        Ok(Some(book)) => Ok(Json(BookResponse::from(book))),
        Ok(None) => Err(QueryError::NotFound(format!("Book '{}' not found", title))),
        Err(e) => Err(QueryError::from(e)),
    }
}

// ============================================================================
// Error types
// ============================================================================

/// クエリハンドラー用のエラー型
#[derive(Debug)]
pub enum QueryError {
    NotFound(String),
    InternalError(String),
}

impl From<LibraryApplicationError> for QueryError {
    fn from(err: LibraryApplicationError) -> Self {
        match err {
            LibraryApplicationError::RepositoryError(source) => {
                QueryError::InternalError(source.to_string())
            }
            other => QueryError::InternalError(other.to_string()),
        }
    }
}

impl IntoResponse for QueryError {
    fn into_response(self) -> Response {
        let (status, error_type, message) = match self {
            QueryError::NotFound(msg) => (StatusCode::NOT_FOUND, "not_found", msg),
            QueryError::InternalError(msg) => {
                // 内部エラーの詳細はログに記録し、クライアントには一般的なメッセージのみを返す
                tracing::error!("Internal error in query handler: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal_error",
                    "An unexpected error occurred".to_string(),
                )
            }
        };

        let body = Json(super::types::ErrorResponse::new(error_type, message));
        (status, body).into_response()
    }
}
