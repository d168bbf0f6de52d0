use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use super::handlers::{
    AppState, add_book, borrow_book, get_book, list_available_books, return_book,
};

/// Creates the API router with all catalog endpoints
///
/// Command endpoints (Write operations):
/// - POST /books - Add copies of a title
/// - POST /books/:title/borrow - Borrow one copy
/// - POST /books/:title/return - Return one copy
///
/// Query endpoints (Read operations):
/// - GET /books/available - Titles with at least one copy
/// - GET /books/:title - A single title
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        // Health check endpoint
        .route("/health", get(health_check))
        // Command endpoints (Write operations)
        .route("/books", post(add_book))
        .route("/books/:title/borrow", post(borrow_book))
        .route("/books/:title/return", post(return_book))
        // Query endpoints (Read operations)
        .route("/books/available", get(list_available_books))
        .route("/books/:title", get(get_book))
        // Add tracing middleware
        .layer(TraceLayer::new_for_http())
        // Add application state
        .with_state(state)
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}
