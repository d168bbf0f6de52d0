use serde::{Deserialize, Serialize};

use crate::domain::{Book, commands::AddBook};

/// 書籍追加リクエスト（POST /books）
#[derive(Debug, Serialize, Deserialize)]
pub struct AddBookRequest {
    pub title: String,
    pub copies: i64,
}

impl AddBookRequest {
    pub fn to_command(&self) -> AddBook {
        AddBook {
            title: self.title.clone(),
            copies: self.copies,
        }
    }
}

/// 貸出・返却リクエスト（POST /books/:title/borrow, POST /books/:title/return）
#[derive(Debug, Serialize, Deserialize)]
pub struct MemberRequest {
    pub member_id: i64,
}

/// 書籍レスポンス
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct BookResponse {
    pub title: String,
    pub copies: u32,
}

impl From<Book> for BookResponse {
    fn from(book: Book) -> Self {
        Self {
            title: book.title,
            copies: book.copies,
        }
    }
}

/// 貸出・返却の結果
///
/// `success: false` は業務上の否定結果（タイトルなし、在庫なし）であり、エラーではない。
#[derive(Debug, Serialize, Deserialize)]
pub struct LendingResponse {
    pub title: String,
    pub member_id: i64,
    pub success: bool,
}

/// エラーレスポンス
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            message: message.into(),
        }
    }
}
