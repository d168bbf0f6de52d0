use crate::domain::Book;
use crate::ports::book_repository::{BookRepository as BookRepositoryTrait, Result};
use async_trait::async_trait;
use sqlx::{PgPool, Row, postgres::PgRow};

/// PostgreSQLの行データをBookに変換する
///
/// copiesはINTEGER（i32）で保存されるため、u32への変換でエラーハンドリングを行う。
fn map_row_to_book(row: &PgRow) -> Result<Book> {
    let copies_i32: i32 = row.get("copies");
    let copies: u32 = copies_i32.try_into().map_err(|_| {
        Box::new(std::io::Error::new(
            std::io::ErrorKind::InvalidData,
            format!("copies out of range: {}", copies_i32),
        )) as Box<dyn std::error::Error + Send + Sync>
    })?;

    Ok(Book {
        title: row.get("title"),
        copies,
    })
}

/// BookRepositoryのPostgreSQL実装
pub struct BookRepository {
    pool: PgPool,
}

impl BookRepository {
    /// PostgreSQLコネクションプールから新しいBookRepositoryを作成
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BookRepositoryTrait for BookRepository {
    async fn find_book(&self, title: &str) -> Result<Option<Book>> {
        let row = sqlx::query(
            r#"
            SELECT title, copies
            FROM books
            WHERE title = $1
            "#,
        )
        .bind(title)
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(map_row_to_book).transpose()
    }

    /// カタログ全体を取得（登録順）
    async fn get_all_books(&self) -> Result<Vec<Book>> {
        let rows = sqlx::query(
            r#"
            SELECT title, copies
            FROM books
            ORDER BY id ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(map_row_to_book).collect()
    }

    /// 書籍を保存（upsert）
    ///
    /// INSERT ... ON CONFLICT UPDATEでタイトルをキーに冊数を上書きする。
    /// 既存行のidは変わらないため、一覧の順序は初回登録順のまま。
    async fn save_book(&self, book: &Book) -> Result<()> {
        let copies = i32::try_from(book.copies).map_err(|_| {
            Box::new(std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                format!("copies too large to store: {}", book.copies),
            )) as Box<dyn std::error::Error + Send + Sync>
        })?;

        sqlx::query(
            r#"
            INSERT INTO books (title, copies)
            VALUES ($1, $2)
            ON CONFLICT (title)
            DO UPDATE SET
                copies = EXCLUDED.copies,
                updated_at = NOW()
            "#,
        )
        .bind(&book.title)
        .bind(copies)
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}
