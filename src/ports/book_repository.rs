use crate::domain::Book;
use async_trait::async_trait;

pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// 書籍リポジトリポート
///
/// 蔵書の永続化メカニズムを抽象化する。
/// 書籍はタイトルをキーとして保存される。
#[async_trait]
pub trait BookRepository: Send + Sync {
    /// タイトルで書籍を検索する
    async fn find_book(&self, title: &str) -> Result<Option<Book>>;

    /// カタログ全体を取得する
    ///
    /// リポジトリの自然な順序で返す。
    async fn get_all_books(&self) -> Result<Vec<Book>>;

    /// 書籍の現在状態を保存する
    ///
    /// タイトルをキーとしたupsert。既存の場合は冊数を上書きする。
    async fn save_book(&self, book: &Book) -> Result<()>;
}
