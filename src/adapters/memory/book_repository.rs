use crate::domain::Book;
use crate::ports::book_repository::{BookRepository as BookRepositoryTrait, Result};
use async_trait::async_trait;
use std::sync::Mutex;

/// BookRepositoryのインメモリ実装
///
/// 追加された順序を保持する。保存はタイトルをキーとしたupsert。
pub struct BookRepository {
    books: Mutex<Vec<Book>>,
}

impl BookRepository {
    pub fn new() -> Self {
        Self {
            books: Mutex::new(Vec::new()),
        }
    }

    /// 初期データを持つリポジトリを作成
    pub fn with_books(books: impl IntoIterator<Item = Book>) -> Self {
        Self {
            books: Mutex::new(books.into_iter().collect()),
        }
    }
}

impl Default for BookRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BookRepositoryTrait for BookRepository {
    async fn find_book(&self, title: &str) -> Result<Option<Book>> {
        let books = self.books.lock().unwrap();
        Ok(books.iter().find(|b| b.title == title).cloned())
    }

    async fn get_all_books(&self) -> Result<Vec<Book>> {
        Ok(self.books.lock().unwrap().clone())
    }

    async fn save_book(&self, book: &Book) -> Result<()> {
        let mut books = self.books.lock().unwrap();
        match books.iter_mut().find(|b| b.title == book.title) {
            Some(stored) => stored.copies = book.copies,
            None => books.push(book.clone()),
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_save_inserts_then_updates_in_place() {
        let repository = BookRepository::new();

        repository.save_book(&Book::new("Aeneid", 2)).await.unwrap();
        repository.save_book(&Book::new("Odyssey", 1)).await.unwrap();
        repository.save_book(&Book::new("Aeneid", 5)).await.unwrap();

        let all = repository.get_all_books().await.unwrap();
        assert_eq!(all, vec![Book::new("Aeneid", 5), Book::new("Odyssey", 1)]);
    }

    #[tokio::test]
    async fn test_find_book_missing_title() {
        let repository = BookRepository::with_books([Book::new("Aeneid", 2)]);

        assert!(repository.find_book("Iliad").await.unwrap().is_none());
        assert_eq!(
            repository.find_book("Aeneid").await.unwrap(),
            Some(Book::new("Aeneid", 2))
        );
    }
}
