use serde::{Deserialize, Serialize};

use super::BookError;

/// 書籍エンティティ
///
/// タイトルがカタログ内の自然キー。`copies` は貸出可能な現物の冊数。
/// 冊数は符号なしのため、0未満の状態は型で表現できない。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub title: String,
    pub copies: u32,
}

impl Book {
    pub fn new(title: impl Into<String>, copies: u32) -> Self {
        Self {
            title: title.into(),
            copies,
        }
    }

    /// 冊数を追加する（n → n + k）
    pub fn add_copies(&mut self, added: u32) -> Result<(), BookError> {
        self.copies = self
            .copies
            .checked_add(added)
            .ok_or_else(|| self.overflow(added))?;
        Ok(())
    }

    /// 1冊貸し出す（n → n - 1）
    ///
    /// 在庫が0の場合は状態を変えずに `false` を返す。
    pub fn take_copy(&mut self) -> bool {
        match self.copies.checked_sub(1) {
            Some(remaining) => {
                self.copies = remaining;
                true
            }
            None => false,
        }
    }

    /// 1冊戻す（n → n + 1）
    pub fn put_back_copy(&mut self) -> Result<(), BookError> {
        self.add_copies(1)
    }

    pub fn is_available(&self) -> bool {
        self.copies > 0
    }

    fn overflow(&self, added: u32) -> BookError {
        BookError::CopyCountOverflow {
            title: self.title.clone(),
            current: self.copies,
            added,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_copies_accumulates() {
        let mut book = Book::new("Atomic Habits", 7);

        book.add_copies(3).unwrap();

        assert_eq!(book.copies, 10);
        assert_eq!(book.title, "Atomic Habits");
    }

    #[test]
    fn test_add_copies_overflow_leaves_state_untouched() {
        let mut book = Book::new("Aeneid", u32::MAX);

        let result = book.add_copies(1);

        assert_eq!(
            result,
            Err(BookError::CopyCountOverflow {
                title: "Aeneid".to_string(),
                current: u32::MAX,
                added: 1,
            })
        );
        assert_eq!(book.copies, u32::MAX);
    }

    #[test]
    fn test_take_copy_decrements_when_available() {
        let mut book = Book::new("Aeneid", 5);

        assert!(book.take_copy());
        assert_eq!(book.copies, 4);
    }

    #[test]
    fn test_take_copy_refuses_at_zero() {
        let mut book = Book::new("Aeneid", 0);

        assert!(!book.take_copy());
        assert_eq!(book.copies, 0);
    }

    #[test]
    fn test_put_back_copy_increments() {
        let mut book = Book::new("Atomic Habits", 3);

        book.put_back_copy().unwrap();

        assert_eq!(book.copies, 4);
    }

    #[test]
    fn test_is_available() {
        assert!(!Book::new("Empty", 0).is_available());
        assert!(Book::new("One", 1).is_available());
    }
}
