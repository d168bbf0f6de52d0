use crate::domain::{Book, commands::*};
use crate::ports::*;
use std::sync::Arc;

use super::errors::{LibraryApplicationError, Result};

/// サービスの依存関係
///
/// 関数型DDDの原則に従い、データ構造として定義。
/// 振る舞い（メソッド）は持たず、各操作の関数に依存関係を渡す。
/// テストでは任意の実装に差し替えられる。
#[derive(Clone)]
pub struct ServiceDependencies {
    pub book_repository: Arc<dyn BookRepository>,
    pub member_validator: Arc<dyn MemberValidator>,
    pub notifier: Arc<dyn Notifier>,
}

/// 書籍を追加する
///
/// ビジネスルール：
/// - タイトルは空白のみであってはならない
/// - 冊数は1以上であること
/// - 既存のタイトルであれば冊数を加算する（重複レコードは作らない）
///
/// 入力が不正な場合はリポジトリに一切アクセスしない。
/// 成功時の保存はちょうど1回。通知は送らない。
pub async fn add_book(deps: &ServiceDependencies, cmd: AddBook) -> Result<()> {
    tracing::debug!(title = %cmd.title, copies = cmd.copies, "add_book");

    // 1. 入力の検証
    if cmd.title.trim().is_empty() {
        tracing::warn!("add_book rejected: blank title");
        return Err(LibraryApplicationError::InvalidArgument(
            "title must not be blank".to_string(),
        ));
    }

    if cmd.copies <= 0 {
        tracing::warn!(copies = cmd.copies, "add_book rejected: non-positive copies");
        return Err(LibraryApplicationError::InvalidArgument(format!(
            "copies must be positive, got {}",
            cmd.copies
        )));
    }

    let copies = u32::try_from(cmd.copies).map_err(|_| {
        LibraryApplicationError::InvalidArgument(format!(
            "copies out of range: {}",
            cmd.copies
        ))
    })?;

    // 2. 既存の書籍を検索
    let existing = deps
        .book_repository
        .find_book(&cmd.title)
        .await
        .map_err(LibraryApplicationError::RepositoryError)?;

    // 3. 新規作成、または冊数を加算
    let book = match existing {
        None => Book::new(cmd.title, copies),
        Some(mut book) => {
            book.add_copies(copies)
                .map_err(|e| LibraryApplicationError::InvalidArgument(e.to_string()))?;
            book
        }
    };

    // 4. 保存
    deps.book_repository
        .save_book(&book)
        .await
        .map_err(LibraryApplicationError::RepositoryError)?;

    tracing::info!(title = %book.title, copies = book.copies, "book added");

    Ok(())
}

/// 書籍を借りる
///
/// ビジネスルール：
/// - 会員が有効であること（無効ならエラー。書籍には一切触れない）
/// - タイトルが存在しない、または在庫が0の場合は `false`（エラーではない）
///
/// 成功時のみ、冊数を1減らして保存し、貸出通知を送る。
pub async fn borrow_book(deps: &ServiceDependencies, cmd: BorrowBook) -> Result<bool> {
    tracing::debug!(member_id = %cmd.member_id, title = %cmd.title, "borrow_book");

    // 1. 会員の有効性確認
    let is_valid = deps
        .member_validator
        .is_valid_member(cmd.member_id)
        .await
        .map_err(LibraryApplicationError::MemberValidatorError)?;

    if !is_valid {
        tracing::warn!(member_id = %cmd.member_id, "borrow_book rejected: invalid member");
        return Err(LibraryApplicationError::InvalidOperation(format!(
            "member {} is not valid",
            cmd.member_id
        )));
    }

    // 2. 書籍の検索
    let Some(mut book) = deps
        .book_repository
        .find_book(&cmd.title)
        .await
        .map_err(LibraryApplicationError::RepositoryError)?
    else {
        tracing::debug!(title = %cmd.title, "borrow_book: title not found");
        return Ok(false);
    };

    // 3. 在庫確認
    if !book.take_copy() {
        tracing::debug!(title = %cmd.title, "borrow_book: no copies available");
        return Ok(false);
    }

    // 4. 保存
    deps.book_repository
        .save_book(&book)
        .await
        .map_err(LibraryApplicationError::RepositoryError)?;

    // 5. 通知
    deps.notifier
        .notify_borrow(cmd.member_id, &book.title)
        .await
        .map_err(LibraryApplicationError::NotifierError)?;

    tracing::info!(
        member_id = %cmd.member_id,
        title = %book.title,
        remaining = book.copies,
        "book borrowed"
    );

    Ok(true)
}

/// 書籍を返却する
///
/// 会員の有効性は確認しない（貸出とは非対称）。
/// タイトルが存在しない場合は `false` を返し、副作用はない。
pub async fn return_book(deps: &ServiceDependencies, cmd: ReturnBook) -> Result<bool> {
    tracing::debug!(member_id = %cmd.member_id, title = %cmd.title, "return_book");

    // 1. 書籍の検索
    let Some(mut book) = deps
        .book_repository
        .find_book(&cmd.title)
        .await
        .map_err(LibraryApplicationError::RepositoryError)?
    else {
        tracing::debug!(title = %cmd.title, "return_book: title not found");
        return Ok(false);
    };

    // 2. 冊数を1増やす
    book.put_back_copy()
        .map_err(|e| LibraryApplicationError::DomainError(e.to_string()))?;

    // 3. 保存
    deps.book_repository
        .save_book(&book)
        .await
        .map_err(LibraryApplicationError::RepositoryError)?;

    // 4. 通知
    deps.notifier
        .notify_return(cmd.member_id, &book.title)
        .await
        .map_err(LibraryApplicationError::NotifierError)?;

    tracing::info!(
        member_id = %cmd.member_id,
        title = %book.title,
        copies = book.copies,
        "book returned"
    );

    Ok(true)
}

/// 貸出可能な書籍の一覧を取得する
///
/// 在庫が1冊以上の書籍のみ、リポジトリの順序のまま返す。
/// 該当がなければ空のVecを返す。
pub async fn get_available_books(deps: &ServiceDependencies) -> Result<Vec<Book>> {
    let books = deps
        .book_repository
        .get_all_books()
        .await
        .map_err(LibraryApplicationError::RepositoryError)?;

    Ok(books.into_iter().filter(Book::is_available).collect())
}

/// タイトルで書籍を取得する（読み取り専用）
pub async fn find_book(deps: &ServiceDependencies, title: &str) -> Result<Option<Book>> {
    deps.book_repository
        .find_book(title)
        .await
        .map_err(LibraryApplicationError::RepositoryError)
}
