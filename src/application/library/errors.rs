use thiserror::Error;

/// 蔵書管理アプリケーション層のエラー
///
/// 「見つからない」「在庫なし」はエラーではなく `false` で返す。
/// ここに並ぶのは入力の誤用と協調オブジェクトの障害のみ。
#[derive(Debug, Error)]
pub enum LibraryApplicationError {
    /// 入力値が不正（空のタイトル、0以下の冊数など）
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// 操作が許可されない（無効な会員による貸出）
    #[error("Invalid operation: {0}")]
    InvalidOperation(String),

    /// ドメイン層のエラー
    #[error("Domain error: {0}")]
    DomainError(String),

    /// BookRepositoryのエラー
    #[error("Book repository error")]
    RepositoryError(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// MemberValidatorのエラー
    #[error("Member validator error")]
    MemberValidatorError(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Notifierのエラー
    #[error("Notifier error")]
    NotifierError(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// アプリケーション層の Result型
pub type Result<T> = std::result::Result<T, LibraryApplicationError>;
