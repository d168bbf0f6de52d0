use thiserror::Error;

/// 書籍エンティティのエラー
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BookError {
    /// 冊数が表現可能な範囲を超えた
    #[error("copy count overflow for '{title}': {current} + {added}")]
    CopyCountOverflow {
        title: String,
        current: u32,
        added: u32,
    },
}
