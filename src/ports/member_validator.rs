use crate::domain::value_objects::MemberId;
use async_trait::async_trait;

pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// 会員バリデーターポート
///
/// カタログコンテキストと会員コンテキストの境界を維持する。
/// カタログコンテキストはMemberIDのみを知り、会員詳細は知らない。
#[async_trait]
pub trait MemberValidator: Send + Sync {
    /// 会員IDが現在有効か確認する
    ///
    /// ビジネスルール: 無効な会員は書籍を借りられない。
    async fn is_valid_member(&self, member_id: MemberId) -> Result<bool>;
}
