use crate::domain::value_objects::MemberId;
use async_trait::async_trait;

pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// 通知ポート
///
/// 会員への通知配信メカニズムを抽象化する。
/// 実装はメール、プッシュ通知、ログなどが考えられる。
#[async_trait]
pub trait Notifier: Send + Sync {
    /// 貸出通知を送信する
    ///
    /// 貸出が成功した後にのみ呼ばれる。
    async fn notify_borrow(&self, member_id: MemberId, title: &str) -> Result<()>;

    /// 返却通知を送信する
    ///
    /// 返却が成功した後にのみ呼ばれる。
    async fn notify_return(&self, member_id: MemberId, title: &str) -> Result<()>;
}
