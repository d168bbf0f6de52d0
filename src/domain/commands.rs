use super::MemberId;

/// コマンド：書籍を追加する
///
/// `copies` は符号付き。0以下の入力をアプリケーション層で拒否できるようにするため。
#[derive(Debug, Clone)]
pub struct AddBook {
    pub title: String,
    pub copies: i64,
}

/// コマンド：書籍を借りる
#[derive(Debug, Clone)]
pub struct BorrowBook {
    pub member_id: MemberId,
    pub title: String,
}

/// コマンド：書籍を返却する
#[derive(Debug, Clone)]
pub struct ReturnBook {
    pub member_id: MemberId,
    pub title: String,
}
