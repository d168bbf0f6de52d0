use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::MemberId;

/// 通知の種別
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    Borrow,
    Return,
}

impl NotificationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            NotificationKind::Borrow => "borrow",
            NotificationKind::Return => "return",
        }
    }
}

/// イベント：書籍が貸し出された
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookBorrowed {
    pub member_id: MemberId,
    pub title: String,
    pub occurred_at: DateTime<Utc>,
}

/// イベント：書籍が返却された
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookReturned {
    pub member_id: MemberId,
    pub title: String,
    pub occurred_at: DateTime<Utc>,
}

/// カタログイベント統合型
///
/// 保存はされない。状態変更の成功後にNotifierへ送られる通知の記録。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CatalogEvent {
    BookBorrowed(BookBorrowed),
    BookReturned(BookReturned),
}

impl CatalogEvent {
    pub fn borrowed(member_id: MemberId, title: impl Into<String>) -> Self {
        CatalogEvent::BookBorrowed(BookBorrowed {
            member_id,
            title: title.into(),
            occurred_at: Utc::now(),
        })
    }

    pub fn returned(member_id: MemberId, title: impl Into<String>) -> Self {
        CatalogEvent::BookReturned(BookReturned {
            member_id,
            title: title.into(),
            occurred_at: Utc::now(),
        })
    }

    pub fn kind(&self) -> NotificationKind {
        match self {
            CatalogEvent::BookBorrowed(_) => NotificationKind::Borrow,
            CatalogEvent::BookReturned(_) => NotificationKind::Return,
        }
    }

    pub fn member_id(&self) -> MemberId {
        match self {
            CatalogEvent::BookBorrowed(e) => e.member_id,
            CatalogEvent::BookReturned(e) => e.member_id,
        }
    }

    pub fn title(&self) -> &str {
        match self {
            CatalogEvent::BookBorrowed(e) => &e.title,
            CatalogEvent::BookReturned(e) => &e.title,
        }
    }
}
