use crate::domain::{events::CatalogEvent, value_objects::MemberId};
use crate::ports::notifier::{Notifier as NotifierTrait, Result};
use async_trait::async_trait;
use std::sync::Mutex;

/// Mock implementation of Notifier
///
/// Does not deliver anything. Each notification is written to the log
/// and kept in memory so callers can inspect what was sent.
pub struct Notifier {
    sent: Mutex<Vec<CatalogEvent>>,
}

impl Notifier {
    pub fn new() -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
        }
    }

    /// Notifications sent so far, oldest first
    pub fn sent_notifications(&self) -> Vec<CatalogEvent> {
        self.sent.lock().unwrap().clone()
    }

    fn record(&self, event: CatalogEvent) {
        tracing::info!(
            kind = event.kind().as_str(),
            member_id = %event.member_id(),
            title = event.title(),
            "notification sent"
        );
        self.sent.lock().unwrap().push(event);
    }
}

impl Default for Notifier {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl NotifierTrait for Notifier {
    async fn notify_borrow(&self, member_id: MemberId, title: &str) -> Result<()> {
        self.record(CatalogEvent::borrowed(member_id, title));
        Ok(())
    }

    async fn notify_return(&self, member_id: MemberId, title: &str) -> Result<()> {
        self.record(CatalogEvent::returned(member_id, title));
        Ok(())
    }
}
