//! Notification store: per-user inbox with optimistic read/delete actions.

use std::sync::Arc;

use tokio::sync::broadcast;

use docuhub_client::SessionClient;
use docuhub_core::{Notification, NotificationId, UserId};

/// Rows fetched per inbox refresh.
const FETCH_LIMIT: usize = 50;

/// Owns the authenticated user's notification inbox.
///
/// Mutations are optimistic: local state flips first and the remote write is
/// fire-and-forget. A failed remote write is logged, never rolled back.
pub struct NotificationStore {
    client: Arc<dyn SessionClient>,
    notifications: Vec<Notification>,
    loading: bool,
}

impl NotificationStore {
    pub fn new(client: Arc<dyn SessionClient>) -> Self {
        Self {
            client,
            notifications: Vec::new(),
            loading: false,
        }
    }

    pub fn notifications(&self) -> &[Notification] {
        &self.notifications
    }

    pub fn loading(&self) -> bool {
        self.loading
    }

    pub fn unread_count(&self) -> usize {
        self.notifications.iter().filter(|n| !n.read).count()
    }

    /// Refresh the inbox, newest-first, capped at [`FETCH_LIMIT`]. Without a
    /// signed-in user this is a no-op.
    pub async fn fetch_notifications(&mut self, user_id: Option<UserId>) {
        let Some(user_id) = user_id else {
            return;
        };

        self.loading = true;
        match self.client.list_notifications(user_id, FETCH_LIMIT).await {
            Ok(rows) => self.notifications = rows,
            Err(err) => tracing::error!("error fetching notifications: {err}"),
        }
        self.loading = false;
    }

    /// Flip a notification to read. Already-read or unknown ids are skipped
    /// before any remote call is made.
    pub async fn mark_as_read(&mut self, id: NotificationId) {
        let Some(row) = self
            .notifications
            .iter_mut()
            .find(|n| n.id == id && !n.read)
        else {
            return;
        };
        row.read = true;

        if let Err(err) = self.client.mark_notification_read(id).await {
            tracing::error!("error marking notification as read: {err}");
        }
    }

    /// Flip every held notification to read; no-op without a user.
    pub async fn mark_all_as_read(&mut self, user_id: Option<UserId>) {
        let Some(user_id) = user_id else {
            return;
        };

        for row in &mut self.notifications {
            row.read = true;
        }

        if let Err(err) = self.client.mark_all_notifications_read(user_id).await {
            tracing::error!("error marking all notifications as read: {err}");
        }
    }

    /// Drop a notification locally, then delete the remote row.
    pub async fn delete_notification(&mut self, id: NotificationId) {
        self.notifications.retain(|n| n.id != id);

        if let Err(err) = self.client.delete_notification(id).await {
            tracing::error!("error deleting notification: {err}");
        }
    }

    /// Realtime insert channel scoped to the user; `None` without a user.
    /// Received rows are fed back through [`NotificationStore::apply_insert`].
    pub fn subscribe(&self, user_id: Option<UserId>) -> Option<broadcast::Receiver<Notification>> {
        user_id.map(|id| self.client.subscribe_notifications(id))
    }

    /// Prepend a pushed notification so the inbox stays newest-first.
    pub fn apply_insert(&mut self, notification: Notification) {
        self.notifications.insert(0, notification);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone, Utc};
    use docuhub_client::InMemorySessionClient;
    use docuhub_core::NotificationKind;

    fn notification(user_id: UserId, read: bool, minute: i64) -> Notification {
        Notification {
            id: NotificationId::new(),
            created_at: Utc.with_ymd_and_hms(2025, 6, 3, 9, 0, 0).unwrap()
                + Duration::minutes(minute),
            user_id,
            title: "Document approved".to_string(),
            message: "Your document has been approved".to_string(),
            kind: NotificationKind::Success,
            read,
            link: None,
            metadata: None,
        }
    }

    #[tokio::test]
    async fn fetch_without_user_is_a_no_op() {
        let client = Arc::new(InMemorySessionClient::new());
        let mut store = NotificationStore::new(client.clone());

        store.fetch_notifications(None).await;

        assert!(store.notifications().is_empty());
        assert_eq!(client.calls("list_notifications"), 0);
    }

    #[tokio::test]
    async fn fetch_is_scoped_newest_first_and_capped() {
        let client = Arc::new(InMemorySessionClient::new());
        let user_id = UserId::new();
        for minute in 0..60 {
            client.insert_notification(notification(user_id, false, minute));
        }
        client.insert_notification(notification(UserId::new(), false, 0));

        let mut store = NotificationStore::new(client);
        store.fetch_notifications(Some(user_id)).await;

        assert_eq!(store.notifications().len(), 50);
        assert!(store.notifications().iter().all(|n| n.user_id == user_id));
        let newest = store.notifications()[0].created_at;
        let oldest = store.notifications().last().unwrap().created_at;
        assert!(newest > oldest);
        assert_eq!(store.unread_count(), 50);
    }

    #[tokio::test]
    async fn mark_as_read_skips_already_read_rows() {
        let client = Arc::new(InMemorySessionClient::new());
        let user_id = UserId::new();
        let row = notification(user_id, true, 0);
        let id = row.id;
        client.insert_notification(row);

        let mut store = NotificationStore::new(client.clone());
        store.fetch_notifications(Some(user_id)).await;

        store.mark_as_read(id).await;

        assert_eq!(client.calls("mark_notification_read"), 0);
    }

    #[tokio::test]
    async fn mark_as_read_is_optimistic_under_remote_failure() {
        let client = Arc::new(InMemorySessionClient::new());
        let user_id = UserId::new();
        let row = notification(user_id, false, 0);
        let id = row.id;
        client.insert_notification(row);

        let mut store = NotificationStore::new(client.clone());
        store.fetch_notifications(Some(user_id)).await;

        client.fail_next("mark_notification_read");
        store.mark_as_read(id).await;

        // Local flip survives, the remote row does not.
        assert_eq!(store.unread_count(), 0);
        assert!(!client.notification(id).unwrap().read);
    }

    #[tokio::test]
    async fn mark_all_flips_every_local_row() {
        let client = Arc::new(InMemorySessionClient::new());
        let user_id = UserId::new();
        for minute in 0..3 {
            client.insert_notification(notification(user_id, false, minute));
        }

        let mut store = NotificationStore::new(client.clone());
        store.fetch_notifications(Some(user_id)).await;
        assert_eq!(store.unread_count(), 3);

        store.mark_all_as_read(Some(user_id)).await;

        assert_eq!(store.unread_count(), 0);
        assert_eq!(client.calls("mark_all_notifications_read"), 1);
    }

    #[tokio::test]
    async fn delete_drops_the_row_before_the_remote_call() {
        let client = Arc::new(InMemorySessionClient::new());
        let user_id = UserId::new();
        let row = notification(user_id, false, 0);
        let id = row.id;
        client.insert_notification(row);

        let mut store = NotificationStore::new(client.clone());
        store.fetch_notifications(Some(user_id)).await;

        client.fail_next("delete_notification");
        store.delete_notification(id).await;

        assert!(store.notifications().is_empty());
        assert!(client.notification(id).is_some(), "remote delete failed");
    }

    #[tokio::test]
    async fn realtime_insert_is_prepended() {
        let client = Arc::new(InMemorySessionClient::new());
        let user_id = UserId::new();
        client.insert_notification(notification(user_id, false, 0));

        let mut store = NotificationStore::new(client.clone());
        store.fetch_notifications(Some(user_id)).await;

        let mut rx = store.subscribe(Some(user_id)).expect("user is signed in");
        let pushed = notification(user_id, false, 5);
        let pushed_id = pushed.id;
        client.push_notification(pushed);

        let received = rx.try_recv().expect("insert should be delivered");
        store.apply_insert(received);

        assert_eq!(store.notifications()[0].id, pushed_id);
        assert_eq!(store.notifications().len(), 2);
        assert_eq!(store.unread_count(), 2);
    }

    #[tokio::test]
    async fn subscribe_without_user_yields_nothing() {
        let client = Arc::new(InMemorySessionClient::new());
        let store = NotificationStore::new(client);
        assert!(store.subscribe(None).is_none());
    }
}
