use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

use async_trait::async_trait;
use tokio::sync::broadcast;

use docuhub_core::{Document, DocumentId, DocumentStatus, Notification, NotificationId, UserId};

use crate::client::{
    BackendError, BackendResult, DocumentRecord, Profile, ProfileChanges, SessionClient,
    UploaderName,
};
use crate::session::{AuthEvent, Session};

const CHANNEL_CAPACITY: usize = 64;

#[derive(Debug, Default)]
struct Tables {
    session: Option<Session>,
    profiles: HashMap<UserId, Profile>,
    documents: Vec<Document>,
    notifications: Vec<Notification>,
    files: HashMap<String, Vec<u8>>,
}

/// In-memory session client.
///
/// Intended for tests/dev. Supports seeding rows, recording which operations
/// were invoked, and injecting one-shot failures per operation.
#[derive(Debug)]
pub struct InMemorySessionClient {
    tables: Mutex<Tables>,
    auth_tx: broadcast::Sender<AuthEvent>,
    notification_channels: Mutex<HashMap<UserId, broadcast::Sender<Notification>>>,
    calls: Mutex<Vec<&'static str>>,
    failing: Mutex<HashSet<&'static str>>,
}

impl Default for InMemorySessionClient {
    fn default() -> Self {
        let (auth_tx, _) = broadcast::channel(CHANNEL_CAPACITY);
        Self {
            tables: Mutex::new(Tables::default()),
            auth_tx,
            notification_channels: Mutex::new(HashMap::new()),
            calls: Mutex::new(Vec::new()),
            failing: Mutex::new(HashSet::new()),
        }
    }
}

impl InMemorySessionClient {
    pub fn new() -> Self {
        Self::default()
    }

    // ── Seeding ──────────────────────────────────────────────────────────

    pub fn set_session(&self, session: Option<Session>) {
        self.tables.lock().unwrap().session = session;
    }

    pub fn insert_profile(&self, profile: Profile) {
        self.tables.lock().unwrap().profiles.insert(profile.id, profile);
    }

    pub fn insert_document(&self, document: Document) {
        self.tables.lock().unwrap().documents.push(document);
    }

    pub fn insert_notification(&self, notification: Notification) {
        self.tables.lock().unwrap().notifications.push(notification);
    }

    pub fn put_file(&self, path: impl Into<String>, bytes: Vec<u8>) {
        self.tables.lock().unwrap().files.insert(path.into(), bytes);
    }

    /// Insert a notification row and deliver it on the user's realtime channel.
    pub fn push_notification(&self, notification: Notification) {
        let user_id = notification.user_id;
        self.insert_notification(notification.clone());
        if let Some(tx) = self.notification_channels.lock().unwrap().get(&user_id) {
            let _ = tx.send(notification);
        }
    }

    /// Broadcast an auth-state change to every subscriber.
    pub fn emit_auth_event(&self, event: AuthEvent) {
        let _ = self.auth_tx.send(event);
    }

    // ── Test instrumentation ─────────────────────────────────────────────

    /// Number of times `op` was invoked (by trait method name).
    pub fn calls(&self, op: &str) -> usize {
        self.calls.lock().unwrap().iter().filter(|c| **c == op).count()
    }

    /// Make the next invocation of `op` fail with a request error.
    pub fn fail_next(&self, op: &'static str) {
        self.failing.lock().unwrap().insert(op);
    }

    /// Snapshot of a stored document, for asserting remote effects.
    pub fn document(&self, id: DocumentId) -> Option<Document> {
        self.tables
            .lock()
            .unwrap()
            .documents
            .iter()
            .find(|d| d.id == id)
            .cloned()
    }

    /// Snapshot of a stored notification row.
    pub fn notification(&self, id: NotificationId) -> Option<Notification> {
        self.tables
            .lock()
            .unwrap()
            .notifications
            .iter()
            .find(|n| n.id == id)
            .cloned()
    }

    fn begin(&self, op: &'static str) -> BackendResult<()> {
        self.calls.lock().unwrap().push(op);
        if self.failing.lock().unwrap().remove(op) {
            return Err(BackendError::request(format!("injected failure: {op}")));
        }
        Ok(())
    }
}

#[async_trait]
impl SessionClient for InMemorySessionClient {
    async fn current_session(&self) -> BackendResult<Option<Session>> {
        self.begin("current_session")?;
        Ok(self.tables.lock().unwrap().session.clone())
    }

    async fn sign_out(&self) -> BackendResult<()> {
        self.begin("sign_out")?;
        self.tables.lock().unwrap().session = None;
        let _ = self.auth_tx.send(AuthEvent::SignedOut);
        Ok(())
    }

    fn subscribe_auth_events(&self) -> broadcast::Receiver<AuthEvent> {
        self.auth_tx.subscribe()
    }

    async fn fetch_profile(&self, user_id: UserId) -> BackendResult<Option<Profile>> {
        self.begin("fetch_profile")?;
        Ok(self.tables.lock().unwrap().profiles.get(&user_id).cloned())
    }

    async fn update_profile(
        &self,
        user_id: UserId,
        changes: ProfileChanges,
    ) -> BackendResult<()> {
        self.begin("update_profile")?;
        let mut tables = self.tables.lock().unwrap();
        let profile = tables
            .profiles
            .get_mut(&user_id)
            .ok_or(BackendError::NotFound)?;
        profile.first_name = changes.first_name;
        profile.last_name = changes.last_name;
        profile.avatar = changes.avatar;
        Ok(())
    }

    async fn list_documents(
        &self,
        status: DocumentStatus,
    ) -> BackendResult<Vec<DocumentRecord>> {
        self.begin("list_documents")?;
        let tables = self.tables.lock().unwrap();
        let mut rows: Vec<DocumentRecord> = tables
            .documents
            .iter()
            .filter(|d| d.status == status)
            .map(|d| DocumentRecord {
                document: d.clone(),
                uploader: tables.profiles.get(&d.user_id).map(|p| UploaderName {
                    first_name: p.first_name.clone(),
                    last_name: p.last_name.clone(),
                }),
            })
            .collect();
        rows.sort_by(|a, b| b.document.created_at.cmp(&a.document.created_at));
        Ok(rows)
    }

    async fn count_documents(&self, status: DocumentStatus) -> BackendResult<u64> {
        self.begin("count_documents")?;
        let tables = self.tables.lock().unwrap();
        Ok(tables.documents.iter().filter(|d| d.status == status).count() as u64)
    }

    async fn set_document_status(
        &self,
        id: DocumentId,
        status: DocumentStatus,
    ) -> BackendResult<()> {
        self.begin("set_document_status")?;
        let mut tables = self.tables.lock().unwrap();
        let doc = tables
            .documents
            .iter_mut()
            .find(|d| d.id == id)
            .ok_or(BackendError::NotFound)?;
        doc.status = status;
        Ok(())
    }

    async fn set_primary_category(&self, id: DocumentId, category: &str) -> BackendResult<()> {
        self.begin("set_primary_category")?;
        let mut tables = self.tables.lock().unwrap();
        let doc = tables
            .documents
            .iter_mut()
            .find(|d| d.id == id)
            .ok_or(BackendError::NotFound)?;
        doc.primary_category = Some(category.to_string());
        Ok(())
    }

    async fn list_notifications(
        &self,
        user_id: UserId,
        limit: usize,
    ) -> BackendResult<Vec<Notification>> {
        self.begin("list_notifications")?;
        let tables = self.tables.lock().unwrap();
        let mut rows: Vec<Notification> = tables
            .notifications
            .iter()
            .filter(|n| n.user_id == user_id)
            .cloned()
            .collect();
        rows.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        rows.truncate(limit);
        Ok(rows)
    }

    async fn mark_notification_read(&self, id: NotificationId) -> BackendResult<()> {
        self.begin("mark_notification_read")?;
        let mut tables = self.tables.lock().unwrap();
        let row = tables
            .notifications
            .iter_mut()
            .find(|n| n.id == id)
            .ok_or(BackendError::NotFound)?;
        row.read = true;
        Ok(())
    }

    async fn mark_all_notifications_read(&self, user_id: UserId) -> BackendResult<()> {
        self.begin("mark_all_notifications_read")?;
        let mut tables = self.tables.lock().unwrap();
        for row in tables
            .notifications
            .iter_mut()
            .filter(|n| n.user_id == user_id && !n.read)
        {
            row.read = true;
        }
        Ok(())
    }

    async fn delete_notification(&self, id: NotificationId) -> BackendResult<()> {
        self.begin("delete_notification")?;
        self.tables
            .lock()
            .unwrap()
            .notifications
            .retain(|n| n.id != id);
        Ok(())
    }

    fn subscribe_notifications(&self, user_id: UserId) -> broadcast::Receiver<Notification> {
        self.notification_channels
            .lock()
            .unwrap()
            .entry(user_id)
            .or_insert_with(|| broadcast::channel(CHANNEL_CAPACITY).0)
            .subscribe()
    }

    async fn download(&self, path: &str) -> BackendResult<Vec<u8>> {
        self.begin("download")?;
        self.tables
            .lock()
            .unwrap()
            .files
            .get(path)
            .cloned()
            .ok_or_else(|| BackendError::storage(format!("object not found: {path}")))
    }
}
