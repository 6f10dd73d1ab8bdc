use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tokio::sync::broadcast;

use docuhub_core::{
    Document, DocumentId, DocumentStatus, Notification, NotificationId, UserId, UserRole,
};

use crate::session::{AuthEvent, Session};

/// Result type used across the client boundary.
pub type BackendResult<T> = Result<T, BackendError>;

/// Failure at the backend boundary.
///
/// These are transport/service failures, not domain errors: stores catch
/// them at the action boundary, log, and degrade to the last-known-good
/// state.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BackendError {
    /// Network, auth, or validation failure reported by the backend.
    #[error("backend request failed: {0}")]
    Request(String),

    /// The addressed row does not exist.
    #[error("record not found")]
    NotFound,

    /// File storage operation failed.
    #[error("storage operation failed: {0}")]
    Storage(String),
}

impl BackendError {
    pub fn request(msg: impl Into<String>) -> Self {
        Self::Request(msg.into())
    }

    pub fn storage(msg: impl Into<String>) -> Self {
        Self::Storage(msg.into())
    }
}

/// A user profile row (email rides on the session, not the profile).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub id: UserId,
    pub first_name: String,
    pub last_name: String,
    pub role: UserRole,
    pub department: Option<String>,
    pub status: bool,
    pub avatar: Option<String>,
}

/// The mutable subset of a profile persisted by `update_profile`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileChanges {
    pub first_name: String,
    pub last_name: String,
    pub avatar: Option<String>,
}

/// Uploader name parts joined onto a document query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploaderName {
    pub first_name: String,
    pub last_name: String,
}

/// A document row with its uploader's profile joined in at fetch time.
///
/// `uploader` is `None` when the owning profile no longer exists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentRecord {
    pub document: Document,
    pub uploader: Option<UploaderName>,
}

/// Handle to the hosted backend (auth, rows, file storage, realtime).
///
/// Implementations own consistency, querying, and push delivery; this core
/// only consumes them. All listing methods return rows newest-first.
///
/// Realtime subscriptions are lossy broadcast channels: events arrive in
/// delivery order with no replay or backfill on reconnect.
#[async_trait]
pub trait SessionClient: Send + Sync {
    /// The current auth session, if one exists.
    async fn current_session(&self) -> BackendResult<Option<Session>>;

    /// Terminate the remote session.
    async fn sign_out(&self) -> BackendResult<()>;

    /// Subscribe to auth-state changes for the lifetime of the process.
    fn subscribe_auth_events(&self) -> broadcast::Receiver<AuthEvent>;

    /// Fetch a single profile row by id. `Ok(None)` when the row is absent.
    async fn fetch_profile(&self, user_id: UserId) -> BackendResult<Option<Profile>>;

    /// Persist the mutable profile fields.
    async fn update_profile(&self, user_id: UserId, changes: ProfileChanges)
        -> BackendResult<()>;

    /// Documents of the given status with uploader join, newest-first.
    async fn list_documents(&self, status: DocumentStatus)
        -> BackendResult<Vec<DocumentRecord>>;

    /// Count-only query over documents of the given status.
    async fn count_documents(&self, status: DocumentStatus) -> BackendResult<u64>;

    /// Set a document's review status.
    async fn set_document_status(
        &self,
        id: DocumentId,
        status: DocumentStatus,
    ) -> BackendResult<()>;

    /// Reassign a document's primary category.
    async fn set_primary_category(&self, id: DocumentId, category: &str) -> BackendResult<()>;

    /// Most recent notifications for a user, newest-first, up to `limit`.
    async fn list_notifications(
        &self,
        user_id: UserId,
        limit: usize,
    ) -> BackendResult<Vec<Notification>>;

    /// Flag a single notification as read.
    async fn mark_notification_read(&self, id: NotificationId) -> BackendResult<()>;

    /// Bulk update: flag every unread notification of the user as read.
    async fn mark_all_notifications_read(&self, user_id: UserId) -> BackendResult<()>;

    /// Delete a notification row.
    async fn delete_notification(&self, id: NotificationId) -> BackendResult<()>;

    /// Subscribe to notification inserts scoped to one user.
    fn subscribe_notifications(&self, user_id: UserId) -> broadcast::Receiver<Notification>;

    /// Download file bytes from storage by path.
    async fn download(&self, path: &str) -> BackendResult<Vec<u8>>;
}
