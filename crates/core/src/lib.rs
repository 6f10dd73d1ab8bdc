//! `docuhub-core` — domain vocabulary for the document-management client core.
//!
//! This crate contains **pure domain** types (no backend or UI concerns):
//! identifiers, user/role modeling, document records and the category
//! taxonomy, notifications, the transient upload pipeline entries, and the
//! `Notice` type used for user-facing feedback.

pub mod document;
pub mod id;
pub mod notice;
pub mod notification;
pub mod upload;
pub mod user;

pub use document::{CATEGORIES, Document, DocumentStatus, DocumentWithUploader};
pub use id::{DocumentId, NotificationId, UploadId, UserId};
pub use notice::{Notice, NoticeSeverity};
pub use notification::{Notification, NotificationKind};
pub use upload::{UploadPatch, UploadStatus, UploadedFile};
pub use user::{User, UserRole};
