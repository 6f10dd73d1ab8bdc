//! `docuhub-stores` — reactive state containers for the document-management UI.
//!
//! Each store exclusively owns one in-memory collection and is the only
//! mutator of it. Stores are explicit context objects built over an
//! `Arc<dyn SessionClient>`; views call the async actions, read the exposed
//! state, and recompute the derived views on render.
//!
//! Ordering guarantees are deliberately weak: concurrent invocations of the
//! same fetch race and the last one to resolve wins, and optimistic local
//! mutations are not reconciled against remote failures.

pub mod classification;
pub mod display;
pub mod download;
pub mod notification;
mod records;
pub mod repository;
pub mod upload;
pub mod user;

pub use classification::{ClassificationStats, ClassificationStore};
pub use download::DownloadedFile;
pub use notification::NotificationStore;
pub use repository::{CategoryEntry, RepositoryStore, SearchMode, SortOrder};
pub use upload::UploadStore;
pub use user::UserStore;
