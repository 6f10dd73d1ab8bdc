//! Transient upload pipeline entries (client-only, never persisted).

use serde::{Deserialize, Serialize};

use crate::UploadId;

/// Stage of a file moving through the upload pipeline.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UploadStatus {
    Uploading,
    OcrProcessing,
    Classifying,
    Completed,
    Error,
}

impl UploadStatus {
    /// Terminal stages are dropped by the queue's cleanup pass.
    pub fn is_terminal(self) -> bool {
        matches!(self, UploadStatus::Completed | UploadStatus::Error)
    }
}

/// A file mid-upload. Exists only for the duration of an upload session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadedFile {
    pub id: UploadId,
    pub name: String,
    pub size: u64,
    pub content_type: String,
    pub status: UploadStatus,
    pub error: Option<String>,
}

/// Partial update applied to a queued upload entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UploadPatch {
    pub status: Option<UploadStatus>,
    pub error: Option<String>,
}

impl UploadedFile {
    /// Merge a partial update; unset fields keep their current value.
    pub fn apply(&mut self, patch: UploadPatch) {
        if let Some(status) = patch.status {
            self.status = status;
        }
        if let Some(error) = patch.error {
            self.error = Some(error);
        }
    }
}
