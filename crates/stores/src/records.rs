//! Row-to-display mapping shared by the document stores.

use docuhub_client::DocumentRecord;
use docuhub_core::DocumentWithUploader;

/// Shown when the uploader's profile join came back empty.
pub(crate) const UNKNOWN_UPLOADER: &str = "Unknown User";

/// Flatten a fetched row into the display record views consume.
pub(crate) fn to_display(record: DocumentRecord) -> DocumentWithUploader {
    let uploaded_by = match record.uploader {
        Some(name) => format!("{} {}", name.first_name, name.last_name),
        None => UNKNOWN_UPLOADER.to_string(),
    };
    DocumentWithUploader {
        document: record.document,
        uploaded_by,
    }
}
