//! Upload store: purely local progress tracking for in-flight uploads.

use docuhub_core::{UploadId, UploadPatch, UploadedFile};

/// Tracks files moving through the upload pipeline. The pipeline itself runs
/// elsewhere and reports progress through [`UploadStore::update_file`].
#[derive(Debug, Default)]
pub struct UploadStore {
    files: Vec<UploadedFile>,
}

impl UploadStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn files(&self) -> &[UploadedFile] {
        &self.files
    }

    pub fn add_file(&mut self, file: UploadedFile) {
        self.files.push(file);
    }

    /// Merge a status/error patch into the matching entry; unknown ids are
    /// ignored.
    pub fn update_file(&mut self, id: UploadId, patch: UploadPatch) {
        if let Some(file) = self.files.iter_mut().find(|f| f.id == id) {
            file.apply(patch);
        }
    }

    /// Drop entries that finished (completed or errored), keeping the ones
    /// still moving through the pipeline.
    pub fn clear_completed(&mut self) {
        self.files.retain(|f| !f.status.is_terminal());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use docuhub_core::UploadStatus;

    fn file(name: &str, status: UploadStatus) -> UploadedFile {
        UploadedFile {
            id: UploadId::new(),
            name: name.to_string(),
            size: 1024,
            content_type: "application/pdf".to_string(),
            status,
            error: None,
        }
    }

    #[test]
    fn update_file_merges_patch_into_matching_entry() {
        let mut store = UploadStore::new();
        let entry = file("thesis.pdf", UploadStatus::Uploading);
        let id = entry.id;
        store.add_file(entry);
        store.add_file(file("memo.pdf", UploadStatus::Uploading));

        store.update_file(
            id,
            UploadPatch {
                status: Some(UploadStatus::OcrProcessing),
                error: None,
            },
        );

        assert_eq!(store.files()[0].status, UploadStatus::OcrProcessing);
        assert_eq!(store.files()[1].status, UploadStatus::Uploading);
    }

    #[test]
    fn update_file_ignores_unknown_id() {
        let mut store = UploadStore::new();
        store.add_file(file("thesis.pdf", UploadStatus::Uploading));

        store.update_file(
            UploadId::new(),
            UploadPatch {
                status: Some(UploadStatus::Error),
                error: Some("boom".to_string()),
            },
        );

        assert_eq!(store.files()[0].status, UploadStatus::Uploading);
        assert!(store.files()[0].error.is_none());
    }

    #[test]
    fn clear_completed_keeps_in_flight_entries() {
        let mut store = UploadStore::new();
        store.add_file(file("a.pdf", UploadStatus::Completed));
        store.add_file(file("b.pdf", UploadStatus::Classifying));
        store.add_file(file("c.pdf", UploadStatus::Error));
        store.add_file(file("d.pdf", UploadStatus::OcrProcessing));

        store.clear_completed();

        let names: Vec<&str> = store.files().iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, ["b.pdf", "d.pdf"]);
    }
}
