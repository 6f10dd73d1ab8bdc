//! Classification store: pending documents awaiting human validation.

use std::sync::Arc;

use docuhub_client::SessionClient;
use docuhub_core::{DocumentId, DocumentStatus, DocumentWithUploader, Notice};

use crate::download::{self, DownloadedFile};
use crate::records;

/// Aggregate counts shown on the classification dashboard.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct ClassificationStats {
    pub pending: usize,
    pub validated: u64,
    pub rejected: u64,
}

/// Owns the pending-document queue plus the validated/rejected tallies.
pub struct ClassificationStore {
    client: Arc<dyn SessionClient>,
    pending_docs: Vec<DocumentWithUploader>,
    loading: bool,
    initialized: bool,
    validated_count: u64,
    rejected_count: u64,

    notice: Option<Notice>,
    pub view_open: bool,
    pub viewing: Option<DocumentWithUploader>,
}

impl ClassificationStore {
    pub fn new(client: Arc<dyn SessionClient>) -> Self {
        Self {
            client,
            pending_docs: Vec::new(),
            loading: false,
            initialized: false,
            validated_count: 0,
            rejected_count: 0,
            notice: None,
            view_open: false,
            viewing: None,
        }
    }

    pub fn pending_docs(&self) -> &[DocumentWithUploader] {
        &self.pending_docs
    }

    pub fn loading(&self) -> bool {
        self.loading
    }

    pub fn initialized(&self) -> bool {
        self.initialized
    }

    pub fn stats(&self) -> ClassificationStats {
        ClassificationStats {
            pending: self.pending_docs.len(),
            validated: self.validated_count,
            rejected: self.rejected_count,
        }
    }

    /// Load the pending queue and the aggregate counts.
    pub async fn initialize(&mut self) {
        self.fetch_pending_documents().await;
        self.fetch_stats().await;
    }

    /// Load pending documents joined with uploader names, newest-first.
    /// A failure leaves the previously loaded queue untouched.
    pub async fn fetch_pending_documents(&mut self) {
        self.loading = true;
        match self.client.list_documents(DocumentStatus::Pending).await {
            Ok(rows) => {
                self.pending_docs = rows.into_iter().map(records::to_display).collect();
                self.initialized = true;
            }
            Err(err) => {
                tracing::error!("error fetching pending documents: {err}");
                self.show_notice(Notice::error("Failed to load documents"));
            }
        }
        self.loading = false;
    }

    /// Refresh the validated/rejected tallies with count-only queries.
    /// Errors are logged and leave the current tallies in place.
    pub async fn fetch_stats(&mut self) {
        match self.client.count_documents(DocumentStatus::Approved).await {
            Ok(count) => self.validated_count = count,
            Err(err) => {
                tracing::error!("error fetching stats: {err}");
                return;
            }
        }
        match self.client.count_documents(DocumentStatus::Rejected).await {
            Ok(count) => self.rejected_count = count,
            Err(err) => tracing::error!("error fetching stats: {err}"),
        }
    }

    /// Approve or reject a pending document. Only after the remote update
    /// succeeds is the document dropped from the queue and the matching
    /// tally bumped.
    pub async fn handle_validate(&mut self, doc_id: DocumentId, approved: bool) {
        let status = if approved {
            DocumentStatus::Approved
        } else {
            DocumentStatus::Rejected
        };

        match self.client.set_document_status(doc_id, status).await {
            Ok(()) => {
                self.pending_docs.retain(|d| d.document.id != doc_id);
                if approved {
                    self.validated_count += 1;
                } else {
                    self.rejected_count += 1;
                }
                let verb = if approved { "approved" } else { "rejected" };
                self.show_notice(Notice::success(format!("Document {verb} successfully")));
            }
            Err(err) => {
                tracing::error!("error validating document: {err}");
                self.show_notice(Notice::error("Failed to update document status"));
            }
        }
    }

    /// Reassign a pending document's primary category; the in-memory record
    /// is patched in place after the remote update succeeds.
    pub async fn handle_reclassify(&mut self, doc_id: DocumentId, new_category: &str) {
        match self.client.set_primary_category(doc_id, new_category).await {
            Ok(()) => {
                if let Some(doc) = self
                    .pending_docs
                    .iter_mut()
                    .find(|d| d.document.id == doc_id)
                {
                    doc.document.primary_category = Some(new_category.to_string());
                }
                self.show_notice(Notice::success("Category updated successfully"));
            }
            Err(err) => {
                tracing::error!("error reclassifying: {err}");
                self.show_notice(Notice::error("Failed to update category"));
            }
        }
    }

    /// Fetch the file bytes from storage for a save-as download.
    pub async fn download_document(
        &mut self,
        doc: &DocumentWithUploader,
    ) -> Option<DownloadedFile> {
        match download::fetch_file(self.client.as_ref(), &doc.document).await {
            Ok(file) => {
                self.show_notice(Notice::success("File downloaded successfully"));
                Some(file)
            }
            Err(err) => {
                tracing::error!("error downloading file: {err}");
                self.show_notice(Notice::error("Failed to download file"));
                None
            }
        }
    }

    /// Pure local UI state; no network call.
    pub fn open_viewer(&mut self, doc: DocumentWithUploader) {
        self.viewing = Some(doc);
        self.view_open = true;
    }

    pub fn show_notice(&mut self, notice: Notice) {
        self.notice = Some(notice);
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn take_notice(&mut self) -> Option<Notice> {
        self.notice.take()
    }
}
