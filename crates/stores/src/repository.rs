//! Repository store: the approved-document collection and its derived views.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use docuhub_client::SessionClient;
use docuhub_core::{Document, DocumentStatus, DocumentWithUploader, Notice};

use crate::download::{self, DownloadedFile};
use crate::records;

/// Which fields the text filter inspects.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchMode {
    /// Filename substring only.
    Filename,
    /// Substring across tags, categories, extracted text, and filename.
    /// Despite the name this is a plain case-insensitive match, not an
    /// embedding search.
    #[default]
    Semantic,
}

/// Stable sort applied after filtering.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// Most-recent-first by creation timestamp.
    #[default]
    Recent,
    /// Filename, lexicographic.
    Title,
    /// Primary category, lexicographic, missing treated as empty.
    Category,
}

/// One entry of the category facet, with its occurrence count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryEntry {
    /// Lower-cased key used for matching ("all" for the synthetic entry).
    pub value: String,
    /// Original-cased label for display.
    pub label: String,
    pub count: usize,
}

/// Owns the set of approved documents plus the client-side filter state.
pub struct RepositoryStore {
    client: Arc<dyn SessionClient>,
    docs: Vec<DocumentWithUploader>,
    loading: bool,
    initialized: bool,

    pub search_query: String,
    /// Lower-cased category key, or "all".
    pub selected_category: String,
    pub search_mode: SearchMode,
    pub sort_by: SortOrder,

    notice: Option<Notice>,
    pub view_open: bool,
    pub viewing: Option<DocumentWithUploader>,
}

impl RepositoryStore {
    pub fn new(client: Arc<dyn SessionClient>) -> Self {
        Self {
            client,
            docs: Vec::new(),
            loading: false,
            initialized: false,
            search_query: String::new(),
            selected_category: "all".to_string(),
            search_mode: SearchMode::default(),
            sort_by: SortOrder::default(),
            notice: None,
            view_open: false,
            viewing: None,
        }
    }

    pub fn docs(&self) -> &[DocumentWithUploader] {
        &self.docs
    }

    pub fn loading(&self) -> bool {
        self.loading
    }

    pub fn initialized(&self) -> bool {
        self.initialized
    }

    /// Load the approved documents joined with their uploader names,
    /// newest-first. A failure leaves the previously loaded set untouched.
    pub async fn fetch_documents(&mut self) {
        self.loading = true;
        match self.client.list_documents(DocumentStatus::Approved).await {
            Ok(rows) => {
                self.docs = rows.into_iter().map(records::to_display).collect();
                self.initialized = true;
            }
            Err(err) => {
                tracing::error!("error fetching documents: {err}");
                self.show_notice(Notice::error("Failed to load documents"));
            }
        }
        self.loading = false;
    }

    // ── Derived views (pure, recomputed on read) ─────────────────────────

    /// The category facet: a synthetic "All Categories" entry with the
    /// total count, then one entry per distinct primary category in
    /// first-seen order.
    pub fn categories(&self) -> Vec<CategoryEntry> {
        let mut entries = vec![CategoryEntry {
            value: "all".to_string(),
            label: "All Categories".to_string(),
            count: self.docs.len(),
        }];

        let mut counts: Vec<(String, usize)> = Vec::new();
        for doc in &self.docs {
            if let Some(category) = &doc.document.primary_category {
                match counts.iter_mut().find(|(label, _)| label == category) {
                    Some((_, n)) => *n += 1,
                    None => counts.push((category.clone(), 1)),
                }
            }
        }

        entries.extend(counts.into_iter().map(|(label, count)| CategoryEntry {
            value: label.to_lowercase(),
            label,
            count,
        }));
        entries
    }

    /// Category filter, then text filter per search mode, then a stable
    /// sort — in that order.
    pub fn filtered_documents(&self) -> Vec<DocumentWithUploader> {
        let mut result: Vec<&DocumentWithUploader> = self.docs.iter().collect();

        if self.selected_category != "all" {
            result.retain(|d| {
                d.document
                    .primary_category
                    .as_deref()
                    .is_some_and(|c| c.to_lowercase() == self.selected_category)
            });
        }

        let query = self.search_query.trim().to_lowercase();
        if !query.is_empty() {
            result.retain(|d| matches_query(&d.document, self.search_mode, &query));
        }

        let mut sorted: Vec<DocumentWithUploader> = result.into_iter().cloned().collect();
        match self.sort_by {
            SortOrder::Recent => {
                sorted.sort_by(|a, b| b.document.created_at.cmp(&a.document.created_at))
            }
            SortOrder::Title => {
                sorted.sort_by(|a, b| a.document.file_name.cmp(&b.document.file_name))
            }
            SortOrder::Category => sorted.sort_by(|a, b| {
                a.document
                    .primary_category
                    .as_deref()
                    .unwrap_or("")
                    .cmp(b.document.primary_category.as_deref().unwrap_or(""))
            }),
        }
        sorted
    }

    // ── Actions ──────────────────────────────────────────────────────────

    /// Fetch the file bytes from storage for a save-as download. Reports
    /// the outcome through a notice either way.
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

    /// Consume the pending notice (the UI auto-dismiss).
    pub fn take_notice(&mut self) -> Option<Notice> {
        self.notice.take()
    }
}

fn matches_query(doc: &Document, mode: SearchMode, query: &str) -> bool {
    let file_match = doc.file_name.to_lowercase().contains(query);
    match mode {
        SearchMode::Filename => file_match,
        SearchMode::Semantic => {
            let tag_match = doc.tags.iter().any(|t| t.to_lowercase().contains(query));
            let category_match = doc
                .primary_category
                .as_deref()
                .is_some_and(|c| c.to_lowercase().contains(query))
                || doc
                    .secondary_category
                    .as_deref()
                    .is_some_and(|c| c.to_lowercase().contains(query));
            let text_match = doc
                .extracted_text
                .as_deref()
                .is_some_and(|t| t.to_lowercase().contains(query));
            tag_match || category_match || text_match || file_match
        }
    }
}
