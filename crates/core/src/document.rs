//! Document records and the classification taxonomy.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{DocumentId, UserId};

/// Review state of a stored document.
///
/// Transitions are one-directional human triggers: `Pending → Approved` or
/// `Pending → Rejected`. There is no automatic reversal.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentStatus {
    Pending,
    Approved,
    Rejected,
}

impl DocumentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentStatus::Pending => "pending",
            DocumentStatus::Approved => "approved",
            DocumentStatus::Rejected => "rejected",
        }
    }
}

impl core::fmt::Display for DocumentStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A document row as stored by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub id: DocumentId,
    pub created_at: DateTime<Utc>,
    /// Owning uploader.
    pub user_id: UserId,
    pub file_name: String,
    /// Informally constrained to [`CATEGORIES`].
    pub primary_category: Option<String>,
    pub secondary_category: Option<String>,
    pub tags: Vec<String>,
    /// Storage locator for the underlying file.
    pub path: String,
    /// OCR output, when extraction has run.
    pub extracted_text: Option<String>,
    pub status: DocumentStatus,
}

/// Display record: a document joined with its uploader's name at fetch time.
///
/// `uploaded_by` is derived, never persisted on the document entity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentWithUploader {
    pub document: Document,
    pub uploaded_by: String,
}

/// Fixed classification taxonomy. Not user-extensible within this core.
pub const CATEGORIES: &[&str] = &[
    "VMGO",
    "PEO",
    "PO",
    "Faculty",
    "Curriculum",
    "Instruction",
    "Students",
    "Research",
    "Extension",
    "Library",
    "Facilities",
    "Laboratories",
    "Administration",
    "Institutional Support",
    "Strategic Planning",
    "Special Orders",
    "DPCR",
    "IPCR",
    "Budget",
    "Activity Report",
    "Memorandum",
    "Minutes of Meeting",
    "Transmittal Letter",
    "Documentation",
    "Best Practice",
    "Audit",
    "Client Satisfactory",
    "Quality Objectives",
    "Risk Registers",
    "Trainings",
    "PES",
    "Faculty Advising",
    "Faculty Consultation",
    "Class Interventions",
    "Student Internship",
    "Approved Leave",
    "Daily Time Records (DTR)",
    "Faculty Fellowship Contracts",
    "Notarized Contracts",
    "Terms of Reference (TOR)",
    "Institutional Records",
    "Quality Assurance",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&DocumentStatus::Approved).unwrap(),
            "\"approved\""
        );
        let parsed: DocumentStatus = serde_json::from_str("\"pending\"").unwrap();
        assert_eq!(parsed, DocumentStatus::Pending);
    }

    #[test]
    fn taxonomy_has_no_duplicates() {
        let mut seen = std::collections::HashSet::new();
        for c in CATEGORIES {
            assert!(seen.insert(c.to_lowercase()), "duplicate category {c}");
        }
    }
}
