//! Small display formatters shared by the document views.

use chrono::{DateTime, Utc};

/// Characters of extracted text shown in list previews.
const PREVIEW_LEN: usize = 150;

/// Date shown in document lists.
pub fn format_date(timestamp: &DateTime<Utc>) -> String {
    timestamp.format("%Y-%m-%d").to_string()
}

/// Title-case a hyphenated type slug ("minutes-of-meeting" → "Minutes Of
/// Meeting"); missing or empty values render as "N/A".
pub fn format_type(value: Option<&str>) -> String {
    match value {
        None | Some("") => "N/A".to_string(),
        Some(v) => v
            .split('-')
            .map(capitalize)
            .collect::<Vec<_>>()
            .join(" "),
    }
}

/// Clip extracted text for list previews.
pub fn text_preview(text: Option<&str>) -> String {
    match text {
        None | Some("") => "No text extracted".to_string(),
        Some(t) => {
            if t.chars().count() > PREVIEW_LEN {
                let clipped: String = t.chars().take(PREVIEW_LEN).collect();
                format!("{clipped}...")
            } else {
                t.to_string()
            }
        }
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
