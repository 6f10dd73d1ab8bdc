//! Storage download shared by the repository and classification stores.

use docuhub_client::{BackendResult, SessionClient};
use docuhub_core::Document;

/// File bytes retrieved from storage, ready for the platform shell to
/// save-as under `file_name`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadedFile {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

pub(crate) async fn fetch_file(
    client: &dyn SessionClient,
    document: &Document,
) -> BackendResult<DownloadedFile> {
    let bytes = client.download(&document.path).await?;
    Ok(DownloadedFile {
        file_name: document.file_name.clone(),
        bytes,
    })
}
