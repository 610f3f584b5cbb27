//! Local content store
//!
//! Resolves attachment references for the [`ContentStore`] port:
//!
//! - `data:<mime>;base64,<payload>` URIs are decoded in memory
//! - anything else is a local path (`~/` expanded), with the MIME type
//!   taken from the file extension

use async_trait::async_trait;
use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use legalai_application::{ContentStore, ContentStoreError};
use legalai_domain::{MediaContent, MediaReference};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Map a file extension to the MIME type sent to the model.
pub fn mime_for_extension(ext: &str) -> Option<&'static str> {
    let mime = match ext.to_ascii_lowercase().as_str() {
        "pdf" => "application/pdf",
        "txt" => "text/plain",
        "md" => "text/markdown",
        "docx" => "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
        "mp3" => "audio/mpeg",
        "wav" => "audio/wav",
        "m4a" => "audio/mp4",
        "ogg" => "audio/ogg",
        "webm" => "audio/webm",
        "flac" => "audio/flac",
        _ => return None,
    };
    Some(mime)
}

/// Content store over data URIs and the local filesystem
pub struct LocalContentStore {
    max_bytes: u64,
}

impl LocalContentStore {
    pub fn new(max_bytes: u64) -> Self {
        Self { max_bytes }
    }

    fn check_size(&self, size: u64) -> Result<(), ContentStoreError> {
        if size > self.max_bytes {
            return Err(ContentStoreError::TooLarge {
                size,
                limit: self.max_bytes,
            });
        }
        Ok(())
    }

    fn decode_data_uri(&self, uri: &str) -> Result<MediaContent, ContentStoreError> {
        let invalid = || ContentStoreError::InvalidReference("malformed data URI".to_string());

        let rest = uri.strip_prefix("data:").ok_or_else(invalid)?;
        let (header, payload) = rest.split_once(',').ok_or_else(invalid)?;
        let mut params = header.split(';');
        let mime = params.next().filter(|m| !m.is_empty()).ok_or_else(invalid)?;
        if !params.any(|p| p == "base64") {
            return Err(ContentStoreError::InvalidReference(
                "data URI must be base64 encoded".to_string(),
            ));
        }

        // Reject before decoding; base64 inflates by 4/3
        self.check_size(payload.len() as u64 / 4 * 3)?;
        let bytes = BASE64
            .decode(payload.trim())
            .map_err(|e| ContentStoreError::InvalidReference(format!("bad base64: {}", e)))?;
        self.check_size(bytes.len() as u64)?;

        Ok(MediaContent::new(mime, bytes))
    }

    async fn read_file(&self, path: &Path) -> Result<MediaContent, ContentStoreError> {
        let ext = path.extension().and_then(|e| e.to_str()).unwrap_or_default();
        let mime = mime_for_extension(ext)
            .ok_or_else(|| ContentStoreError::UnsupportedType(path.display().to_string()))?;

        let metadata = tokio::fs::metadata(path).await.map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => ContentStoreError::NotFound(path.display().to_string()),
            _ => ContentStoreError::Io(e.to_string()),
        })?;
        if !metadata.is_file() {
            return Err(ContentStoreError::InvalidReference(format!(
                "{} is not a file",
                path.display()
            )));
        }
        self.check_size(metadata.len())?;

        let bytes = tokio::fs::read(path)
            .await
            .map_err(|e| ContentStoreError::Io(e.to_string()))?;
        Ok(MediaContent::new(mime, bytes))
    }
}

fn expand_home(path: &str) -> PathBuf {
    if let Some(rest) = path.strip_prefix("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(rest);
    }
    PathBuf::from(path)
}

#[async_trait]
impl ContentStore for LocalContentStore {
    async fn resolve(&self, reference: &MediaReference) -> Result<MediaContent, ContentStoreError> {
        let content = if reference.is_data_uri() {
            self.decode_data_uri(reference.as_str())?
        } else {
            let raw = reference.as_str().trim();
            if raw.is_empty() {
                return Err(ContentStoreError::InvalidReference(
                    "empty attachment reference".to_string(),
                ));
            }
            self.read_file(&expand_home(raw)).await?
        };
        debug!(
            "Resolved {} as {} ({} bytes)",
            reference.describe(),
            content.mime_type,
            content.len()
        );
        Ok(content)
    }
}
