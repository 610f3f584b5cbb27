//! Attachments (documents and audio) referenced by chat requests.
//!
//! A [`MediaReference`] is opaque to the dispatcher: it may be a
//! self-describing `data:` URI or a local path. The content store port turns
//! it into [`MediaContent`] the model service can consume inline.

use serde::{Deserialize, Serialize};

/// Opaque reference to a document or audio attachment (Value Object)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MediaReference(String);

impl MediaReference {
    pub fn new(reference: impl Into<String>) -> Self {
        Self(reference.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether this reference is an inline `data:` URI.
    pub fn is_data_uri(&self) -> bool {
        self.0.starts_with("data:")
    }

    /// The MIME type declared by a `data:` URI, if any.
    pub fn declared_mime_type(&self) -> Option<&str> {
        let rest = self.0.strip_prefix("data:")?;
        let header = rest.split(',').next()?;
        let mime = header.split(';').next()?;
        if mime.is_empty() { None } else { Some(mime) }
    }

    /// Short description for logs; data URIs are not echoed in full.
    pub fn describe(&self) -> String {
        if self.is_data_uri() {
            format!(
                "data URI ({}, {} chars)",
                self.declared_mime_type().unwrap_or("unknown"),
                self.0.len()
            )
        } else {
            self.0.clone()
        }
    }
}

impl From<&str> for MediaReference {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for MediaReference {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

/// Resolved attachment bytes with their media type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaContent {
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

impl MediaContent {
    pub fn new(mime_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            mime_type: mime_type.into(),
            bytes,
        }
    }

    pub fn is_audio(&self) -> bool {
        self.mime_type.starts_with("audio/")
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}
