//! The image selected for upload.

use std::fmt::{Debug, Formatter};
use std::path::Path;
use std::sync::Arc;

/// An opaque image payload pending upload. Cloning shares the bytes.
#[derive(Clone, PartialEq, Eq)]
pub struct SelectedImage {
    file_name: String,
    bytes: Arc<[u8]>,
}

impl SelectedImage {
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            bytes: bytes.into(),
        }
    }

    /// Reads an image from disk. No type or size validation is done.
    pub async fn from_path(path: &Path) -> Result<Self, std::io::Error> {
        let bytes = tokio::fs::read(path).await?;
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| "image".to_string());
        Ok(Self::new(file_name, bytes))
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    #[allow(unused)]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Content type sent with the multipart part, guessed from the extension.
    pub fn mime_type(&self) -> &'static str {
        let extension = Path::new(&self.file_name)
            .extension()
            .map(|ext| ext.to_string_lossy().to_lowercase());
        match extension.as_deref() {
            Some("jpg") | Some("jpeg") => "image/jpeg",
            Some("png") => "image/png",
            Some("gif") => "image/gif",
            Some("webp") => "image/webp",
            Some("bmp") => "image/bmp",
            _ => "application/octet-stream",
        }
    }

    /// Human-readable size, e.g. "12.3 KB".
    pub fn format_size(&self) -> String {
        let len = self.len() as f64;
        if len >= 1024.0 * 1024.0 {
            format!("{:.1} MB", len / (1024.0 * 1024.0))
        } else if len >= 1024.0 {
            format!("{:.1} KB", len / 1024.0)
        } else {
            format!("{} B", self.len())
        }
    }
}

impl Debug for SelectedImage {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SelectedImage")
            .field("file_name", &self.file_name)
            .field("len", &self.len())
            .finish()
    }
}
