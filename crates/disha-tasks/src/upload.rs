//! File-upload sink
//!
//! Client-side validation against a per-category extension allow-list
//! and a max-size limit, followed by a fixed simulated transfer delay.
//! Accepted files yield a locally constructed descriptor with an
//! ephemeral preview URL; rejected files never reach the uploaded list.

use crate::task::{CancelHandle, TaskError};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Simulated transfer time per file
const UPLOAD_DELAY: Duration = Duration::from_millis(1500);

/// Upload category, each with its own accepted formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UploadCategory {
    /// 3D models
    Models,
    /// 2D drawings
    Drawings,
    /// Images
    Images,
    /// Documents
    Documents,
    /// Anything the other categories accept
    General,
}

impl UploadCategory {
    /// Accepted extensions for this category, dot included
    #[must_use]
    pub fn accepted_formats(&self) -> &'static [&'static str] {
        match self {
            UploadCategory::Models => &[".obj", ".mtl", ".glb", ".gltf", ".fbx"],
            UploadCategory::Drawings => &[".pdf", ".dwg", ".dxf", ".jpg", ".jpeg", ".png"],
            UploadCategory::Images => &[".jpg", ".jpeg", ".png", ".webp"],
            UploadCategory::Documents => &[".pdf", ".doc", ".docx", ".xlsx", ".xls"],
            UploadCategory::General => &[".obj", ".glb", ".pdf", ".jpg", ".png", ".dwg", ".dxf"],
        }
    }

    /// Panel title for the category
    #[must_use]
    pub fn title(&self) -> &'static str {
        match self {
            UploadCategory::Models => "3D Models",
            UploadCategory::Drawings => "2D Drawings",
            UploadCategory::Images => "Images",
            UploadCategory::Documents => "Documents",
            UploadCategory::General => "Files",
        }
    }
}

/// A file as offered by the client, before validation
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IncomingFile {
    /// Original filename
    pub name: String,
    /// Size in bytes
    pub size: u64,
    /// MIME type as reported by the picker
    pub content_type: String,
}

impl IncomingFile {
    /// Lowercased dot-extension of the filename, if it has one
    #[must_use]
    pub fn extension(&self) -> Option<String> {
        let (_, ext) = self.name.rsplit_once('.')?;
        Some(format!(".{}", ext.to_lowercase()))
    }
}

/// Descriptor of an accepted upload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileDescriptor {
    /// Original filename
    pub name: String,
    /// Size in bytes
    pub size: u64,
    /// MIME type
    pub content_type: String,
    /// Acceptance timestamp
    pub uploaded_at: DateTime<Utc>,
    /// Ephemeral preview URL, session-local
    pub preview_url: String,
}

/// Upload rejections
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UploadError {
    /// Extension not in the category allow-list
    #[error("Invalid format. Accepted: {accepted}")]
    InvalidFormat {
        /// Comma-joined accepted formats, for display
        accepted: String,
    },

    /// File exceeds the size limit
    #[error("File too large. Max size: {max_size_mb}MB")]
    TooLarge {
        /// Limit in megabytes
        max_size_mb: u64,
    },

    /// Transfer cancelled
    #[error(transparent)]
    Cancelled(#[from] TaskError),
}

/// The upload sink
#[derive(Debug, Clone)]
pub struct Uploader {
    /// Category controlling the allow-list
    pub category: UploadCategory,
    /// Max accepted size in megabytes
    pub max_size_mb: u64,
}

impl Uploader {
    /// Sink for a category with its size cap
    #[inline]
    #[must_use]
    pub fn new(category: UploadCategory, max_size_mb: u64) -> Self {
        Self {
            category,
            max_size_mb,
        }
    }

    /// Validate without transferring
    pub fn validate(&self, file: &IncomingFile) -> Result<(), UploadError> {
        let accepted = self.category.accepted_formats();
        let ext = file.extension().unwrap_or_default();
        if !accepted.contains(&ext.as_str()) {
            return Err(UploadError::InvalidFormat {
                accepted: accepted.join(", "),
            });
        }
        if file.size > self.max_size_mb * 1024 * 1024 {
            return Err(UploadError::TooLarge {
                max_size_mb: self.max_size_mb,
            });
        }
        Ok(())
    }

    /// Validate and "transfer" one file
    ///
    /// The transfer is a fixed delay standing in for real I/O; there is
    /// no retry and no timeout beyond cancellation via `cancel`.
    pub async fn upload(
        &self,
        file: IncomingFile,
        cancel: &CancelHandle,
    ) -> Result<FileDescriptor, UploadError> {
        self.validate(&file)?;
        tracing::debug!(name = %file.name, size = file.size, "upload started");

        cancel.run(tokio::time::sleep(UPLOAD_DELAY)).await?;

        let descriptor = FileDescriptor {
            preview_url: format!("memory://uploads/{}", file.name),
            name: file.name,
            size: file.size,
            content_type: file.content_type,
            uploaded_at: Utc::now(),
        };
        tracing::info!(name = %descriptor.name, "upload complete");
        Ok(descriptor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file(name: &str, size: u64) -> IncomingFile {
        IncomingFile {
            name: name.to_string(),
            size,
            content_type: "application/octet-stream".to_string(),
        }
    }

    #[test]
    fn extension_is_lowercased() {
        assert_eq!(file("Kitchen.GLB", 1).extension().as_deref(), Some(".glb"));
        assert_eq!(file("no-extension", 1).extension(), None);
    }

    #[test]
    fn model_category_rejects_foreign_extension() {
        let sink = Uploader::new(UploadCategory::Models, 100);
        let err = sink.validate(&file("drawing.pdf", 1024)).unwrap_err();
        assert!(matches!(err, UploadError::InvalidFormat { .. }));
        assert!(err.to_string().contains(".glb"));
    }

    #[test]
    fn oversized_file_is_rejected() {
        let sink = Uploader::new(UploadCategory::Models, 100);
        let err = sink.validate(&file("kitchen.glb", 101 * 1024 * 1024)).unwrap_err();
        assert_eq!(err, UploadError::TooLarge { max_size_mb: 100 });
    }

    #[test]
    fn size_limit_is_inclusive() {
        let sink = Uploader::new(UploadCategory::Models, 100);
        assert!(sink.validate(&file("kitchen.glb", 100 * 1024 * 1024)).is_ok());
    }

    #[tokio::test(start_paused = true)]
    async fn accepted_upload_yields_descriptor() {
        let sink = Uploader::new(UploadCategory::Drawings, 50);
        let descriptor = sink
            .upload(file("floor-plan.dwg", 2 * 1024 * 1024), &CancelHandle::new())
            .await
            .unwrap();
        assert_eq!(descriptor.name, "floor-plan.dwg");
        assert_eq!(descriptor.preview_url, "memory://uploads/floor-plan.dwg");
    }

    #[tokio::test(start_paused = true)]
    async fn rejected_upload_never_transfers() {
        let sink = Uploader::new(UploadCategory::Images, 10);
        let err = sink
            .upload(file("model.fbx", 1024), &CancelHandle::new())
            .await
            .unwrap_err();
        assert!(matches!(err, UploadError::InvalidFormat { .. }));
    }

    #[tokio::test(start_paused = true)]
    async fn cancelled_upload_resolves_to_cancelled() {
        let sink = Uploader::new(UploadCategory::Models, 100);
        let cancel = CancelHandle::new();
        let canceller = cancel.clone();
        let pending = tokio::spawn(async move {
            sink.upload(file("kitchen.glb", 1024), &cancel).await
        });
        tokio::time::sleep(Duration::from_millis(100)).await;
        canceller.cancel();
        let err = pending.await.unwrap().unwrap_err();
        assert_eq!(err, UploadError::Cancelled(TaskError::Cancelled));
    }
}
