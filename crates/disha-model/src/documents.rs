//! Project document register

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A named group of project documents (`Floor Plans`, `Elevations`, ...)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentCategory {
    /// Category name
    pub name: String,
    /// Files in this category, newest first
    pub files: Vec<DocumentFile>,
}

impl DocumentCategory {
    /// Files currently marked as the live revision
    #[inline]
    #[must_use]
    pub fn current(&self) -> impl Iterator<Item = &DocumentFile> {
        self.files.iter().filter(|f| f.status == DocumentStatus::Current)
    }
}

/// One registered document revision
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentFile {
    /// Display name (`Ground Floor Plan - v3.0`)
    pub name: String,
    /// Human size label (`2.4 MB`)
    pub size: String,
    /// Revision date
    pub date: NaiveDate,
    /// Revision status
    pub status: DocumentStatus,
    /// File kind (`PDF`, `DWG`, `XLSX`, `JPG`)
    pub kind: String,
}

/// Revision status of a document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DocumentStatus {
    /// Live revision
    Current,
    /// Superseded revision kept for history
    Archive,
    /// Countersigned contract document
    Signed,
}
