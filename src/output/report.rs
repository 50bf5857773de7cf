use crate::extractor::ExtractionStats;
use crate::input::{AcquiredText, SourceKind};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceInfo {
    pub kind: SourceKind,
    pub file_name: Option<String>,
    pub bytes_read: u64,
    pub mime_type: Option<String>,
}

impl From<&AcquiredText> for SourceInfo {
    fn from(acquired: &AcquiredText) -> Self {
        Self {
            kind: acquired.kind,
            file_name: acquired.file_name.clone(),
            bytes_read: acquired.bytes_read,
            mime_type: acquired.mime_type.map(str::to_string),
        }
    }
}

/// Everything one run produced, carried as a value from the pipeline to
/// the printer. JSON output mode serializes exactly this struct.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessingReport {
    pub source: SourceInfo,
    pub stats: ExtractionStats,
    pub result: String,
    pub saved_to: Option<PathBuf>,
    pub copied_to_clipboard: bool,
    pub processed_at: DateTime<Utc>,
    pub duration: Duration,
    pub warnings: Vec<String>,
}

impl ProcessingReport {
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}
