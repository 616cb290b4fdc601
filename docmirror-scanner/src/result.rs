use chrono::{DateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WrittenDocument {
    pub identifier: String,
    pub url: String,
    /// Relative to the output root.
    pub path: PathBuf,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DuplicateDocument {
    pub identifier: String,
    pub url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SkippedResponse {
    pub url: String,
    pub status_code: u16,
}

/// Everything one traversal run did, in the order it happened.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MirrorSummary {
    pub start_url: String,
    pub fetched: Vec<String>,
    pub written: Vec<WrittenDocument>,
    pub duplicates: Vec<DuplicateDocument>,
    pub non_success: Vec<SkippedResponse>,
    /// URLs rejected by the domain filter.
    pub filtered: usize,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
}

impl MirrorSummary {
    pub fn new(start_url: String) -> Self {
        let now = Utc::now();
        Self {
            start_url,
            fetched: Vec::new(),
            written: Vec::new(),
            duplicates: Vec::new(),
            non_success: Vec::new(),
            filtered: 0,
            started_at: now,
            finished_at: now,
        }
    }

    pub fn finish(&mut self) {
        self.finished_at = Utc::now();
    }

    pub fn duration(&self) -> TimeDelta {
        self.finished_at - self.started_at
    }
}
