use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::Speaker;

/// One line of the conversation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranscriptEntry {
    pub speaker: Speaker,
    pub text: String,
    pub timestamp: DateTime<Utc>,
}

impl TranscriptEntry {
    pub fn new(speaker: Speaker, text: impl Into<String>) -> Self {
        Self {
            speaker,
            text: text.into(),
            timestamp: Utc::now(),
        }
    }
}

/// Append-only display log of a session.
///
/// Yells, ellipses and lock notices never land here; callers filter them out before
/// appending.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transcript {
    entries: Vec<TranscriptEntry>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, speaker: Speaker, text: impl Into<String>) {
        self.entries.push(TranscriptEntry::new(speaker, text));
    }

    pub fn entries(&self) -> &[TranscriptEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn last(&self) -> Option<&TranscriptEntry> {
        self.entries.last()
    }
}
