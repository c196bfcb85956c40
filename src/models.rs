// src/models.rs

use chrono::{DateTime, Local, Utc};

/// A single logged emotion: an opaque display label plus the moment it was
/// recorded. Immutable after construction; the formatted views are derived
/// on demand from the stored timestamp, never cached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmotionEntry {
    label: String,
    created_at_millis: i64,
}

impl EmotionEntry {
    pub fn new(label: impl Into<String>, created_at_millis: i64) -> Self {
        Self {
            label: label.into(),
            created_at_millis,
        }
    }

    /// The emotion label, e.g. "😊 Happy". Any string is valid, including "".
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Milliseconds since the Unix epoch, fixed at creation.
    pub fn created_at_millis(&self) -> i64 {
        self.created_at_millis
    }

    fn local_datetime(&self) -> DateTime<Local> {
        DateTime::<Utc>::from_timestamp_millis(self.created_at_millis)
            .unwrap_or_default()
            .with_timezone(&Local)
    }

    /// Full display timestamp, e.g. "Jan 15, 2025 14:30:45".
    pub fn formatted_timestamp(&self) -> String {
        self.local_datetime().format("%b %d, %Y %H:%M:%S").to_string()
    }

    /// Calendar date only, e.g. "Jan 15, 2025". This is the key used when
    /// filtering entries by day.
    pub fn formatted_date(&self) -> String {
        self.local_datetime().format("%b %d, %Y").to_string()
    }

    /// Time of day only, e.g. "14:30:45".
    pub fn formatted_time(&self) -> String {
        self.local_datetime().format("%H:%M:%S").to_string()
    }
}
