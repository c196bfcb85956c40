// src/store.rs

use crate::models::EmotionEntry;
use chrono::Utc;

/// In-memory store of logged emotions, newest first.
///
/// Every operation is total: there is no I/O and no failure path. Contents
/// live only as long as the owning session; there is deliberately no size cap
/// or eviction. The store is plain single-threaded state, owned and mutated
/// by one caller; it makes no synchronization guarantees.
#[derive(Debug, Default)]
pub struct EmotionLog {
    entries: Vec<EmotionEntry>,
}

impl EmotionLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Logs `label` at the current wall-clock time.
    pub fn append(&mut self, label: &str) {
        self.record(label, Utc::now().timestamp_millis());
    }

    /// Logs `label` with an explicit timestamp. Newest entries sit at the
    /// front, so each record shifts the rest back by one.
    pub fn record(&mut self, label: &str, created_at_millis: i64) {
        self.entries.insert(0, EmotionEntry::new(label, created_at_millis));
    }

    /// Snapshot of all entries, newest first. The copy is detached: mutating
    /// it never touches the store.
    pub fn entries(&self) -> Vec<EmotionEntry> {
        self.entries.clone()
    }

    pub fn count(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Frequency report over all labels currently logged, or the empty
    /// string when nothing has been logged yet (the caller shows its own
    /// placeholder in that case).
    ///
    /// Labels are ranked by descending count; ties are broken by the order
    /// the labels were first logged.
    pub fn summary(&self) -> String {
        if self.entries.is_empty() {
            return String::new();
        }

        // Walk oldest-first so the count list comes out in first-logged
        // order, which the stable sort below preserves within equal counts.
        let mut counts: Vec<(&str, usize)> = Vec::new();
        for entry in self.entries.iter().rev() {
            match counts.iter_mut().find(|(label, _)| *label == entry.label()) {
                Some((_, n)) => *n += 1,
                None => counts.push((entry.label(), 1)),
            }
        }
        counts.sort_by(|a, b| b.1.cmp(&a.1));

        let mut summary = String::new();
        summary.push_str("📊 Emotion Log Summary\n");
        summary.push_str("━━━━━━━━━━━━━━━━━━━━\n\n");
        summary.push_str(&format!("Total Logs: {}\n\n", self.entries.len()));
        for (label, count) in counts {
            summary.push_str(&format!("{}: {} times\n", label, count));
        }
        summary
    }

    /// Drops every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Entries whose calendar date (local timezone, "MMM dd, yyyy") equals
    /// `date_key`, newest first. Linear scan; the collection is assumed
    /// small enough that no index is worth keeping.
    pub fn entries_on(&self, date_key: &str) -> Vec<EmotionEntry> {
        self.entries
            .iter()
            .filter(|entry| entry.formatted_date() == date_key)
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DAY_MILLIS: i64 = 24 * 60 * 60 * 1000;

    #[test]
    fn append_keeps_newest_first_order() {
        let mut log = EmotionLog::new();
        log.append("😊 Happy");
        log.append("😢 Sad");
        log.append("😠 Angry");

        let entries = log.entries();
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0].label(), "😠 Angry");
        assert_eq!(entries[1].label(), "😢 Sad");
        assert_eq!(entries[2].label(), "😊 Happy");
    }

    #[test]
    fn count_matches_snapshot_length() {
        let mut log = EmotionLog::new();
        assert_eq!(log.count(), 0);
        for label in ["🙏 Grateful", "🎉 Excited", "🎉 Excited", ""] {
            log.append(label);
        }
        assert_eq!(log.count(), log.entries().len());
        assert_eq!(log.count(), 4);
    }

    #[test]
    fn clear_empties_the_store() {
        let mut log = EmotionLog::new();
        log.append("😊 Happy");
        log.append("😢 Sad");
        log.clear();
        assert_eq!(log.count(), 0);
        assert!(log.entries().is_empty());
        assert_eq!(log.summary(), "");
    }

    #[test]
    fn summary_is_empty_for_an_empty_store() {
        assert_eq!(EmotionLog::new().summary(), "");
    }

    #[test]
    fn summary_ranks_labels_by_descending_count() {
        let mut log = EmotionLog::new();
        log.append("😊 Happy");
        log.append("😊 Happy");
        log.append("😢 Sad");

        let summary = log.summary();
        assert!(summary.contains("Total Logs: 3"));
        let happy = summary.find("😊 Happy: 2 times").unwrap();
        let sad = summary.find("😢 Sad: 1 times").unwrap();
        assert!(happy < sad);
    }

    #[test]
    fn summary_breaks_count_ties_by_first_logged_order() {
        let mut log = EmotionLog::new();
        log.append("😴 Tired");
        log.append("😠 Angry");
        log.append("😴 Tired");
        log.append("😠 Angry");

        let summary = log.summary();
        let tired = summary.find("😴 Tired: 2 times").unwrap();
        let angry = summary.find("😠 Angry: 2 times").unwrap();
        assert!(tired < angry);
    }

    #[test]
    fn empty_label_is_logged_and_counted() {
        let mut log = EmotionLog::new();
        log.append("");
        log.append("");
        let summary = log.summary();
        assert!(summary.contains("Total Logs: 2"));
        assert!(summary.contains(": 2 times"));
    }

    #[test]
    fn snapshots_are_detached_from_the_store() {
        let mut log = EmotionLog::new();
        log.append("😊 Happy");

        let first = log.entries();
        let mut second = log.entries();
        assert_eq!(first, second);

        second.clear();
        assert_eq!(log.count(), 1);
        assert_eq!(log.entries(), first);
    }

    #[test]
    fn entries_on_filters_by_calendar_date_keeping_order() {
        let mut log = EmotionLog::new();
        let noon = 1_736_935_200_000; // some fixed instant
        log.record("😊 Happy", noon);
        log.record("😢 Sad", noon + DAY_MILLIS);
        log.record("🎉 Excited", noon + DAY_MILLIS + 1000);

        let key = log.entries()[0].formatted_date();
        let same_day = log.entries_on(&key);
        assert_eq!(same_day.len(), 2);
        assert_eq!(same_day[0].label(), "🎉 Excited");
        assert_eq!(same_day[1].label(), "😢 Sad");

        assert!(log.entries_on("Jan 01, 1970").is_empty());
    }
}
