//! Assumption Tracking
//!
//! Collects human-readable assumption notes while a calculation runs. Notes
//! are de-duplicated by exact text and kept in first-seen order, which is the
//! order the report lists them.

use std::collections::HashSet;

/// Order-preserving unique collection of assumption notes
#[derive(Debug, Clone, Default)]
pub struct AssumptionTracker {
    notes: Vec<String>,
    seen: HashSet<String>,
}

impl AssumptionTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a note. Returns `false` if the same text was already recorded.
    pub fn record(&mut self, note: impl Into<String>) -> bool {
        let note = note.into();
        if !self.seen.insert(note.clone()) {
            return false;
        }
        self.notes.push(note);
        true
    }

    /// Record a note if present
    pub fn record_opt(&mut self, note: Option<&str>) {
        if let Some(note) = note {
            self.record(note);
        }
    }

    /// Notes in first-seen order
    pub fn notes(&self) -> &[String] {
        &self.notes
    }

    /// Consume the tracker, yielding notes in first-seen order
    pub fn into_notes(self) -> Vec<String> {
        self.notes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicates_dropped() {
        let mut tracker = AssumptionTracker::new();
        assert!(tracker.record("a"));
        assert!(tracker.record("b"));
        assert!(!tracker.record("a"));
        assert_eq!(tracker.notes(), ["a", "b"]);
    }

    #[test]
    fn test_first_seen_order() {
        let mut tracker = AssumptionTracker::new();
        for note in ["z", "m", "a", "m", "z"] {
            tracker.record(note);
        }
        assert_eq!(tracker.into_notes(), vec!["z", "m", "a"]);
    }

    #[test]
    fn test_record_opt() {
        let mut tracker = AssumptionTracker::new();
        tracker.record_opt(Some("x"));
        tracker.record_opt(None);
        tracker.record_opt(Some("x"));
        assert_eq!(tracker.notes(), ["x"]);
    }
}
