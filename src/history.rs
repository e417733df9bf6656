//! The event log and the narration seam.
//!
//! ## EventLog
//!
//! Append-only, ordered record of narrated events. Entries are never
//! removed or reordered; reads are sequential, oldest first. Backed by a
//! persistent `im::Vector` so snapshots of the session clone in O(1).
//!
//! ## EventSink
//!
//! Observer hook for the narration and audio collaborators. The engine
//! notifies sinks after an event is committed to the log, never before:
//! a sink sees only state changes that have already happened, and nothing
//! a sink does can affect game state.

use chrono::{DateTime, Utc};
use im::Vector;
use serde::{Deserialize, Serialize};

/// One narrated event.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    /// Wall-clock time of emission.
    pub timestamp: DateTime<Utc>,
    /// Broadcast text, safe to read aloud at the table.
    pub text: String,
    /// Information for the acting player only (the seer's reveal). Never
    /// part of the broadcast text.
    pub private_info: Option<String>,
}

impl Event {
    /// Create a broadcast event stamped now.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            timestamp: Utc::now(),
            text: text.into(),
            private_info: None,
        }
    }

    /// Create an event carrying private information.
    #[must_use]
    pub fn with_private(text: impl Into<String>, private_info: impl Into<String>) -> Self {
        Self {
            timestamp: Utc::now(),
            text: text.into(),
            private_info: Some(private_info.into()),
        }
    }
}

/// Append-only ordered event record.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventLog {
    events: Vector<Event>,
}

impl EventLog {
    /// Create an empty log.
    #[must_use]
    pub fn new() -> Self {
        Self {
            events: Vector::new(),
        }
    }

    /// Number of recorded events.
    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// True when nothing has been recorded yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Iterate oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &Event> {
        self.events.iter()
    }

    /// The most recent event.
    #[must_use]
    pub fn last(&self) -> Option<&Event> {
        self.events.last()
    }

    pub(crate) fn push(&mut self, event: Event) {
        self.events.push_back(event);
    }
}

/// Observer for committed events: the seam for text-to-speech narration,
/// audio cues, or a scrolling transcript widget.
///
/// Notification is fire-and-forget. Sinks are infallible by contract; a
/// sink that can fail internally (an audio device, say) must swallow its
/// own errors rather than surface them here.
pub trait EventSink {
    /// Called once per committed event, in log order.
    fn on_event(&mut self, event: &Event);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_append_and_order() {
        let mut log = EventLog::new();
        assert!(log.is_empty());

        log.push(Event::new("first"));
        log.push(Event::new("second"));
        log.push(Event::new("third"));

        assert_eq!(log.len(), 3);
        let texts: Vec<_> = log.iter().map(|e| e.text.as_str()).collect();
        assert_eq!(texts, vec!["first", "second", "third"]);
        assert_eq!(log.last().unwrap().text, "third");
    }

    #[test]
    fn test_private_info_stays_out_of_text() {
        let event = Event::with_private("the seer has looked", "Player 3 is a werewolf");
        assert_eq!(event.text, "the seer has looked");
        assert_eq!(event.private_info.as_deref(), Some("Player 3 is a werewolf"));
        assert!(!event.text.contains("werewolf"));
    }

    #[test]
    fn test_log_serialization() {
        let mut log = EventLog::new();
        log.push(Event::new("game started"));
        log.push(Event::with_private("inspection", "Player 1 is not a werewolf"));

        let json = serde_json::to_string(&log).unwrap();
        let back: EventLog = serde_json::from_str(&json).unwrap();
        assert_eq!(log, back);
    }
}
