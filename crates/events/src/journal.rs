//! Caller-owned, append-only event journal.

use chrono::{DateTime, Utc};

use crate::event::Event;

/// Append-only sequence of events owned by the caller.
///
/// Operations that accept a journal only ever push to it; they never read,
/// reorder or clear it. A fresh journal is created by the caller for each
/// scope it wants to audit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventJournal<E> {
    events: Vec<E>,
}

impl<E> Default for EventJournal<E> {
    fn default() -> Self {
        Self { events: Vec::new() }
    }
}

impl<E: Event> EventJournal<E> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one event.
    pub fn record(&mut self, event: E) {
        self.events.push(event);
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn last(&self) -> Option<&E> {
        self.events.last()
    }

    pub fn iter(&self) -> impl Iterator<Item = &E> {
        self.events.iter()
    }

    /// Events that occurred at or after `at`, in append order.
    pub fn since(&self, at: DateTime<Utc>) -> impl Iterator<Item = &E> {
        self.events.iter().filter(move |e| e.occurred_at() >= at)
    }

    pub fn into_vec(self) -> Vec<E> {
        self.events
    }
}

impl<E: Event> Extend<E> for EventJournal<E> {
    fn extend<T: IntoIterator<Item = E>>(&mut self, iter: T) {
        self.events.extend(iter);
    }
}

impl<'a, E> IntoIterator for &'a EventJournal<E> {
    type Item = &'a E;
    type IntoIter = core::slice::Iter<'a, E>;

    fn into_iter(self) -> Self::IntoIter {
        self.events.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[derive(Debug, Clone, PartialEq, Eq)]
    struct Tick(DateTime<Utc>);

    impl Event for Tick {
        fn event_type(&self) -> &'static str {
            "test.tick"
        }

        fn version(&self) -> u32 {
            1
        }

        fn occurred_at(&self) -> DateTime<Utc> {
            self.0
        }
    }

    #[test]
    fn record_appends_in_order() {
        let now = Utc::now();
        let mut journal = EventJournal::new();
        assert!(journal.is_empty());

        journal.record(Tick(now));
        journal.record(Tick(now + Duration::seconds(1)));

        assert_eq!(journal.len(), 2);
        assert_eq!(journal.last(), Some(&Tick(now + Duration::seconds(1))));
    }

    #[test]
    fn since_filters_by_occurrence_time() {
        let now = Utc::now();
        let mut journal = EventJournal::new();
        journal.extend([
            Tick(now - Duration::minutes(5)),
            Tick(now),
            Tick(now + Duration::minutes(5)),
        ]);

        let recent: Vec<_> = journal.since(now).collect();
        assert_eq!(recent.len(), 2);
    }
}
