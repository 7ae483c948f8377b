use std::collections::VecDeque;

use parking_lot::Mutex;

use crate::types::Event;

/// Default retention when the caller does not choose a capacity.
pub const DEFAULT_CAPACITY: usize = 500;

/// Bounded, ordered log of accepted pings, shared by every request worker.
///
/// Insertion order is receipt order. Once the log is full the oldest entries
/// are evicted first. The mutex is held only for the append/eviction or the
/// snapshot copy, never across I/O.
#[derive(Debug)]
pub struct EventStore {
    capacity: usize,
    events: Mutex<VecDeque<Event>>,
}

impl EventStore {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            events: Mutex::new(VecDeque::with_capacity(capacity)),
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Appends an event at the tail, evicting from the head until the log is
    /// back within capacity. Total: there is no failure path.
    pub fn append(&self, event: Event) {
        let mut events = self.events.lock();
        events.push_back(event);
        while events.len() > self.capacity {
            events.pop_front();
        }
    }

    /// Returns the current count and an independent copy of all stored events
    /// in arrival order.
    pub fn snapshot(&self) -> (usize, Vec<Event>) {
        let events = self.events.lock();
        (events.len(), events.iter().cloned().collect())
    }

    pub fn len(&self) -> usize {
        self.events.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.lock().is_empty()
    }
}

impl Default for EventStore {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use serde_json::json;

    fn event(seq: i64) -> Event {
        Event {
            received_at: Utc.with_ymd_and_hms(2024, 5, 1, 0, 0, 0).unwrap(),
            path: "/ping".to_string(),
            remote_address: "127.0.0.1".to_string(),
            payload: json!({ "seq": seq }),
        }
    }

    fn seqs(events: &[Event]) -> Vec<i64> {
        events
            .iter()
            .map(|event| event.payload["seq"].as_i64().unwrap())
            .collect()
    }

    #[test]
    fn append_preserves_arrival_order() {
        let store = EventStore::new(10);
        for seq in 0..5 {
            store.append(event(seq));
        }

        let (count, events) = store.snapshot();
        assert_eq!(count, 5);
        assert_eq!(seqs(&events), vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn evicts_oldest_first_once_full() {
        let store = EventStore::new(3);
        for seq in 0..5 {
            store.append(event(seq));
        }

        let (count, events) = store.snapshot();
        assert_eq!(count, 3);
        assert_eq!(seqs(&events), vec![2, 3, 4]);
    }

    #[test]
    fn snapshot_is_an_independent_copy() {
        let store = EventStore::new(10);
        store.append(event(0));

        let (_, before) = store.snapshot();
        store.append(event(1));

        assert_eq!(seqs(&before), vec![0]);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn concurrent_appends_lose_nothing() {
        let store = EventStore::new(DEFAULT_CAPACITY);
        std::thread::scope(|scope| {
            for worker in 0..10 {
                let store = &store;
                scope.spawn(move || {
                    for i in 0..20 {
                        store.append(event(worker * 100 + i));
                    }
                });
            }
        });

        let (count, events) = store.snapshot();
        assert_eq!(count, 200);

        // No duplicates or drops under contention.
        let mut seen = seqs(&events);
        seen.sort_unstable();
        seen.dedup();
        assert_eq!(seen.len(), 200);
    }

    #[test]
    fn concurrent_appends_never_exceed_capacity() {
        let store = EventStore::new(16);
        std::thread::scope(|scope| {
            for worker in 0..8 {
                let store = &store;
                scope.spawn(move || {
                    for i in 0..50 {
                        store.append(event(worker * 1000 + i));
                    }
                });
            }
        });

        let (count, events) = store.snapshot();
        assert_eq!(count, 16);
        assert_eq!(events.len(), 16);
    }
}
