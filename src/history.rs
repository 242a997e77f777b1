use crate::models::{RecoveryInput, SavedEntry};
use crate::storage::{HISTORY_KEY, KeyValueStore};
use chrono::{DateTime, Local};
use std::{io, sync::Arc};
use tracing::{error, warn};

pub const SAVED_AT_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Past results in save order, mirrored to the key/value store on every change.
pub struct HistoryStore {
    store: Arc<dyn KeyValueStore>,
    entries: Vec<SavedEntry>,
}

impl HistoryStore {
    /// Missing or unreadable history starts empty.
    pub fn load(store: Arc<dyn KeyValueStore>) -> Self {
        let entries = match store.get(HISTORY_KEY) {
            Ok(Some(bytes)) => match serde_json::from_slice(&bytes) {
                Ok(entries) => entries,
                Err(err) => {
                    warn!("discarding unreadable history: {err}");
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(err) => {
                error!("failed to read history: {err}");
                Vec::new()
            }
        };
        Self { store, entries }
    }

    pub fn entries(&self) -> &[SavedEntry] {
        &self.entries
    }

    pub fn get(&self, id: &str) -> Option<&SavedEntry> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    /// Millisecond timestamp id, bumped past any id already in use.
    pub fn next_id(&self, now: DateTime<Local>) -> String {
        let mut candidate = now.timestamp_millis();
        while self.entries.iter().any(|entry| entry.id == candidate.to_string()) {
            candidate += 1;
        }
        candidate.to_string()
    }

    pub fn snapshot(
        &self,
        now: DateTime<Local>,
        input: RecoveryInput,
        percentage: f64,
    ) -> SavedEntry {
        SavedEntry {
            id: self.next_id(now),
            saved_at: now.format(SAVED_AT_FORMAT).to_string(),
            percentage,
            input,
        }
    }

    /// The in-memory sequence only changes once the write has succeeded.
    pub fn save(&mut self, entry: SavedEntry) -> io::Result<()> {
        let mut candidate = self.entries.clone();
        candidate.push(entry);
        self.commit(candidate)
    }

    /// Returns whether an entry was removed. Unknown ids are not an error.
    pub fn remove(&mut self, id: &str) -> io::Result<bool> {
        let mut candidate = self.entries.clone();
        candidate.retain(|entry| entry.id != id);
        let removed = candidate.len() != self.entries.len();
        self.commit(candidate)?;
        Ok(removed)
    }

    pub fn clear(&mut self) -> io::Result<()> {
        self.store.delete(HISTORY_KEY)?;
        self.entries.clear();
        Ok(())
    }

    fn commit(&mut self, candidate: Vec<SavedEntry>) -> io::Result<()> {
        let payload = serde_json::to_vec_pretty(&candidate)?;
        self.store.set(HISTORY_KEY, &payload)?;
        self.entries = candidate;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ActivityId;
    use crate::storage::MemoryStore;
    use chrono::{NaiveDate, TimeZone};

    /// Reads what `inner` holds but refuses every write.
    struct ReadOnlyStore {
        inner: MemoryStore,
    }

    impl KeyValueStore for ReadOnlyStore {
        fn get(&self, key: &str) -> io::Result<Option<Vec<u8>>> {
            self.inner.get(key)
        }

        fn set(&self, _key: &str, _value: &[u8]) -> io::Result<()> {
            Err(io::Error::other("disk full"))
        }

        fn delete(&self, _key: &str) -> io::Result<()> {
            Err(io::Error::other("disk full"))
        }
    }

    /// History preloaded with two entries whose store rejects writes.
    fn read_only_with_two() -> (Arc<dyn KeyValueStore>, HistoryStore, Vec<SavedEntry>) {
        let (seed_store, mut seeded) = fresh();
        seeded.save(seeded.snapshot(at(1), input(10.0), 80.0)).unwrap();
        seeded.save(seeded.snapshot(at(2), input(20.0), 70.0)).unwrap();
        let entries = seeded.entries().to_vec();

        let inner = MemoryStore::new();
        inner
            .set(HISTORY_KEY, &seed_store.get(HISTORY_KEY).unwrap().unwrap())
            .unwrap();
        let store: Arc<dyn KeyValueStore> = Arc::new(ReadOnlyStore { inner });
        let history = HistoryStore::load(Arc::clone(&store));
        assert_eq!(history.entries(), entries.as_slice());
        (store, history, entries)
    }

    fn at(minute: u32) -> DateTime<Local> {
        Local
            .with_ymd_and_hms(2026, 10, 17, 20, minute, 0)
            .single()
            .unwrap()
    }

    fn input(impact: f64) -> RecoveryInput {
        RecoveryInput {
            breakup_date: NaiveDate::from_ymd_opt(2026, 4, 1).unwrap(),
            relationship_duration_months: 14.5,
            emotional_impact: impact,
            activities: [ActivityId::Gym, ActivityId::Alcohol].into_iter().collect(),
        }
    }

    fn fresh() -> (Arc<dyn KeyValueStore>, HistoryStore) {
        let store: Arc<dyn KeyValueStore> = Arc::new(MemoryStore::new());
        let history = HistoryStore::load(Arc::clone(&store));
        (store, history)
    }

    #[test]
    fn saved_entry_survives_reload() {
        let (store, mut history) = fresh();
        let entry = history.snapshot(at(5), input(70.0), 41.25);
        assert_eq!(entry.saved_at, "2026-10-17 20:05");
        history.save(entry.clone()).unwrap();

        let reloaded = HistoryStore::load(store);
        assert_eq!(reloaded.entries(), &[entry.clone()]);
        assert_eq!(reloaded.get(&entry.id).map(|e| &e.input), Some(&entry.input));
    }

    #[test]
    fn remove_keeps_order_of_the_rest() {
        let (store, mut history) = fresh();
        let first = history.snapshot(at(1), input(10.0), 80.0);
        history.save(first.clone()).unwrap();
        let second = history.snapshot(at(2), input(20.0), 70.0);
        history.save(second.clone()).unwrap();
        let third = history.snapshot(at(3), input(30.0), 60.0);
        history.save(third.clone()).unwrap();

        assert!(history.remove(&first.id).unwrap());
        assert!(!history.remove("no-such-id").unwrap());

        let reloaded = HistoryStore::load(store);
        assert_eq!(reloaded.entries(), &[second, third]);
        assert!(reloaded.get(&first.id).is_none());
    }

    #[test]
    fn clear_drops_persisted_history() {
        let (store, mut history) = fresh();
        let entry = history.snapshot(at(9), input(50.0), 50.0);
        history.save(entry).unwrap();
        history.clear().unwrap();

        assert!(history.entries().is_empty());
        assert_eq!(store.get(HISTORY_KEY).unwrap(), None);
        assert!(HistoryStore::load(store).entries().is_empty());
    }

    #[test]
    fn ids_stay_unique_within_the_same_millisecond() {
        let (_store, mut history) = fresh();
        let a = history.snapshot(at(0), input(1.0), 1.0);
        history.save(a.clone()).unwrap();
        let b = history.snapshot(at(0), input(2.0), 2.0);
        assert_ne!(a.id, b.id);
        assert_eq!(b.id, (at(0).timestamp_millis() + 1).to_string());
    }

    #[test]
    fn corrupt_history_loads_empty() {
        let store: Arc<dyn KeyValueStore> = Arc::new(MemoryStore::new());
        store.set(HISTORY_KEY, b"{not json").unwrap();
        assert!(HistoryStore::load(store).entries().is_empty());
    }

    #[test]
    fn failed_save_leaves_history_unchanged() {
        let (store, mut history, entries) = read_only_with_two();
        let extra = history.snapshot(at(3), input(30.0), 60.0);

        let err = history.save(extra).unwrap_err();
        assert_eq!(err.to_string(), "disk full");
        assert_eq!(history.entries(), entries.as_slice());
        assert_eq!(HistoryStore::load(store).entries(), entries.as_slice());
    }

    #[test]
    fn failed_remove_leaves_history_unchanged() {
        let (store, mut history, entries) = read_only_with_two();

        assert!(history.remove(&entries[0].id).is_err());
        assert_eq!(history.entries(), entries.as_slice());
        assert!(history.get(&entries[0].id).is_some());
        assert_eq!(HistoryStore::load(store).entries(), entries.as_slice());
    }

    #[test]
    fn failed_clear_leaves_history_unchanged() {
        let (store, mut history, entries) = read_only_with_two();

        assert!(history.clear().is_err());
        assert_eq!(history.entries(), entries.as_slice());
        assert_eq!(HistoryStore::load(store).entries(), entries.as_slice());
    }
}
