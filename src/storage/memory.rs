//! In-memory implementation of [`RecordStore`]

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use parking_lot::RwLock;
use uuid::Uuid;

use crate::types::Record;

use super::RecordStore;

/// Process-local store backed by a `HashMap` under a read/write lock.
///
/// Inserts hold the write lock for the whole test-and-set, so two concurrent
/// inserts of the same id can never both win. Readers share the lock and
/// always see whole records.
#[derive(Debug, Default)]
pub struct InMemoryRecordStore {
    records: RwLock<HashMap<Uuid, Record>>,
}

impl InMemoryRecordStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }
}

fn insert_locked(records: &mut HashMap<Uuid, Record>, record: Record) {
    if let Entry::Vacant(slot) = records.entry(record.id) {
        slot.insert(record);
    }
}

impl RecordStore for InMemoryRecordStore {
    fn insert(&self, record: Record) {
        let mut records = self.records.write();
        insert_locked(&mut records, record);
    }

    fn insert_many(&self, batch: Vec<Record>) {
        let mut records = self.records.write();
        for record in batch {
            insert_locked(&mut records, record);
        }
    }

    fn get(&self, id: &Uuid) -> Option<Record> {
        self.records.read().get(id).cloned()
    }

    fn get_all(&self) -> Vec<Record> {
        self.records.read().values().cloned().collect()
    }

    fn count(&self) -> usize {
        self.records.read().len()
    }

    fn clear_all(&self) {
        self.records.write().clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::sync::Arc;
    use std::thread;

    fn record(value: i32) -> Record {
        Record::new(value, 1, 100)
    }

    #[test]
    fn test_insert_and_get() {
        let store = InMemoryRecordStore::new();
        let r = record(42);

        store.insert(r.clone());

        assert_eq!(store.get(&r.id), Some(r));
        assert_eq!(store.count(), 1);
    }

    #[test]
    fn test_insert_many() {
        let store = InMemoryRecordStore::new();
        let batch = vec![record(1), record(2), record(3)];
        let expected: HashSet<Uuid> = batch.iter().map(|r| r.id).collect();

        store.insert_many(batch);

        let all = store.get_all();
        assert_eq!(store.count(), 3);
        assert_eq!(all.len(), 3);
        assert_eq!(all.iter().map(|r| r.id).collect::<HashSet<_>>(), expected);
    }

    #[test]
    fn test_get_missing_id_returns_none() {
        let store = InMemoryRecordStore::new();
        assert!(store.get(&Uuid::new_v4()).is_none());
    }

    #[test]
    fn test_get_all_when_empty() {
        let store = InMemoryRecordStore::new();
        assert!(store.get_all().is_empty());
        assert_eq!(store.count(), 0);
    }

    #[test]
    fn test_clear_all() {
        let store = InMemoryRecordStore::new();
        store.insert_many(vec![record(1), record(2)]);

        store.clear_all();

        assert_eq!(store.count(), 0);
        assert!(store.get_all().is_empty());

        // Clearing an empty store is fine too
        store.clear_all();
        assert_eq!(store.count(), 0);
    }

    #[test]
    fn test_duplicate_id_keeps_first_value() {
        let store = InMemoryRecordStore::new();
        let first = record(10);
        let mut second = first.clone();
        second.value = 99;

        store.insert(first.clone());
        store.insert(second);

        assert_eq!(store.count(), 1);
        assert_eq!(store.get(&first.id).unwrap().value, 10);
    }

    #[test]
    fn test_insert_many_with_internal_duplicates() {
        let store = InMemoryRecordStore::new();
        let a = record(1);
        let mut a_again = a.clone();
        a_again.value = 1000;
        let b = record(2);

        store.insert_many(vec![a.clone(), b.clone(), a_again]);

        assert_eq!(store.count(), 2);
        assert_eq!(store.get(&a.id).unwrap().value, 1);
        assert_eq!(store.get(&b.id).unwrap().value, 2);
    }

    #[test]
    fn test_returned_copies_do_not_alias_store() {
        let store = InMemoryRecordStore::new();
        let r = record(5);
        store.insert(r.clone());

        let mut copy = store.get(&r.id).unwrap();
        copy.value = -1;
        let mut snapshot = store.get_all();
        snapshot[0].value = -2;

        assert_eq!(store.get(&r.id).unwrap().value, 5);
        assert_eq!(copy.value, -1);
        assert_eq!(snapshot[0].value, -2);
    }

    #[test]
    fn test_concurrent_distinct_inserts() {
        let store = Arc::new(InMemoryRecordStore::new());

        let handles: Vec<_> = (0..100)
            .map(|i| {
                let store = Arc::clone(&store);
                thread::spawn(move || store.insert(record(i)))
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(store.count(), 100);
    }

    #[test]
    fn test_concurrent_same_id_single_winner() {
        let store = Arc::new(InMemoryRecordStore::new());
        let base = record(0);

        let handles: Vec<_> = (0..50)
            .map(|i| {
                let store = Arc::clone(&store);
                let mut r = base.clone();
                r.value = i;
                thread::spawn(move || store.insert(r))
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(store.count(), 1);
        let winner = store.get(&base.id).unwrap();
        assert!((0..50).contains(&winner.value));
    }

    #[test]
    fn test_readers_run_alongside_writers() {
        let store = Arc::new(InMemoryRecordStore::new());

        let writer = {
            let store = Arc::clone(&store);
            thread::spawn(move || {
                for i in 0..500 {
                    store.insert(record(i));
                }
            })
        };
        let reader = {
            let store = Arc::clone(&store);
            thread::spawn(move || {
                let mut last = 0;
                for _ in 0..500 {
                    let seen = store.get_all().len();
                    assert!(seen >= last);
                    last = seen;
                }
            })
        };

        writer.join().unwrap();
        reader.join().unwrap();
        assert_eq!(store.count(), 500);
    }
}
