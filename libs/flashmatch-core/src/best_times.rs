//! Best completion times per level.

use crate::error::StorageError;
use crate::storage::{KeyValueStorage, BEST_TIMES_KEY};
use crate::types::BestTimes;
use std::sync::Arc;

/// Where best times are loaded from and saved to.
pub trait PersistenceStore: Send + Sync {
    /// Read the stored map. Absent or unreadable data yields an empty map.
    fn load(&self) -> BestTimes;

    /// Replace the stored map.
    fn save(&self, times: &BestTimes) -> Result<(), StorageError>;
}

/// Best times kept as one JSON value in a key-value storage.
pub struct StoredBestTimes {
    storage: Arc<dyn KeyValueStorage>,
}

impl StoredBestTimes {
    pub fn new(storage: Arc<dyn KeyValueStorage>) -> Self {
        Self { storage }
    }
}

impl PersistenceStore for StoredBestTimes {
    fn load(&self) -> BestTimes {
        let Some(raw) = self.storage.get(BEST_TIMES_KEY) else {
            return BestTimes::new();
        };
        match serde_json::from_str(&raw) {
            Ok(times) => times,
            Err(e) => {
                tracing::warn!("Ignoring unreadable best times: {}", e);
                BestTimes::new()
            }
        }
    }

    fn save(&self, times: &BestTimes) -> Result<(), StorageError> {
        let raw = serde_json::to_string(times)?;
        self.storage.set(BEST_TIMES_KEY, &raw)
    }
}

/// Compare-and-set a completion time.
///
/// Returns true when `seconds` became the new best for `level`, in which case
/// the whole map has been handed to `store`.
pub fn record_time(
    times: &mut BestTimes,
    store: &dyn PersistenceStore,
    level: &str,
    seconds: u32,
) -> bool {
    if let Some(&best) = times.get(level) {
        if seconds >= best {
            return false;
        }
    }

    times.insert(level.to_string(), seconds);
    if let Err(e) = store.save(times) {
        tracing::warn!("Failed to persist best time for {}: {}", level, e);
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;
    use pretty_assertions::assert_eq;

    fn store() -> (Arc<MemoryStorage>, StoredBestTimes) {
        let storage = Arc::new(MemoryStorage::new());
        let store = StoredBestTimes::new(storage.clone());
        (storage, store)
    }

    #[test]
    fn load_missing_is_empty() {
        let (_, store) = store();
        assert!(store.load().is_empty());
    }

    #[test]
    fn load_corrupt_is_empty() {
        let (storage, store) = store();
        storage.set(BEST_TIMES_KEY, "{not json").unwrap();
        assert!(store.load().is_empty());
    }

    #[test]
    fn first_time_is_recorded_and_persisted() {
        let (storage, store) = store();
        let mut times = store.load();
        assert!(record_time(&mut times, &store, "A1", 42));
        assert_eq!(storage.get(BEST_TIMES_KEY).as_deref(), Some(r#"{"A1":42}"#));
    }

    #[test]
    fn slower_time_is_ignored() {
        let (_, store) = store();
        let mut times = BestTimes::new();
        record_time(&mut times, &store, "A1", 30);
        assert!(!record_time(&mut times, &store, "A1", 31));
        assert_eq!(store.load().get("A1"), Some(&30));
    }

    #[test]
    fn equal_time_is_ignored() {
        let (_, store) = store();
        let mut times = BestTimes::new();
        record_time(&mut times, &store, "A1", 30);
        assert!(!record_time(&mut times, &store, "A1", 30));
    }

    #[test]
    fn faster_time_replaces_best() {
        let (_, store) = store();
        let mut times = BestTimes::new();
        record_time(&mut times, &store, "A1", 30);
        record_time(&mut times, &store, "B1", 50);
        assert!(record_time(&mut times, &store, "A1", 29));

        let expected: BestTimes = [("A1".to_string(), 29), ("B1".to_string(), 50)]
            .into_iter()
            .collect();
        assert_eq!(store.load(), expected);
    }
}
