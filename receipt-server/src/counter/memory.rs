//! In-memory counter store

use async_trait::async_trait;
use parking_lot::Mutex;
use shared::ReceiptId;

use super::{
    Allocation, CounterOrigin, INITIAL_COUNTER, MAX_COUNTER, ReceiptCounter, parse_candidate,
};

/// Counter kept in process memory, lost on restart
#[derive(Debug)]
pub struct MemoryCounterStore {
    counter: Mutex<u64>,
}

impl MemoryCounterStore {
    pub fn new(start: u64) -> Self {
        Self {
            counter: Mutex::new(start),
        }
    }

    /// Next value [`allocate`](ReceiptCounter::allocate) will hand out
    pub fn current(&self) -> u64 {
        *self.counter.lock()
    }

    fn allocate_now(&self) -> Allocation {
        let mut counter = self.counter.lock();
        let origin = if *counter > MAX_COUNTER {
            *counter = INITIAL_COUNTER;
            CounterOrigin::DefaultedCorrupt
        } else {
            CounterOrigin::Persisted
        };
        let id = ReceiptId::from_counter(*counter);
        *counter += 1;
        Allocation { id, origin }
    }
}

impl Default for MemoryCounterStore {
    fn default() -> Self {
        Self::new(INITIAL_COUNTER)
    }
}

#[async_trait]
impl ReceiptCounter for MemoryCounterStore {
    async fn allocate(&self) -> Allocation {
        self.allocate_now()
    }

    async fn ingest(&self, candidate: &str) -> Allocation {
        match parse_candidate(candidate) {
            Some(value) => {
                *self.counter.lock() = value + 1;
                Allocation {
                    id: ReceiptId::from_raw(candidate),
                    origin: CounterOrigin::Ingested,
                }
            }
            None => self.allocate_now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_allocate_and_ingest() {
        let store = MemoryCounterStore::default();
        assert_eq!(store.allocate().await.id.as_str(), "0001");
        assert_eq!(store.allocate().await.id.as_str(), "0002");

        assert_eq!(store.ingest("0042").await.id.as_str(), "0042");
        assert_eq!(store.current(), 43);
        assert_eq!(store.allocate().await.id.as_str(), "0043");
    }

    #[tokio::test]
    async fn test_ingest_invalid_matches_allocate() {
        let a = MemoryCounterStore::new(9);
        let b = MemoryCounterStore::new(9);

        assert_eq!(a.ingest("not-a-number").await, b.allocate().await);
        assert_eq!(a.current(), b.current());
    }

    #[tokio::test]
    async fn test_ids_stay_distinct_at_ceiling() {
        let store = MemoryCounterStore::default();
        let rejected = store.ingest("18446744073709551615").await;
        assert_eq!(rejected.origin, CounterOrigin::Persisted);
        assert_eq!(rejected.id.as_str(), "0001");

        let last = store.ingest("18446744073709551614").await;
        assert_eq!(store.current(), u64::MAX);

        let a = store.allocate().await;
        let b = store.allocate().await;
        assert_eq!(a.origin, CounterOrigin::DefaultedCorrupt);
        assert_eq!(a.id.as_str(), "0001");
        assert_eq!(b.id.as_str(), "0002");
        assert_ne!(a.id, last.id);
    }
}
