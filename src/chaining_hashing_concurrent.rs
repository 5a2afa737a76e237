use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::chaining_hashing::LongHashMap;
use crate::error::Result;

/// A [`LongHashMap`] shared between threads behind a single `RwLock`.
///
/// Every call takes the lock for its whole duration, so a resize triggered by
/// `put` is never observed half done. Values are handed out as clones; store
/// `Arc<V>` to share them cheaply.
pub struct ConcurrentLongHashMap<V> {
    table: RwLock<LongHashMap<V>>,
}

impl<V> ConcurrentLongHashMap<V> {
    pub fn new() -> Self {
        Self {
            table: RwLock::new(LongHashMap::new()),
        }
    }
    pub fn with_capacity(capacity: usize) -> Result<Self> {
        Ok(Self {
            table: RwLock::new(LongHashMap::with_capacity(capacity)?),
        })
    }

    pub fn len(&self) -> usize {
        self.table.read().len()
    }
    pub fn size(&self) -> u64 {
        self.table.read().size()
    }
    pub fn is_empty(&self) -> bool {
        self.table.read().is_empty()
    }
    pub fn clear(&self) {
        self.table.write().clear();
    }

    pub fn put(&self, key: i64, value: V) -> Option<V> {
        self.table.write().put(key, value)
    }
    pub fn remove(&self, key: i64) -> Option<V> {
        self.table.write().remove(key)
    }
    pub fn contains_key(&self, key: i64) -> bool {
        self.table.read().contains_key(key)
    }
    pub fn contains_value(&self, value: &V) -> bool
    where
        V: PartialEq,
    {
        self.table.read().contains_value(value)
    }
    pub fn keys(&self) -> Vec<i64> {
        self.table.read().keys()
    }

    /// Holds the read lock for compound lookups.
    pub fn read(&self) -> RwLockReadGuard<'_, LongHashMap<V>> {
        self.table.read()
    }
    /// Holds the write lock for compound updates.
    pub fn write(&self) -> RwLockWriteGuard<'_, LongHashMap<V>> {
        self.table.write()
    }

    pub fn into_inner(self) -> LongHashMap<V> {
        self.table.into_inner()
    }
}

impl<V: Clone> ConcurrentLongHashMap<V> {
    pub fn get(&self, key: i64) -> Option<V> {
        self.table.read().get(key).cloned()
    }
    pub fn values(&self) -> Vec<V> {
        self.table.read().iter().map(|(_, value)| value.clone()).collect()
    }
}

impl<V> Default for ConcurrentLongHashMap<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> From<LongHashMap<V>> for ConcurrentLongHashMap<V> {
    fn from(table: LongHashMap<V>) -> Self {
        Self {
            table: RwLock::new(table),
        }
    }
}
