use std::fmt;
use std::mem;

use tracing::{debug, trace};

use crate::error::{Error, Result};
use crate::long_map::LongMap;

const DEFAULT_CAPACITY: usize = 16;
const GROWTH_FACTOR: usize = 2;
const LOAD_FACTOR: f64 = 0.75;

/// A hash map keyed by `i64`, using separate chaining.
///
/// Bucket `i` holds every entry whose key satisfies `key.rem_euclid(capacity) == i`,
/// in insertion order. Once the entry count exceeds `floor(capacity * 0.75)` the
/// next new key doubles the bucket array and rehashes everything into it.
#[derive(Clone)]
pub struct LongHashMap<V> {
    buckets: Vec<Option<Chain<V>>>,
    threshold: usize,
    length: usize,
}

type Chain<V> = Vec<Entry<V>>;

#[derive(Clone)]
struct Entry<V> {
    key: i64,
    value: V,
}

fn threshold_for(capacity: usize) -> usize {
    (capacity as f64 * LOAD_FACTOR) as usize
}

impl<V> LongHashMap<V> {
    pub fn new() -> Self {
        Self::with_exact_capacity(DEFAULT_CAPACITY)
    }

    /// Creates an empty map with `capacity` buckets.
    ///
    /// Fails with [`Error::InvalidArgument`] when `capacity` is zero.
    pub fn with_capacity(capacity: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(Error::InvalidArgument(
                "capacity must be positive".to_string(),
            ));
        }
        Ok(Self::with_exact_capacity(capacity))
    }

    fn with_exact_capacity(capacity: usize) -> Self {
        Self {
            buckets: (0..capacity).map(|_| None).collect(),
            threshold: threshold_for(capacity),
            length: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.length
    }
    pub fn size(&self) -> u64 {
        self.length as u64
    }
    pub fn is_empty(&self) -> bool {
        self.length == 0
    }
    pub fn capacity(&self) -> usize {
        self.buckets.len()
    }
    pub fn threshold(&self) -> usize {
        self.threshold
    }
    pub fn fill_factor(&self) -> f64 {
        self.length as f64 / self.buckets.len() as f64
    }

    /// Drops every entry. The bucket count is left alone.
    pub fn clear(&mut self) {
        trace!(entries = self.length, capacity = self.buckets.len(), "clearing map");
        self.length = 0;
        for bucket in self.buckets.iter_mut() {
            *bucket = None;
        }
    }

    // Floor modulo, so negative keys land in range too.
    fn bucket_index(&self, key: i64) -> usize {
        key.rem_euclid(self.buckets.len() as i64) as usize
    }

    pub fn put(&mut self, key: i64, value: V) -> Option<V> {
        let index = self.bucket_index(key);
        if let Some(chain) = &mut self.buckets[index] {
            if let Some(entry) = chain.iter_mut().find(|entry| entry.key == key) {
                return Some(mem::replace(&mut entry.value, value));
            }
        }
        let index = if self.length > self.threshold {
            self.resize();
            self.bucket_index(key)
        } else {
            index
        };
        self.buckets[index]
            .get_or_insert_with(Vec::new)
            .push(Entry { key, value });
        self.length += 1;
        None
    }

    fn resize(&mut self) {
        let old_capacity = self.buckets.len();
        let new_capacity = old_capacity * GROWTH_FACTOR;
        let old_buckets = mem::replace(
            &mut self.buckets,
            (0..new_capacity).map(|_| None).collect(),
        );
        self.threshold = threshold_for(new_capacity);
        // Keys are already unique, so entries are appended without a lookup.
        for entry in old_buckets.into_iter().flatten().flatten() {
            let index = self.bucket_index(entry.key);
            self.buckets[index].get_or_insert_with(Vec::new).push(entry);
        }
        debug!(
            old_capacity,
            new_capacity,
            threshold = self.threshold,
            entries = self.length,
            "resized map"
        );
    }

    pub fn get(&self, key: i64) -> Option<&V> {
        let chain = self.buckets[self.bucket_index(key)].as_ref()?;
        // Last match wins.
        chain
            .iter()
            .rev()
            .find(|entry| entry.key == key)
            .map(|entry| &entry.value)
    }

    pub fn get_mut(&mut self, key: i64) -> Option<&mut V> {
        let index = self.bucket_index(key);
        let chain = self.buckets[index].as_mut()?;
        chain
            .iter_mut()
            .rev()
            .find(|entry| entry.key == key)
            .map(|entry| &mut entry.value)
    }

    /// Removes every entry stored under `key` and returns the last one removed.
    ///
    /// A key whose bucket was never allocated is simply absent.
    pub fn remove(&mut self, key: i64) -> Option<V> {
        let index = self.bucket_index(key);
        let chain = self.buckets[index].as_mut()?;
        let mut removed = None;
        let mut position = 0;
        while position < chain.len() {
            if chain[position].key == key {
                removed = Some(chain.remove(position).value);
                self.length -= 1;
            } else {
                position += 1;
            }
        }
        if chain.is_empty() {
            self.buckets[index] = None;
        }
        removed
    }

    pub fn contains_key(&self, key: i64) -> bool {
        self.get(key).is_some()
    }

    pub fn contains_value(&self, value: &V) -> bool
    where
        V: PartialEq,
    {
        self.iter().any(|(_, v)| v == value)
    }

    /// Iterates bucket by bucket, each chain in insertion order.
    pub fn iter(&self) -> Iter<'_, V> {
        Iter {
            buckets: self.buckets.iter(),
            chain: Default::default(),
            remaining: self.length,
        }
    }

    pub fn keys(&self) -> Vec<i64> {
        self.iter().map(|(key, _)| key).collect()
    }

    pub fn values(&self) -> Vec<&V> {
        self.iter().map(|(_, value)| value).collect()
    }
}

impl<V> Default for LongHashMap<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: fmt::Debug> fmt::Debug for LongHashMap<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<V> LongMap<V> for LongHashMap<V> {
    fn put(&mut self, key: i64, value: V) -> Option<V> {
        LongHashMap::put(self, key, value)
    }
    fn get(&self, key: i64) -> Option<&V> {
        LongHashMap::get(self, key)
    }
    fn remove(&mut self, key: i64) -> Option<V> {
        LongHashMap::remove(self, key)
    }
    fn contains_value(&self, value: &V) -> bool
    where
        V: PartialEq,
    {
        LongHashMap::contains_value(self, value)
    }
    fn keys(&self) -> Vec<i64> {
        LongHashMap::keys(self)
    }
    fn values(&self) -> Vec<&V> {
        LongHashMap::values(self)
    }
    fn size(&self) -> u64 {
        LongHashMap::size(self)
    }
    fn clear(&mut self) {
        LongHashMap::clear(self)
    }
}

pub struct Iter<'a, V> {
    buckets: std::slice::Iter<'a, Option<Chain<V>>>,
    chain: std::slice::Iter<'a, Entry<V>>,
    remaining: usize,
}

impl<'a, V> Iterator for Iter<'a, V> {
    type Item = (i64, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(entry) = self.chain.next() {
                self.remaining -= 1;
                return Some((entry.key, &entry.value));
            }
            match self.buckets.next()? {
                Some(chain) => self.chain = chain.iter(),
                None => continue,
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<V> ExactSizeIterator for Iter<'_, V> {}

impl<'a, V> IntoIterator for &'a LongHashMap<V> {
    type Item = (i64, &'a V);
    type IntoIter = Iter<'a, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<V> Extend<(i64, V)> for LongHashMap<V> {
    fn extend<T: IntoIterator<Item = (i64, V)>>(&mut self, iter: T) {
        for (key, value) in iter {
            self.put(key, value);
        }
    }
}

impl<V> FromIterator<(i64, V)> for LongHashMap<V> {
    fn from_iter<T: IntoIterator<Item = (i64, V)>>(iter: T) -> Self {
        let mut map = Self::new();
        map.extend(iter);
        map
    }
}
