/// A map keyed by `i64`.
///
/// `None` always means "no entry"; a stored value is never confused with
/// absence, whatever `V` is.
pub trait LongMap<V> {
    /// Stores `value` under `key`, returning the value it replaced.
    fn put(&mut self, key: i64, value: V) -> Option<V>;
    fn get(&self, key: i64) -> Option<&V>;
    /// Removes every entry stored under `key`, returning the last removed value.
    fn remove(&mut self, key: i64) -> Option<V>;
    fn contains_key(&self, key: i64) -> bool {
        self.get(key).is_some()
    }
    fn contains_value(&self, value: &V) -> bool
    where
        V: PartialEq;
    /// All keys, in storage order. Not sorted.
    fn keys(&self) -> Vec<i64>;
    /// All values, in the same order as [`LongMap::keys`].
    fn values(&self) -> Vec<&V>;
    fn size(&self) -> u64;
    fn is_empty(&self) -> bool {
        self.size() == 0
    }
    fn clear(&mut self);
}
