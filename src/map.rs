//! A separate-chaining hash map.
//!
//! Keys are hashed with the standard library's [`DefaultHasher`] and
//! reduced modulo the bucket count; each bucket is a vector of entries
//! scanned by key equality. The bucket count doubles whenever the entry
//! count passes three quarters of it, keeping bucket scans short.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

/// How many buckets a freshly created map starts with.
const INITIAL_BUCKETS: usize = 16;

/// A hash map storing key/value entries in equality-scanned buckets.
///
/// # Examples
///
/// ```
/// use treekit::map::HashMap;
///
/// let mut map = HashMap::new();
/// map.insert("earth", 3);
///
/// assert_eq!(map.get(&"earth"), Some(&3));
/// assert_eq!(map.remove(&"earth"), Some(3));
/// assert_eq!(map.get(&"earth"), None);
/// ```
#[derive(Debug)]
pub struct HashMap<K, V> {
    buckets: Vec<Vec<(K, V)>>,
    len: usize,
}

impl<K, V> Default for HashMap<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> HashMap<K, V> {
    /// Generates a new, empty map with the default bucket count.
    pub fn new() -> Self {
        Self::with_buckets(INITIAL_BUCKETS)
    }

    /// Generates a new, empty map with the given bucket count. Zero is
    /// rounded up to one bucket.
    pub fn with_buckets(buckets: usize) -> Self {
        Self {
            buckets: empty_buckets(buckets.max(1)),
            len: 0,
        }
    }

    /// How many entries the map holds.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the map holds no entries.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Removes every entry, keeping the current bucket count.
    pub fn clear(&mut self) {
        for bucket in &mut self.buckets {
            bucket.clear();
        }
        self.len = 0;
    }

    /// Iterates over every stored key, in bucket order.
    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.buckets.iter().flatten().map(|(key, _)| key)
    }

    /// Iterates over every stored value, in bucket order.
    pub fn values(&self) -> impl Iterator<Item = &V> {
        self.buckets.iter().flatten().map(|(_, value)| value)
    }
}

impl<K, V> HashMap<K, V>
where
    K: Hash + Eq,
{
    /// Stores `value` under `key`. An existing entry for the key has
    /// its value replaced and returned; a new entry may trigger bucket
    /// growth.
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        let index = self.bucket_index(&key);
        let bucket = &mut self.buckets[index];
        for entry in bucket.iter_mut() {
            if entry.0 == key {
                return Some(std::mem::replace(&mut entry.1, value));
            }
        }
        bucket.push((key, value));
        self.len += 1;
        if self.len * 4 > self.buckets.len() * 3 {
            self.grow();
        }
        None
    }

    /// Looks up the value stored under `key`.
    pub fn get(&self, key: &K) -> Option<&V> {
        let index = self.bucket_index(key);
        self.buckets[index]
            .iter()
            .find(|(stored, _)| stored == key)
            .map(|(_, value)| value)
    }

    /// Removes the entry stored under `key` and returns its value, or
    /// `None` when no entry exists.
    pub fn remove(&mut self, key: &K) -> Option<V> {
        let index = self.bucket_index(key);
        let bucket = &mut self.buckets[index];
        let position = bucket.iter().position(|(stored, _)| stored == key)?;
        self.len -= 1;
        Some(bucket.swap_remove(position).1)
    }

    /// Whether an entry is stored under `key`.
    pub fn contains_key(&self, key: &K) -> bool {
        self.get(key).is_some()
    }

    fn bucket_index(&self, key: &K) -> usize {
        let mut hasher = DefaultHasher::new();
        key.hash(&mut hasher);
        hasher.finish() as usize % self.buckets.len()
    }

    /// Doubles the bucket count and redistributes every entry under the
    /// new modulus.
    fn grow(&mut self) {
        let doubled = empty_buckets(self.buckets.len() * 2);
        let old = std::mem::replace(&mut self.buckets, doubled);
        for (key, value) in old.into_iter().flatten() {
            let index = self.bucket_index(&key);
            self.buckets[index].push((key, value));
        }
    }
}

fn empty_buckets<K, V>(count: usize) -> Vec<Vec<(K, V)>> {
    (0..count).map(|_| Vec::new()).collect()
}
