// Copyright 2026 The flowfx authors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! An observable key-value collection with per-change stream bridges.
//!
//! [`ObservableMap<K, V>`] mirrors a toolkit's observable map: a hash map
//! whose mutations fan out as [`MapChange`] events. Replacing a key's value
//! reports the removal of the old entry before the insertion of the new one.

use futures::{future, Stream, StreamExt};
use parking_lot::{Mutex, RwLock};
use std::collections::HashMap;
use std::hash::Hash;
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio_stream::wrappers::UnboundedReceiverStream;

/// A single map mutation.
#[derive(Debug, Clone, PartialEq)]
pub enum MapChange<K, V> {
    /// An entry was inserted into the map
    Inserted {
        /// Key of the inserted entry
        key: K,
        /// Value now associated with the key
        value: V,
    },
    /// An entry was removed from the map
    Removed {
        /// Key of the removed entry
        key: K,
        /// Value the key held before removal
        value: V,
    },
}

#[derive(Clone)]
struct MapEvent<K, V> {
    change: MapChange<K, V>,
    snapshot: HashMap<K, V>,
}

struct Inner<K, V> {
    entries: RwLock<HashMap<K, V>>,
    subscribers: Mutex<Vec<mpsc::UnboundedSender<MapEvent<K, V>>>>,
}

/// An observable map, cheap to clone and share.
pub struct ObservableMap<K, V> {
    inner: Arc<Inner<K, V>>,
}

impl<K, V> Clone for ObservableMap<K, V> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<K, V> Default for ObservableMap<K, V> {
    fn default() -> Self {
        Self {
            inner: Arc::new(Inner {
                entries: RwLock::new(HashMap::new()),
                subscribers: Mutex::new(Vec::new()),
            }),
        }
    }
}

impl<K, V> ObservableMap<K, V>
where
    K: Clone + Eq + Hash + Send + 'static,
    V: Clone + Send + 'static,
{
    /// Creates an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a map holding `entries`; no change events are emitted for the
    /// initial contents.
    pub fn from_map(entries: HashMap<K, V>) -> Self {
        let map = Self::default();
        *map.inner.entries.write() = entries;
        map
    }

    /// Inserts an entry, emitting `Inserted`. Replacing an existing value
    /// emits `Removed` for the old entry first; both events carry the final
    /// snapshot. Returns the replaced value, if any.
    pub fn insert(&self, key: K, value: V) -> Option<V> {
        let mut subscribers = self.inner.subscribers.lock();
        let (replaced, snapshot) = {
            let mut entries = self.inner.entries.write();
            let replaced = entries.insert(key.clone(), value.clone());
            (replaced, entries.clone())
        };
        if let Some(old) = replaced.clone() {
            let event = MapEvent {
                change: MapChange::Removed {
                    key: key.clone(),
                    value: old,
                },
                snapshot: snapshot.clone(),
            };
            Self::notify(&mut subscribers, event);
        }
        let event = MapEvent {
            change: MapChange::Inserted { key, value },
            snapshot,
        };
        Self::notify(&mut subscribers, event);
        replaced
    }

    /// Removes the entry for `key`, emitting `Removed`. Returns the removed
    /// value, or `None` when the key was absent.
    pub fn remove(&self, key: &K) -> Option<V> {
        let mut subscribers = self.inner.subscribers.lock();
        let removed = {
            let mut entries = self.inner.entries.write();
            entries.remove(key).map(|value| (value, entries.clone()))
        };
        match removed {
            Some((value, snapshot)) => {
                let event = MapEvent {
                    change: MapChange::Removed {
                        key: key.clone(),
                        value: value.clone(),
                    },
                    snapshot,
                };
                Self::notify(&mut subscribers, event);
                Some(value)
            }
            None => None,
        }
    }

    /// Returns a clone of the value for `key`, when present.
    pub fn get(&self, key: &K) -> Option<V> {
        self.inner.entries.read().get(key).cloned()
    }

    /// Returns `true` when the map holds an entry for `key`.
    pub fn contains_key(&self, key: &K) -> bool {
        self.inner.entries.read().contains_key(key)
    }

    /// Returns a copy of the current contents.
    pub fn snapshot(&self) -> HashMap<K, V> {
        self.inner.entries.read().clone()
    }

    /// Number of entries currently held.
    pub fn len(&self) -> usize {
        self.inner.entries.read().len()
    }

    /// Returns `true` when the map is empty.
    pub fn is_empty(&self) -> bool {
        self.inner.entries.read().is_empty()
    }

    /// Bridges every mutation into a stream of [`MapChange`] events.
    pub fn changes(&self) -> impl Stream<Item = MapChange<K, V>> + Send + Unpin {
        self.subscribe().map(|event| event.change)
    }

    /// Bridges inserted entries into a stream of key-value pairs.
    pub fn insertions(&self) -> impl Stream<Item = (K, V)> + Send + Unpin {
        self.subscribe().filter_map(|event| {
            future::ready(match event.change {
                MapChange::Inserted { key, value } => Some((key, value)),
                MapChange::Removed { .. } => None,
            })
        })
    }

    /// Bridges removed entries into a stream of key-value pairs.
    pub fn removals(&self) -> impl Stream<Item = (K, V)> + Send + Unpin {
        self.subscribe().filter_map(|event| {
            future::ready(match event.change {
                MapChange::Removed { key, value } => Some((key, value)),
                MapChange::Inserted { .. } => None,
            })
        })
    }

    /// Emits a snapshot of the whole map after each mutation.
    pub fn on_changed(&self) -> impl Stream<Item = HashMap<K, V>> + Send + Unpin {
        self.subscribe().map(|event| event.snapshot)
    }

    fn subscribe(&self) -> UnboundedReceiverStream<MapEvent<K, V>> {
        let (tx, rx) = mpsc::unbounded_channel();
        self.inner.subscribers.lock().push(tx);
        UnboundedReceiverStream::new(rx)
    }

    fn notify(
        subscribers: &mut Vec<mpsc::UnboundedSender<MapEvent<K, V>>>,
        event: MapEvent<K, V>,
    ) {
        subscribers.retain(|tx| tx.send(event.clone()).is_ok());
    }
}
