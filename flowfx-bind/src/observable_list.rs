// Copyright 2026 The flowfx authors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! An observable collection with per-change stream bridges.
//!
//! [`ObservableList<T>`] mirrors a toolkit's observable list: a vector whose
//! mutations fan out as [`ListChange`] events. The bridges expose additions,
//! removals, all changes, or a post-change snapshot of the whole list.

use futures::{future, Stream, StreamExt};
use parking_lot::{Mutex, RwLock};
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio_stream::wrappers::UnboundedReceiverStream;

/// A single list mutation.
#[derive(Debug, Clone, PartialEq)]
pub enum ListChange<T> {
    /// An item was added to the list
    Added(T),
    /// An item was removed from the list
    Removed(T),
}

#[derive(Clone)]
struct ListEvent<T> {
    change: ListChange<T>,
    snapshot: Vec<T>,
}

struct Inner<T> {
    items: RwLock<Vec<T>>,
    subscribers: Mutex<Vec<mpsc::UnboundedSender<ListEvent<T>>>>,
}

/// An observable list, cheap to clone and share.
pub struct ObservableList<T> {
    inner: Arc<Inner<T>>,
}

impl<T> Clone for ObservableList<T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<T> Default for ObservableList<T> {
    fn default() -> Self {
        Self {
            inner: Arc::new(Inner {
                items: RwLock::new(Vec::new()),
                subscribers: Mutex::new(Vec::new()),
            }),
        }
    }
}

impl<T: Clone + Send + PartialEq + 'static> ObservableList<T> {
    /// Creates an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a list holding `items`; no change events are emitted for the
    /// initial contents.
    pub fn from_vec(items: Vec<T>) -> Self {
        let list = Self::default();
        *list.inner.items.write() = items;
        list
    }

    /// Appends an item, emitting `Added`.
    pub fn push(&self, item: T) {
        let mut subscribers = self.inner.subscribers.lock();
        let snapshot = {
            let mut items = self.inner.items.write();
            items.push(item.clone());
            items.clone()
        };
        let event = ListEvent {
            change: ListChange::Added(item),
            snapshot,
        };
        Self::notify(&mut subscribers, event);
    }

    /// Removes the first occurrence of `item`, emitting `Removed`.
    /// Returns `false` when the item was not present.
    pub fn remove(&self, item: &T) -> bool {
        let mut subscribers = self.inner.subscribers.lock();
        let removed = {
            let mut items = self.inner.items.write();
            match items.iter().position(|i| i == item) {
                Some(index) => {
                    let removed = items.remove(index);
                    Some((removed, items.clone()))
                }
                None => None,
            }
        };
        match removed {
            Some((removed, snapshot)) => {
                let event = ListEvent {
                    change: ListChange::Removed(removed),
                    snapshot,
                };
                Self::notify(&mut subscribers, event);
                true
            }
            None => false,
        }
    }

    /// Removes every item, emitting `Removed` for each in list order.
    pub fn clear(&self) {
        self.replace_contents(Vec::new());
    }

    /// Replaces the contents, emitting `Removed` for each old item then
    /// `Added` for each new one.
    pub fn set_all(&self, items: Vec<T>) {
        self.replace_contents(items);
    }

    /// Returns a copy of the current contents.
    pub fn snapshot(&self) -> Vec<T> {
        self.inner.items.read().clone()
    }

    /// Number of items currently held.
    pub fn len(&self) -> usize {
        self.inner.items.read().len()
    }

    /// Returns `true` when the list is empty.
    pub fn is_empty(&self) -> bool {
        self.inner.items.read().is_empty()
    }

    /// Bridges every mutation into a stream of [`ListChange`] events.
    pub fn changes(&self) -> impl Stream<Item = ListChange<T>> + Send + Unpin {
        self.subscribe().map(|event| event.change)
    }

    /// Bridges items added to the list into a stream.
    pub fn additions(&self) -> impl Stream<Item = T> + Send + Unpin {
        self.subscribe().filter_map(|event| {
            future::ready(match event.change {
                ListChange::Added(item) => Some(item),
                ListChange::Removed(_) => None,
            })
        })
    }

    /// Bridges items removed from the list into a stream.
    pub fn removals(&self) -> impl Stream<Item = T> + Send + Unpin {
        self.subscribe().filter_map(|event| {
            future::ready(match event.change {
                ListChange::Removed(item) => Some(item),
                ListChange::Added(_) => None,
            })
        })
    }

    /// Emits a snapshot of the whole list after each mutation.
    pub fn on_changed(&self) -> impl Stream<Item = Vec<T>> + Send + Unpin {
        self.subscribe().map(|event| event.snapshot)
    }

    fn replace_contents(&self, items: Vec<T>) {
        let mut subscribers = self.inner.subscribers.lock();
        let old = std::mem::replace(&mut *self.inner.items.write(), items.clone());
        // All events from one bulk mutation carry the final snapshot.
        for removed in old {
            let event = ListEvent {
                change: ListChange::Removed(removed),
                snapshot: items.clone(),
            };
            Self::notify(&mut subscribers, event);
        }
        for added in items.clone() {
            let event = ListEvent {
                change: ListChange::Added(added),
                snapshot: items.clone(),
            };
            Self::notify(&mut subscribers, event);
        }
    }

    fn subscribe(&self) -> UnboundedReceiverStream<ListEvent<T>> {
        let (tx, rx) = mpsc::unbounded_channel();
        self.inner.subscribers.lock().push(tx);
        UnboundedReceiverStream::new(rx)
    }

    fn notify(
        subscribers: &mut Vec<mpsc::UnboundedSender<ListEvent<T>>>,
        event: ListEvent<T>,
    ) {
        subscribers.retain(|tx| tx.send(event.clone()).is_ok());
    }
}
