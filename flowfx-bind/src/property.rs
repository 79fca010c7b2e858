// Copyright 2026 The flowfx authors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! An observable single-value container.
//!
//! [`Property<T>`] is the toolkit-property analog: it holds the current
//! value (possibly unset), and fans each update out to any number of
//! subscribed streams. The [`values`](Property::values) bridge emits the
//! live value immediately at subscription when one is present; an unset
//! property contributes nothing until it is first set.
//!
//! # Basic Usage
//!
//! ```
//! use flowfx_bind::Property;
//! use futures::StreamExt;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let name = Property::new("Alpha");
//! let mut values = name.values();
//!
//! // The current value is delivered immediately.
//! assert_eq!(values.next().await, Some("Alpha"));
//!
//! name.set("Beta");
//! assert_eq!(values.next().await, Some("Beta"));
//! # }
//! ```

use crate::binding::Binding;
use flowfx_core::StreamItem;
use futures::{stream, Stream, StreamExt};
use parking_lot::{Mutex, RwLock};
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio_stream::wrappers::UnboundedReceiverStream;

/// A value transition: the previous value (if any) and the new one.
#[derive(Debug, Clone, PartialEq)]
pub struct Change<T> {
    /// Value held before this change, `None` when the property was unset
    pub old: Option<T>,
    /// Value held after this change
    pub new: T,
}

struct Inner<T> {
    value: RwLock<Option<T>>,
    // Subscriber registration and notification are serialized by this lock
    // so a subscriber never sees its initial value twice or misses an update
    // racing with subscription.
    subscribers: Mutex<Vec<mpsc::UnboundedSender<Change<T>>>>,
}

/// An observable single-value container, cheap to clone and share.
pub struct Property<T> {
    inner: Arc<Inner<T>>,
}

impl<T> Clone for Property<T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<T> Default for Property<T> {
    fn default() -> Self {
        Self {
            inner: Arc::new(Inner {
                value: RwLock::new(None),
                subscribers: Mutex::new(Vec::new()),
            }),
        }
    }
}

impl<T: Clone + Send + Sync + 'static> Property<T> {
    /// Creates a property holding `initial`.
    pub fn new(initial: T) -> Self {
        let property = Self::default();
        *property.inner.value.write() = Some(initial);
        property
    }

    /// Creates an unset property.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Returns a clone of the current value, or `None` when unset.
    pub fn get(&self) -> Option<T> {
        self.inner.value.read().clone()
    }

    /// Stores a new value and notifies all subscribed streams, in
    /// subscription order. Subscribers whose streams were dropped are pruned.
    pub fn set(&self, value: T) {
        let mut subscribers = self.inner.subscribers.lock();
        let old = self.inner.value.write().replace(value.clone());
        let change = Change { old, new: value };
        subscribers.retain(|tx| tx.send(change.clone()).is_ok());
    }

    /// Bridges this property into a stream of values.
    ///
    /// Emits the current value immediately when the property is set, then
    /// every subsequent value in update order.
    pub fn values(&self) -> impl Stream<Item = T> + Send + Unpin {
        let (initial, rx) = self.subscribe();
        stream::iter(initial).chain(UnboundedReceiverStream::new(rx).map(|change| change.new))
    }

    /// Bridges this property into a stream of old/new [`Change`] pairs.
    ///
    /// Unlike [`values`](Self::values), nothing is emitted for the value
    /// already held at subscription.
    pub fn changes(&self) -> impl Stream<Item = Change<T>> + Send + Unpin {
        let (_, rx) = self.subscribe();
        UnboundedReceiverStream::new(rx)
    }

    /// Binds this property to a stream: the property follows every value the
    /// stream emits until the stream terminates or the returned [`Binding`]
    /// is disposed.
    pub fn bind<S>(&self, stream: S) -> Binding<T>
    where
        S: Stream<Item = StreamItem<T>> + Send + 'static,
    {
        let property = self.clone();
        Binding::with_sink(stream, Default::default(), move |value| property.set(value))
    }

    /// Number of live subscriber streams (after pruning on the last `set`).
    pub fn subscriber_count(&self) -> usize {
        self.inner.subscribers.lock().len()
    }

    fn subscribe(&self) -> (Option<T>, mpsc::UnboundedReceiver<Change<T>>) {
        let mut subscribers = self.inner.subscribers.lock();
        let current = self.inner.value.read().clone();
        let (tx, rx) = mpsc::unbounded_channel();
        subscribers.push(tx);
        (current, rx)
    }
}
