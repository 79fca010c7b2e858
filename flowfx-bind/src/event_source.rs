// Copyright 2026 The flowfx authors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! A fan-out source for UI events.
//!
//! [`EventSource<E>`] is the bridge point for toolkit events (clicks, key
//! presses, window events): the UI side calls [`fire`](EventSource::fire),
//! and each [`events`](EventSource::events) stream receives every event
//! fired after its subscription, in firing order.

use futures::Stream;
use parking_lot::Mutex;
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio_stream::wrappers::UnboundedReceiverStream;

/// A multicast event source, cheap to clone and share.
pub struct EventSource<E> {
    subscribers: Arc<Mutex<Vec<mpsc::UnboundedSender<E>>>>,
}

impl<E> Clone for EventSource<E> {
    fn clone(&self) -> Self {
        Self {
            subscribers: self.subscribers.clone(),
        }
    }
}

impl<E> Default for EventSource<E> {
    fn default() -> Self {
        Self {
            subscribers: Arc::new(Mutex::new(Vec::new())),
        }
    }
}

impl<E: Clone + Send + 'static> EventSource<E> {
    /// Creates a source with no subscribers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Delivers `event` to every live subscriber, pruning dropped ones.
    pub fn fire(&self, event: E) {
        self.subscribers
            .lock()
            .retain(|tx| tx.send(event.clone()).is_ok());
    }

    /// Bridges this source into a stream of events fired after subscription.
    pub fn events(&self) -> impl Stream<Item = E> + Send + Unpin {
        let (tx, rx) = mpsc::unbounded_channel();
        self.subscribers.lock().push(tx);
        UnboundedReceiverStream::new(rx)
    }

    /// Number of live subscriber streams (after pruning on the last `fire`).
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.lock().len()
    }
}
