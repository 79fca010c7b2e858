// Copyright 2026 The flowfx authors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Stream-to-UI-value bindings.
//!
//! A [`Binding`] turns a stream into a live-updating value: one tokio task
//! per binding consumes the stream and stores the latest value for
//! synchronous reads. Disposing the binding aborts that task, which drops
//! the stream and thereby releases the single subscription the binding held.
//!
//! # Basic Usage
//!
//! ```
//! use flowfx_bind::{Disposable, ToBindingExt};
//! use flowfx_core::IntoStreamItems;
//! use futures::stream;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let binding = stream::iter([1, 2, 3]).into_items().to_binding();
//! tokio::task::yield_now().await;
//! assert_eq!(binding.get(), Some(3));
//! binding.dispose();
//! # }
//! ```

use crate::disposable::Disposable;
use flowfx_core::{FlowError, StreamItem};
use futures::{pin_mut, Stream, StreamExt};
use parking_lot::RwLock;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::debug;

/// Optional hooks invoked by the binding task as it consumes its stream.
///
/// Mirrors the side-effect builder passed to
/// [`to_binding_with`](ToBindingExt::to_binding_with):
///
/// ```ignore
/// let binding = stream.to_binding_with(|fx| {
///     fx.on_next(|v| println!("latest: {v:?}"));
///     fx.on_error(|e| eprintln!("source failed: {e}"));
/// });
/// ```
pub struct BindingSideEffects<T> {
    on_next: Option<Box<dyn FnMut(&T) + Send>>,
    on_complete: Option<Box<dyn FnOnce() + Send>>,
    on_error: Option<Box<dyn FnMut(&FlowError) + Send>>,
}

// No `T: Default` requirement; a derive would add one.
impl<T> Default for BindingSideEffects<T> {
    fn default() -> Self {
        Self {
            on_next: None,
            on_complete: None,
            on_error: None,
        }
    }
}

impl<T> BindingSideEffects<T> {
    /// Invoked with each value before it becomes the binding's current value.
    pub fn on_next(&mut self, f: impl FnMut(&T) + Send + 'static) {
        self.on_next = Some(Box::new(f));
    }

    /// Invoked once when the source stream completes.
    pub fn on_complete(&mut self, f: impl FnOnce() + Send + 'static) {
        self.on_complete = Some(Box::new(f));
    }

    /// Invoked when the source stream errors; the error terminates the
    /// binding's subscription.
    pub fn on_error(&mut self, f: impl FnMut(&FlowError) + Send + 'static) {
        self.on_error = Some(Box::new(f));
    }
}

/// A live-updating value backed by exactly one stream subscription.
pub struct Binding<T> {
    value: Arc<RwLock<Option<T>>>,
    task: tokio::task::JoinHandle<()>,
    disposed: AtomicBool,
}

impl<T: Clone + Send + Sync + 'static> Binding<T> {
    /// Subscribes to `stream` and tracks its latest value.
    pub fn new<S>(stream: S) -> Self
    where
        S: Stream<Item = StreamItem<T>> + Send + 'static,
    {
        Self::with_effects(stream, BindingSideEffects::default())
    }

    /// Subscribes with side-effect hooks.
    pub fn with_effects<S>(stream: S, effects: BindingSideEffects<T>) -> Self
    where
        S: Stream<Item = StreamItem<T>> + Send + 'static,
    {
        Self::with_sink(stream, effects, |_| {})
    }

    pub(crate) fn with_sink<S>(
        stream: S,
        mut effects: BindingSideEffects<T>,
        mut sink: impl FnMut(T) + Send + 'static,
    ) -> Self
    where
        S: Stream<Item = StreamItem<T>> + Send + 'static,
    {
        let value = Arc::new(RwLock::new(None));
        let cell = value.clone();
        let task = tokio::spawn(async move {
            pin_mut!(stream);
            while let Some(item) = stream.next().await {
                match item {
                    StreamItem::Value(v) => {
                        if let Some(f) = effects.on_next.as_mut() {
                            f(&v);
                        }
                        *cell.write() = Some(v.clone());
                        sink(v);
                    }
                    StreamItem::Error(e) => {
                        match effects.on_error.as_mut() {
                            Some(f) => f(&e),
                            None => debug!(error = %e, "binding source errored"),
                        }
                        return;
                    }
                }
            }
            if let Some(f) = effects.on_complete.take() {
                f();
            }
        });
        Self {
            value,
            task,
            disposed: AtomicBool::new(false),
        }
    }

    /// Returns a clone of the latest value the stream has produced, or
    /// `None` before the first emission.
    pub fn get(&self) -> Option<T> {
        self.value.read().clone()
    }
}

impl<T> Disposable for Binding<T> {
    fn dispose(&self) {
        if !self.disposed.swap(true, Ordering::SeqCst) {
            // Aborting the task drops the stream, releasing the subscription.
            self.task.abort();
        }
    }

    fn is_disposed(&self) -> bool {
        self.disposed.load(Ordering::SeqCst)
    }
}

impl<T> Drop for Binding<T> {
    fn drop(&mut self) {
        self.dispose();
    }
}

/// Extension trait turning a stream into a [`Binding`].
pub trait ToBindingExt<T>: Stream<Item = StreamItem<T>> + Sized + Send + 'static
where
    T: Clone + Send + Sync + 'static,
{
    /// Subscribes to this stream and exposes its latest value.
    fn to_binding(self) -> Binding<T> {
        Binding::new(self)
    }

    /// Subscribes with side-effect hooks configured through the closure.
    fn to_binding_with(self, configure: impl FnOnce(&mut BindingSideEffects<T>)) -> Binding<T> {
        let mut effects = BindingSideEffects::default();
        configure(&mut effects);
        Binding::with_effects(self, effects)
    }
}

impl<S, T> ToBindingExt<T> for S
where
    S: Stream<Item = StreamItem<T>> + Send + 'static,
    T: Clone + Send + Sync + 'static,
{
}
