// Copyright 2026 The flowfx authors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Lifecycle side effects executed on the UI thread.
//!
//! The [`UiSideEffectsExt`] family decorates a stream so that a callback runs
//! on a [`UiDispatcher`] at a chosen lifecycle point: per value, on error, on
//! completion, at subscription, at termination, or when the stream is
//! dropped without terminating. The pipeline never waits for a posted
//! callback; because the dispatcher is FIFO, callbacks observe pipeline
//! order.
//!
//! ```
//! use flowfx_core::IntoStreamItems;
//! use flowfx_dispatch::{UiDispatcher, UiThread};
//! use flowfx_stream::UiSideEffectsExt;
//! use futures::{stream, StreamExt};
//! use std::sync::{mpsc, Arc};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let ui = Arc::new(UiThread::new());
//! let (tx, rx) = mpsc::channel();
//!
//! let probe = ui.clone();
//! let mut labels = stream::iter(["Alpha"])
//!     .into_items()
//!     .do_on_next_ui(ui.clone(), move |label| {
//!         tx.send((label, probe.is_dispatch_thread())).unwrap();
//!     });
//!
//! while labels.next().await.is_some() {}
//! assert_eq!(rx.recv().unwrap(), ("Alpha", true));
//! # }
//! ```

use flowfx_core::{FlowError, StreamItem};
use flowfx_dispatch::UiDispatcher;
use futures::{ready, Stream};
use parking_lot::Mutex;
use pin_project::{pin_project, pinned_drop};
use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};

type Hook = Box<dyn FnOnce() + Send>;
type Shared<A> = Arc<Mutex<Box<dyn FnMut(A) + Send>>>;

/// Stream returned by the [`UiSideEffectsExt`] operators.
#[pin_project(PinnedDrop)]
pub struct UiSideEffects<S, T, D: UiDispatcher> {
    #[pin]
    stream: S,
    dispatcher: D,
    on_subscribe: Option<Hook>,
    on_next: Option<Shared<T>>,
    on_error: Option<Shared<FlowError>>,
    on_complete: Option<Hook>,
    on_terminate: Option<Hook>,
    on_dispose: Option<Hook>,
    terminated: bool,
}

impl<S, T, D: UiDispatcher> UiSideEffects<S, T, D> {
    fn new(stream: S, dispatcher: D) -> Self {
        Self {
            stream,
            dispatcher,
            on_subscribe: None,
            on_next: None,
            on_error: None,
            on_complete: None,
            on_terminate: None,
            on_dispose: None,
            terminated: false,
        }
    }
}

impl<S, T, D> Stream for UiSideEffects<S, T, D>
where
    S: Stream<Item = StreamItem<T>>,
    T: Clone + Send + 'static,
    D: UiDispatcher,
{
    type Item = StreamItem<T>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let mut this = self.project();
        // Subscription, in pull terms, is the first poll.
        if let Some(hook) = this.on_subscribe.take() {
            this.dispatcher.post(hook);
        }
        if *this.terminated {
            return Poll::Ready(None);
        }
        match ready!(this.stream.as_mut().poll_next(cx)) {
            Some(StreamItem::Value(value)) => {
                if let Some(cb) = this.on_next {
                    let cb = cb.clone();
                    let posted = value.clone();
                    this.dispatcher.post(Box::new(move || (*cb.lock())(posted)));
                }
                Poll::Ready(Some(StreamItem::Value(value)))
            }
            Some(StreamItem::Error(err)) => {
                *this.terminated = true;
                if let Some(hook) = this.on_terminate.take() {
                    this.dispatcher.post(hook);
                }
                if let Some(cb) = this.on_error {
                    let cb = cb.clone();
                    let posted = err.clone();
                    this.dispatcher.post(Box::new(move || (*cb.lock())(posted)));
                }
                Poll::Ready(Some(StreamItem::Error(err)))
            }
            None => {
                *this.terminated = true;
                if let Some(hook) = this.on_terminate.take() {
                    this.dispatcher.post(hook);
                }
                if let Some(hook) = this.on_complete.take() {
                    this.dispatcher.post(hook);
                }
                Poll::Ready(None)
            }
        }
    }
}

#[pinned_drop]
impl<S, T, D: UiDispatcher> PinnedDrop for UiSideEffects<S, T, D> {
    fn drop(self: Pin<&mut Self>) {
        let this = self.project();
        // Disposal fires only when the stream is dropped mid-flight.
        if !*this.terminated {
            if let Some(hook) = this.on_dispose.take() {
                this.dispatcher.post(hook);
            }
        }
    }
}

/// Extension trait providing UI-thread side-effect operators.
///
/// Each operator posts its callback to the dispatcher instead of invoking it
/// on the emitting thread; the wrapped callback therefore always executes on
/// the toolkit's designated UI thread, asynchronously relative to the
/// pipeline.
pub trait UiSideEffectsExt<T>: Stream<Item = StreamItem<T>> + Sized
where
    T: Clone + Send + 'static,
{
    /// Performs the provided value action on the UI thread.
    ///
    /// The value is cloned for the posted callback; the original is forwarded
    /// downstream unchanged.
    fn do_on_next_ui<D, F>(self, dispatcher: D, f: F) -> UiSideEffects<Self, T, D>
    where
        D: UiDispatcher,
        F: FnMut(T) + Send + 'static,
    {
        let mut decorated = UiSideEffects::new(self, dispatcher);
        decorated.on_next = Some(Arc::new(Mutex::new(Box::new(f))));
        decorated
    }

    /// Performs the provided error action on the UI thread.
    fn do_on_error_ui<D, F>(self, dispatcher: D, f: F) -> UiSideEffects<Self, T, D>
    where
        D: UiDispatcher,
        F: FnMut(FlowError) + Send + 'static,
    {
        let mut decorated = UiSideEffects::new(self, dispatcher);
        decorated.on_error = Some(Arc::new(Mutex::new(Box::new(f))));
        decorated
    }

    /// Performs the provided completion action on the UI thread.
    fn do_on_complete_ui<D, F>(self, dispatcher: D, f: F) -> UiSideEffects<Self, T, D>
    where
        D: UiDispatcher,
        F: FnOnce() + Send + 'static,
    {
        let mut decorated = UiSideEffects::new(self, dispatcher);
        decorated.on_complete = Some(Box::new(f));
        decorated
    }

    /// Performs the provided action on the UI thread when the stream is first
    /// polled.
    fn do_on_subscribe_ui<D, F>(self, dispatcher: D, f: F) -> UiSideEffects<Self, T, D>
    where
        D: UiDispatcher,
        F: FnOnce() + Send + 'static,
    {
        let mut decorated = UiSideEffects::new(self, dispatcher);
        decorated.on_subscribe = Some(Box::new(f));
        decorated
    }

    /// Performs the provided action on the UI thread when the stream
    /// terminates, before the terminal signal (completion or error) is
    /// forwarded.
    fn do_on_terminate_ui<D, F>(self, dispatcher: D, f: F) -> UiSideEffects<Self, T, D>
    where
        D: UiDispatcher,
        F: FnOnce() + Send + 'static,
    {
        let mut decorated = UiSideEffects::new(self, dispatcher);
        decorated.on_terminate = Some(Box::new(f));
        decorated
    }

    /// Performs the provided action on the UI thread when the stream is
    /// dropped without having terminated.
    fn do_on_dispose_ui<D, F>(self, dispatcher: D, f: F) -> UiSideEffects<Self, T, D>
    where
        D: UiDispatcher,
        F: FnOnce() + Send + 'static,
    {
        let mut decorated = UiSideEffects::new(self, dispatcher);
        decorated.on_dispose = Some(Box::new(f));
        decorated
    }
}

impl<S, T> UiSideEffectsExt<T> for S
where
    S: Stream<Item = StreamItem<T>>,
    T: Clone + Send + 'static,
{
}
