// Copyright 2026 The flowfx authors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Emission counting operator.
//!
//! This module provides the [`count_emissions`](CountEmissionsExt::count_emissions)
//! operator and its convenience forms: a stateful pass-through decorator that
//! counts every value it forwards and reports the running total to
//! user-supplied callbacks.
//!
//! # Overview
//!
//! Each decorated stream instance owns fresh counter state (`count` starting
//! at 0, a `done` flag), so independent pipelines built from the same
//! factory count independently. Values, ordering, and terminal signals pass
//! through unchanged; the only side effects are the callback invocations.
//!
//! # Basic Usage
//!
//! ```
//! use flowfx_core::IntoStreamItems;
//! use flowfx_stream::CountEmissionsExt;
//! use futures::{stream, StreamExt};
//! use std::sync::{Arc, Mutex};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let counts = Arc::new(Mutex::new(Vec::new()));
//! let sink = counts.clone();
//!
//! let mut counted = stream::iter(["Alpha", "Beta", "Gamma"])
//!     .into_items()
//!     .do_on_next_count(move |n| sink.lock().unwrap().push(n));
//!
//! while counted.next().await.is_some() {}
//! assert_eq!(*counts.lock().unwrap(), vec![1, 2, 3]);
//! # }
//! ```
//!
//! # Callback failures
//!
//! The full-form callbacks on [`CountObserver`] are fallible. A failing
//! `on_next` callback suppresses the value it was counting and surfaces
//! downstream as the stream's error signal; a failing `on_complete` callback
//! turns the completion into an error. If the `on_error` callback itself
//! fails, its error supersedes the one being reported (last failure wins).

use flowfx_core::{FlowError, Result, StreamItem};
use flowfx_dispatch::UiDispatcher;
use futures::{ready, Stream};
use parking_lot::Mutex;
use pin_project::pin_project;
use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};

type CountCallback = Box<dyn FnMut(usize) -> Result<()> + Send>;

/// The set of count callbacks observed by [`count_emissions`](CountEmissionsExt::count_emissions).
///
/// Any callback left unset is a no-op. All callbacks receive the number of
/// values successfully forwarded so far (1-based for `on_next`).
#[derive(Default)]
pub struct CountObserver {
    on_next: Option<CountCallback>,
    on_complete: Option<CountCallback>,
    on_error: Option<CountCallback>,
}

impl CountObserver {
    /// Creates an observer with no callbacks set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Invoked after each forwarded value with the running total.
    ///
    /// Returning an error suppresses the value being counted and terminates
    /// the stream with that error.
    pub fn on_next(mut self, f: impl FnMut(usize) -> Result<()> + Send + 'static) -> Self {
        self.on_next = Some(Box::new(f));
        self
    }

    /// Invoked once at successful completion with the final total.
    ///
    /// Returning an error replaces the completion with an error signal.
    pub fn on_complete(mut self, f: impl FnMut(usize) -> Result<()> + Send + 'static) -> Self {
        self.on_complete = Some(Box::new(f));
        self
    }

    /// Invoked once when the stream errors, with the count of values
    /// forwarded before the error.
    ///
    /// Returning an error supersedes the error being reported.
    pub fn on_error(mut self, f: impl FnMut(usize) -> Result<()> + Send + 'static) -> Self {
        self.on_error = Some(Box::new(f));
        self
    }

    fn notify_next(&mut self, count: usize) -> Result<()> {
        match &mut self.on_next {
            Some(f) => f(count),
            None => Ok(()),
        }
    }

    fn notify_complete(&mut self, count: usize) -> Result<()> {
        match &mut self.on_complete {
            Some(f) => f(count),
            None => Ok(()),
        }
    }

    /// Runs the error callback and resolves which error goes downstream.
    fn notify_error(&mut self, count: usize, original: FlowError) -> FlowError {
        match &mut self.on_error {
            Some(f) => match f(count) {
                Ok(()) => original,
                // Last failure wins: a failing error callback supersedes
                // the error it was reporting.
                Err(superseding) => superseding,
            },
            None => original,
        }
    }
}

impl std::fmt::Debug for CountObserver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CountObserver")
            .field("on_next", &self.on_next.is_some())
            .field("on_complete", &self.on_complete.is_some())
            .field("on_error", &self.on_error.is_some())
            .finish()
    }
}

/// Stream returned by the [`CountEmissionsExt`] operators.
#[pin_project]
pub struct CountEmissions<S> {
    #[pin]
    stream: S,
    observer: CountObserver,
    count: usize,
    done: bool,
}

impl<S, T> Stream for CountEmissions<S>
where
    S: Stream<Item = StreamItem<T>>,
{
    type Item = StreamItem<T>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let mut this = self.project();
        // Once a terminal signal has been consumed the upstream is never
        // polled again, so late signals from a non-conformant producer are
        // dropped rather than forwarded.
        if *this.done {
            return Poll::Ready(None);
        }
        match ready!(this.stream.as_mut().poll_next(cx)) {
            Some(StreamItem::Value(value)) => {
                *this.count += 1;
                match this.observer.notify_next(*this.count) {
                    Ok(()) => Poll::Ready(Some(StreamItem::Value(value))),
                    Err(failure) => {
                        *this.done = true;
                        let err = this.observer.notify_error(*this.count, failure);
                        Poll::Ready(Some(StreamItem::Error(err)))
                    }
                }
            }
            Some(StreamItem::Error(err)) => {
                *this.done = true;
                let err = this.observer.notify_error(*this.count, err);
                Poll::Ready(Some(StreamItem::Error(err)))
            }
            None => {
                *this.done = true;
                match this.observer.notify_complete(*this.count) {
                    Ok(()) => Poll::Ready(None),
                    Err(failure) => {
                        let err = this.observer.notify_error(*this.count, failure);
                        Poll::Ready(Some(StreamItem::Error(err)))
                    }
                }
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.done {
            (0, Some(0))
        } else {
            self.stream.size_hint()
        }
    }
}

/// Extension trait providing the emission counting operators.
///
/// Implemented for all streams of [`StreamItem<T>`].
pub trait CountEmissionsExt<T>: Stream<Item = StreamItem<T>> + Sized {
    /// Decorates this stream with the full set of count callbacks.
    ///
    /// # Behavior
    ///
    /// - **Values**: the counter is incremented, `on_next` observes the
    ///   running total, then the original value is forwarded unchanged. If
    ///   `on_next` fails, the value is not forwarded and the failure becomes
    ///   the stream's error signal (reported through `on_error` first).
    /// - **Completion**: `on_complete` observes the final total before the
    ///   stream ends. If it fails, the stream errors instead of completing.
    /// - **Errors**: `on_error` observes how many values were forwarded
    ///   before the error, then the error is forwarded. If `on_error` itself
    ///   fails, its failure supersedes the original (last failure wins).
    /// - **Terminal idempotence**: exactly one terminal callback fires per
    ///   stream instance; nothing fires after it.
    /// - **Cancellation**: dropping the decorated stream drops the upstream;
    ///   no callback runs afterwards.
    ///
    /// # Examples
    ///
    /// ```
    /// use flowfx_core::{FlowError, IntoStreamItems};
    /// use flowfx_stream::{CountEmissionsExt, CountObserver};
    /// use futures::{stream, StreamExt};
    ///
    /// # #[tokio::main(flavor = "current_thread")]
    /// # async fn main() {
    /// let observer = CountObserver::new()
    ///     .on_next(|n| if n < 3 { Ok(()) } else { Err(FlowError::stream_error("too many")) });
    ///
    /// let mut counted = stream::iter([10, 20, 30]).into_items().count_emissions(observer);
    ///
    /// assert_eq!(counted.next().await.unwrap().ok(), Some(10));
    /// assert_eq!(counted.next().await.unwrap().ok(), Some(20));
    /// // The third value is suppressed by the failing callback.
    /// assert!(counted.next().await.unwrap().is_error());
    /// assert!(counted.next().await.is_none());
    /// # }
    /// ```
    fn count_emissions(self, observer: CountObserver) -> CountEmissions<Self> {
        CountEmissions {
            stream: self,
            observer,
            count: 0,
            done: false,
        }
    }

    /// Executes a side effect with the accumulating count of emissions for
    /// each forwarded value.
    fn do_on_next_count<F>(self, mut f: F) -> CountEmissions<Self>
    where
        F: FnMut(usize) + Send + 'static,
    {
        self.count_emissions(CountObserver::new().on_next(move |n| {
            f(n);
            Ok(())
        }))
    }

    /// Executes a side effect with the total count of emissions when the
    /// stream completes.
    fn do_on_complete_count<F>(self, mut f: F) -> CountEmissions<Self>
    where
        F: FnMut(usize) + Send + 'static,
    {
        self.count_emissions(CountObserver::new().on_complete(move |n| {
            f(n);
            Ok(())
        }))
    }

    /// Executes a side effect with the total count of emissions when the
    /// stream errors.
    fn do_on_error_count<F>(self, mut f: F) -> CountEmissions<Self>
    where
        F: FnMut(usize) + Send + 'static,
    {
        self.count_emissions(CountObserver::new().on_error(move |n| {
            f(n);
            Ok(())
        }))
    }

    /// Executes a side effect on the UI thread with the accumulating count of
    /// emissions for each forwarded value.
    ///
    /// The pipeline does not wait for the posted callback; counts arrive on
    /// the dispatcher in emission order.
    fn do_on_next_count_ui<D, F>(self, dispatcher: D, f: F) -> CountEmissions<Self>
    where
        D: UiDispatcher,
        F: FnMut(usize) + Send + 'static,
    {
        let f = Arc::new(Mutex::new(f));
        self.do_on_next_count(move |n| {
            let f = f.clone();
            dispatcher.post(Box::new(move || (*f.lock())(n)));
        })
    }

    /// Executes a side effect on the UI thread with the total count of
    /// emissions when the stream completes.
    fn do_on_complete_count_ui<D, F>(self, dispatcher: D, f: F) -> CountEmissions<Self>
    where
        D: UiDispatcher,
        F: FnMut(usize) + Send + 'static,
    {
        let f = Arc::new(Mutex::new(f));
        self.do_on_complete_count(move |n| {
            let f = f.clone();
            dispatcher.post(Box::new(move || (*f.lock())(n)));
        })
    }

    /// Executes a side effect on the UI thread with the total count of
    /// emissions when the stream errors.
    fn do_on_error_count_ui<D, F>(self, dispatcher: D, f: F) -> CountEmissions<Self>
    where
        D: UiDispatcher,
        F: FnMut(usize) + Send + 'static,
    {
        let f = Arc::new(Mutex::new(f));
        self.do_on_error_count(move |n| {
            let f = f.clone();
            dispatcher.post(Box::new(move || (*f.lock())(n)));
        })
    }
}

impl<S, T> CountEmissionsExt<T> for S where S: Stream<Item = StreamItem<T>> {}
