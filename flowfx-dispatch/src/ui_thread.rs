// Copyright 2026 The flowfx authors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! A dedicated-thread FIFO executor implementing [`UiDispatcher`].
//!
//! [`UiThread`] is the stand-in for a real toolkit's application thread: one
//! OS thread draining an unbounded queue. Tasks run strictly in post order.
//! A panicking task is caught and logged without taking the executor down,
//! matching how UI toolkits isolate failing runnables.
//!
//! # Examples
//!
//! ```
//! use flowfx_dispatch::{UiDispatcher, UiThread};
//! use std::sync::Arc;
//!
//! let ui = Arc::new(UiThread::new());
//! let (tx, rx) = std::sync::mpsc::channel();
//! let probe = ui.clone();
//! ui.post(Box::new(move || {
//!     tx.send(probe.is_dispatch_thread()).unwrap();
//! }));
//! assert!(rx.recv().unwrap());
//! ```

use crate::dispatcher::{Task, UiDispatcher};
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::thread::{self, JoinHandle, ThreadId};
use tokio::sync::mpsc;
use tracing::{error, warn};

/// Single-threaded FIFO executor backed by a dedicated OS thread.
///
/// Dropping the `UiThread` closes the queue; already-posted tasks drain
/// before the executor thread exits and the drop joins it.
pub struct UiThread {
    sender: Option<mpsc::UnboundedSender<Task>>,
    thread_id: ThreadId,
    handle: Option<JoinHandle<()>>,
}

impl UiThread {
    /// Spawns the executor thread and returns its dispatcher handle.
    ///
    /// # Panics
    ///
    /// Panics if the OS refuses to spawn a thread.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::unbounded_channel::<Task>();
        let handle = thread::Builder::new()
            .name("flowfx-ui".into())
            .spawn(move || {
                while let Some(task) = receiver.blocking_recv() {
                    if catch_unwind(AssertUnwindSafe(task)).is_err() {
                        error!("ui task panicked; executor thread continues");
                    }
                }
            })
            .expect("failed to spawn ui dispatch thread");
        let thread_id = handle.thread().id();
        Self {
            sender: Some(sender),
            thread_id,
            handle: Some(handle),
        }
    }
}

impl Default for UiThread {
    fn default() -> Self {
        Self::new()
    }
}

impl UiDispatcher for UiThread {
    fn post(&self, task: Task) {
        let Some(sender) = &self.sender else {
            warn!("task posted to a shut-down ui thread; dropping it");
            return;
        };
        if sender.send(task).is_err() {
            warn!("task posted to a shut-down ui thread; dropping it");
        }
    }

    fn is_dispatch_thread(&self) -> bool {
        thread::current().id() == self.thread_id
    }
}

impl Drop for UiThread {
    fn drop(&mut self) {
        // Closing the queue lets the executor drain pending tasks and exit.
        drop(self.sender.take());
        if let Some(handle) = self.handle.take() {
            // A task may hold the last handle; joining from the dispatch
            // thread itself would deadlock.
            if thread::current().id() == self.thread_id {
                return;
            }
            if handle.join().is_err() {
                error!("ui dispatch thread terminated abnormally");
            }
        }
    }
}
