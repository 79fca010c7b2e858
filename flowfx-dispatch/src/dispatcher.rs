// Copyright 2026 The flowfx authors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use std::sync::Arc;

/// A unit of work posted to the UI thread.
pub type Task = Box<dyn FnOnce() + Send + 'static>;

/// The UI toolkit's "post this to run later on the UI thread" contract.
///
/// Implementations must execute tasks on a single designated thread, in the
/// order they were posted (FIFO), without the posting thread waiting for
/// them. Posting is fire-and-forget: a dispatcher that can no longer run
/// tasks drops them.
pub trait UiDispatcher: Send + Sync + 'static {
    /// Posts a task to run later on the dispatch thread.
    fn post(&self, task: Task);

    /// Returns `true` when called from the dispatch thread itself.
    ///
    /// The equivalent of a toolkit's "is this the UI thread" check; side
    /// effects wrapped by the `_ui` operators observe `true` here.
    fn is_dispatch_thread(&self) -> bool;
}

impl<D: UiDispatcher> UiDispatcher for Arc<D> {
    fn post(&self, task: Task) {
        (**self).post(task);
    }

    fn is_dispatch_thread(&self) -> bool {
        (**self).is_dispatch_thread()
    }
}
