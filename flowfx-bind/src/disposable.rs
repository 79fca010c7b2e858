// Copyright 2026 The flowfx authors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use parking_lot::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

/// A resource holding a subscription that can be released early.
pub trait Disposable {
    /// Releases the subscription. Idempotent.
    fn dispose(&self);

    /// Returns `true` once [`dispose`](Self::dispose) has run.
    fn is_disposed(&self) -> bool;
}

/// A collection of disposables released together.
///
/// Bindings for one screen or widget are typically gathered here and
/// disposed in bulk when the widget goes away.
#[derive(Default)]
pub struct CompositeBinding {
    bindings: Mutex<Vec<Box<dyn Disposable + Send>>>,
    disposed: AtomicBool,
}

impl CompositeBinding {
    /// Creates an empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a disposable to the collection.
    ///
    /// If the collection has already been disposed, the new entry is
    /// disposed immediately instead of being retained.
    pub fn add(&self, binding: impl Disposable + Send + 'static) {
        if self.is_disposed() {
            binding.dispose();
            return;
        }
        self.bindings.lock().push(Box::new(binding));
    }

    /// Number of disposables currently held.
    pub fn len(&self) -> usize {
        self.bindings.lock().len()
    }

    /// Returns `true` when the collection holds nothing.
    pub fn is_empty(&self) -> bool {
        self.bindings.lock().is_empty()
    }
}

impl Disposable for CompositeBinding {
    fn dispose(&self) {
        if self.disposed.swap(true, Ordering::SeqCst) {
            return;
        }
        for binding in self.bindings.lock().drain(..) {
            binding.dispose();
        }
    }

    fn is_disposed(&self) -> bool {
        self.disposed.load(Ordering::SeqCst)
    }
}
