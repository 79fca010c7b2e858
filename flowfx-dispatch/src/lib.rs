// Copyright 2026 The flowfx authors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]
//! UI-thread dispatch for flowfx.
//!
//! GUI toolkits confine all UI mutation to one designated thread and expose a
//! "run this later on the UI thread" primitive. This crate captures that
//! contract as the [`UiDispatcher`] trait and provides [`UiThread`], a
//! single-threaded FIFO executor backed by a dedicated OS thread, for tests
//! and headless embeddings.
//!
//! Posted tasks run asynchronously relative to the posting thread and in the
//! order they were posted.

pub mod dispatcher;
pub mod ui_thread;

pub use self::dispatcher::UiDispatcher;
pub use self::ui_thread::UiThread;
