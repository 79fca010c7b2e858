// Copyright 2026 The flowfx authors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]
//! Shared signal model for the flowfx adapter crates.
//!
//! Streams in flowfx carry [`StreamItem<T>`]: either a successful value or a
//! [`FlowError`]. Completion is the native end of the stream. This mirrors
//! the three signal kinds of push-based reactive runtimes (value, error,
//! completion) while staying a plain `futures::Stream`.

pub mod error;
pub mod into_items;
pub mod stream_item;

pub use self::error::{FlowError, Result};
pub use self::into_items::IntoStreamItems;
pub use self::stream_item::StreamItem;
