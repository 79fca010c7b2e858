// Copyright 2026 The flowfx authors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]
//! Test utilities for the flowfx adapter crates.
//!
//! Tests drive pipelines imperatively through channels: send values (or
//! explicit error items) from the test body, then await and assert on the
//! decorated stream. This crate provides those channels plus timeout-guarded
//! assertion helpers. It is intended for development and testing only.

pub mod helpers;

use flowfx_core::StreamItem;
use futures::{Stream, StreamExt};
use tokio::sync::mpsc;
use tokio_stream::wrappers::UnboundedReceiverStream;

pub use helpers::{assert_no_element_emitted, assert_stream_ended, next_item, next_value};

/// Creates a test channel that automatically wraps values in
/// [`StreamItem::Value`].
///
/// # Example
///
/// ```
/// use flowfx_test_utils::test_channel;
/// use futures::StreamExt;
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let (tx, mut stream) = test_channel();
/// tx.send("Alpha").unwrap();
/// assert_eq!(stream.next().await.unwrap().ok(), Some("Alpha"));
/// # }
/// ```
pub fn test_channel<T: Send + 'static>() -> (
    mpsc::UnboundedSender<T>,
    impl Stream<Item = StreamItem<T>> + Send + Unpin,
) {
    let (tx, rx) = mpsc::unbounded_channel();
    let stream = UnboundedReceiverStream::new(rx).map(StreamItem::Value);
    (tx, stream)
}

/// Creates a test channel that accepts [`StreamItem<T>`] directly, for
/// driving error-path tests.
///
/// # Example
///
/// ```
/// use flowfx_core::{FlowError, StreamItem};
/// use flowfx_test_utils::test_channel_with_errors;
/// use futures::StreamExt;
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let (tx, mut stream) = test_channel_with_errors::<i32>();
/// tx.send(StreamItem::Value(1)).unwrap();
/// tx.send(StreamItem::Error(FlowError::stream_error("boom"))).unwrap();
/// assert!(stream.next().await.unwrap().is_value());
/// assert!(stream.next().await.unwrap().is_error());
/// # }
/// ```
pub fn test_channel_with_errors<T: Send + 'static>() -> (
    mpsc::UnboundedSender<StreamItem<T>>,
    impl Stream<Item = StreamItem<T>> + Send + Unpin,
) {
    let (tx, rx) = mpsc::unbounded_channel();
    (tx, UnboundedReceiverStream::new(rx))
}
