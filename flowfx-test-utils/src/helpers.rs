// Copyright 2026 The flowfx authors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use flowfx_core::StreamItem;
use futures::{Stream, StreamExt};
use std::time::Duration;
use tokio::time::sleep;

/// Awaits the next item, panicking if nothing arrives within the timeout.
pub async fn next_item<S, T>(stream: &mut S, timeout_ms: u64) -> StreamItem<T>
where
    S: Stream<Item = StreamItem<T>> + Unpin,
{
    tokio::select! {
        item = stream.next() => item.expect("stream ended while an item was expected"),
        _ = sleep(Duration::from_millis(timeout_ms)) => {
            panic!("no item emitted within {timeout_ms}ms");
        }
    }
}

/// Awaits the next item and unwraps its value, panicking on error items,
/// stream end, or timeout.
pub async fn next_value<S, T>(stream: &mut S, timeout_ms: u64) -> T
where
    S: Stream<Item = StreamItem<T>> + Unpin,
    T: std::fmt::Debug,
{
    match next_item(stream, timeout_ms).await {
        StreamItem::Value(v) => v,
        StreamItem::Error(e) => panic!("expected a value, got error: {e}"),
    }
}

/// Asserts that the stream has ended (yields `None`) within the timeout.
pub async fn assert_stream_ended<S, T>(stream: &mut S, timeout_ms: u64)
where
    S: Stream<Item = StreamItem<T>> + Unpin,
{
    tokio::select! {
        item = stream.next() => {
            assert!(item.is_none(), "expected stream end, got an item");
        }
        _ = sleep(Duration::from_millis(timeout_ms)) => {
            panic!("stream did not end within {timeout_ms}ms");
        }
    }
}

/// Asserts that nothing is emitted for the duration of the timeout.
pub async fn assert_no_element_emitted<S, T>(stream: &mut S, timeout_ms: u64)
where
    S: Stream<Item = T> + Unpin,
{
    tokio::select! {
        _item = stream.next() => {
            panic!("unexpected emission, expected no output");
        }
        _ = sleep(Duration::from_millis(timeout_ms)) => {}
    }
}
