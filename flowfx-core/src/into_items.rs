// Copyright 2026 The flowfx authors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Adapter from plain streams to the flowfx signal model.
//!
//! UI bridges produce plain `Stream<Item = T>` values (UI observables don't
//! error), while operators consume `Stream<Item = StreamItem<T>>`. This
//! module connects the two.

use crate::stream_item::StreamItem;
use futures::stream::Map;
use futures::{Stream, StreamExt};

/// Extension trait converting a plain stream into a stream of [`StreamItem`].
pub trait IntoStreamItems<T>: Stream<Item = T> + Sized {
    /// Wraps every item of this stream in [`StreamItem::Value`].
    ///
    /// # Examples
    ///
    /// ```
    /// use flowfx_core::{IntoStreamItems, StreamItem};
    /// use futures::{stream, StreamExt};
    ///
    /// # #[tokio::main(flavor = "current_thread")]
    /// # async fn main() {
    /// let mut items = stream::iter([1, 2]).into_items();
    /// assert_eq!(items.next().await, Some(StreamItem::Value(1)));
    /// # }
    /// ```
    fn into_items(self) -> Map<Self, fn(T) -> StreamItem<T>> {
        self.map(StreamItem::Value as fn(T) -> StreamItem<T>)
    }
}

impl<S, T> IntoStreamItems<T> for S where S: Stream<Item = T> {}
