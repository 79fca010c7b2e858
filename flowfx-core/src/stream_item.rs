// Copyright 2026 The flowfx authors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::error::FlowError;

/// A stream item that can be either a value or an error.
///
/// This enum lets adapters propagate errors through the stream while
/// processing values, following Rx-style error semantics where an error is a
/// terminal signal for the pipelines in this workspace.
#[derive(Debug, Clone)]
pub enum StreamItem<T> {
    /// A successful value
    Value(T),
    /// An error signal
    Error(FlowError),
}

impl<T: PartialEq> PartialEq for StreamItem<T> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (StreamItem::Value(a), StreamItem::Value(b)) => a == b,
            _ => false, // Errors are never equal
        }
    }
}

impl<T> StreamItem<T> {
    /// Returns `true` if this is a `Value`.
    pub const fn is_value(&self) -> bool {
        matches!(self, StreamItem::Value(_))
    }

    /// Returns `true` if this is an `Error`.
    pub const fn is_error(&self) -> bool {
        matches!(self, StreamItem::Error(_))
    }

    /// Converts from `StreamItem<T>` to `Option<T>`, discarding errors.
    pub fn ok(self) -> Option<T> {
        match self {
            StreamItem::Value(v) => Some(v),
            StreamItem::Error(_) => None,
        }
    }

    /// Converts from `StreamItem<T>` to `Option<FlowError>`, discarding values.
    pub fn err(self) -> Option<FlowError> {
        match self {
            StreamItem::Value(_) => None,
            StreamItem::Error(e) => Some(e),
        }
    }

    /// Maps a `StreamItem<T>` to `StreamItem<U>` by applying a function to the
    /// contained value.
    ///
    /// Errors are propagated unchanged.
    pub fn map<U, F>(self, f: F) -> StreamItem<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            StreamItem::Value(v) => StreamItem::Value(f(v)),
            StreamItem::Error(e) => StreamItem::Error(e),
        }
    }

    /// Returns the contained value, panicking if it's an error.
    ///
    /// # Panics
    ///
    /// Panics if the item is an `Error`.
    pub fn unwrap(self) -> T {
        match self {
            StreamItem::Value(v) => v,
            StreamItem::Error(e) => {
                panic!("called `StreamItem::unwrap()` on an `Error` value: {:?}", e)
            }
        }
    }
}

impl<T> From<T> for StreamItem<T> {
    fn from(value: T) -> Self {
        StreamItem::Value(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn value_accessors() {
        let item = StreamItem::Value(7);
        assert!(item.is_value());
        assert_eq!(item.ok(), Some(7));
    }

    #[test]
    fn error_accessors() {
        let item: StreamItem<i32> = StreamItem::Error(FlowError::stream_error("bad"));
        assert!(item.is_error());
        assert!(item.err().is_some());
    }

    #[test]
    fn map_skips_errors() {
        let item: StreamItem<i32> = StreamItem::Error(FlowError::stream_error("bad"));
        let mapped = item.map(|v| v * 2);
        assert!(mapped.is_error());
    }

    #[test]
    fn errors_never_compare_equal() {
        let a: StreamItem<i32> = StreamItem::Error(FlowError::stream_error("x"));
        let b: StreamItem<i32> = StreamItem::Error(FlowError::stream_error("x"));
        assert_ne!(a, b);
    }
}
