// Copyright 2026 The flowfx authors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Error types for the flowfx adapter crates.
//!
//! All failures surface to downstream consumers as the error signal of the
//! stream they travel through; nothing is retried or recovered locally.
//!
//! # Examples
//!
//! ```
//! use flowfx_core::{FlowError, Result};
//!
//! fn refresh() -> Result<()> {
//!     Err(FlowError::stream_error("source not ready"))
//! }
//! ```

use std::sync::Arc;

/// Root error type for all flowfx operations.
///
/// `FlowError` is `Clone` so that a single failure can be handed to a
/// UI-thread callback and, independently, forwarded downstream as the
/// stream's error signal.
#[derive(Debug, Clone, thiserror::Error)]
pub enum FlowError {
    /// Stream processing encountered an error.
    ///
    /// General-purpose variant for failures that arise inside a pipeline and
    /// don't fit a more specific category.
    #[error("Stream processing error: {context}")]
    StreamProcessingError {
        /// Description of what went wrong during stream processing
        context: String,
    },

    /// A user-supplied callback failed.
    ///
    /// Wraps errors returned by user callbacks (count observers, side-effect
    /// hooks) so they can propagate through the stream instead of being
    /// swallowed or crashing the emitting thread.
    #[error("User callback error: {0}")]
    UserError(#[source] Arc<dyn std::error::Error + Send + Sync>),

    /// The UI dispatcher is no longer accepting work.
    ///
    /// Emitted when a task is posted to a dispatcher whose executor thread
    /// has already shut down.
    #[error("Dispatch error: {context}")]
    DispatchError {
        /// Context about the failed dispatch
        context: String,
    },
}

impl FlowError {
    /// Create a stream processing error with the given context.
    pub fn stream_error(context: impl Into<String>) -> Self {
        Self::StreamProcessingError {
            context: context.into(),
        }
    }

    /// Wrap a user-callback failure.
    pub fn user_error(source: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::UserError(Arc::new(source))
    }

    /// Create a dispatch error with the given context.
    pub fn dispatch_error(context: impl Into<String>) -> Self {
        Self::DispatchError {
            context: context.into(),
        }
    }
}

/// Convenience alias used throughout the flowfx crates.
pub type Result<T> = std::result::Result<T, FlowError>;
