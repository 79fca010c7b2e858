// Copyright 2026 The flowfx authors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! # flowfx
//!
//! Reactive stream adapters for UI toolkits.
//!
//! ## Overview
//!
//! flowfx connects `futures::Stream` pipelines to a UI toolkit's observable
//! world in both directions:
//!
//! - Observable state into streams: [`Property`], [`ObservableList`],
//!   [`ObservableMap`], and [`EventSource`] bridge current values,
//!   collection changes, and UI events into plain streams.
//! - Streams into observable state: [`Binding`] (and [`Property::bind`])
//!   turn a stream into a live-updating, disposable UI-bound value.
//! - Pipeline instrumentation: the emission counter
//!   ([`CountEmissionsExt`]) and the UI-thread side-effect operators
//!   ([`UiSideEffectsExt`]), which re-post callbacks to the toolkit's
//!   designated thread through a [`UiDispatcher`].
//!
//! ## Quick Start
//!
//! ```
//! use flowfx::prelude::*;
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() {
//!     let query = Property::new(String::from("Alpha"));
//!
//!     // Bridge the property into a stream, count emissions, and bind the
//!     // result to another property.
//!     let echoed = Property::empty();
//!     let _binding = echoed.bind(
//!         query
//!             .values()
//!             .into_items()
//!             .do_on_next_count(|n| println!("emission {n}")),
//!     );
//!
//!     query.set(String::from("Beta"));
//! }
//! ```

// Re-export the signal model
pub use flowfx_core::{FlowError, IntoStreamItems, Result, StreamItem};

// Re-export the operator surface
pub use flowfx_stream::{CountEmissions, CountEmissionsExt, CountObserver, UiSideEffectsExt};

// Re-export UI-thread dispatch
pub use flowfx_dispatch::{UiDispatcher, UiThread};

// Re-export the observable model and bindings
pub use flowfx_bind::{
    Binding, BindingSideEffects, Change, CompositeBinding, Disposable, EventSource, ListChange,
    MapChange, ObservableList, ObservableMap, Property, ToBindingExt,
};

/// Prelude module for convenient imports
pub mod prelude {
    pub use flowfx_bind::{
        Binding, CompositeBinding, Disposable, EventSource, ObservableList, ObservableMap,
        Property, ToBindingExt,
    };
    pub use flowfx_core::{FlowError, IntoStreamItems, StreamItem};
    pub use flowfx_dispatch::{UiDispatcher, UiThread};
    pub use flowfx_stream::{CountEmissionsExt, CountObserver, UiSideEffectsExt};
}
