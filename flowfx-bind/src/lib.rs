// Copyright 2026 The flowfx authors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]
//! Observable UI state and its stream bridges.
//!
//! This crate provides both directions of the UI/stream boundary:
//!
//! - UI toolkit side → stream: [`Property`] (observable value),
//!   [`ObservableList`] and [`ObservableMap`] (observable collections),
//!   and [`EventSource`] (UI events) each expose bridge methods producing
//!   plain `futures::Stream`s of their changes.
//! - Stream → UI side: [`Binding`] subscribes to a stream and exposes its
//!   latest value; [`Property::bind`] makes a property follow a stream.
//!
//! Bridges never alter value identity or ordering. Every binding owns
//! exactly one subscription, released in full by
//! [`dispose`](Disposable::dispose) (or drop).

pub mod binding;
pub mod disposable;
pub mod event_source;
pub mod observable_list;
pub mod observable_map;
pub mod property;

pub use self::binding::{Binding, BindingSideEffects, ToBindingExt};
pub use self::disposable::{CompositeBinding, Disposable};
pub use self::event_source::EventSource;
pub use self::observable_list::{ListChange, ObservableList};
pub use self::observable_map::{MapChange, ObservableMap};
pub use self::property::{Change, Property};
