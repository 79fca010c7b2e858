// Copyright 2026 The flowfx authors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]
//! Stream operators bridging reactive pipelines and UI-thread callbacks.
//!
//! Two operator families live here:
//!
//! - [`CountEmissionsExt`]: the emission counter, a pass-through decorator
//!   that counts forwarded values and reports running/final counts to
//!   user callbacks at each lifecycle point.
//! - [`UiSideEffectsExt`]: lifecycle side effects re-posted to a
//!   [`UiDispatcher`](flowfx_dispatch::UiDispatcher) so they run on the
//!   toolkit's designated UI thread.
//!
//! Both decorate a `Stream<Item = StreamItem<T>>` without altering the
//! values, ordering, or terminal signals seen downstream.

pub mod count_emissions;
pub mod prelude;
pub mod ui_side_effects;

pub use self::count_emissions::{CountEmissions, CountEmissionsExt, CountObserver};
pub use self::ui_side_effects::UiSideEffectsExt;
