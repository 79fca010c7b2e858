// Copyright 2026 The flowfx authors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Prelude module re-exporting the operator traits and signal types.
//!
//! ```ignore
//! use flowfx_stream::prelude::*;
//!
//! let counted = stream
//!     .do_on_next_count(|n| println!("seen {n}"))
//!     .do_on_complete_count_ui(ui, |n| status_bar.set(n));
//! ```

pub use crate::count_emissions::{CountEmissionsExt, CountObserver};
pub use crate::ui_side_effects::UiSideEffectsExt;
pub use flowfx_core::{FlowError, IntoStreamItems, StreamItem};
