// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Prelude module re-exporting every operator trait and source.
//!
//! ```ignore
//! use chanflux_stream::prelude::*;
//!
//! let lengths = words.bind_items(|w| just(w.len())).take_items(10);
//! ```

pub use crate::aggregate::AggregateExt;
pub use crate::bind_items::BindItemsExt;
pub use crate::flatten_items::FlattenItemsExt;
pub use crate::map_items::MapItemsExt;
pub use crate::sources::{empty, just};
pub use crate::take_items::TakeItemsExt;

pub use chanflux_core::{CancelContext, CancellationToken, Receiver};
