//! Carousel - the pagination/fetch controller.
//!
//! This module implements the reactive pipeline that connects the pager
//! state to a host.
//!
//! # Pipeline Architecture
//!
//! ```text
//! pager signals -> displayed derived -> render effect -> Host
//! ```
//!
//! ## Data Flow
//!
//! 1. **pager signals** - backing store, page cursor, page size, completion
//!    flag, fetch phase
//! 2. **displayed derived** - pure computation of what belongs on screen
//!    (placeholders while fetching, the current slice otherwise)
//! 3. **render effect** - the single side-effecting step: swaps mounted
//!    nodes and recomputes chrome visibility through the host
//!
//! ## Key Design Principles
//!
//! - **Pure derived**: `displayed` never touches the host
//! - **Side effects in the effect**: only the render effect mounts/unmounts
//! - **Guarded operations**: `next()`, `previous()`, and resize
//!   reconciliation share one in-flight guard - no overlapping fetches

mod chrome;
mod pager;

pub mod controller;

// Re-exports
pub use controller::{Carousel, CarouselOptions, FetchFn};
pub use pager::FetchPhase;
