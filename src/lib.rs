//! # spark-carousel
//!
//! Reactive lazy-loading carousel widget for Rust.
//!
//! Built on [spark-signals](https://github.com/RLabs-Inc/spark-signals) for fine-grained reactivity.
//!
//! ## Architecture
//!
//! A carousel is a paginated window over an incrementally fetched backing
//! store. All logical state lives in signals; rendering is purely derived:
//!
//! ```text
//! pager signals -> displayed derived -> render effect -> Host
//! ```
//!
//! The controller fetches chunks on demand as the user pages forward,
//! shows placeholders while a chunk is in flight, and adapts the page size
//! to the container's width. The environment (terminal, DOM, memory) is
//! abstracted behind the [`Host`] trait, so the core is host-agnostic and
//! fully testable against [`MemoryHost`].
//!
//! ## Modules
//!
//! - [`types`] - Core types (CardRecord, VisualNode, Modifiers, etc.)
//! - [`card`] - Card and placeholder rendering
//! - [`carousel`] - Pagination/fetch controller and chrome
//! - [`host`] - Host trait plus the memory and terminal hosts
//! - [`error`] - Error taxonomy (configuration, validation, fetch)
//!
//! ## Example
//!
//! ```ignore
//! use spark_carousel::{Carousel, CarouselOptions, MemoryHost};
//!
//! let host = MemoryHost::with_mount("my-carousel", 1900);
//! let mut carousel = Carousel::mount(host, CarouselOptions {
//!     container: "my-carousel".to_string(),
//!     title: Some("Fresh and just uploaded content".to_string()),
//!     fetch_cards: Some(Box::new(|count| Ok(backend.page(count)))),
//!     ..Default::default()
//! })?;
//!
//! carousel.next();     // fetches and shows the next page
//! carousel.previous(); // pages back through data already in memory
//! ```

pub mod card;
pub mod carousel;
pub mod error;
pub mod host;
pub mod types;

// Re-export commonly used items
pub use types::*;

pub use card::{Card, CardVariant, format_duration, format_kind};

pub use carousel::{Carousel, CarouselOptions, FetchFn, FetchPhase};

pub use error::{ConfigurationError, FetchError, ValidationError};

pub use host::{Host, MemoryHost, ResizeCallback, TermHost, Unsubscribe};
