//! Pager state - reactive pagination bookkeeping.
//!
//! All logical carousel state lives here as signals:
//!
//! - `cards` - the backing store: append-only, never reordered, superset of
//!   what is displayed
//! - `page` - the cursor (1-based)
//! - `page_size` - cards per page, recomputed from container width
//! - `all_loaded` - permanent completion flag, set by the first short chunk
//! - `phase` - the explicit fetch state machine
//!
//! The derived display (placeholders while fetching, current slice
//! otherwise) and the chrome visibility are pure functions of these
//! signals, which is what lets a single render effect drive the host.

use spark_signals::{Signal, signal};

use crate::card::{Card, CardVariant};
use crate::types::{CARD_GUTTER, CARD_MIN_WIDTH, DEFAULT_PAGE_SIZE};

// =============================================================================
// Fetch Phase
// =============================================================================

/// Fetch state machine.
///
/// `Idle` exists only between construction and the first load. `Fetching`
/// spans the placeholder render through chunk arrival; every page-affecting
/// operation is rejected while it holds. Transitions never skip a state:
/// `Idle -> Fetching -> Ready -> Fetching -> Ready -> ...`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchPhase {
    /// Constructed, nothing loaded yet.
    Idle,
    /// A chunk of `expected` records has been requested and has not arrived.
    Fetching { expected: usize },
    /// Between fetches; the current slice is live.
    Ready,
}

// =============================================================================
// Pager State
// =============================================================================

/// The carousel's reactive state. Cloning shares the underlying signals.
#[derive(Clone)]
pub(crate) struct PagerState {
    /// Backing store of fetched cards.
    pub(crate) cards: Signal<Vec<Card>>,
    /// Page cursor, always >= 1.
    pub(crate) page: Signal<usize>,
    /// Cards per page, always >= 1.
    pub(crate) page_size: Signal<usize>,
    /// Completion flag. Once true, never reset.
    pub(crate) all_loaded: Signal<bool>,
    /// Fetch state machine.
    pub(crate) phase: Signal<FetchPhase>,
}

impl PagerState {
    pub(crate) fn new() -> Self {
        Self {
            cards: signal(Vec::new()),
            page: signal(1),
            page_size: signal(DEFAULT_PAGE_SIZE),
            all_loaded: signal(false),
            phase: signal(FetchPhase::Idle),
        }
    }

    /// Number of pages the store currently fills.
    pub(crate) fn total_pages(&self) -> usize {
        self.cards.get().len().div_ceil(self.page_size.get())
    }

    /// True only when the completion flag is confirmed AND no page follows.
    /// A page that merely looks last by arithmetic is not terminal until a
    /// fetch has confirmed exhaustion.
    pub(crate) fn is_last_page(&self) -> bool {
        self.all_loaded.get() && self.page.get() + 1 > self.total_pages()
    }

    pub(crate) fn fetch_in_flight(&self) -> bool {
        matches!(self.phase.get(), FetchPhase::Fetching { .. })
    }

    /// The store slice behind the current page window.
    pub(crate) fn current_slice(&self) -> Vec<Card> {
        let cards = self.cards.get();
        let size = self.page_size.get();
        let start = (self.page.get() - 1) * size;
        if start >= cards.len() {
            return Vec::new();
        }
        let end = (start + size).min(cards.len());
        cards[start..end].to_vec()
    }

    /// What is on screen right now: `expected` placeholders while a fetch
    /// is in flight, the current slice otherwise.
    pub(crate) fn displayed(&self) -> Vec<CardVariant> {
        match self.phase.get() {
            FetchPhase::Fetching { expected } => {
                vec![CardVariant::Placeholder; expected]
            }
            _ => self
                .current_slice()
                .into_iter()
                .map(CardVariant::Real)
                .collect(),
        }
    }

    /// Append a fetched chunk to the backing store.
    pub(crate) fn append(&self, batch: Vec<Card>) {
        if batch.is_empty() {
            return;
        }
        let mut cards = self.cards.get();
        cards.extend(batch);
        self.cards.set(cards);
    }
}

// =============================================================================
// Page Size
// =============================================================================

/// Page size for a container width: floor of width over one card footprint
/// (minimum card width plus gutter), never below 1. A width of 0 never
/// reaches this; callers ignore unknown widths.
pub(crate) fn compute_page_size(width: u32) -> usize {
    ((width / (CARD_MIN_WIDTH + CARD_GUTTER)) as usize).max(1)
}

// =============================================================================
// Tests
// =============================================================================
