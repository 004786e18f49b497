//! Carousel controller - pagination, lazy fetching, and the render effect.
//!
//! The controller owns the paginated collection and mediates all timing.
//! Its architecture is a small reactive pipeline:
//!
//! ```text
//! pager signals -> displayed derived -> render effect -> Host
//! ```
//!
//! Signals hold the logical state (store, cursor, page size, completion
//! flag, fetch phase). A derived computes what should be on screen. The
//! render effect is the single place with side effects: it swaps the page's
//! mounted nodes and recomputes chrome visibility, and re-runs whenever any
//! signal it reads changes.
//!
//! # Fetch protocol
//!
//! Every fetch requests a `count`. The controller flips the phase to
//! `Fetching { expected: count }` first - which makes the render effect
//! replace the current page with exactly `count` placeholders - then
//! invokes the collaborator, appends the chunk, and settles back to
//! `Ready`. A chunk shorter than requested (including empty) sets the
//! completion flag permanently; quantity is the only termination signal.
//!
//! A collaborator error is logged and absorbed: store, cursor, and flag are
//! untouched, and the current slice re-renders (a no-op page state).
//!
//! # In-flight guard
//!
//! `next()`, `previous()`, and resize reconciliation are mutually exclusive
//! with an in-flight fetch: a call arriving while the phase is `Fetching`
//! is rejected and logged at debug level. This covers collaborators that
//! re-enter the controller (directly or through a resize event) while their
//! fetch is being awaited.
//!
//! # Example
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
//! carousel.next();
//! carousel.previous();
//! ```

use std::cell::RefCell;
use std::rc::Rc;

use spark_signals::{derived, effect};

use crate::card::{Card, CardVariant};
use crate::error::{ConfigurationError, FetchError};
use crate::host::{Host, ResizeCallback, Unsubscribe};
use crate::types::CardRecord;

use super::chrome;
use super::pager::{FetchPhase, PagerState, compute_page_size};

// =============================================================================
// Options
// =============================================================================

/// The fetch capability: given a chunk size, produce that many records.
///
/// Returning fewer than requested (or none) signals exhaustion; an `Err`
/// means the chunk could not be produced and leaves the page state alone.
pub type FetchFn = Box<dyn FnMut(usize) -> Result<Vec<CardRecord>, FetchError>>;

/// Configuration options of a carousel.
///
/// `container` and `fetch_cards` are mandatory; everything else is optional
/// chrome content.
#[derive(Default)]
pub struct CarouselOptions {
    /// Identifier of the pre-existing mount point.
    pub container: String,
    /// The injected fetch capability.
    pub fetch_cards: Option<FetchFn>,
    /// Header title.
    pub title: Option<String>,
    /// Header subtitle.
    pub subtitle: Option<String>,
    /// Header icon reference.
    pub icon: Option<String>,
    /// Header link.
    pub link: Option<String>,
}

// =============================================================================
// View - everything the render effect touches
// =============================================================================

struct View<H: Host> {
    host: H,
    mount: H::Mount,
    header: Option<H::Node>,
    nav_previous: Option<H::Node>,
    nav_next: Option<H::Node>,
    cards: Vec<H::Node>,
}

impl<H: Host> View<H> {
    /// Replace the mounted page with the given entries. A card that fails
    /// validation is reported and skipped; its siblings render normally.
    fn render_page(&mut self, entries: &[CardVariant]) {
        for node in self.cards.drain(..) {
            self.host.unmount(&self.mount, node);
        }
        for entry in entries {
            match entry.render() {
                Ok(tree) => {
                    // A missing container makes mount() return None; the
                    // page simply does not materialize.
                    if let Some(node) = self.host.mount(&self.mount, &tree) {
                        self.cards.push(node);
                    }
                }
                Err(err) => log::warn!("skipping card: {err}"),
            }
        }
    }

    /// Hidden means not mounted.
    fn update_nav(&mut self, show_previous: bool, show_next: bool) {
        match (show_previous, self.nav_previous.take()) {
            (true, None) => {
                self.nav_previous = self.host.mount(&self.mount, &chrome::nav_previous());
            }
            (true, Some(node)) => self.nav_previous = Some(node),
            (false, Some(node)) => self.host.unmount(&self.mount, node),
            (false, None) => {}
        }
        match (show_next, self.nav_next.take()) {
            (true, None) => {
                self.nav_next = self.host.mount(&self.mount, &chrome::nav_next());
            }
            (true, Some(node)) => self.nav_next = Some(node),
            (false, Some(node)) => self.host.unmount(&self.mount, node),
            (false, None) => {}
        }
    }

    fn teardown(&mut self) {
        for node in self.cards.drain(..) {
            self.host.unmount(&self.mount, node);
        }
        let chrome_nodes = self
            .header
            .take()
            .into_iter()
            .chain(self.nav_previous.take())
            .chain(self.nav_next.take());
        for node in chrome_nodes {
            self.host.unmount(&self.mount, node);
        }
    }
}

// =============================================================================
// Carousel
// =============================================================================

/// A mounted carousel.
///
/// Owns its backing store, cursor, and host nodes exclusively. Dropping the
/// carousel (or calling [`Carousel::unmount`]) stops the render effect,
/// unsubscribes from resize events, and detaches every node it mounted.
pub struct Carousel<H: Host> {
    state: PagerState,
    view: Rc<RefCell<View<H>>>,
    fetcher: Rc<RefCell<FetchFn>>,
    stop_render: Option<Box<dyn FnOnce()>>,
    unsubscribe: Option<Unsubscribe>,
}

impl<H: Host + 'static> Carousel<H> {
    /// Validate the options, build chrome, subscribe to resize, and perform
    /// the first data load.
    ///
    /// Failures are reported through the log side channel and returned; no
    /// visible element is left behind.
    pub fn mount(mut host: H, mut options: CarouselOptions) -> Result<Self, ConfigurationError> {
        if options.container.is_empty() {
            return Err(Self::report(ConfigurationError::MissingContainer));
        }
        let Some(fetch) = options.fetch_cards.take() else {
            return Err(Self::report(ConfigurationError::MissingFetcher));
        };
        let Some(mount) = host.find_mount(&options.container) else {
            return Err(Self::report(ConfigurationError::MountNotFound(
                options.container.clone(),
            )));
        };

        let state = PagerState::new();
        let width = host.width(&mount);
        if width > 0 {
            state.page_size.set(compute_page_size(width));
        }

        let mut view = View {
            host,
            mount: mount.clone(),
            header: None,
            nav_previous: None,
            nav_next: None,
            cards: Vec::new(),
        };
        view.header = view.host.mount(&mount, &chrome::header_node(&options));
        let view = Rc::new(RefCell::new(view));
        let fetcher: Rc<RefCell<FetchFn>> = Rc::new(RefCell::new(fetch));

        // Resize subscription. The callback owns clones of the state and
        // fetcher only - reconciliation goes through the same guarded path
        // as everything else, and rendering happens via the effect.
        let unsubscribe = {
            let st = state.clone();
            let fetcher_resize = fetcher.clone();
            let callback: ResizeCallback = Rc::new(move |width| {
                handle_resize(&st, &fetcher_resize, width);
            });
            let mut view_ref = view.borrow_mut();
            let mount = view_ref.mount.clone();
            view_ref.host.observe_resize(&mount, callback)
        };

        // The one render effect. Reads establish its dependencies; it
        // re-runs synchronously whenever any of them changes.
        let stop_render: Box<dyn FnOnce()> = {
            let st = state.clone();
            let view_effect = view.clone();
            let displayed = {
                let st = state.clone();
                derived(move || st.displayed())
            };
            let stop = effect(move || {
                let entries = displayed.get();
                let show_previous = st.page.get() > 1;
                let show_next = !st.is_last_page();

                let mut view = view_effect.borrow_mut();
                view.render_page(&entries);
                view.update_nav(show_previous, show_next);
            });
            Box::new(stop)
        };

        let carousel = Self {
            state,
            view,
            fetcher,
            stop_render: Some(stop_render),
            unsubscribe: Some(unsubscribe),
        };

        // First data load.
        fetch_chunk(
            &carousel.state,
            &carousel.fetcher,
            carousel.state.page_size.get(),
        );
        carousel.state.phase.set(FetchPhase::Ready);

        Ok(carousel)
    }

    fn report(err: ConfigurationError) -> ConfigurationError {
        log::error!("{err}");
        err
    }
}

impl<H: Host> Carousel<H> {
    /// Advance one page, fetching more data first when the store runs out.
    /// No-op on the confirmed last page or while a fetch is in flight.
    pub fn next(&mut self) {
        advance(&self.state, &self.fetcher);
    }

    /// Go back one page, floored at page 1. Never fetches.
    pub fn previous(&mut self) {
        retreat(&self.state);
    }

    /// Current page cursor (1-based).
    pub fn page(&self) -> usize {
        self.state.page.get()
    }

    /// Current page size.
    pub fn page_size(&self) -> usize {
        self.state.page_size.get()
    }

    /// Pages the backing store currently fills.
    pub fn total_pages(&self) -> usize {
        self.state.total_pages()
    }

    /// Number of cards fetched so far.
    pub fn loaded_count(&self) -> usize {
        self.state.cards.get().len()
    }

    /// Whether the collaborator has signaled exhaustion.
    pub fn all_loaded(&self) -> bool {
        self.state.all_loaded.get()
    }

    /// True when exhaustion is confirmed and no page follows.
    pub fn is_last_page(&self) -> bool {
        self.state.is_last_page()
    }

    /// Current fetch phase.
    pub fn phase(&self) -> FetchPhase {
        self.state.phase.get()
    }

    /// Tear the carousel down, detaching every node it mounted.
    pub fn unmount(mut self) {
        self.teardown();
    }

    fn teardown(&mut self) {
        if let Some(stop) = self.stop_render.take() {
            stop();
        }
        if let Some(unsubscribe) = self.unsubscribe.take() {
            unsubscribe();
        }
        self.view.borrow_mut().teardown();
    }
}

impl<H: Host> Drop for Carousel<H> {
    fn drop(&mut self) {
        self.teardown();
    }
}

// =============================================================================
// Operations
// =============================================================================
//
// Free functions over the shared state so the resize callback and the
// public methods drive the exact same code paths.

/// Request one chunk: placeholders first, then the collaborator, then the
/// store update. Leaves the phase at `Fetching`; the caller settles it to
/// `Ready` once the cursor is final, so the page renders exactly once per
/// operation with its final slice.
fn fetch_chunk(state: &PagerState, fetcher: &Rc<RefCell<FetchFn>>, count: usize) {
    state.phase.set(FetchPhase::Fetching { expected: count });
    log::trace!("fetching {count} cards");

    let result = {
        let mut fetch = fetcher.borrow_mut();
        (*fetch)(count)
    };

    match result {
        Ok(batch) => {
            if batch.len() < count {
                log::trace!("short chunk ({} of {count}): all cards loaded", batch.len());
                state.all_loaded.set(true);
            }
            state.append(batch.into_iter().map(Card::new).collect());
        }
        Err(err) => log::error!("{err}"),
    }
}

fn advance(state: &PagerState, fetcher: &Rc<RefCell<FetchFn>>) {
    if state.fetch_in_flight() {
        log::debug!("next ignored: a fetch is already in flight");
        return;
    }

    let mut did_fetch = false;

    // On the last page of already-fetched data, confirm there is more by
    // fetching one page-sized chunk before deciding whether to advance.
    if !state.all_loaded.get() && state.page.get() >= state.total_pages() {
        fetch_chunk(state, fetcher, state.page_size.get());
        did_fetch = true;
    }

    // Advance only onto a page the store can back. Covers both the
    // confirmed-last-page no-op and a failed confirm-fetch.
    if state.page.get() < state.total_pages() {
        state.page.set(state.page.get() + 1);

        // Landing on a partial page with more data available: top up
        // exactly the shortfall.
        let shortfall = state
            .page_size
            .get()
            .saturating_sub(state.current_slice().len());
        if shortfall > 0 && !state.all_loaded.get() {
            fetch_chunk(state, fetcher, shortfall);
            did_fetch = true;
        }
    }

    if did_fetch {
        state.phase.set(FetchPhase::Ready);
    }
}

fn retreat(state: &PagerState) {
    if state.fetch_in_flight() {
        log::debug!("previous ignored: a fetch is already in flight");
        return;
    }

    let page = state.page.get();
    if page <= 1 {
        return;
    }
    state.page.set(page - 1);
}

fn handle_resize(state: &PagerState, fetcher: &Rc<RefCell<FetchFn>>, width: u32) {
    if state.fetch_in_flight() {
        log::debug!("resize ignored: a fetch is already in flight");
        return;
    }
    if width == 0 {
        return;
    }

    let new_size = compute_page_size(width);
    if new_size == state.page_size.get() {
        return;
    }

    // Clamp the cursor against the new page count before applying the new
    // size, so every intermediate render slices a page that exists. The
    // store is never discarded; only the window over it changes.
    let total = state.cards.get().len().div_ceil(new_size).max(1);
    if state.page.get() > total {
        state.page.set(total);
    }
    state.page_size.set(new_size);

    // Reconciling reload: fill out the current page if it came up short
    // and more data may exist.
    let shortfall = new_size.saturating_sub(state.current_slice().len());
    if shortfall > 0 && !state.all_loaded.get() {
        fetch_chunk(state, fetcher, shortfall);
        state.phase.set(FetchPhase::Ready);
    }
}

// =============================================================================
// Tests
// =============================================================================
