//! Terminal host - crossterm-backed environment.
//!
//! The terminal is the single mount point: any container identifier
//! resolves to it. Width is reported in the same units the carousel sizes
//! cards in, by scaling the terminal's column count by [`CELL_WIDTH`].
//!
//! Event delivery is cooperative: the application owns the loop and calls
//! [`TermHost::pump`], which polls crossterm, dispatches resize events to
//! observers, and hands every event back for application-level handling
//! (e.g. mapping arrow keys to `next()`/`previous()`).
//!
//! # Example
//!
//! ```ignore
//! use std::time::Duration;
//! use crossterm::event::{Event, KeyCode};
//! use spark_carousel::host::TermHost;
//!
//! let host = TermHost::new();
//! let pump = host.clone();
//! let mut carousel = Carousel::mount(host, options)?;
//!
//! loop {
//!     if let Some(Event::Key(key)) = pump.pump(Duration::from_millis(16))? {
//!         match key.code {
//!             KeyCode::Right => carousel.next(),
//!             KeyCode::Left => carousel.previous(),
//!             KeyCode::Char('q') => break,
//!             _ => {}
//!         }
//!     }
//! }
//! ```

use std::cell::RefCell;
use std::io::{self, Write};
use std::rc::Rc;
use std::time::Duration;

use crossterm::event::{self, Event};
use crossterm::{cursor, queue, terminal};

use crate::types::{Modifiers, NodeRole, VisualNode};

use super::{Host, ResizeCallback, Unsubscribe};

/// Nominal width of one terminal column, in carousel host units.
///
/// With `CARD_MIN_WIDTH = 300` and `CARD_GUTTER = 16`, this maps one card
/// to roughly 32 columns: a 120-column terminal shows 3 cards per page.
pub const CELL_WIDTH: u32 = 10;

// =============================================================================
// Shared State
// =============================================================================

struct TermState {
    attached: Vec<(usize, VisualNode)>,
    observers: Vec<(usize, ResizeCallback)>,
    next_node_id: usize,
    next_observer_id: usize,
    /// When false, nothing is written to the terminal (headless mode).
    paint: bool,
}

// =============================================================================
// TermHost
// =============================================================================

/// Minimal crossterm [`Host`]. Clones share state, so a clone kept by the
/// application remains usable for [`TermHost::pump`] after another clone
/// has been moved into a carousel.
#[derive(Clone)]
pub struct TermHost {
    state: Rc<RefCell<TermState>>,
}

impl TermHost {
    /// Create a painting host.
    pub fn new() -> Self {
        Self::with_paint(true)
    }

    /// Create a host that keeps its bookkeeping but never writes to the
    /// terminal. Used by tests and non-interactive environments.
    pub fn headless() -> Self {
        Self::with_paint(false)
    }

    fn with_paint(paint: bool) -> Self {
        Self {
            state: Rc::new(RefCell::new(TermState {
                attached: Vec::new(),
                observers: Vec::new(),
                next_node_id: 0,
                next_observer_id: 0,
                paint,
            })),
        }
    }

    /// Poll for one terminal event, dispatching resizes to observers.
    ///
    /// Returns the event (including the resize itself) so the application
    /// loop can react to keys. Returns `Ok(None)` when the timeout elapses
    /// with no event.
    pub fn pump(&self, timeout: Duration) -> io::Result<Option<Event>> {
        if !event::poll(timeout)? {
            return Ok(None);
        }
        let ev = event::read()?;

        if let Event::Resize(cols, _) = ev {
            let callbacks: Vec<ResizeCallback> = {
                let state = self.state.borrow();
                state.observers.iter().map(|(_, cb)| cb.clone()).collect()
            };
            // Borrow released: observers re-enter the host while rendering.
            for callback in callbacks {
                callback(u32::from(cols) * CELL_WIDTH);
            }
        }

        Ok(Some(ev))
    }

    /// Number of elements currently attached (for headless inspection).
    pub fn attached_count(&self) -> usize {
        self.state.borrow().attached.len()
    }

    fn repaint(&self) {
        let state = self.state.borrow();
        if !state.paint {
            return;
        }
        // Repainting is best-effort; a dead terminal must not take the
        // widget down with it.
        let _ = Self::paint_lines(&state);
    }

    fn paint_lines(state: &TermState) -> io::Result<()> {
        let mut out = io::stdout();
        queue!(out, cursor::MoveTo(0, 0), terminal::Clear(terminal::ClearType::All))?;
        for (_, tree) in &state.attached {
            writeln!(out, "{}\r", line_for(tree))?;
        }
        out.flush()
    }
}

impl Default for TermHost {
    fn default() -> Self {
        Self::new()
    }
}

impl Host for TermHost {
    type Mount = ();
    type Node = usize;

    fn find_mount(&mut self, _id: &str) -> Option<()> {
        // The terminal is the single mount point.
        Some(())
    }

    fn width(&mut self, _mount: &()) -> u32 {
        match terminal::size() {
            Ok((cols, _)) => u32::from(cols) * CELL_WIDTH,
            Err(_) => 0,
        }
    }

    fn mount(&mut self, _mount: &(), node: &VisualNode) -> Option<usize> {
        let node_id = {
            let mut state = self.state.borrow_mut();
            let node_id = state.next_node_id;
            state.next_node_id += 1;
            state.attached.push((node_id, node.clone()));
            node_id
        };
        self.repaint();
        Some(node_id)
    }

    fn unmount(&mut self, _mount: &(), node: usize) {
        self.state.borrow_mut().attached.retain(|(id, _)| *id != node);
        self.repaint();
    }

    fn observe_resize(&mut self, _mount: &(), callback: ResizeCallback) -> Unsubscribe {
        let observer_id = {
            let mut state = self.state.borrow_mut();
            let observer_id = state.next_observer_id;
            state.next_observer_id += 1;
            state.observers.push((observer_id, callback));
            observer_id
        };

        let state = self.state.clone();
        Box::new(move || {
            state.borrow_mut().observers.retain(|(id, _)| *id != observer_id);
        })
    }
}

// =============================================================================
// Line Rendering
// =============================================================================

/// Render one attached tree as a single terminal line.
fn line_for(tree: &VisualNode) -> String {
    match tree.role {
        NodeRole::Header => {
            let title = tree
                .find(NodeRole::HeaderTitle)
                .and_then(|n| n.text.clone())
                .unwrap_or_default();
            let subtitle = tree
                .find(NodeRole::HeaderSubtitle)
                .and_then(|n| n.text.clone())
                .map(|s| format!(" - {s}"))
                .unwrap_or_default();
            format!("== {title}{subtitle} ==")
        }
        NodeRole::NavPrevious => "  [<] previous".to_string(),
        NodeRole::NavNext => "  [>] next".to_string(),
        NodeRole::Card if tree.modifiers.contains(Modifiers::PLACEHOLDER) => {
            "[ ................ ]".to_string()
        }
        NodeRole::Card => {
            let mut parts = Vec::new();
            for role in [
                NodeRole::CardTitle,
                NodeRole::CardKind,
                NodeRole::CardDuration,
                NodeRole::CardTag,
            ] {
                if let Some(text) = tree.find(role).and_then(|n| n.text.clone()) {
                    parts.push(text);
                }
            }
            format!("[ {} ]", parts.join(" | "))
        }
        _ => String::new(),
    }
}

// =============================================================================
// Tests
// =============================================================================
