//! Host abstraction - the environment boundary.
//!
//! The carousel core never touches a terminal, a DOM, or any other
//! environment directly. Everything it needs from the outside world goes
//! through the [`Host`] trait: locating a mount point, measuring its width,
//! attaching/detaching visual trees, and observing width changes.
//!
//! This keeps the core host-agnostic and fully testable: the whole widget
//! is exercised against [`memory::MemoryHost`], and [`term::TermHost`] puts
//! the same widget on a real terminal.

use std::rc::Rc;

use crate::types::VisualNode;

pub mod memory;
pub mod term;

pub use memory::MemoryHost;
pub use term::TermHost;

// =============================================================================
// Callback Types
// =============================================================================

/// Unsubscribe function returned by [`Host::observe_resize`].
///
/// Call it to stop receiving resize notifications and release resources.
pub type Unsubscribe = Box<dyn FnOnce()>;

/// Resize callback (Rc for shared ownership in closures).
///
/// Invoked with the new container width whenever the observed mount point
/// changes size.
pub type ResizeCallback = Rc<dyn Fn(u32)>;

// =============================================================================
// Host Trait
// =============================================================================

/// The environment a carousel lives in.
///
/// Implementations own the actual visual elements; the core only ever holds
/// the opaque `Node` handles they return. A host whose mount point has
/// disappeared returns `None` from [`Host::mount`] - rendering against a
/// missing container degrades to a no-op, never a crash.
pub trait Host {
    /// Handle to a located mount point.
    type Mount: Clone;
    /// Opaque handle to an attached visual element.
    type Node;

    /// Locate a pre-existing mount point by identifier.
    fn find_mount(&mut self, id: &str) -> Option<Self::Mount>;

    /// Current width of the mount point, in host units. A width of 0 means
    /// "unknown"; callers ignore it rather than derive a page size from it.
    fn width(&mut self, mount: &Self::Mount) -> u32;

    /// Materialize a visual tree and attach it under the mount point.
    ///
    /// Returns `None` when the mount point no longer exists.
    fn mount(&mut self, mount: &Self::Mount, node: &VisualNode) -> Option<Self::Node>;

    /// Detach a previously mounted element.
    fn unmount(&mut self, mount: &Self::Mount, node: Self::Node);

    /// Observe width changes of the mount point.
    fn observe_resize(&mut self, mount: &Self::Mount, callback: ResizeCallback) -> Unsubscribe;
}
