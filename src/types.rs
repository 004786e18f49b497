//! Core types for spark-carousel.
//!
//! These types define the foundation that everything builds on.
//! They flow through the reactive pipeline and define what a host understands.

// =============================================================================
// Layout Constants
// =============================================================================

/// Minimum width of a single card, in host units (pixels for a graphical
/// host, scaled cells for a terminal host).
pub const CARD_MIN_WIDTH: u32 = 300;

/// Horizontal gutter between cards, in host units.
pub const CARD_GUTTER: u32 = 16;

/// Page size used until a usable container width has been observed.
pub const DEFAULT_PAGE_SIZE: usize = 6;

// =============================================================================
// Card Record
// =============================================================================

/// The kind of content a card points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardKind {
    Video,
    Elearning,
    LearningPlan,
    Playlist,
}

impl CardKind {
    /// Wire name of the kind, as delivered by fetch collaborators.
    pub const fn as_str(&self) -> &'static str {
        match self {
            CardKind::Video => "video",
            CardKind::Elearning => "elearning",
            CardKind::LearningPlan => "learning_plan",
            CardKind::Playlist => "playlist",
        }
    }
}

/// Whether a card stands for a single item or a collection of items.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardCardinality {
    Single,
    Collection,
}

/// A raw card record as returned by a fetch collaborator.
///
/// Records are immutable once constructed. `title` and `image` are required
/// for rendering; a record missing either is reported and skipped, never
/// partially rendered. All other fields are optional decorations.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CardRecord {
    /// Card title. Required for rendering.
    pub title: Option<String>,
    /// Image reference (URL or asset path). Required for rendering.
    pub image: Option<String>,
    /// Content kind decoration.
    pub kind: Option<CardKind>,
    /// Content duration in seconds.
    pub duration_secs: Option<u32>,
    /// Single item or collection.
    pub cardinality: Option<CardCardinality>,
    /// Free-form tag (e.g. a language).
    pub tag: Option<String>,
}

// =============================================================================
// Visual Modifiers (bitflags)
// =============================================================================

bitflags::bitflags! {
    /// Class-like visual modifiers attached to a node.
    ///
    /// Combine with bitwise OR: `Modifiers::COLLECTION | Modifiers::PLACEHOLDER`
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct Modifiers: u8 {
        const NONE = 0;
        /// The card represents a collection of items.
        const COLLECTION = 1 << 0;
        /// The card is a loading placeholder.
        const PLACEHOLDER = 1 << 1;
    }
}

// =============================================================================
// Visual Tree
// =============================================================================

/// Structural role of a node in the visual tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeRole {
    // Carousel chrome
    Header,
    HeaderIcon,
    HeaderTitle,
    HeaderSubtitle,
    HeaderLink,
    NavPrevious,
    NavNext,

    // Card subtree
    Card,
    CardHeader,
    CardKind,
    CardDuration,
    CardContent,
    CardTitle,
    CardTag,
}

/// A node in the visual tree handed to a host.
///
/// This is what hosts deal with. Nothing more complex. Components build
/// these, the host materializes them; the core never interprets a host's
/// element handles beyond mounting and unmounting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisualNode {
    /// Structural role.
    pub role: NodeRole,
    /// Class-like modifiers.
    pub modifiers: Modifiers,
    /// Text content, if any.
    pub text: Option<String>,
    /// Image reference, if any.
    pub image: Option<String>,
    /// Nested nodes.
    pub children: Vec<VisualNode>,
}

impl VisualNode {
    /// Create an empty node with the given role.
    pub fn new(role: NodeRole) -> Self {
        Self {
            role,
            modifiers: Modifiers::NONE,
            text: None,
            image: None,
            children: Vec::new(),
        }
    }

    /// Create a node with text content.
    pub fn with_text(role: NodeRole, text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            ..Self::new(role)
        }
    }

    /// Find the first descendant (or self) with the given role.
    pub fn find(&self, role: NodeRole) -> Option<&VisualNode> {
        if self.role == role {
            return Some(self);
        }
        self.children.iter().find_map(|child| child.find(role))
    }
}

// =============================================================================
// Tests
// =============================================================================
