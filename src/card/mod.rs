//! Card - the presentational unit of a carousel.
//!
//! A [`Card`] wraps a [`CardRecord`] and renders it to a [`VisualNode`]
//! tree. Rendering validates the record first: a record missing `title` or
//! `image` produces a [`ValidationError`] instead of an element, and the
//! caller decides how to report it. Rendering is re-creating - every call
//! builds a fresh tree; nothing is cached.
//!
//! The loading variant is modeled as a tag, not a subtype: a
//! [`CardVariant`] is either a real card or a placeholder, and dispatch
//! happens on the tag.

use crate::error::ValidationError;
use crate::types::{CardCardinality, CardRecord, Modifiers, NodeRole, VisualNode};

pub mod format;

pub use format::{format_duration, format_kind};

// =============================================================================
// Card
// =============================================================================

/// A carousel card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    record: CardRecord,
}

impl Card {
    /// Wrap a record. Validation happens at render time.
    pub fn new(record: CardRecord) -> Self {
        Self { record }
    }

    /// The underlying record.
    pub fn record(&self) -> &CardRecord {
        &self.record
    }

    /// Validate the record and build the card's visual tree.
    ///
    /// Fails soft: a record missing a required field yields exactly one
    /// [`ValidationError`] and no element.
    pub fn render(&self) -> Result<VisualNode, ValidationError> {
        let title = self
            .record
            .title
            .as_deref()
            .ok_or(ValidationError::MissingRequiredField { field: "title" })?;
        let image = self
            .record
            .image
            .as_deref()
            .ok_or(ValidationError::MissingRequiredField { field: "image" })?;

        let mut root = VisualNode::new(NodeRole::Card);
        if self.record.cardinality == Some(CardCardinality::Collection) {
            root.modifiers |= Modifiers::COLLECTION;
        }
        root.children.push(self.header(image));
        root.children.push(self.content(title));
        Ok(root)
    }

    fn header(&self, image: &str) -> VisualNode {
        let mut header = VisualNode::new(NodeRole::CardHeader);
        if !image.is_empty() {
            header.image = Some(image.to_string());
        }

        if let Some(kind) = self.record.kind {
            header
                .children
                .push(VisualNode::with_text(NodeRole::CardKind, format_kind(kind)));
        }

        // A zero duration renders no decoration, like an absent one.
        if let Some(secs) = self.record.duration_secs.filter(|&secs| secs > 0) {
            header.children.push(VisualNode::with_text(
                NodeRole::CardDuration,
                format_duration(secs),
            ));
        }

        header
    }

    fn content(&self, title: &str) -> VisualNode {
        let mut content = VisualNode::new(NodeRole::CardContent);
        content
            .children
            .push(VisualNode::with_text(NodeRole::CardTitle, title));

        if let Some(tag) = self.record.tag.as_deref().filter(|tag| !tag.is_empty()) {
            content
                .children
                .push(VisualNode::with_text(NodeRole::CardTag, tag));
        }

        content
    }
}

// =============================================================================
// CardVariant
// =============================================================================

/// A displayable carousel entry: a real card or a loading placeholder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CardVariant {
    Real(Card),
    Placeholder,
}

impl CardVariant {
    /// Render the variant. Placeholders skip validation and always render.
    pub fn render(&self) -> Result<VisualNode, ValidationError> {
        match self {
            CardVariant::Real(card) => card.render(),
            CardVariant::Placeholder => Ok(placeholder_node()),
        }
    }

    /// Whether this entry is a placeholder.
    pub fn is_placeholder(&self) -> bool {
        matches!(self, CardVariant::Placeholder)
    }
}

/// Build the placeholder tree: an empty card carrying the `PLACEHOLDER`
/// modifier.
fn placeholder_node() -> VisualNode {
    let mut root = VisualNode::new(NodeRole::Card);
    root.modifiers |= Modifiers::PLACEHOLDER;
    root.children.push(VisualNode::new(NodeRole::CardHeader));
    root.children.push(VisualNode::new(NodeRole::CardContent));
    root
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::CardKind;

    fn full_record() -> CardRecord {
        CardRecord {
            title: Some("Fresh and just uploaded content".into()),
            image: Some("https://example.test/400/200".into()),
            kind: Some(CardKind::LearningPlan),
            duration_secs: Some(5400),
            cardinality: Some(CardCardinality::Collection),
            tag: Some("English".into()),
        }
    }

    #[test]
    fn test_render_full_record() {
        let tree = Card::new(full_record()).render().unwrap();

        assert_eq!(tree.role, NodeRole::Card);
        assert!(tree.modifiers.contains(Modifiers::COLLECTION));

        let title = tree.find(NodeRole::CardTitle).unwrap();
        assert_eq!(title.text.as_deref(), Some("Fresh and just uploaded content"));

        let kind = tree.find(NodeRole::CardKind).unwrap();
        assert_eq!(kind.text.as_deref(), Some("learning plan"));

        let duration = tree.find(NodeRole::CardDuration).unwrap();
        assert_eq!(duration.text.as_deref(), Some("1h 30m"));

        let tag = tree.find(NodeRole::CardTag).unwrap();
        assert_eq!(tag.text.as_deref(), Some("English"));

        let header = tree.find(NodeRole::CardHeader).unwrap();
        assert_eq!(header.image.as_deref(), Some("https://example.test/400/200"));
    }

    #[test]
    fn test_render_minimal_record() {
        let tree = Card::new(CardRecord {
            title: Some("Bare".into()),
            image: Some("img".into()),
            ..Default::default()
        })
        .render()
        .unwrap();

        assert!(!tree.modifiers.contains(Modifiers::COLLECTION));
        assert!(tree.find(NodeRole::CardKind).is_none());
        assert!(tree.find(NodeRole::CardDuration).is_none());
        assert!(tree.find(NodeRole::CardTag).is_none());
        assert!(tree.find(NodeRole::CardTitle).is_some());
    }

    #[test]
    fn test_missing_title_fails_validation() {
        let card = Card::new(CardRecord {
            image: Some("img".into()),
            ..Default::default()
        });
        assert_eq!(
            card.render(),
            Err(ValidationError::MissingRequiredField { field: "title" })
        );
    }

    #[test]
    fn test_missing_image_fails_validation() {
        let card = Card::new(CardRecord {
            title: Some("t".into()),
            ..Default::default()
        });
        assert_eq!(
            card.render(),
            Err(ValidationError::MissingRequiredField { field: "image" })
        );
    }

    #[test]
    fn test_empty_image_is_present_but_not_decorated() {
        // Present-but-empty passes the mandatory check; the header just
        // carries no image reference.
        let tree = Card::new(CardRecord {
            title: Some("t".into()),
            image: Some(String::new()),
            ..Default::default()
        })
        .render()
        .unwrap();
        assert!(tree.find(NodeRole::CardHeader).unwrap().image.is_none());
    }

    #[test]
    fn test_zero_duration_not_rendered() {
        let tree = Card::new(CardRecord {
            title: Some("t".into()),
            image: Some("img".into()),
            duration_secs: Some(0),
            ..Default::default()
        })
        .render()
        .unwrap();
        assert!(tree.find(NodeRole::CardDuration).is_none());
    }

    #[test]
    fn test_empty_tag_not_rendered() {
        let tree = Card::new(CardRecord {
            title: Some("t".into()),
            image: Some("img".into()),
            tag: Some(String::new()),
            ..Default::default()
        })
        .render()
        .unwrap();
        assert!(tree.find(NodeRole::CardTag).is_none());
    }

    #[test]
    fn test_render_recreates_tree() {
        // Render is documented as re-creating: two calls build two equal,
        // independent trees.
        let card = Card::new(full_record());
        let first = card.render().unwrap();
        let second = card.render().unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_placeholder_always_renders() {
        let tree = CardVariant::Placeholder.render().unwrap();
        assert_eq!(tree.role, NodeRole::Card);
        assert!(tree.modifiers.contains(Modifiers::PLACEHOLDER));
        assert!(tree.find(NodeRole::CardTitle).is_none());
    }
}
