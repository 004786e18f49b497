//! Carousel chrome - header and navigation affordances.

use crate::types::{NodeRole, VisualNode};

use super::controller::CarouselOptions;

/// Build the header from the options. Only provided fields appear.
pub(crate) fn header_node(options: &CarouselOptions) -> VisualNode {
    let mut header = VisualNode::new(NodeRole::Header);

    if let Some(icon) = &options.icon {
        header
            .children
            .push(VisualNode::with_text(NodeRole::HeaderIcon, icon));
    }
    if let Some(title) = &options.title {
        header
            .children
            .push(VisualNode::with_text(NodeRole::HeaderTitle, title));
    }
    if let Some(subtitle) = &options.subtitle {
        header
            .children
            .push(VisualNode::with_text(NodeRole::HeaderSubtitle, subtitle));
    }
    if let Some(link) = &options.link {
        header
            .children
            .push(VisualNode::with_text(NodeRole::HeaderLink, link));
    }

    header
}

pub(crate) fn nav_previous() -> VisualNode {
    VisualNode::new(NodeRole::NavPrevious)
}

pub(crate) fn nav_next() -> VisualNode {
    VisualNode::new(NodeRole::NavNext)
}
