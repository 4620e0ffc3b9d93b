//! Host-side interfaces the selection adapter is written against.
//!
//! An editing-surface host owns the document tree and one of two selection
//! API families:
//! - [`RangeApi`]: boundary-point ranges (`range_at`, `add_range`, ...)
//! - [`TextRangeApi`]: legacy text ranges addressed by opaque handles
//!   (`create_range`, `move_to_element_text`, ...)
//!
//! Hosts expose whichever family they have through [`SelectionHost`]. Every
//! call may fail with a [`HostError`]; the adapter absorbs those.

use crate::HostError;
use crate::range::BoundaryRange;
use core_types::{NodeRef, TextRangeRef};

/// Read access to the host document tree.
pub trait NodeTree {
    /// The editable body. Never detached while the surface is attached.
    fn body(&self) -> NodeRef;

    fn parent(&self, node: NodeRef) -> Option<NodeRef>;

    /// True for element nodes; false for text and other leaf nodes.
    fn is_element(&self, node: NodeRef) -> bool;

    /// Lowercase tag name of an element, `None` for non-elements.
    fn tag_name(&self, node: NodeRef) -> Option<&str>;

    fn children_len(&self, node: NodeRef) -> usize;

    fn child(&self, node: NodeRef, index: usize) -> Option<NodeRef>;

    /// Boundary-offset length of `node`: child count for elements,
    /// character count for text.
    fn node_length(&self, node: NodeRef) -> usize {
        self.children_len(node)
    }

    /// Computed value of a CSS property on an element, if the host has one.
    fn computed_style(&self, node: NodeRef, property: &str) -> Option<String>;

    /// True while `node` is still part of the document.
    fn contains(&self, node: NodeRef) -> bool;
}

/// Boundary-point selection API.
pub trait RangeApi {
    // =========================================================================
    // Selection ranges
    // =========================================================================

    fn range_count(&self) -> Result<usize, HostError>;

    fn range_at(&self, index: usize) -> Result<BoundaryRange, HostError>;

    fn remove_all_ranges(&mut self) -> Result<(), HostError>;

    fn add_range(&mut self, range: BoundaryRange) -> Result<(), HostError>;

    fn collapse_to_start(&mut self) -> Result<(), HostError>;

    fn collapse_to_end(&mut self) -> Result<(), HostError>;

    // =========================================================================
    // Range contents
    // =========================================================================

    /// Serialized markup of a copy of the range's contents.
    fn clone_contents(&self, range: &BoundaryRange) -> Result<String, HostError>;

    fn text_content(&self, range: &BoundaryRange) -> Result<String, HostError>;

    /// Delete the range's contents and insert `markup`, parsed by the host as
    /// a fragment in the context of the range.
    fn replace_contents(&mut self, range: &BoundaryRange, markup: &str) -> Result<(), HostError>;
}

/// Legacy text-range selection API.
pub trait TextRangeApi {
    // =========================================================================
    // Handles
    // =========================================================================

    /// A text range for the current selection.
    fn create_range(&mut self) -> Result<TextRangeRef, HostError>;

    /// A fresh text range over the whole body.
    fn body_range(&mut self) -> Result<TextRangeRef, HostError>;

    /// Make `range` the active selection.
    fn select(&mut self, range: TextRangeRef) -> Result<(), HostError>;

    fn move_to_element_text(&mut self, range: TextRangeRef, node: NodeRef)
    -> Result<(), HostError>;

    fn collapse(&mut self, range: TextRangeRef, to_start: bool) -> Result<(), HostError>;

    // =========================================================================
    // Queries
    // =========================================================================

    /// The selected element when `range` is a control range (an image, a
    /// form control, ...).
    fn control_item(&self, range: TextRangeRef) -> Option<NodeRef>;

    fn parent_element(&self, range: TextRangeRef) -> Option<NodeRef>;

    fn html_text(&self, range: TextRangeRef) -> Result<String, HostError>;

    fn text(&self, range: TextRangeRef) -> Result<String, HostError>;

    /// Rendered width in pixels; zero for a caret.
    fn bounding_width(&self, range: TextRangeRef) -> Result<u32, HostError>;

    fn outer_html(&self, node: NodeRef) -> Result<String, HostError>;

    // =========================================================================
    // Mutation
    // =========================================================================

    fn paste_html(&mut self, range: TextRangeRef, markup: &str) -> Result<(), HostError>;

    fn set_outer_html(&mut self, node: NodeRef, markup: &str) -> Result<(), HostError>;
}

/// A document host with at most one selection API family.
pub trait SelectionHost: NodeTree {
    fn range_api(&mut self) -> Option<&mut dyn RangeApi>;

    fn text_range_api(&mut self) -> Option<&mut dyn TextRangeApi>;
}

/// Parent of `node` and the index of `node` among the parent's children.
pub fn index_in_parent<T: NodeTree + ?Sized>(tree: &T, node: NodeRef) -> Option<(NodeRef, usize)> {
    let parent = tree.parent(node)?;
    (0..tree.children_len(parent))
        .find(|&i| tree.child(parent, i) == Some(node))
        .map(|i| (parent, i))
}

/// Deepest node that contains both `a` and `b` (inclusive).
pub fn common_ancestor<T: NodeTree + ?Sized>(tree: &T, a: NodeRef, b: NodeRef) -> Option<NodeRef> {
    if a == b {
        return Some(a);
    }
    let mut chain = Vec::new();
    let mut cur = Some(a);
    while let Some(node) = cur {
        chain.push(node);
        cur = tree.parent(node);
    }
    let mut cur = Some(b);
    while let Some(node) = cur {
        if chain.contains(&node) {
            return Some(node);
        }
        cur = tree.parent(node);
    }
    None
}

/// First element at or above `node`.
pub fn enclosing_element<T: NodeTree + ?Sized>(tree: &T, node: NodeRef) -> Option<NodeRef> {
    let mut cur = Some(node);
    while let Some(n) = cur {
        if tree.is_element(n) {
            return Some(n);
        }
        cur = tree.parent(n);
    }
    None
}

/// Iterator over `node` and its ancestors, innermost first.
pub fn ancestors_inclusive<T: NodeTree + ?Sized>(
    tree: &T,
    node: NodeRef,
) -> impl Iterator<Item = NodeRef> + '_ {
    std::iter::successors(Some(node), move |&n| tree.parent(n))
}
