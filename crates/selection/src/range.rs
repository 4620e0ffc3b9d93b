//! Range values handed between the adapter and its callers.

use crate::host::{NodeTree, index_in_parent};
use core_types::{NodeRef, TextRangeRef};

/// A boundary-point range: `(start_container, start_offset)` to
/// `(end_container, end_offset)`.
///
/// Offsets count children for element containers and characters for text
/// containers, the same way the host counts them.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BoundaryRange {
    pub start_container: NodeRef,
    pub start_offset: usize,
    pub end_container: NodeRef,
    pub end_offset: usize,
}

impl BoundaryRange {
    /// A caret at `offset` inside `node`.
    pub fn collapsed(node: NodeRef, offset: usize) -> Self {
        Self {
            start_container: node,
            start_offset: offset,
            end_container: node,
            end_offset: offset,
        }
    }

    /// Everything inside `node`.
    pub fn contents_of<T: NodeTree + ?Sized>(tree: &T, node: NodeRef) -> Self {
        Self {
            start_container: node,
            start_offset: 0,
            end_container: node,
            end_offset: tree.node_length(node),
        }
    }

    /// `node` itself, expressed as offsets into its parent. `None` for a
    /// node without a parent.
    pub fn around<T: NodeTree + ?Sized>(tree: &T, node: NodeRef) -> Option<Self> {
        let (parent, index) = index_in_parent(tree, node)?;
        Some(Self {
            start_container: parent,
            start_offset: index,
            end_container: parent,
            end_offset: index + 1,
        })
    }

    #[inline]
    pub fn is_collapsed(&self) -> bool {
        self.start_container == self.end_container && self.start_offset == self.end_offset
    }

    /// True when both boundaries still point into the document.
    pub fn is_live<T: NodeTree + ?Sized>(&self, tree: &T) -> bool {
        tree.contains(self.start_container) && tree.contains(self.end_container)
    }
}

/// A selection range from either host family.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Range {
    Boundary(BoundaryRange),
    /// Opaque handle owned by a legacy text-range host.
    Text(TextRangeRef),
}
