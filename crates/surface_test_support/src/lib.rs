//! An in-memory editing surface for tests.
//!
//! [`FakeSurface`] owns a small node arena standing in for the host document
//! and implements every host trait the editor talks to: the document tree,
//! either selection API family, the editing surface itself and the dialog
//! host. It has no HTML parser: markup written through `set_markup` is kept
//! as one opaque raw node and serialized back verbatim.

mod dialogs;
mod ranges;
mod surface;
mod tree;

use core_types::{NodeRef, ViewMode};
use editor::FocusTarget;
use selection::BoundaryRange;
use std::collections::VecDeque;
use std::time::Duration;

/// Which selection API family the fake exposes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FakeFamily {
    Ranges,
    TextRanges,
    Neither,
}

/// One `exec_command` call as the surface saw it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExecRecord {
    pub command: String,
    pub arg: Option<String>,
}

/// Called from inside `exec_command`, with the surface itself.
pub type ExecHook = Box<dyn FnMut(&mut FakeSurface, &str, Option<&str>)>;

#[derive(Clone, Debug)]
pub(crate) enum NodeData {
    Element { tag: String, attrs: Vec<(String, String)> },
    Text(String),
    /// Markup the fake cannot parse, serialized verbatim.
    Raw(String),
}

#[derive(Clone, Debug)]
pub(crate) struct FakeNode {
    pub(crate) data: NodeData,
    pub(crate) parent: Option<NodeRef>,
    pub(crate) children: Vec<NodeRef>,
    pub(crate) attached: bool,
}

/// State behind one legacy text-range handle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct TextRangeState {
    pub(crate) node: NodeRef,
    pub(crate) collapsed: bool,
    pub(crate) control: bool,
}

pub struct FakeSurface {
    pub(crate) nodes: Vec<FakeNode>,
    pub(crate) family: FakeFamily,
    pub(crate) ranges: Vec<BoundaryRange>,
    pub(crate) text_ranges: Vec<TextRangeState>,
    pub(crate) text_selection: TextRangeState,
    pub(crate) deny_selection: bool,
    pub(crate) field: String,
    pub(crate) field_writes: usize,
    pub(crate) document: Option<String>,
    pub(crate) view: ViewMode,
    pub(crate) journal: Vec<ExecRecord>,
    pub(crate) exec_hook: Option<ExecHook>,
    pub(crate) focus_requests: Vec<(FocusTarget, Duration)>,
    pub(crate) focused: Option<FocusTarget>,
    pub(crate) alerts: Vec<String>,
    pub(crate) prompts: Vec<(String, String)>,
    pub(crate) answers: VecDeque<Option<String>>,
}

pub(crate) const BODY: NodeRef = NodeRef(0);

impl FakeSurface {
    pub fn new(family: FakeFamily) -> Self {
        let body = FakeNode {
            data: NodeData::Element {
                tag: "body".to_string(),
                attrs: Vec::new(),
            },
            parent: None,
            children: Vec::new(),
            attached: true,
        };
        Self {
            nodes: vec![body],
            family,
            ranges: Vec::new(),
            text_ranges: Vec::new(),
            text_selection: TextRangeState {
                node: BODY,
                collapsed: true,
                control: false,
            },
            deny_selection: false,
            field: String::new(),
            field_writes: 0,
            document: None,
            view: ViewMode::Rich,
            journal: Vec::new(),
            exec_hook: None,
            focus_requests: Vec::new(),
            focused: None,
            alerts: Vec::new(),
            prompts: Vec::new(),
            answers: VecDeque::new(),
        }
    }

    pub fn with_ranges() -> Self {
        Self::new(FakeFamily::Ranges)
    }

    pub fn with_text_ranges() -> Self {
        Self::new(FakeFamily::TextRanges)
    }

    // =========================================================================
    // Document building
    // =========================================================================

    pub fn append_element(&mut self, parent: NodeRef, tag: &str) -> NodeRef {
        self.append_element_with_attrs(parent, tag, &[])
    }

    pub fn append_element_with_attrs(
        &mut self,
        parent: NodeRef,
        tag: &str,
        attrs: &[(&str, &str)],
    ) -> NodeRef {
        let data = NodeData::Element {
            tag: tag.to_ascii_lowercase(),
            attrs: attrs
                .iter()
                .map(|(k, v)| (k.to_ascii_lowercase(), v.to_string()))
                .collect(),
        };
        self.append(parent, data)
    }

    pub fn append_text(&mut self, parent: NodeRef, text: &str) -> NodeRef {
        self.append(parent, NodeData::Text(text.to_string()))
    }

    /// Remove `node` and its subtree from the document.
    pub fn detach(&mut self, node: NodeRef) {
        if let Some(parent) = self.node(node).and_then(|n| n.parent) {
            if let Some(p) = self.node_mut(parent) {
                p.children.retain(|&c| c != node);
            }
        }
        self.mark_detached(node);
    }

    pub(crate) fn append(&mut self, parent: NodeRef, data: NodeData) -> NodeRef {
        let id = NodeRef(self.nodes.len() as u32);
        let attached = self.node(parent).is_some_and(|p| p.attached);
        self.nodes.push(FakeNode {
            data,
            parent: Some(parent),
            children: Vec::new(),
            attached,
        });
        if let Some(p) = self.node_mut(parent) {
            p.children.push(id);
        }
        id
    }

    /// Insert a new node into `parent` at child position `index`.
    pub(crate) fn insert_at(&mut self, parent: NodeRef, index: usize, data: NodeData) -> NodeRef {
        let id = self.append(parent, data);
        if let Some(p) = self.node_mut(parent) {
            p.children.pop();
            let at = index.min(p.children.len());
            p.children.insert(at, id);
        }
        id
    }

    fn mark_detached(&mut self, node: NodeRef) {
        let children = match self.node_mut(node) {
            Some(n) => {
                n.attached = false;
                n.children.clone()
            }
            None => return,
        };
        for child in children {
            self.mark_detached(child);
        }
    }

    pub(crate) fn node(&self, node: NodeRef) -> Option<&FakeNode> {
        self.nodes.get(node.0 as usize)
    }

    pub(crate) fn node_mut(&mut self, node: NodeRef) -> Option<&mut FakeNode> {
        self.nodes.get_mut(node.0 as usize)
    }

    // =========================================================================
    // Selection control
    // =========================================================================

    /// Make `range` the only boundary range of the selection.
    pub fn select_range(&mut self, range: BoundaryRange) {
        self.ranges = vec![range];
    }

    pub fn clear_selection(&mut self) {
        self.ranges.clear();
        self.text_selection = TextRangeState {
            node: BODY,
            collapsed: true,
            control: false,
        };
    }

    /// Text-range selection over the text of `node`.
    pub fn select_text_of(&mut self, node: NodeRef, collapsed: bool) {
        self.text_selection = TextRangeState {
            node,
            collapsed,
            control: false,
        };
    }

    /// Text-range control selection of the element `node`.
    pub fn select_control(&mut self, node: NodeRef) {
        self.text_selection = TextRangeState {
            node,
            collapsed: false,
            control: true,
        };
    }

    /// Make every selection access fail the way a cross-frame host does.
    pub fn deny_selection_access(&mut self, deny: bool) {
        self.deny_selection = deny;
    }

    pub fn boundary_ranges(&self) -> &[BoundaryRange] {
        &self.ranges
    }

    /// The node the text-range selection currently covers.
    pub fn text_selection_node(&self) -> NodeRef {
        self.text_selection.node
    }

    // =========================================================================
    // Inspection
    // =========================================================================

    pub fn set_exec_hook(&mut self, hook: ExecHook) {
        self.exec_hook = Some(hook);
    }

    pub fn journal(&self) -> &[ExecRecord] {
        &self.journal
    }

    pub fn commands(&self) -> Vec<&str> {
        self.journal.iter().map(|r| r.command.as_str()).collect()
    }

    /// How many times the backing field was written.
    pub fn field_writes(&self) -> usize {
        self.field_writes
    }

    pub fn loaded_document(&self) -> Option<&str> {
        self.document.as_deref()
    }

    pub fn shown_view(&self) -> ViewMode {
        self.view
    }

    pub fn focus_requests(&self) -> &[(FocusTarget, Duration)] {
        &self.focus_requests
    }

    pub fn focused(&self) -> Option<FocusTarget> {
        self.focused
    }

    pub fn alerts(&self) -> &[String] {
        &self.alerts
    }

    /// `(question, default answer)` for every prompt shown.
    pub fn prompts(&self) -> &[(String, String)] {
        &self.prompts
    }

    /// Queue the answers of upcoming prompts; `None` is a cancel.
    pub fn answer_prompts<I>(&mut self, answers: I)
    where
        I: IntoIterator<Item = Option<String>>,
    {
        self.answers.extend(answers);
    }

    /// Plain text of `node` and its descendants.
    pub fn text_of(&self, node: NodeRef) -> String {
        let mut out = String::new();
        self.collect_text(node, &mut out);
        out
    }
}
