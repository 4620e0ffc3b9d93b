use crate::{BODY, FakeFamily, FakeSurface, NodeData, TextRangeState};
use core_types::{NodeRef, TextRangeRef};
use selection::{BoundaryRange, HostError, NodeTree, RangeApi, SelectionHost, TextRangeApi};

impl FakeSurface {
    fn check_access(&self) -> Result<(), HostError> {
        if self.deny_selection {
            Err(HostError::AccessDenied)
        } else {
            Ok(())
        }
    }

    fn check_live(&self, node: NodeRef) -> Result<(), HostError> {
        if self.contains(node) {
            Ok(())
        } else {
            Err(HostError::DetachedNode { node })
        }
    }

    fn text_range(&self, handle: TextRangeRef) -> Result<TextRangeState, HostError> {
        self.text_ranges
            .get(handle.0 as usize)
            .copied()
            .ok_or(HostError::NoSelection)
    }

    fn text_range_mut(&mut self, handle: TextRangeRef) -> Result<&mut TextRangeState, HostError> {
        self.text_ranges
            .get_mut(handle.0 as usize)
            .ok_or(HostError::NoSelection)
    }

    fn new_text_range(&mut self, state: TextRangeState) -> TextRangeRef {
        self.text_ranges.push(state);
        TextRangeRef((self.text_ranges.len() - 1) as u32)
    }

    fn single_container(range: &BoundaryRange) -> Result<NodeRef, HostError> {
        if range.start_container == range.end_container {
            Ok(range.start_container)
        } else {
            Err(HostError::Unsupported {
                operation: "ranges spanning several containers",
            })
        }
    }

    fn text_slice(text: &str, start: usize, end: usize) -> String {
        text.chars().skip(start).take(end.saturating_sub(start)).collect()
    }

    fn range_contents(
        &self,
        range: &BoundaryRange,
        mut emit: impl FnMut(&Self, NodeRef, &mut String),
    ) -> Result<String, HostError> {
        let container = Self::single_container(range)?;
        self.check_live(container)?;
        let mut out = String::new();
        match self.node(container).map(|n| &n.data) {
            Some(NodeData::Text(text)) => {
                out.push_str(&Self::text_slice(text, range.start_offset, range.end_offset));
            }
            _ => {
                let children = self.child_list(container);
                let end = range.end_offset.min(children.len());
                for &child in children.get(range.start_offset..end).unwrap_or(&[]) {
                    emit(self, child, &mut out);
                }
            }
        }
        Ok(out)
    }
}

impl RangeApi for FakeSurface {
    fn range_count(&self) -> Result<usize, HostError> {
        self.check_access()?;
        Ok(self.ranges.len())
    }

    fn range_at(&self, index: usize) -> Result<BoundaryRange, HostError> {
        self.check_access()?;
        self.ranges.get(index).copied().ok_or(HostError::NoSelection)
    }

    fn remove_all_ranges(&mut self) -> Result<(), HostError> {
        self.check_access()?;
        self.ranges.clear();
        Ok(())
    }

    fn add_range(&mut self, range: BoundaryRange) -> Result<(), HostError> {
        self.check_access()?;
        self.check_live(range.start_container)?;
        self.check_live(range.end_container)?;
        self.ranges.push(range);
        Ok(())
    }

    fn collapse_to_start(&mut self) -> Result<(), HostError> {
        let first = self.range_at(0)?;
        self.ranges = vec![BoundaryRange::collapsed(
            first.start_container,
            first.start_offset,
        )];
        Ok(())
    }

    fn collapse_to_end(&mut self) -> Result<(), HostError> {
        let first = self.range_at(0)?;
        self.ranges = vec![BoundaryRange::collapsed(first.end_container, first.end_offset)];
        Ok(())
    }

    fn clone_contents(&self, range: &BoundaryRange) -> Result<String, HostError> {
        self.range_contents(range, |surface, node, out| surface.serialize_into(node, out))
    }

    fn text_content(&self, range: &BoundaryRange) -> Result<String, HostError> {
        self.range_contents(range, |surface, node, out| surface.collect_text(node, out))
    }

    fn replace_contents(&mut self, range: &BoundaryRange, markup: &str) -> Result<(), HostError> {
        let container = Self::single_container(range)?;
        self.check_live(container)?;
        let raw = NodeData::Raw(markup.to_string());

        let (parent, index) = match self.node(container).map(|n| n.data.clone()) {
            Some(NodeData::Text(text)) => {
                let (parent, at) = selection::host::index_in_parent(&*self, container)
                    .ok_or(HostError::DetachedNode { node: container })?;
                let before = Self::text_slice(&text, 0, range.start_offset);
                let after: String = text.chars().skip(range.end_offset).collect();
                if let Some(n) = self.node_mut(container) {
                    n.data = NodeData::Text(before);
                }
                self.insert_at(parent, at + 1, raw);
                if !after.is_empty() {
                    self.insert_at(parent, at + 2, NodeData::Text(after));
                }
                (parent, at + 2)
            }
            Some(_) => {
                let removed: Vec<NodeRef> = {
                    let children = self.child_list(container);
                    let end = range.end_offset.min(children.len());
                    children.get(range.start_offset..end).unwrap_or(&[]).to_vec()
                };
                for node in removed {
                    self.detach(node);
                }
                self.insert_at(container, range.start_offset, raw);
                (container, range.start_offset + 1)
            }
            None => return Err(HostError::DetachedNode { node: container }),
        };
        self.ranges = vec![BoundaryRange::collapsed(parent, index)];
        Ok(())
    }
}

impl TextRangeApi for FakeSurface {
    fn create_range(&mut self) -> Result<TextRangeRef, HostError> {
        self.check_access()?;
        let state = self.text_selection;
        Ok(self.new_text_range(state))
    }

    fn body_range(&mut self) -> Result<TextRangeRef, HostError> {
        Ok(self.new_text_range(TextRangeState {
            node: BODY,
            collapsed: false,
            control: false,
        }))
    }

    fn select(&mut self, range: TextRangeRef) -> Result<(), HostError> {
        let state = self.text_range(range)?;
        self.check_live(state.node)?;
        self.text_selection = state;
        Ok(())
    }

    fn move_to_element_text(
        &mut self,
        range: TextRangeRef,
        node: NodeRef,
    ) -> Result<(), HostError> {
        self.check_live(node)?;
        let state = self.text_range_mut(range)?;
        state.node = node;
        state.collapsed = false;
        state.control = false;
        Ok(())
    }

    fn collapse(&mut self, range: TextRangeRef, _to_start: bool) -> Result<(), HostError> {
        let state = self.text_range_mut(range)?;
        state.collapsed = true;
        state.control = false;
        Ok(())
    }

    fn control_item(&self, range: TextRangeRef) -> Option<NodeRef> {
        let state = self.text_range(range).ok()?;
        state.control.then_some(state.node)
    }

    fn parent_element(&self, range: TextRangeRef) -> Option<NodeRef> {
        let state = self.text_range(range).ok()?;
        selection::host::enclosing_element(self, state.node)
    }

    fn html_text(&self, range: TextRangeRef) -> Result<String, HostError> {
        let state = self.text_range(range)?;
        self.check_live(state.node)?;
        Ok(self.inner_markup(state.node))
    }

    fn text(&self, range: TextRangeRef) -> Result<String, HostError> {
        let state = self.text_range(range)?;
        self.check_live(state.node)?;
        Ok(self.text_of(state.node))
    }

    fn bounding_width(&self, range: TextRangeRef) -> Result<u32, HostError> {
        let state = self.text_range(range)?;
        if state.collapsed {
            return Ok(0);
        }
        let chars = self.text_of(state.node).chars().count() as u32;
        Ok(chars.max(u32::from(state.control)) * 8)
    }

    fn outer_html(&self, node: NodeRef) -> Result<String, HostError> {
        self.check_live(node)?;
        Ok(self.outer_markup(node))
    }

    fn paste_html(&mut self, range: TextRangeRef, markup: &str) -> Result<(), HostError> {
        let state = self.text_range(range)?;
        let target = selection::host::enclosing_element(&*self, state.node)
            .ok_or(HostError::DetachedNode { node: state.node })?;
        self.check_live(target)?;
        if !state.collapsed {
            for child in self.child_list(target).to_vec() {
                self.detach(child);
            }
        }
        self.append(target, NodeData::Raw(markup.to_string()));
        Ok(())
    }

    fn set_outer_html(&mut self, node: NodeRef, markup: &str) -> Result<(), HostError> {
        let (parent, index) = selection::host::index_in_parent(&*self, node)
            .ok_or(HostError::DetachedNode { node })?;
        self.detach(node);
        self.insert_at(parent, index, NodeData::Raw(markup.to_string()));
        Ok(())
    }
}

impl SelectionHost for FakeSurface {
    fn range_api(&mut self) -> Option<&mut dyn RangeApi> {
        match self.family {
            FakeFamily::Ranges => Some(self),
            _ => None,
        }
    }

    fn text_range_api(&mut self) -> Option<&mut dyn TextRangeApi> {
        match self.family {
            FakeFamily::TextRanges => Some(self),
            _ => None,
        }
    }
}
