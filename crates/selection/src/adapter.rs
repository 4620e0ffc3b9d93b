//! The selection adapter: one set of cursor and range operations over
//! whichever selection API family the host provides.

use crate::HostError;
use crate::host::{NodeTree, RangeApi, SelectionHost, TextRangeApi, common_ancestor, enclosing_element};
use crate::range::{BoundaryRange, Range};
use core_types::{NodeRef, TextRangeRef};

/// Which selection API family a host exposes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SelectionFamily {
    Ranges,
    TextRanges,
}

/// Selection operations dispatched on the family found at probe time.
///
/// Ranges are always fetched from the host at the start of each call and
/// never cached. Every operation is best effort: host errors are logged at
/// debug level and degrade to a fallback range, an empty result or a no-op.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SelectionAdapter {
    family: Option<SelectionFamily>,
}

impl SelectionAdapter {
    /// Feature-test `host` for a selection API, preferring boundary ranges.
    pub fn probe<H: SelectionHost + ?Sized>(host: &mut H) -> Self {
        let family = if host.range_api().is_some() {
            Some(SelectionFamily::Ranges)
        } else if host.text_range_api().is_some() {
            Some(SelectionFamily::TextRanges)
        } else {
            None
        };
        log::debug!(target: "selection", "probed selection family: {family:?}");
        Self { family }
    }

    pub fn family(&self) -> Option<SelectionFamily> {
        self.family
    }

    // =========================================================================
    // Range capture and restore
    // =========================================================================

    /// The active selection range. `None` when the host has no selection API
    /// or the range family reports no ranges. A host error yields a fresh
    /// range over the body contents.
    pub fn current_range<H: SelectionHost + ?Sized>(&self, host: &mut H) -> Option<Range> {
        match self.family? {
            SelectionFamily::Ranges => {
                let body = BoundaryRange::contents_of(&*host, host.body());
                let api = host.range_api()?;
                match first_range(api) {
                    Ok(range) => range.map(Range::Boundary),
                    Err(err) => {
                        log::debug!(target: "selection", "range access failed ({err}), using body range");
                        Some(Range::Boundary(body))
                    }
                }
            }
            SelectionFamily::TextRanges => {
                let api = host.text_range_api()?;
                current_text_range(api).map(Range::Text)
            }
        }
    }

    /// Make `range` the active selection. Failures are swallowed, and a
    /// boundary range into removed nodes leaves the selection as it was.
    pub fn set_range<H: SelectionHost + ?Sized>(&self, host: &mut H, range: &Range) {
        let result = match (self.family, range) {
            (Some(SelectionFamily::TextRanges), Range::Text(handle)) => match host.text_range_api() {
                Some(api) => api.select(*handle),
                None => Ok(()),
            },
            (Some(SelectionFamily::Ranges), Range::Boundary(boundary)) => {
                if !boundary.is_live(&*host) {
                    log::debug!(target: "selection", "set_range ignored: range points outside the document");
                    return;
                }
                match host.range_api() {
                    Some(api) => replace_ranges(api, *boundary),
                    None => Ok(()),
                }
            }
            (None, _) => Ok(()),
            _ => Err(HostError::Unsupported {
                operation: "restoring a range from another selection family",
            }),
        };
        if let Err(err) = result {
            log::debug!(target: "selection", "set_range ignored: {err}");
        }
    }

    /// Select `node`, or only its contents when `collapse_to_contents` is
    /// set. Returns `node`.
    pub fn select_node<H: SelectionHost + ?Sized>(
        &self,
        host: &mut H,
        node: NodeRef,
        collapse_to_contents: bool,
    ) -> NodeRef {
        let result = match self.family {
            Some(SelectionFamily::Ranges) => {
                let range = if collapse_to_contents {
                    BoundaryRange::contents_of(&*host, node)
                } else {
                    BoundaryRange::around(&*host, node)
                        .unwrap_or_else(|| BoundaryRange::contents_of(&*host, node))
                };
                match host.range_api() {
                    Some(api) => replace_ranges(api, range),
                    None => Ok(()),
                }
            }
            Some(SelectionFamily::TextRanges) => match host.text_range_api() {
                Some(api) => select_element_text(api, node),
                None => Ok(()),
            },
            None => Ok(()),
        };
        if let Err(err) = result {
            log::debug!(target: "selection", "select_node ignored: {err}");
        }
        node
    }

    // =========================================================================
    // Collapsing
    // =========================================================================

    /// True when the selection has zero width. A control selection (an image,
    /// say) is never collapsed.
    pub fn is_collapsed<H: SelectionHost + ?Sized>(&self, host: &mut H) -> bool {
        match self.current_range(host) {
            None => true,
            Some(Range::Boundary(range)) => range.is_collapsed(),
            Some(Range::Text(handle)) => {
                let Some(api) = host.text_range_api() else {
                    return true;
                };
                if api.control_item(handle).is_some() {
                    return false;
                }
                api.bounding_width(handle).map_or(true, |width| width == 0)
            }
        }
    }

    pub fn collapse<H: SelectionHost + ?Sized>(&self, host: &mut H, to_start: bool) {
        let result = match self.family {
            Some(SelectionFamily::Ranges) => match host.range_api() {
                Some(api) if to_start => api.collapse_to_start(),
                Some(api) => api.collapse_to_end(),
                None => Ok(()),
            },
            Some(SelectionFamily::TextRanges) => match host.text_range_api() {
                Some(api) => collapse_text_range(api, to_start),
                None => Ok(()),
            },
            None => Ok(()),
        };
        if let Err(err) = result {
            log::debug!(target: "selection", "collapse ignored: {err}");
        }
    }

    // =========================================================================
    // Contents
    // =========================================================================

    /// Markup of the selected contents, or "" for a collapsed selection.
    pub fn selected_markup<H: SelectionHost + ?Sized>(&self, host: &mut H) -> String {
        if self.is_collapsed(host) {
            return String::new();
        }
        let result = match self.current_range(host) {
            Some(Range::Boundary(range)) => match host.range_api() {
                Some(api) => api.clone_contents(&range),
                None => Ok(String::new()),
            },
            Some(Range::Text(handle)) => match host.text_range_api() {
                Some(api) => match api.control_item(handle) {
                    Some(item) => api.outer_html(item),
                    None => api.html_text(handle),
                },
                None => Ok(String::new()),
            },
            None => Ok(String::new()),
        };
        result.unwrap_or_else(|err| {
            log::debug!(target: "selection", "selected_markup unavailable: {err}");
            String::new()
        })
    }

    /// Plain text of the selection, or "" for a collapsed selection.
    pub fn selected_text<H: SelectionHost + ?Sized>(&self, host: &mut H) -> String {
        if self.is_collapsed(host) {
            return String::new();
        }
        let result = match self.current_range(host) {
            Some(Range::Boundary(range)) => match host.range_api() {
                Some(api) => api.text_content(&range),
                None => Ok(String::new()),
            },
            Some(Range::Text(handle)) => match host.text_range_api() {
                Some(api) => api.text(handle),
                None => Ok(String::new()),
            },
            None => Ok(String::new()),
        };
        result.unwrap_or_else(|err| {
            log::debug!(target: "selection", "selected_text unavailable: {err}");
            String::new()
        })
    }

    /// The element nearest to the selection.
    ///
    /// A non-collapsed selection covering less than two offsets of a single
    /// container with children resolves to the child at the start offset, so
    /// a selected image reports the image rather than its paragraph.
    pub fn nearest_element<H: SelectionHost + ?Sized>(&self, host: &mut H) -> Option<NodeRef> {
        match self.current_range(host)? {
            Range::Boundary(range) => {
                let mut node = common_ancestor(&*host, range.start_container, range.end_container)?;
                if !range.is_collapsed()
                    && range.start_container == range.end_container
                    && range.end_offset.saturating_sub(range.start_offset) < 2
                    && host.children_len(range.start_container) > 0
                {
                    if let Some(child) = host.child(range.start_container, range.start_offset) {
                        node = child;
                    }
                }
                enclosing_element(&*host, node)
            }
            Range::Text(handle) => {
                let api = host.text_range_api()?;
                api.control_item(handle).or_else(|| api.parent_element(handle))
            }
        }
    }

    /// Replace the selection with `markup`.
    pub fn insert_markup<H: SelectionHost + ?Sized>(&self, host: &mut H, markup: &str) {
        let result = match self.current_range(host) {
            Some(Range::Boundary(range)) => match host.range_api() {
                Some(api) => api.replace_contents(&range, markup),
                None => Ok(()),
            },
            Some(Range::Text(handle)) => match host.text_range_api() {
                Some(api) => match api.control_item(handle) {
                    Some(item) => api.set_outer_html(item, markup),
                    None => api.paste_html(handle, markup),
                },
                None => Ok(()),
            },
            None => Ok(()),
        };
        if let Err(err) = result {
            log::debug!(target: "selection", "insert_markup ignored: {err}");
        }
    }
}

fn first_range(api: &mut dyn RangeApi) -> Result<Option<BoundaryRange>, HostError> {
    if api.range_count()? == 0 {
        return Ok(None);
    }
    api.range_at(0).map(Some)
}

fn replace_ranges(api: &mut dyn RangeApi, range: BoundaryRange) -> Result<(), HostError> {
    api.remove_all_ranges()?;
    api.add_range(range)
}

fn current_text_range(api: &mut dyn TextRangeApi) -> Option<TextRangeRef> {
    match api.create_range() {
        Ok(handle) => Some(handle),
        Err(err) => {
            log::debug!(target: "selection", "text range access failed ({err}), using body range");
            api.body_range().ok()
        }
    }
}

fn select_element_text(api: &mut dyn TextRangeApi, node: NodeRef) -> Result<(), HostError> {
    let handle = match api.create_range() {
        Ok(handle) => handle,
        Err(_) => api.body_range()?,
    };
    api.move_to_element_text(handle, node)?;
    api.select(handle)
}

fn collapse_text_range(api: &mut dyn TextRangeApi, to_start: bool) -> Result<(), HostError> {
    let handle = current_text_range(api).ok_or(HostError::NoSelection)?;
    api.collapse(handle, to_start)?;
    api.select(handle)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// A host with no selection API at all.
    struct Bare;

    impl NodeTree for Bare {
        fn body(&self) -> NodeRef {
            NodeRef(0)
        }
        fn parent(&self, _: NodeRef) -> Option<NodeRef> {
            None
        }
        fn is_element(&self, _: NodeRef) -> bool {
            true
        }
        fn tag_name(&self, _: NodeRef) -> Option<&str> {
            Some("body")
        }
        fn children_len(&self, _: NodeRef) -> usize {
            0
        }
        fn child(&self, _: NodeRef, _: usize) -> Option<NodeRef> {
            None
        }
        fn computed_style(&self, _: NodeRef, _: &str) -> Option<String> {
            None
        }
        fn contains(&self, node: NodeRef) -> bool {
            node.0 == 0
        }
    }

    impl SelectionHost for Bare {
        fn range_api(&mut self) -> Option<&mut dyn RangeApi> {
            None
        }
        fn text_range_api(&mut self) -> Option<&mut dyn TextRangeApi> {
            None
        }
    }

    #[test]
    fn no_selection_api_degrades_to_empty_results() {
        let mut host = Bare;
        let adapter = SelectionAdapter::probe(&mut host);
        assert_eq!(adapter.family(), None);
        assert_eq!(adapter.current_range(&mut host), None);
        assert!(adapter.is_collapsed(&mut host));
        assert_eq!(adapter.selected_markup(&mut host), "");
        assert_eq!(adapter.selected_text(&mut host), "");
        assert_eq!(adapter.nearest_element(&mut host), None);
        assert_eq!(adapter.select_node(&mut host, NodeRef(0), false), NodeRef(0));
        adapter.collapse(&mut host, true);
        adapter.insert_markup(&mut host, "<b>x</b>");
        adapter.set_range(&mut host, &Range::Text(TextRangeRef(1)));
    }
}
