//! Toolbar active states derived from the element at the selection.

use crate::action::{ActionRegistry, StateMatcher};
use crate::toolbar::{Toolbar, ToolbarItem};
use core_types::NodeRef;
use selection::NodeTree;
use selection::host::ancestors_inclusive;

/// Elements that bound style inheritance for the style matcher.
const BLOCK_TAGS: &[&str] = &[
    "h1", "h2", "h3", "h4", "h5", "h6", "p", "div", "address", "pre", "form", "table", "li", "ol",
    "ul", "td", "caption", "blockquote", "center", "dl", "dt", "dd",
];

pub(crate) fn is_block(tag: &str) -> bool {
    BLOCK_TAGS.iter().any(|block| block.eq_ignore_ascii_case(tag))
}

/// Recompute toolbar active states.
///
/// Every item is reset to inactive first, matcher or not, so nothing stays
/// active from a previous selection or dialog. With no `anchor` that is all
/// that happens.
pub fn check_states<T: NodeTree>(
    tree: &T,
    anchor: Option<NodeRef>,
    registry: &ActionRegistry,
    toolbar: &mut Toolbar,
) {
    for item in toolbar.items_mut() {
        item.deactivate();
        let Some(matcher) = registry.get(item.name).and_then(|action| action.states) else {
            continue;
        };
        let Some(anchor) = anchor else {
            continue;
        };
        match matcher {
            StateMatcher::Custom(check) => check(tree, anchor, item),
            StateMatcher::Match { tags, css } => {
                if !match_tags(tree, anchor, tags, item) {
                    match_css(tree, anchor, css, item);
                }
            }
        }
    }
}

/// Ascend from `anchor` until an element's tag is in `tags`.
fn match_tags<T: NodeTree>(
    tree: &T,
    anchor: NodeRef,
    tags: &[&str],
    item: &mut ToolbarItem,
) -> bool {
    if tags.is_empty() {
        return false;
    }
    for node in ancestors_inclusive(tree, anchor) {
        let Some(tag) = tree.tag_name(node) else {
            break;
        };
        if let Some(matched) = tags.iter().find(|t| t.eq_ignore_ascii_case(tag)) {
            item.activate(Some(matched.to_string()));
            return true;
        }
    }
    false
}

/// Ascend from `anchor` checking computed styles, stopping at the first
/// match or at the first block element.
fn match_css<T: NodeTree>(
    tree: &T,
    anchor: NodeRef,
    css: &[(&str, &str)],
    item: &mut ToolbarItem,
) {
    if css.is_empty() {
        return;
    }
    for node in ancestors_inclusive(tree, anchor) {
        let Some(tag) = tree.tag_name(node) else {
            break;
        };
        let mut found = false;
        for (property, value) in css {
            let computed = tree.computed_style(node, property).unwrap_or_default();
            if computed.contains(value) {
                item.activate(Some(value.to_string()));
                found = true;
            }
        }
        if found || is_block(tag) {
            break;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::ActionDescriptor;
    use crate::config::ActionSlot;
    use crate::toolbar::Activation;

    /// body(0) > p(1) > span(2, font-weight: bold) > em(3) > text(4)
    ///         > div(5, font-weight: bold) > p(6) > text(7)
    struct Doc;

    impl NodeTree for Doc {
        fn body(&self) -> NodeRef {
            NodeRef(0)
        }
        fn parent(&self, node: NodeRef) -> Option<NodeRef> {
            Some(NodeRef(match node.0 {
                1 | 5 => 0,
                2 => 1,
                3 => 2,
                4 => 3,
                6 => 5,
                7 => 6,
                _ => return None,
            }))
        }
        fn is_element(&self, node: NodeRef) -> bool {
            self.tag_name(node).is_some()
        }
        fn tag_name(&self, node: NodeRef) -> Option<&str> {
            Some(match node.0 {
                0 => "body",
                1 | 6 => "p",
                2 => "span",
                3 => "em",
                5 => "div",
                _ => return None,
            })
        }
        fn children_len(&self, _: NodeRef) -> usize {
            0
        }
        fn child(&self, _: NodeRef, _: usize) -> Option<NodeRef> {
            None
        }
        fn computed_style(&self, node: NodeRef, property: &str) -> Option<String> {
            (matches!(node.0, 2 | 5) && property == "font-weight").then(|| "bold".to_string())
        }
        fn contains(&self, _: NodeRef) -> bool {
            true
        }
    }

    fn mark_custom(_: &dyn NodeTree, anchor: NodeRef, item: &mut ToolbarItem) {
        item.activate(Some(format!("node-{}", anchor.0)));
    }

    fn setup() -> (ActionRegistry, Toolbar) {
        let registry = ActionRegistry::new()
            .with(ActionDescriptor::new("bold", "Bold").tags_and_css(
                &["b", "strong"],
                &[("font-weight", "bold")],
            ))
            .with(ActionDescriptor::new("italic", "Italic").tags(&["i", "em"]))
            .with(ActionDescriptor::new("custom", "Custom").states(StateMatcher::Custom(mark_custom)))
            .with(ActionDescriptor::new("undo", "Undo"));
        let slots: Vec<_> = ["bold", "italic", "custom", "undo"]
            .into_iter()
            .map(|name| ActionSlot::Action(name.to_string()))
            .collect();
        let toolbar = Toolbar::build(&registry, &slots);
        (registry, toolbar)
    }

    fn active(toolbar: &Toolbar, name: &str) -> Activation {
        toolbar.item(name).unwrap().state.active.clone()
    }

    #[test]
    fn tag_match_reports_the_tag() {
        let (registry, mut toolbar) = setup();
        check_states(&Doc, Some(NodeRef(3)), &registry, &mut toolbar);
        assert_eq!(active(&toolbar, "italic"), Activation::Active(Some("em".into())));
        assert_eq!(active(&toolbar, "custom"), Activation::Active(Some("node-3".into())));
    }

    #[test]
    fn style_match_when_no_tag_matches() {
        let (registry, mut toolbar) = setup();
        check_states(&Doc, Some(NodeRef(3)), &registry, &mut toolbar);
        assert_eq!(active(&toolbar, "bold"), Activation::Active(Some("bold".into())));
    }

    #[test]
    fn style_walk_stops_at_block_boundary() {
        let (registry, mut toolbar) = setup();
        // p(6) is a block, so the bold div above it is never consulted.
        check_states(&Doc, Some(NodeRef(6)), &registry, &mut toolbar);
        assert_eq!(active(&toolbar, "bold"), Activation::Inactive);
    }

    #[test]
    fn stale_states_are_cleared() {
        let (registry, mut toolbar) = setup();
        toolbar.item_mut("italic").unwrap().activate(None);
        toolbar.item_mut("undo").unwrap().activate(None);
        check_states(&Doc, None, &registry, &mut toolbar);
        assert_eq!(active(&toolbar, "italic"), Activation::Inactive);
        assert_eq!(active(&toolbar, "custom"), Activation::Inactive);
        assert_eq!(active(&toolbar, "undo"), Activation::Inactive);
    }

    #[test]
    fn block_tags_are_case_insensitive() {
        assert!(is_block("LI"));
        assert!(is_block("h3"));
        assert!(!is_block("span"));
    }
}
