use crate::{FakeSurface, NodeData};
use core_types::NodeRef;
use selection::NodeTree;

const VOID_TAGS: &[&str] = &["br", "hr", "img", "input", "meta", "link"];

/// Properties whose computed value falls back to the parent's.
const INHERITED: &[&str] = &["font-weight", "font-style", "color", "font-family"];

fn escape_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '\u{a0}' => out.push_str("&nbsp;"),
            _ => out.push(ch),
        }
    }
    out
}

fn tag_default(tag: &str, property: &str) -> Option<&'static str> {
    match (tag, property) {
        ("b" | "strong", "font-weight") => Some("bold"),
        ("i" | "em", "font-style") => Some("italic"),
        ("u", "text-decoration") => Some("underline"),
        ("s" | "strike", "text-decoration") => Some("line-through"),
        _ => None,
    }
}

fn inline_style<'a>(attrs: &'a [(String, String)], property: &str) -> Option<&'a str> {
    let (_, style) = attrs.iter().find(|(k, _)| k == "style")?;
    style.split(';').find_map(|decl| {
        let (name, value) = decl.split_once(':')?;
        name.trim()
            .eq_ignore_ascii_case(property)
            .then(|| value.trim())
    })
}

impl FakeSurface {
    pub(crate) fn serialize_into(&self, node: NodeRef, out: &mut String) {
        let Some(n) = self.node(node) else {
            return;
        };
        match &n.data {
            NodeData::Text(text) => out.push_str(&escape_text(text)),
            NodeData::Raw(markup) => out.push_str(markup),
            NodeData::Element { tag, attrs } => {
                out.push('<');
                out.push_str(tag);
                for (name, value) in attrs {
                    out.push(' ');
                    out.push_str(name);
                    out.push_str("=\"");
                    out.push_str(&value.replace('"', "&quot;"));
                    out.push('"');
                }
                out.push('>');
                if VOID_TAGS.contains(&tag.as_str()) {
                    return;
                }
                for &child in &n.children {
                    self.serialize_into(child, out);
                }
                out.push_str("</");
                out.push_str(tag);
                out.push('>');
            }
        }
    }

    pub(crate) fn inner_markup(&self, node: NodeRef) -> String {
        let mut out = String::new();
        match self.node(node).map(|n| &n.data) {
            Some(NodeData::Element { .. }) => {
                for &child in self.child_list(node) {
                    self.serialize_into(child, &mut out);
                }
            }
            Some(_) => self.serialize_into(node, &mut out),
            None => {}
        }
        out
    }

    pub(crate) fn outer_markup(&self, node: NodeRef) -> String {
        let mut out = String::new();
        self.serialize_into(node, &mut out);
        out
    }

    pub(crate) fn collect_text(&self, node: NodeRef, out: &mut String) {
        let Some(n) = self.node(node) else {
            return;
        };
        match &n.data {
            NodeData::Text(text) | NodeData::Raw(text) => out.push_str(text),
            NodeData::Element { .. } => {
                for &child in &n.children {
                    self.collect_text(child, out);
                }
            }
        }
    }

    pub(crate) fn child_list(&self, node: NodeRef) -> &[NodeRef] {
        self.node(node).map(|n| n.children.as_slice()).unwrap_or(&[])
    }
}

impl NodeTree for FakeSurface {
    fn body(&self) -> NodeRef {
        crate::BODY
    }

    fn parent(&self, node: NodeRef) -> Option<NodeRef> {
        self.node(node)?.parent
    }

    fn is_element(&self, node: NodeRef) -> bool {
        matches!(
            self.node(node).map(|n| &n.data),
            Some(NodeData::Element { .. })
        )
    }

    fn tag_name(&self, node: NodeRef) -> Option<&str> {
        match &self.node(node)?.data {
            NodeData::Element { tag, .. } => Some(tag.as_str()),
            _ => None,
        }
    }

    fn children_len(&self, node: NodeRef) -> usize {
        self.child_list(node).len()
    }

    fn child(&self, node: NodeRef, index: usize) -> Option<NodeRef> {
        self.child_list(node).get(index).copied()
    }

    fn node_length(&self, node: NodeRef) -> usize {
        match self.node(node).map(|n| &n.data) {
            Some(NodeData::Text(text)) => text.chars().count(),
            _ => self.children_len(node),
        }
    }

    fn computed_style(&self, node: NodeRef, property: &str) -> Option<String> {
        let NodeData::Element { tag, attrs } = &self.node(node)?.data else {
            return None;
        };
        if let Some(value) = inline_style(attrs, property) {
            return Some(value.to_string());
        }
        if let Some(value) = tag_default(tag, property) {
            return Some(value.to_string());
        }
        if INHERITED.contains(&property) {
            return self.computed_style(self.parent(node)?, property);
        }
        None
    }

    fn contains(&self, node: NodeRef) -> bool {
        self.node(node).is_some_and(|n| n.attached)
    }
}

#[cfg(test)]
mod tests {
    use crate::{FakeFamily, FakeSurface};
    use selection::NodeTree;

    #[test]
    fn serializes_elements_text_and_void_tags() {
        let mut surface = FakeSurface::new(FakeFamily::Ranges);
        let body = surface.body();
        let p = surface.append_element(body, "P");
        surface.append_text(p, "a < b");
        surface.append_element_with_attrs(p, "img", &[("src", "x.png")]);
        assert_eq!(
            surface.inner_markup(body),
            r#"<p>a &lt; b<img src="x.png"></p>"#
        );
    }

    #[test]
    fn computed_style_reads_inline_then_inherits() {
        let mut surface = FakeSurface::new(FakeFamily::Ranges);
        let body = surface.body();
        let p = surface.append_element_with_attrs(body, "p", &[("style", "font-weight: bold; color: red")]);
        let span = surface.append_element(p, "span");
        assert_eq!(surface.computed_style(p, "color").as_deref(), Some("red"));
        assert_eq!(surface.computed_style(span, "font-weight").as_deref(), Some("bold"));
        assert_eq!(surface.computed_style(span, "text-decoration"), None);
    }

    #[test]
    fn detached_subtrees_are_not_contained() {
        let mut surface = FakeSurface::new(FakeFamily::Ranges);
        let body = surface.body();
        let p = surface.append_element(body, "p");
        let text = surface.append_text(p, "x");
        surface.detach(p);
        assert!(!surface.contains(p));
        assert!(!surface.contains(text));
        assert_eq!(surface.children_len(body), 0);
    }
}
