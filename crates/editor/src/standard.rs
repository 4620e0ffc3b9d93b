//! The stock action table.

use crate::action::{ActionDescriptor, ActionRegistry};
use crate::context::EditorContext;
use core_types::ViewMode;
use url::Url;

const LINK_SCHEMES: &[&str] = &["http", "https", "ftp", "rmtp", "mms"];

impl ActionRegistry {
    /// Formatting, list, history, link, image and view actions.
    pub fn standard() -> Self {
        Self::new()
            .with(
                ActionDescriptor::new("bold", "Bold")
                    .shortcut('b')
                    .tags_and_css(&["b", "strong"], &[("font-weight", "bold")]),
            )
            .with(
                ActionDescriptor::new("italic", "Italic")
                    .shortcut('i')
                    .tags_and_css(&["i", "em"], &[("font-style", "italic")]),
            )
            .with(
                ActionDescriptor::new("underline", "Underline")
                    .shortcut('u')
                    .tags_and_css(&["u"], &[("text-decoration", "underline")]),
            )
            .with(
                ActionDescriptor::new("strikethrough", "Strikethrough")
                    .shortcut('s')
                    .tags_and_css(&["s", "strike"], &[("text-decoration", "line-through")]),
            )
            .with(ActionDescriptor::new("insertunorderedlist", "Unordered List").tags(&["ul"]))
            .with(ActionDescriptor::new("insertorderedlist", "Ordered List").tags(&["ol"]))
            .with(ActionDescriptor::new("indent", "Indent").tags(&["blockquote"]))
            .with(ActionDescriptor::new("outdent", "Outdent"))
            .with(ActionDescriptor::new("undo", "Undo").shortcut('z'))
            .with(ActionDescriptor::new("redo", "Redo").shortcut('y'))
            .with(ActionDescriptor::new("unlink", "Remove Hyperlink"))
            .with(
                ActionDescriptor::new("createlink", "Add Hyperlink")
                    .shortcut('l')
                    .tags(&["a"])
                    .procedural(create_link),
            )
            .with(
                ActionDescriptor::new("urlimage", "Add Image")
                    .shortcut('m')
                    .procedural(url_image),
            )
            .with(ActionDescriptor::new("toggleview", "Toggle View").procedural(toggle_view))
    }
}

/// True when `text` starts like an absolute link with a dotted host name.
pub(crate) fn looks_like_url(text: &str) -> bool {
    let Ok(url) = Url::parse(text.trim()) else {
        return false;
    };
    LINK_SCHEMES.contains(&url.scheme())
        && url
            .host_str()
            .is_some_and(|host| host.contains('.') && !host.starts_with('.'))
}

fn create_link(cx: &mut dyn EditorContext, _args: &[String]) {
    if cx.selection_is_collapsed() {
        cx.open_alert("createlink", "Please select the text you wish to hyperlink.");
        return;
    }
    let text = cx.selected_text();
    let default = if looks_like_url(&text) {
        text.trim()
    } else {
        "http://"
    };
    if let Some(answer) = cx.open_prompt("createlink", "Enter URL", default) {
        cx.execute("createlink", Some(answer.trim()));
    }
}

fn url_image(cx: &mut dyn EditorContext, _args: &[String]) {
    if let Some(answer) = cx.open_prompt("urlimage", "Enter image URL", "http://") {
        cx.execute("insertimage", Some(answer.trim()));
    }
}

fn toggle_view(cx: &mut dyn EditorContext, _args: &[String]) {
    match cx.mode() {
        ViewMode::Plain => cx.toolbar_mut().enable(),
        ViewMode::Rich => cx.toolbar_mut().disable(Some("toggleview")),
    }
    cx.toggle_view();
}
