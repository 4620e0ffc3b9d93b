//! Line breaks that make the serialized markup readable. None of these
//! change how the markup renders.

use super::compile;
use crate::rewrite::{replace_all, replace_filtered};
use regex::Regex;

pub(super) struct Layout {
    block_close: Regex,
    list_close: Regex,
    image: Regex,
}

impl Layout {
    pub(super) fn new() -> Self {
        Self {
            block_close: compile(r"</(ul|ol|p)>"),
            list_close: compile(r"([^\n])</(ol|ul)>"),
            image: compile(r"(?i)([^\n])(<img)"),
        }
    }

    pub(super) fn apply(&self, mut s: String) -> String {
        s = replace_filtered(&self.block_close, s, |caps, tail| {
            (!tail.starts_with('\n')).then(|| format!("</{}>\n", &caps[1]))
        });
        if s.contains("><li>") {
            s = s.replace("><li>", ">\n\t<li>");
        }
        s = replace_all(&self.list_close, s, "${1}\n</${2}>");
        s = replace_all(&self.image, s, "${1}\n${2}");
        if s.trim().is_empty() {
            s.clear();
        }
        s
    }
}
