//! Paragraphs that only hold a line break or blank space.

use super::compile;
use crate::rewrite::replace_all;
use regex::Regex;

const EMPTY_PARAGRAPH: &str = "<p>\u{a0}</p>";

pub(super) struct Paragraphs {
    br_only: Regex,
    blank: Regex,
    closing_br: Regex,
}

impl Paragraphs {
    pub(super) fn new() -> Self {
        Self {
            br_only: compile(r"(?i)<p>\s*<br ?/?>\s*</p>"),
            blank: compile(r"(?i)<p>(?:&nbsp;|\s)*</p>"),
            closing_br: compile(r"(?i)\s*<br ?/?>\s*</p>"),
        }
    }

    pub(super) fn apply(&self, mut s: String, semantics: bool) -> String {
        s = replace_all(&self.br_only, s, EMPTY_PARAGRAPH);
        s = replace_all(&self.blank, s, EMPTY_PARAGRAPH);
        if !semantics {
            s = replace_all(&self.closing_br, s, "</p>");
        }
        s
    }
}
