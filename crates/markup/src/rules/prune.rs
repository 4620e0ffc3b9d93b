//! Doubled and noise-only paragraphs.

use super::compile;
use crate::rewrite::replace_all;
use regex::Regex;

pub(super) struct Prune {
    double_open: Regex,
    double_close: Regex,
    noise: Regex,
}

impl Prune {
    pub(super) fn new() -> Self {
        Self {
            double_open: compile(r"<p>\s*<p>"),
            double_close: compile(r"</p>\s*</p>"),
            // A non-breaking space is a deliberate empty line, not noise.
            noise: compile(r"<p>[^\w\x{A0}]*</p>"),
        }
    }

    pub(super) fn apply(&self, mut s: String) -> String {
        s = replace_all(&self.double_open, s, "<p>");
        s = replace_all(&self.double_close, s, "</p>");
        replace_all(&self.noise, s, "")
    }
}
