//! Presentational markup rewritten to semantic tags.

use super::compile;
use crate::rewrite::{replace_all, replace_elements};
use regex::Regex;

pub(super) struct Legacy {
    bold_span: Regex,
    italic_span: Regex,
    bold: Regex,
    italic: Regex,
    underline: Regex,
}

impl Legacy {
    pub(super) fn new() -> Self {
        Self {
            bold_span: compile(r#"(?i)<span style="font-weight: bold;">"#),
            italic_span: compile(r#"(?i)<span style="font-style: italic;">"#),
            bold: compile(r"(?i)<b\b[^>]*>(.*?)</b\s*>"),
            italic: compile(r"(?i)<i\b[^>]*>(.*?)</i\s*>"),
            underline: compile(r"(?i)<u\b[^>]*>(.*?)</u\s*>"),
        }
    }

    pub(super) fn apply(&self, mut s: String) -> String {
        s = replace_elements(&self.bold_span, "span", s, &|body: &str| {
            format!("<strong>{body}</strong>")
        });
        s = replace_elements(&self.italic_span, "span", s, &|body: &str| {
            format!("<em>{body}</em>")
        });
        s = replace_all(&self.bold, s, "<strong>${1}</strong>");
        s = replace_all(&self.italic, s, "<em>${1}</em>");
        replace_all(
            &self.underline,
            s,
            r#"<span style="text-decoration: underline;">${1}</span>"#,
        )
    }
}
