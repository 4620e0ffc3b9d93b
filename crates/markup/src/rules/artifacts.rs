//! Wrapper markup and attributes that engines inject without meaning.

use super::compile;
use crate::contains_ignore_ascii_case;
use crate::rewrite::{replace_all, replace_elements};
use regex::Regex;

pub(super) struct Artifacts {
    placeholder_br: Regex,
    style_span: Regex,
    style_span_class: Regex,
    empty_style_span: Regex,
}

impl Artifacts {
    pub(super) fn new() -> Self {
        Self {
            placeholder_br: compile(r#"(?i)<br class="webkit-block-placeholder">"#),
            style_span: compile(r#"(?i)<span class="Apple-style-span">"#),
            style_span_class: compile(r#"(?i) class="Apple-style-span""#),
            empty_style_span: compile(r#"(?i)<span style="">"#),
        }
    }

    pub(super) fn apply(&self, mut s: String) -> String {
        if contains_ignore_ascii_case(&s, b"webkit-block-placeholder") {
            s = replace_all(&self.placeholder_br, s, "<br />");
        }
        if contains_ignore_ascii_case(&s, b"apple-style-span") {
            s = replace_elements(&self.style_span, "span", s, &str::to_string);
            s = replace_all(&self.style_span_class, s, "");
        }
        replace_all(&self.empty_style_span, s, "")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_engine_wrappers() {
        let rules = Artifacts::new();
        assert_eq!(
            rules.apply(r#"a<br class="webkit-block-placeholder">b"#.into()),
            "a<br />b"
        );
        assert_eq!(
            rules.apply(
                r#"<span class="Apple-style-span">x</span> <span class="Apple-style-span">y</span>"#
                    .into()
            ),
            "x y"
        );
        assert_eq!(
            rules.apply(r#"<font class="Apple-style-span" color="red">z</font>"#.into()),
            r#"<font color="red">z</font>"#
        );
        assert_eq!(rules.apply(r#"<span style="">q</span>"#.into()), "q</span>");
    }

    #[test]
    fn engine_wrapper_unwraps_to_its_own_close() {
        let rules = Artifacts::new();
        assert_eq!(
            rules.apply(
                r#"<span class="Apple-style-span">a <span class="Apple-style-span" style="color: red;">r</span> b</span>"#
                    .into()
            ),
            r#"a <span style="color: red;">r</span> b"#
        );
    }
}
