//! Void elements in XHTML form.

use super::compile;
use crate::rewrite::replace_all;
use regex::{Captures, Regex};

pub(super) struct SelfClosing {
    void_element: Regex,
}

impl SelfClosing {
    pub(super) fn new() -> Self {
        Self {
            void_element: compile(r"(?i)<(br|hr|img|input)\b([^>]*)>"),
        }
    }

    pub(super) fn apply(&self, s: String) -> String {
        replace_all(&self.void_element, s, |caps: &Captures<'_>| {
            let attributes = caps[2].trim_end();
            if attributes.ends_with('/') {
                caps[0].to_string()
            } else {
                format!("<{}{} />", &caps[1], attributes)
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn void_elements_close_themselves() {
        let rules = SelfClosing::new();
        assert_eq!(rules.apply("a<br>b".into()), "a<br />b");
        assert_eq!(rules.apply("<BR >".into()), "<BR />");
        assert_eq!(
            rules.apply(r#"<img src="a/b.png">"#.into()),
            r#"<img src="a/b.png" />"#
        );
        assert_eq!(rules.apply("<hr/>".into()), "<hr/>");
        assert_eq!(rules.apply("<br />".into()), "<br />");
    }

    #[test]
    fn similar_names_are_not_void() {
        let rules = SelfClosing::new();
        assert_eq!(rules.apply("<bro>".into()), "<bro>");
        assert_eq!(rules.apply("<inputs>".into()), "<inputs>");
    }
}
