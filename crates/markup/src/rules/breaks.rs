//! Line breaks that carry no meaning: at either end of the content, right
//! after a tag, or right before a block closes.

use super::compile;
use crate::rewrite::replace_all;
use regex::Regex;

pub(super) struct Breaks {
    trailing: Regex,
    leading: Regex,
    after_tag: Regex,
    before_block_close: Regex,
}

impl Breaks {
    pub(super) fn new() -> Self {
        Self {
            trailing: compile(r"(?i)<br ?/?>$"),
            leading: compile(r"(?i)^<br ?/?>"),
            after_tag: compile(r"(?i)><br ?/?>"),
            before_block_close: compile(r"(?i)<br ?/?>\s*</(h[1-6]|li|p)"),
        }
    }

    pub(super) fn apply(&self, mut s: String) -> String {
        s = replace_all(&self.trailing, s, "");
        s = replace_all(&self.leading, s, "");
        s = replace_all(&self.after_tag, s, ">");
        replace_all(&self.before_block_close, s, "</${1}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn removes_meaningless_breaks() {
        let rules = Breaks::new();
        assert_eq!(rules.apply("<br>text<br />".into()), "text");
        assert_eq!(rules.apply("<p>a</p><br>b".into()), "<p>a</p>b");
        assert_eq!(rules.apply("<li>a<br> </li>".into()), "<li>a</li>");
        assert_eq!(rules.apply("<H2>t<BR/></H2>".into()), "<H2>t</H2>");
    }

    #[test]
    fn keeps_breaks_between_text() {
        let rules = Breaks::new();
        assert_eq!(rules.apply("a<br />b".into()), "a<br />b");
    }
}
