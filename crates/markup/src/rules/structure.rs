//! Block structure: ad hoc containers become paragraphs, lists leave
//! paragraphs, image-only paragraphs lose their wrapper.

use super::compile;
use crate::rewrite::{replace_all, replace_filtered};
use regex::{Captures, Regex};

pub(super) struct Structure {
    div_in_item: Regex,
    text_before_div: Regex,
    div_block: Regex,
    list_in_paragraph: Regex,
    text_after_list: Regex,
    closing_br: Regex,
    image_paragraph: Regex,
}

impl Structure {
    pub(super) fn new() -> Self {
        Self {
            div_in_item: compile(r"(?i)<li>\s*<div>(.+?)</div></li>"),
            text_before_div: compile(r"(?i)^([\w\s]*\w.*?)<div>"),
            div_block: compile(r"(?i)<div>(.+?)</div>"),
            list_in_paragraph: compile(r"(?i)<p>\s*(<(?:ul|ol)>.*?</(?:ul|ol)>)(.*?)</p>"),
            text_after_list: compile(r"(?i)</(ol|ul)>\s*((?:<[^>]*>)?\w.*)$"),
            closing_br: compile(r"(?i)<br[^>]*></p>"),
            image_paragraph: compile(r"(?i)<p>\s*(<img[^>]+>)\s*</p>"),
        }
    }

    pub(super) fn apply(&self, mut s: String) -> String {
        s = replace_all(&self.div_in_item, s, "<li>${1}</li>");
        s = replace_all(&self.text_before_div, s, "<p>${1}</p><div>");
        s = replace_all(&self.div_block, s, "<p>${1}</p>");
        s = replace_all(&self.list_in_paragraph, s, |caps: &Captures<'_>| {
            let tail = &caps[2];
            if tail.trim().is_empty() {
                caps[1].to_string()
            } else {
                format!("{}<p>{}</p>", &caps[1], tail)
            }
        });
        s = replace_filtered(&self.text_after_list, s, |caps, _| {
            if starts_with_block_tag(&caps[2]) {
                return None;
            }
            Some(format!("</{}><p>{}</p>", &caps[1], &caps[2]))
        });
        s = replace_all(&self.closing_br, s, "</p>");
        replace_all(&self.image_paragraph, s, "${1}\n")
    }
}

/// Content after a list that already starts its own block.
fn starts_with_block_tag(rest: &str) -> bool {
    let head: String = rest.chars().take(4).collect::<String>().to_ascii_lowercase();
    head.starts_with("<p") || head.starts_with("<ol") || head.starts_with("<ul") || head == "<img"
}
