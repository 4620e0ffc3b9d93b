//! Small helpers on top of `regex` for string rewrite rules.
//!
//! The `regex` crate has no lookaround, so rules that need "not followed by"
//! conditions use [`replace_filtered`]: the closure sees the captures and the
//! text after the match, and may decline. A declined match is retried one
//! character later, the same way a failed lookahead would be.
//!
//! Nor can a regex pair an opening tag with its own closing tag once the same
//! element nests. [`replace_elements`] matches only the opening tag and finds
//! the close with a depth scan.

use memchr::memchr;
use regex::{Captures, Regex, Replacer};
use std::borrow::Cow;

/// `Regex::replace_all` that hands back the original allocation when nothing
/// matched.
pub(crate) fn replace_all<R: Replacer>(re: &Regex, source: String, rep: R) -> String {
    let replaced = match re.replace_all(&source, rep) {
        Cow::Borrowed(_) => None,
        Cow::Owned(out) => Some(out),
    };
    replaced.unwrap_or(source)
}

/// Replace every match the closure accepts. `rewrite` receives the captures
/// and the remainder of the haystack after the match; returning `None` keeps
/// the match text and resumes the search one character past its start.
pub(crate) fn replace_filtered<F>(re: &Regex, source: String, mut rewrite: F) -> String
where
    F: FnMut(&Captures<'_>, &str) -> Option<String>,
{
    let mut out = String::new();
    let mut copied = 0;
    let mut at = 0;
    let mut changed = false;

    while at <= source.len() {
        let Some(caps) = re.captures_at(&source, at) else {
            break;
        };
        let Some(whole) = caps.get(0) else {
            break;
        };
        match rewrite(&caps, &source[whole.end()..]) {
            Some(replacement) => {
                out.push_str(&source[copied..whole.start()]);
                out.push_str(&replacement);
                copied = whole.end();
                changed = true;
                at = if whole.is_empty() {
                    next_boundary(&source, whole.end())
                } else {
                    whole.end()
                };
            }
            None => at = next_boundary(&source, whole.start()),
        }
    }

    if !changed {
        return source;
    }
    out.push_str(&source[copied..]);
    out
}

/// Replace every `name` element whose opening tag matches `open`, up to and
/// including its balanced `</name>`. `wrap` receives the element's content
/// with nested matches already replaced. An opening tag without a matching
/// close is left alone.
pub(crate) fn replace_elements<F>(open: &Regex, name: &str, source: String, wrap: &F) -> String
where
    F: Fn(&str) -> String,
{
    let mut out = String::new();
    let mut copied = 0;
    let mut at = 0;
    let mut changed = false;

    while at <= source.len() {
        let Some(tag) = open.find_at(&source, at) else {
            break;
        };
        let Some((body_len, close_len)) = matching_close(&source[tag.end()..], name) else {
            at = next_boundary(&source, tag.start());
            continue;
        };
        let body = &source[tag.end()..tag.end() + body_len];
        out.push_str(&source[copied..tag.start()]);
        out.push_str(&wrap(&replace_elements(open, name, body.to_string(), wrap)));
        copied = tag.end() + close_len;
        at = copied;
        changed = true;
    }

    if !changed {
        return source;
    }
    out.push_str(&source[copied..]);
    out
}

/// Find the `</name>` that closes an element whose content starts `tail`.
/// Returns the content length and the offset just past the closing tag.
fn matching_close(tail: &str, name: &str) -> Option<(usize, usize)> {
    let bytes = tail.as_bytes();
    let mut depth = 1usize;
    let mut i = 0;
    while let Some(offset) = memchr(b'<', &bytes[i..]) {
        let lt = i + offset;
        i = lt + 1;
        if bytes.get(i) == Some(&b'/') {
            let Some(after) = after_name(bytes, i + 1, name) else {
                continue;
            };
            let gt = after
                + bytes[after..]
                    .iter()
                    .take_while(|b| b.is_ascii_whitespace())
                    .count();
            if bytes.get(gt) != Some(&b'>') {
                continue;
            }
            depth -= 1;
            if depth == 0 {
                return Some((lt, gt + 1));
            }
        } else if let Some(after) = after_name(bytes, i, name) {
            if bytes
                .get(after)
                .is_some_and(|&b| b == b'>' || b == b'/' || b.is_ascii_whitespace())
            {
                depth += 1;
            }
        }
    }
    None
}

/// Offset just past `name` when it appears at `at`, ignoring ASCII case.
fn after_name(bytes: &[u8], at: usize, name: &str) -> Option<usize> {
    let end = at + name.len();
    bytes
        .get(at..end)
        .filter(|candidate| candidate.eq_ignore_ascii_case(name.as_bytes()))
        .map(|_| end)
}

fn next_boundary(s: &str, at: usize) -> usize {
    match s[at..].chars().next() {
        Some(c) => at + c.len_utf8(),
        None => s.len() + 1,
    }
}
