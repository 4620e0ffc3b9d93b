//! # markup
//!
//! Canonicalization of markup emitted by a content-editable surface.
//!
//! Rendering engines serialize the same edit in very different ways: some wrap
//! runs in style spans, some leave placeholder `<br>`s behind, some use `<div>`
//! where others use `<p>`. [`normalize`] reduces all of those to one canonical
//! form by applying an ordered set of string rewrite rules over and over until
//! a full pass changes nothing.
//!
//! The input is treated as flat text. Nothing here builds a node tree, and
//! nothing here is meant for untrusted markup from the network.
//!
//! ```
//! use markup::{CleanupConfig, normalize};
//!
//! let clean = normalize("<B>bold</B>", &CleanupConfig::default());
//! assert_eq!(clean, "<strong>bold</strong>");
//! ```

mod config;
mod fixpoint;
mod rewrite;
mod rules;
mod tag;

pub use config::CleanupConfig;
pub use fixpoint::{MAX_PASSES, Normalized};

use memchr::{memchr, memchr2};

/// Normalize `raw` into canonical markup.
///
/// With `cleanup` disabled this only trims surrounding whitespace.
pub fn normalize(raw: &str, config: &CleanupConfig) -> String {
    normalize_with_report(raw, config).markup
}

/// Like [`normalize`], but also reports how many passes were needed and
/// whether the pipeline reached a fixpoint before [`MAX_PASSES`].
pub fn normalize_with_report(raw: &str, config: &CleanupConfig) -> Normalized {
    if !config.cleanup {
        return Normalized {
            markup: raw.trim().to_string(),
            passes: 0,
            converged: true,
        };
    }
    let rules = rules::RuleSet::get();
    fixpoint::run(raw, MAX_PASSES, |source| rules.apply(source, config))
}

pub(crate) fn contains_ignore_ascii_case(haystack: &str, needle: &[u8]) -> bool {
    let hay = haystack.as_bytes();
    let n = needle.len();
    if n == 0 {
        return true;
    }
    let hay_len = hay.len();
    if hay_len < n {
        return false;
    }
    let first = needle[0];
    let (a, b) = if first.is_ascii_alphabetic() {
        (first.to_ascii_lowercase(), first.to_ascii_uppercase())
    } else {
        (first, first)
    };
    let mut i = 0;
    while i + n <= hay_len {
        let rel = if a == b {
            memchr(a, &hay[i..])
        } else {
            memchr2(a, b, &hay[i..])
        };
        let Some(rel) = rel else {
            return false;
        };
        let pos = i + rel;
        if pos + n <= hay_len && hay[pos..pos + n].eq_ignore_ascii_case(needle) {
            return true;
        }
        i = pos + 1;
    }
    false
}
